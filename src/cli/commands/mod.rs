mod build;
mod config;
mod insert;

pub use build::handle_build_command;
pub use config::handle_config_command;
pub use insert::handle_insert_command;

use log::debug;
use std::path::PathBuf;

use crate::cli::types::SettingsArgs;
use crate::config::{load_config_layers, validate_config, TocConfig};
use crate::utils::error::BoxResult;

/// Load the configuration files named by `settings` and apply its flags on top
pub(crate) fn resolve_config(settings: &SettingsArgs) -> BoxResult<TocConfig> {
    let source = settings.source.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut config = load_config_layers(&source, settings.config.clone())?;

    // Flags are the last layer, so validate only once they are applied
    settings.overrides().apply(&mut config);
    validate_config(&config)?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}
