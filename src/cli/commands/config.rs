use crate::cli::commands::resolve_config;
use crate::cli::types::SettingsArgs;
use crate::utils::error::{BoxResult, TocError};

/// Handle the config command: print the effective configuration as YAML
pub fn handle_config_command(settings: &SettingsArgs) -> BoxResult<()> {
    let config = resolve_config(settings)?;
    let yaml = serde_yaml::to_string(&config)
        .map_err(|e| TocError::Config(format!("Failed to serialize configuration: {}", e)))?;
    println!("{}", yaml);
    Ok(())
}
