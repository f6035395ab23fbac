mod types;
mod loader;
mod defaults;
mod validation;

pub use types::*;
pub use loader::{load_config, load_config_layers, load_config_str, ConfigFormat};
pub use validation::validate_config;
pub use defaults::{CONFIG_FILES, MAX_HEADING_LEVEL, MIN_HEADING_LEVEL};
