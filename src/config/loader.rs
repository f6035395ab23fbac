use std::path::{Path, PathBuf};
use std::fs;
use log::debug;

use crate::config::defaults::CONFIG_FILES;
use crate::config::types::{TocConfig, TocOverrides};
use crate::config::validation;
use crate::utils::error::{BoxResult, TocError};

/// Serialization formats a configuration layer may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension; files without one are YAML
    pub fn from_path(path: &Path) -> BoxResult<Self> {
        let Some(ext) = path.extension() else {
            return Ok(ConfigFormat::Yaml);
        };

        match ext.to_string_lossy().to_lowercase().as_str() {
            "yml" | "yaml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(TocError::Config(format!(
                "Unsupported configuration file format: {}", ext.to_string_lossy()
            )).into()),
        }
    }
}

/// Load TOC configuration from config files.
///
/// With `config_files` set, exactly those files are layered in order;
/// otherwise the well-known `_toc.*` files inside `source_dir` are used.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<TocConfig> {
    let config = load_config_layers(source_dir, config_files)?;
    validation::validate_config(&config)?;
    Ok(config)
}

/// Layer the config files over the defaults without validating, for
/// callers that still have layers of their own to apply
pub fn load_config_layers<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<TocConfig> {
    // Start with default configuration
    let mut config = TocConfig::default();

    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&source_dir)?,
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Parse a single configuration layer from a string and apply it to the defaults
pub fn load_config_str(content: &str, format: ConfigFormat) -> BoxResult<TocConfig> {
    let mut config = TocConfig::default();
    parse_overrides(content, format, Path::new("<inline>"))?.apply(&mut config);
    validation::validate_config(&config)?;
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> BoxResult<Vec<PathBuf>> {
    let mut config_paths = Vec::new();
    for &config_file in &CONFIG_FILES {
        let config_path = source_dir.as_ref().join(config_file);
        if config_path.exists() {
            config_paths.push(config_path);
        }
    }

    Ok(config_paths)
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut TocConfig, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| TocError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let format = ConfigFormat::from_path(config_path)?;
    let overrides = parse_overrides(&content, format, config_path)?;
    debug!("Applying configuration layer {}: {:?}", config_path.display(), overrides);
    overrides.apply(config);

    Ok(())
}

fn parse_overrides(content: &str, format: ConfigFormat, path: &Path) -> BoxResult<TocOverrides> {
    // An empty YAML document deserializes to unit, not to an empty mapping
    if content.trim().is_empty() {
        return Ok(TocOverrides::default());
    }

    let overrides = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| TocError::Config(format!(
                "Failed to parse YAML configuration ({}): {}", path.display(), e
            )))?,
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| TocError::Config(format!(
                "Failed to parse TOML configuration ({}): {}", path.display(), e
            )))?,
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| TocError::Config(format!(
                "Failed to parse JSON configuration ({}): {}", path.display(), e
            )))?,
    };

    Ok(overrides)
}
