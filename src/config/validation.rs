use log::warn;

use crate::config::defaults::{MAX_HEADING_LEVEL, MIN_HEADING_LEVEL};
use crate::config::TocConfig;
use crate::utils::error::{BoxResult, TocError};

/// Validate the configuration.
///
/// The TOC engine tolerates any window (an inverted one just selects
/// nothing); rejecting it here gives the user a message instead of an
/// empty result.
pub fn validate_config(config: &TocConfig) -> BoxResult<()> {
    validate_depth("minimum_depth", config.minimum_depth)?;
    validate_depth("maximum_depth", config.maximum_depth)?;

    if config.minimum_depth > config.maximum_depth {
        return Err(TocError::Config(format!(
            "minimum_depth ({}) is greater than maximum_depth ({})",
            config.minimum_depth, config.maximum_depth
        )).into());
    }

    if config.max_headings == 0 {
        return Err(TocError::Config("max_headings must be greater than zero".to_string()).into());
    }

    if let Some(title) = &config.title {
        if title.trim().is_empty() {
            warn!("Configured TOC title is blank; it will still be inserted");
        }
    }

    Ok(())
}

fn validate_depth(name: &str, depth: u8) -> BoxResult<()> {
    if !(MIN_HEADING_LEVEL..=MAX_HEADING_LEVEL).contains(&depth) {
        return Err(TocError::Config(format!(
            "{} must be between {} and {}, got {}",
            name, MIN_HEADING_LEVEL, MAX_HEADING_LEVEL, depth
        )).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TocConfig::default()).is_ok());
    }

    #[test]
    fn test_depth_out_of_range() {
        let config = TocConfig { maximum_depth: 7, ..TocConfig::default() };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("maximum_depth"));

        let config = TocConfig { minimum_depth: 0, ..TocConfig::default() };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_ceiling_rejected() {
        let config = TocConfig { max_headings: 0, ..TocConfig::default() };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_single_level_window_is_valid() {
        let config = TocConfig { minimum_depth: 3, maximum_depth: 3, ..TocConfig::default() };
        assert!(validate_config(&config).is_ok());
    }
}
