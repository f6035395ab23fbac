use std::error::Error;
use std::fmt;

/// Common result type for tocsmith operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for tocsmith operations
#[derive(Debug)]
pub enum TocError {
    /// Configuration error
    Config(String),
    /// Outline snapshot could not be read or parsed
    Outline(String),
    /// Document handling error
    Document(String),
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocError::Outline(msg) => write!(f, "Outline error: {}", msg),
            TocError::Document(msg) => write!(f, "Document error: {}", msg),
        }
    }
}

impl Error for TocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            TocError::Config("bad depth".into()).to_string(),
            "Configuration error: bad depth"
        );
        assert_eq!(
            TocError::Outline("not a list".into()).to_string(),
            "Outline error: not a list"
        );
    }

    #[test]
    fn test_boxes_into_box_result() {
        let result: BoxResult<()> = Err(TocError::Document("read failed".into()).into());
        assert_eq!(result.unwrap_err().to_string(), "Document error: read failed");
    }
}
