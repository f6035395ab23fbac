use serde::{Deserialize, Serialize};
use std::fmt;

/// One detected heading of a document outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    /// Raw heading text, unsanitized
    #[serde(alias = "heading")]
    pub text: String,
    /// Nesting depth, 1 for top-level headings
    pub level: u8,
    /// Line on which the heading's own span ends
    #[serde(alias = "endLine")]
    pub end_line: usize,
}

impl HeadingRecord {
    pub fn new(text: impl Into<String>, level: u8, end_line: usize) -> Self {
        Self {
            text: text.into(),
            level,
            end_line,
        }
    }
}

/// Result of one TOC build.
///
/// Only `Rendered` carries text to insert; the other two variants are
/// advisory notices for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocOutcome {
    /// Final TOC text, title line included, ending in a newline
    Rendered(String),
    /// Scoping selected nothing
    NoMatchingHeadings { min: u8, max: u8 },
    /// The selection exceeded the freeze-guard and nothing was rendered
    TooManyHeadings { limit: usize, found: usize },
}

impl TocOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, TocOutcome::Rendered(_))
    }

    /// The rendered text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            TocOutcome::Rendered(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            TocOutcome::Rendered(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for TocOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocOutcome::Rendered(text) => write!(f, "{}", text),
            TocOutcome::NoMatchingHeadings { min, max } => write!(
                f,
                "No headings below cursor matched settings (min {} / max {})",
                min, max
            ),
            TocOutcome::TooManyHeadings { limit, .. } => write!(
                f,
                "Aborting TOC build: more than {} headings",
                limit
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_carry_settings() {
        let empty = TocOutcome::NoMatchingHeadings { min: 2, max: 4 };
        assert_eq!(
            empty.to_string(),
            "No headings below cursor matched settings (min 2 / max 4)"
        );
        assert!(empty.text().is_none());

        let big = TocOutcome::TooManyHeadings { limit: 1000, found: 1001 };
        assert!(big.to_string().contains("1000"));
        assert!(!big.is_rendered());
    }

    #[test]
    fn test_heading_accepts_host_cache_keys() {
        let heading: HeadingRecord =
            serde_json::from_str(r#"{"heading": "Intro", "level": 2, "endLine": 4}"#).unwrap();
        assert_eq!(heading, HeadingRecord::new("Intro", 2, 4));
    }
}
