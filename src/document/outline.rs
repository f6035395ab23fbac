use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::markdown::toc::HeadingRecord;
use crate::utils::error::{BoxResult, TocError};

/// Serialization of an outline snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineFormat {
    Json,
    Yaml,
}

impl OutlineFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().map(|e| e.to_string_lossy().to_lowercase()) {
            Some(ext) if ext == "yml" || ext == "yaml" => OutlineFormat::Yaml,
            _ => OutlineFormat::Json,
        }
    }
}

/// Either a bare heading list or a metadata-cache object with `headings`
#[derive(Deserialize)]
#[serde(untagged)]
enum OutlineSnapshot {
    List(Vec<SnapshotHeading>),
    Cache {
        #[serde(default)]
        headings: Vec<SnapshotHeading>,
    },
}

/// A heading as hosts write it: the end line is either flat or nested
/// under `position.end.line` as in editor metadata caches
#[derive(Deserialize)]
struct SnapshotHeading {
    #[serde(alias = "heading")]
    text: String,
    level: u8,
    #[serde(default, alias = "endLine")]
    end_line: Option<usize>,
    #[serde(default)]
    position: Option<SnapshotPosition>,
}

#[derive(Deserialize)]
struct SnapshotPosition {
    end: SnapshotLocation,
}

#[derive(Deserialize)]
struct SnapshotLocation {
    line: usize,
}

impl TryFrom<SnapshotHeading> for HeadingRecord {
    type Error = TocError;

    fn try_from(heading: SnapshotHeading) -> Result<Self, Self::Error> {
        let end_line = heading
            .end_line
            .or_else(|| heading.position.as_ref().map(|p| p.end.line))
            .ok_or_else(|| TocError::Outline(format!(
                "Heading {:?} has neither end_line nor position.end.line",
                heading.text
            )))?;

        Ok(HeadingRecord::new(heading.text, heading.level, end_line))
    }
}

/// Parse an outline snapshot.
///
/// Records are returned sorted by `end_line`; the engine assumes document
/// order.
pub fn parse_outline(content: &str, format: OutlineFormat) -> BoxResult<Vec<HeadingRecord>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let snapshot: OutlineSnapshot = match format {
        OutlineFormat::Json => serde_json::from_str(content)
            .map_err(|e| TocError::Outline(format!("Failed to parse JSON outline: {}", e)))?,
        OutlineFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| TocError::Outline(format!("Failed to parse YAML outline: {}", e)))?,
    };

    let raw = match snapshot {
        OutlineSnapshot::List(headings) => headings,
        OutlineSnapshot::Cache { headings } => headings,
    };
    let mut headings = raw
        .into_iter()
        .map(HeadingRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    if !headings.windows(2).all(|w| w[0].end_line <= w[1].end_line) {
        warn!("Outline is not in document order, sorting by end line");
        headings.sort_by_key(|h| h.end_line);
    }

    if let Some(bad) = headings.iter().find(|h| !(1..=6).contains(&h.level)) {
        return Err(TocError::Outline(format!(
            "Heading {:?} has level {}, expected 1 to 6",
            bad.text, bad.level
        )).into());
    }

    Ok(headings)
}

/// Read an outline snapshot from disk
pub fn load_outline<P: AsRef<Path>>(path: P) -> BoxResult<Vec<HeadingRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| TocError::Outline(format!(
            "Failed to read outline {}: {}", path.display(), e
        )))?;

    let headings = parse_outline(&content, OutlineFormat::from_path(path))?;
    debug!("Loaded {} headings from {}", headings.len(), path.display());
    Ok(headings)
}
