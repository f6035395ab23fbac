use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::utils::error::{BoxResult, TocError};

/// Byte offset where 0-based `line` starts, or None past the last line
fn line_start(document: &str, line: usize) -> Option<usize> {
    if line == 0 {
        return Some(0);
    }
    document
        .match_indices('\n')
        .nth(line - 1)
        .map(|(idx, _)| idx + 1)
        .filter(|&offset| offset < document.len())
}

/// Insert `toc` in front of 0-based `line` of `document`.
///
/// Lines past the end append to the document. A CRLF document gets CRLF
/// line endings in the inserted text too.
pub fn insert_at_line(document: &str, line: usize, toc: &str) -> String {
    let toc = if document.contains("\r\n") {
        toc.replace("\r\n", "\n").replace('\n', "\r\n")
    } else {
        toc.to_string()
    };

    let mut result = String::with_capacity(document.len() + toc.len() + 2);
    match line_start(document, line) {
        Some(offset) => {
            result.push_str(&document[..offset]);
            result.push_str(&toc);
            result.push_str(&document[offset..]);
        }
        None => {
            result.push_str(document);
            if !document.is_empty() && !document.ends_with('\n') {
                result.push_str(if document.contains("\r\n") { "\r\n" } else { "\n" });
            }
            result.push_str(&toc);
        }
    }

    debug!("Inserted {} bytes of TOC at line {}", toc.len(), line);
    result
}

/// Insert `toc` into the file at `source`, writing the result to `output`
/// (which may be `source` itself).
pub fn insert_into_file(source: &Path, line: usize, toc: &str, output: &Path) -> BoxResult<()> {
    let document = fs::read_to_string(source)
        .map_err(|e| TocError::Document(format!(
            "Failed to read document {}: {}", source.display(), e
        )))?;

    let updated = insert_at_line(&document, line, toc);

    fs::write(output, updated)
        .map_err(|e| TocError::Document(format!(
            "Failed to write document {}: {}", output.display(), e
        )))?;

    info!("Wrote table of contents to {}", output.display());
    Ok(())
}
