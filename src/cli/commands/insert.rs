use log::warn;
use std::path::Path;

use crate::cli::commands::build::run_build;
use crate::cli::types::TocArgs;
use crate::document;
use crate::markdown::TocOutcome;
use crate::utils::error::BoxResult;

/// Handle the insert command: splice the TOC into the document
pub async fn handle_insert_command(
    document_path: &Path,
    output: Option<&Path>,
    toc: &TocArgs,
) -> BoxResult<()> {
    let text = match run_build(toc).await? {
        TocOutcome::Rendered(text) => text,
        notice => {
            // Nothing is written for a notice
            warn!("{}", notice);
            return Ok(());
        }
    };

    let target = output.unwrap_or(document_path);
    document::insert_into_file(document_path, toc.line, &text, target)
}
