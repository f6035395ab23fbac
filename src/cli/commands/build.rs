use log::{info, warn};

use crate::cli::commands::resolve_config;
use crate::cli::types::TocArgs;
use crate::document;
use crate::markdown::{build_toc_default, TocOutcome};
use crate::utils::error::BoxResult;

/// Build the TOC for `toc` and return the outcome
pub async fn run_build(toc: &TocArgs) -> BoxResult<TocOutcome> {
    let config = resolve_config(&toc.settings)?;
    let outline = document::load_outline(&toc.outline)?;

    info!(
        "Building table of contents from {} headings at line {}",
        outline.len(),
        toc.line
    );
    Ok(build_toc_default(&outline, toc.line, &config).await)
}

/// Handle the build command: print the TOC on stdout
pub async fn handle_build_command(toc: &TocArgs) -> BoxResult<()> {
    match run_build(toc).await? {
        TocOutcome::Rendered(text) => print!("{}", text),
        notice => warn!("{}", notice),
    }
    Ok(())
}
