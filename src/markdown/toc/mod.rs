pub mod anchor;
pub mod render;
pub mod sanitize;
pub mod scope;
pub mod types;

pub use anchor::{native_slug, slugify, ExternalSlugger, GithubSlugger, JekyllSlugger, SlugMode};
pub use render::{render, render_blocking, TocRenderer, BATCH_SIZE};
pub use sanitize::sanitize_label;
pub use scope::scope_outline;
pub use types::{HeadingRecord, TocOutcome};

use crate::config::TocConfig;

/// Build the TOC for a TOC inserted at `insertion_line`.
///
/// Scopes the outline and renders the selection, suspending between
/// batches. `external` computes anchors when the configuration asks for
/// external-compatibility slugs.
pub async fn build_toc(
    outline: &[HeadingRecord],
    insertion_line: usize,
    config: &TocConfig,
    external: &dyn ExternalSlugger,
) -> TocOutcome {
    let selected = scope_outline(outline, insertion_line, config);
    render(&selected, config, external).await
}

/// [`build_toc`] with the slugger named by `config.anchor_dialect`
pub async fn build_toc_default(
    outline: &[HeadingRecord],
    insertion_line: usize,
    config: &TocConfig,
) -> TocOutcome {
    build_toc(outline, insertion_line, config, anchor::slugger_for(config.anchor_dialect)).await
}

/// Synchronous [`build_toc_default`]
pub fn build_toc_blocking(
    outline: &[HeadingRecord],
    insertion_line: usize,
    config: &TocConfig,
) -> TocOutcome {
    let selected = scope_outline(outline, insertion_line, config);
    render_blocking(&selected, config, anchor::slugger_for(config.anchor_dialect))
}
