use log::{debug, info};

use crate::config::{LinkFormat, TocConfig};
use crate::markdown::toc::anchor::{AnchorGenerator, ExternalSlugger, SlugMode};
use crate::markdown::toc::sanitize::sanitize_label;
use crate::markdown::toc::types::{HeadingRecord, TocOutcome};

/// Headings rendered between two suspension points
pub const BATCH_SIZE: usize = 250;

/// One level of list nesting
pub const INDENT_UNIT: &str = "\t";

/// Incremental TOC renderer.
///
/// Holds the state of one build so it can be advanced a batch at a time;
/// callers either drive it with [`render`] (suspending between batches) or
/// [`render_blocking`].
pub struct TocRenderer<'a> {
    headings: &'a [&'a HeadingRecord],
    config: &'a TocConfig,
    anchors: AnchorGenerator<'a>,
    first_level: u8,
    batch_size: usize,
    processed: usize,
    batches: usize,
    lines: Vec<String>,
}

impl<'a> TocRenderer<'a> {
    /// Prepare a renderer, or return the notice that replaces rendering.
    ///
    /// Fails with `NoMatchingHeadings` for an empty selection and with
    /// `TooManyHeadings` when the selection is over the freeze-guard.
    pub fn new(
        headings: &'a [&'a HeadingRecord],
        config: &'a TocConfig,
        external: &'a dyn ExternalSlugger,
    ) -> Result<Self, TocOutcome> {
        let Some(first) = headings.first() else {
            return Err(TocOutcome::NoMatchingHeadings {
                min: config.minimum_depth,
                max: config.maximum_depth,
            });
        };

        if headings.len() > config.max_headings {
            return Err(TocOutcome::TooManyHeadings {
                limit: config.max_headings,
                found: headings.len(),
            });
        }

        let mode = if config.uses_external_slug() {
            SlugMode::External
        } else {
            SlugMode::Native
        };

        Ok(Self {
            headings,
            config,
            anchors: AnchorGenerator::new(mode, external),
            first_level: first.level,
            batch_size: BATCH_SIZE,
            processed: 0,
            batches: 0,
            lines: Vec::with_capacity(headings.len()),
        })
    }

    /// Override the batch size; zero is treated as one
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn is_done(&self) -> bool {
        self.processed >= self.headings.len()
    }

    /// Number of batches rendered so far
    pub fn batches(&self) -> usize {
        self.batches
    }

    /// Render the next batch. Returns true once every heading is rendered.
    pub fn render_batch(&mut self) -> bool {
        let end = (self.processed + self.batch_size).min(self.headings.len());
        let batch = &self.headings[self.processed..end];

        for heading in batch {
            let line = self.render_line(heading);
            self.lines.push(line);
        }

        self.processed = end;
        self.batches += 1;
        debug!(
            "Rendered TOC batch {} ({}/{} headings)",
            self.batches,
            self.processed,
            self.headings.len()
        );

        self.is_done()
    }

    fn render_line(&mut self, heading: &HeadingRecord) -> String {
        let depth = heading.level.saturating_sub(self.first_level) as usize;
        let indent = INDENT_UNIT.repeat(depth);
        let marker = self.config.list_style.marker();
        let label = sanitize_label(&heading.text);
        let anchor = self.anchors.next_anchor(&heading.text);

        match self.config.link_format {
            LinkFormat::Native => format!("{}{} [[#{}|{}]]", indent, marker, anchor, label),
            LinkFormat::External => format!("{}{} [{}](#{})", indent, marker, label, anchor),
        }
    }

    /// Join the rendered lines into the final TOC text
    pub fn finish(self) -> TocOutcome {
        let header = match &self.config.title {
            Some(title) => format!("{}\n", title),
            None => String::new(),
        };

        info!(
            "Built TOC with {} entries in {} batch(es)",
            self.lines.len(),
            self.batches
        );
        TocOutcome::Rendered(format!("{}{}\n", header, self.lines.join("\n")))
    }
}

/// Render `headings`, yielding to the async runtime between batches.
///
/// The returned future resolves exactly once. Dropping it before it
/// completes abandons the build without side effects.
pub async fn render(
    headings: &[&HeadingRecord],
    config: &TocConfig,
    external: &dyn ExternalSlugger,
) -> TocOutcome {
    let mut renderer = match TocRenderer::new(headings, config, external) {
        Ok(renderer) => renderer,
        Err(notice) => return notice,
    };

    while !renderer.render_batch() {
        tokio::task::yield_now().await;
    }

    renderer.finish()
}

/// Render `headings` in one go, for callers outside an async runtime
pub fn render_blocking(
    headings: &[&HeadingRecord],
    config: &TocConfig,
    external: &dyn ExternalSlugger,
) -> TocOutcome {
    let mut renderer = match TocRenderer::new(headings, config, external) {
        Ok(renderer) => renderer,
        Err(notice) => return notice,
    };

    while !renderer.render_batch() {}

    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListStyle;
    use crate::markdown::toc::anchor::GithubSlugger;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn numbered_headings(count: usize, level: u8) -> Vec<HeadingRecord> {
        (0..count)
            .map(|i| HeadingRecord::new(format!("Heading {}", i), level, i + 1))
            .collect()
    }

    fn refs(headings: &[HeadingRecord]) -> Vec<&HeadingRecord> {
        headings.iter().collect()
    }

    #[test]
    fn test_native_lines() {
        let headings = vec![
            HeadingRecord::new("Install", 2, 3),
            HeadingRecord::new("From source", 3, 5),
            HeadingRecord::new("Usage", 2, 9),
        ];
        let selected = refs(&headings);
        let outcome = render_blocking(&selected, &TocConfig::default(), &GithubSlugger);
        assert_eq!(
            outcome.text(),
            Some("- [[#Install|Install]]\n\t- [[#From%20source|From source]]\n- [[#Usage|Usage]]\n")
        );
    }

    #[test]
    fn test_external_lines_with_github_anchors() {
        let headings = vec![
            HeadingRecord::new("Getting Started", 2, 1),
            HeadingRecord::new("Getting Started", 2, 4),
        ];
        let selected = refs(&headings);
        let config = TocConfig {
            link_format: LinkFormat::External,
            external_compat: true,
            list_style: ListStyle::Numbered,
            ..TocConfig::default()
        };
        let outcome = render_blocking(&selected, &config, &GithubSlugger);
        assert_eq!(
            outcome.text(),
            Some("1. [Getting Started](#getting-started)\n1. [Getting Started](#getting-started-1)\n")
        );
    }

    #[test]
    fn test_external_links_without_compat_use_native_anchor() {
        let headings = vec![HeadingRecord::new("A <b>", 2, 1)];
        let selected = refs(&headings);
        let config = TocConfig {
            link_format: LinkFormat::External,
            ..TocConfig::default()
        };
        let outcome = render_blocking(&selected, &config, &GithubSlugger);
        assert_eq!(outcome.text(), Some("- [A &lt;b&gt;](#A%20%3Cb%3E)\n"));
    }

    #[test]
    fn test_title_and_relative_indent() {
        // a deeper heading first makes shallower ones clamp to no indent
        let headings = vec![
            HeadingRecord::new("Deep", 4, 1),
            HeadingRecord::new("Deeper", 5, 2),
            HeadingRecord::new("Shallow", 2, 3),
        ];
        let selected = refs(&headings);
        let config = TocConfig {
            title: Some("## Contents".into()),
            ..TocConfig::default()
        };
        let text = render_blocking(&selected, &config, &GithubSlugger)
            .into_text()
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "## Contents");
        assert_eq!(lines[1], "- [[#Deep|Deep]]");
        assert_eq!(lines[2], "\t- [[#Deeper|Deeper]]");
        assert_eq!(lines[3], "- [[#Shallow|Shallow]]");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_empty_selection_notice() {
        let config = TocConfig { minimum_depth: 3, maximum_depth: 4, ..TocConfig::default() };
        let outcome = render_blocking(&[], &config, &GithubSlugger);
        assert_eq!(outcome, TocOutcome::NoMatchingHeadings { min: 3, max: 4 });
    }

    #[test]
    fn test_freeze_guard_boundary() {
        let config = TocConfig { max_headings: 10, ..TocConfig::default() };

        let exact = numbered_headings(10, 2);
        let selected = refs(&exact);
        let text = render_blocking(&selected, &config, &GithubSlugger).into_text().unwrap();
        assert_eq!(text.lines().count(), 10);

        let over = numbered_headings(11, 2);
        let selected = refs(&over);
        assert!(TocRenderer::new(&selected, &config, &GithubSlugger).is_err());
        assert_eq!(
            render_blocking(&selected, &config, &GithubSlugger),
            TocOutcome::TooManyHeadings { limit: 10, found: 11 }
        );
    }

    #[test]
    fn test_batches_preserve_order() {
        let headings = numbered_headings(7, 2);
        let selected = refs(&headings);
        let config = TocConfig::default();
        let mut renderer = TocRenderer::new(&selected, &config, &GithubSlugger)
            .unwrap()
            .with_batch_size(3);

        assert!(!renderer.render_batch());
        assert!(!renderer.render_batch());
        assert!(renderer.render_batch());
        assert_eq!(renderer.batches(), 3);

        let text = renderer.finish().into_text().unwrap();
        for (i, line) in text.lines().enumerate() {
            assert_eq!(line, format!("- [[#Heading%20{}|Heading {}]]", i, i));
        }
    }

    #[test]
    fn test_labels_sanitized_once() {
        let headings = vec![HeadingRecord::new("Tom & Jerry", 2, 1)];
        let selected = refs(&headings);
        let text = render_blocking(&selected, &TocConfig::default(), &GithubSlugger)
            .into_text()
            .unwrap();
        assert!(text.contains("|Tom &amp; Jerry]]"));
        assert!(!text.contains("&amp;amp;"));
    }

    #[tokio::test]
    async fn test_async_matches_blocking() {
        let headings = numbered_headings(600, 2);
        let selected = refs(&headings);
        let config = TocConfig::default();
        let expected = render_blocking(&selected, &config, &GithubSlugger);
        let actual = render(&selected, &config, &GithubSlugger).await;
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_yields_between_batches() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        tokio::spawn(async move {
            flag.store(true, Ordering::SeqCst);
        });

        // three batches, so at least two suspension points
        let headings = numbered_headings(BATCH_SIZE * 2 + 1, 2);
        let selected = refs(&headings);
        let outcome = render(&selected, &TocConfig::default(), &GithubSlugger).await;

        assert!(outcome.is_rendered());
        assert!(ran.load(Ordering::SeqCst));
    }
}
