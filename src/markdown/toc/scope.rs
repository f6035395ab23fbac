use log::debug;

use crate::config::TocConfig;
use crate::markdown::toc::types::HeadingRecord;

/// Level of the heading enclosing `insertion_line`, or 0 at the document root.
///
/// The enclosing heading is the last one ending strictly before the line.
pub fn parent_level(outline: &[HeadingRecord], insertion_line: usize) -> u8 {
    outline
        .iter()
        .rev()
        .find(|h| h.end_line < insertion_line)
        .map(|h| h.level)
        .unwrap_or(0)
}

/// Select the headings a TOC inserted at `insertion_line` should list.
///
/// Keeps headings after the line, nested deeper than the enclosing parent
/// and inside the configured depth window, in document order.
pub fn scope_outline<'a>(
    outline: &'a [HeadingRecord],
    insertion_line: usize,
    config: &TocConfig,
) -> Vec<&'a HeadingRecord> {
    let parent = parent_level(outline, insertion_line);

    let selected: Vec<&HeadingRecord> = outline
        .iter()
        .filter(|h| {
            h.end_line > insertion_line && h.level > parent && config.accepts_level(h.level)
        })
        .collect();

    debug!(
        "Scoped {} of {} headings at line {} (parent level {}, window {}..={})",
        selected.len(),
        outline.len(),
        insertion_line,
        parent,
        config.minimum_depth,
        config.maximum_depth
    );

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(min: u8, max: u8) -> TocConfig {
        TocConfig {
            minimum_depth: min,
            maximum_depth: max,
            ..TocConfig::default()
        }
    }

    fn texts<'a>(headings: &[&'a HeadingRecord]) -> Vec<&'a str> {
        headings.iter().map(|h| h.text.as_str()).collect()
    }

    #[test]
    fn test_excludes_parent_and_earlier_headings() {
        let outline = vec![
            HeadingRecord::new("H1", 1, 0),
            HeadingRecord::new("H2", 2, 5),
            HeadingRecord::new("H3", 2, 10),
        ];
        // H2 encloses line 6, so its level-2 sibling H3 is not a descendant
        assert_eq!(parent_level(&outline, 6), 2);
        assert!(scope_outline(&outline, 6, &window(1, 6)).is_empty());
    }

    #[test]
    fn test_selects_children_of_enclosing_heading() {
        let outline = vec![
            HeadingRecord::new("H1", 1, 0),
            HeadingRecord::new("H2", 2, 5),
            HeadingRecord::new("H2.1", 3, 8),
            HeadingRecord::new("H3", 2, 10),
        ];
        let scoped = scope_outline(&outline, 6, &window(1, 6));
        assert_eq!(scoped, vec![&outline[2]]);
    }

    #[test]
    fn test_root_insertion_keeps_everything_in_window() {
        let outline = vec![
            HeadingRecord::new("Title", 1, 2),
            HeadingRecord::new("A", 2, 4),
            HeadingRecord::new("A.1", 3, 6),
            HeadingRecord::new("B", 2, 8),
        ];
        let scoped = scope_outline(&outline, 0, &TocConfig::default());
        assert_eq!(parent_level(&outline, 0), 0);
        assert_eq!(texts(&scoped), vec!["A", "A.1", "B"]);
    }

    #[test]
    fn test_stops_at_siblings_of_parent_level() {
        let outline = vec![
            HeadingRecord::new("Section", 2, 1),
            HeadingRecord::new("Child", 3, 5),
            HeadingRecord::new("Sibling", 2, 9),
            HeadingRecord::new("Nephew", 3, 12),
        ];
        let scoped = scope_outline(&outline, 2, &window(1, 6));
        // siblings are excluded but their children are still deeper than the parent
        assert_eq!(texts(&scoped), vec!["Child", "Nephew"]);
    }

    #[test]
    fn test_depth_window_filters() {
        let outline: Vec<HeadingRecord> = (1..=6)
            .map(|level| HeadingRecord::new(format!("L{}", level), level, level as usize * 10))
            .collect();
        for (min, max) in [(1, 6), (2, 4), (3, 3), (5, 6)] {
            let scoped = scope_outline(&outline, 0, &window(min, max));
            assert!(scoped.iter().all(|h| h.level >= min && h.level <= max));
            assert_eq!(scoped.len(), (max - min + 1) as usize);
        }
    }

    #[test]
    fn test_heading_on_insertion_line_is_neither_parent_nor_child() {
        let outline = vec![
            HeadingRecord::new("Before", 2, 3),
            HeadingRecord::new("AtCursor", 1, 5),
            HeadingRecord::new("After", 3, 7),
        ];
        assert_eq!(parent_level(&outline, 5), 2);
        let scoped = scope_outline(&outline, 5, &window(1, 6));
        assert_eq!(texts(&scoped), vec!["After"]);
    }

    #[test]
    fn test_empty_and_inverted_inputs() {
        assert!(scope_outline(&[], 10, &TocConfig::default()).is_empty());

        let outline = vec![HeadingRecord::new("A", 3, 4)];
        assert!(scope_outline(&outline, 0, &window(5, 2)).is_empty());
    }
}
