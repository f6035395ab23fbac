use crate::config::types::{AnchorDialect, LinkFormat, ListStyle};

/// Configuration file names to look for, in merge order
pub const CONFIG_FILES: [&str; 4] = ["_toc.yml", "_toc.yaml", "_toc.toml", "_toc.json"];

/// Shallowest heading level a TOC may contain
pub const MIN_HEADING_LEVEL: u8 = 1;

/// Deepest heading level a TOC may contain
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Default minimum heading depth
pub fn default_minimum_depth() -> u8 {
    2
}

/// Default maximum heading depth
pub fn default_maximum_depth() -> u8 {
    MAX_HEADING_LEVEL
}

/// Default list style
pub fn default_list_style() -> ListStyle {
    ListStyle::Bullet
}

/// Default link format
pub fn default_link_format() -> LinkFormat {
    LinkFormat::Native
}

/// Default external anchor dialect
pub fn default_anchor_dialect() -> AnchorDialect {
    AnchorDialect::Github
}

/// Default freeze-guard ceiling
pub fn default_max_headings() -> usize {
    1000
}
