use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::defaults;

/// Marker placed in front of every TOC entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// `- ` entries
    Bullet,
    /// `1. ` entries, numbered by the host renderer
    #[serde(alias = "number")]
    Numbered,
}

impl ListStyle {
    /// The literal marker written before the link
    pub fn marker(&self) -> &'static str {
        match self {
            ListStyle::Bullet => "-",
            ListStyle::Numbered => "1.",
        }
    }
}

/// Link syntax used for each entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkFormat {
    /// Same-document wiki link: `[[#anchor|label]]`
    #[serde(alias = "wiki")]
    Native,
    /// Portable markdown link: `[label](#anchor)`
    #[serde(alias = "markdown")]
    External,
}

/// Which external-compatibility slug algorithm to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorDialect {
    /// GitHub heading anchors
    Github,
    /// Jekyll/kramdown style transliterated slugs
    Jekyll,
}

impl FromStr for AnchorDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "github" | "github.com" => Ok(AnchorDialect::Github),
            "jekyll" | "kramdown" => Ok(AnchorDialect::Jekyll),
            other => Err(format!("Unknown anchor dialect: {}", other)),
        }
    }
}

impl fmt::Display for AnchorDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorDialect::Github => write!(f, "github"),
            AnchorDialect::Jekyll => write!(f, "jekyll"),
        }
    }
}

/// Immutable per-build TOC configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocConfig {
    /// Shallowest heading level included
    #[serde(default = "defaults::default_minimum_depth", alias = "minimumDepth")]
    pub minimum_depth: u8,

    /// Deepest heading level included
    #[serde(default = "defaults::default_maximum_depth", alias = "maximumDepth")]
    pub maximum_depth: u8,

    #[serde(default = "defaults::default_list_style", alias = "listStyle")]
    pub list_style: ListStyle,

    #[serde(default = "defaults::default_link_format", alias = "linkFormat")]
    pub link_format: LinkFormat,

    /// Use the external-compatibility slug for `external` links
    #[serde(default, alias = "externalCompat", alias = "githubCompat")]
    pub external_compat: bool,

    #[serde(default = "defaults::default_anchor_dialect", alias = "anchorDialect")]
    pub anchor_dialect: AnchorDialect,

    /// Optional first line of the TOC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Freeze-guard: builds selecting more headings than this abort
    #[serde(default = "defaults::default_max_headings", alias = "maxHeadings")]
    pub max_headings: usize,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            minimum_depth: defaults::default_minimum_depth(),
            maximum_depth: defaults::default_maximum_depth(),
            list_style: defaults::default_list_style(),
            link_format: defaults::default_link_format(),
            external_compat: false,
            anchor_dialect: defaults::default_anchor_dialect(),
            title: None,
            max_headings: defaults::default_max_headings(),
        }
    }
}

impl TocConfig {
    /// Whether the external-compatibility slug applies to this build
    pub fn uses_external_slug(&self) -> bool {
        self.link_format == LinkFormat::External && self.external_compat
    }

    /// Whether `level` falls inside the configured depth window
    pub fn accepts_level(&self, level: u8) -> bool {
        level >= self.minimum_depth && level <= self.maximum_depth
    }
}

/// Partial configuration: one config file or a set of command line flags.
///
/// Every field is optional so layers only override what they name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TocOverrides {
    #[serde(default, alias = "minimumDepth")]
    pub minimum_depth: Option<u8>,

    #[serde(default, alias = "maximumDepth")]
    pub maximum_depth: Option<u8>,

    #[serde(default, alias = "listStyle")]
    pub list_style: Option<ListStyle>,

    #[serde(default, alias = "linkFormat")]
    pub link_format: Option<LinkFormat>,

    #[serde(default, alias = "externalCompat", alias = "githubCompat")]
    pub external_compat: Option<bool>,

    #[serde(default, alias = "anchorDialect")]
    pub anchor_dialect: Option<AnchorDialect>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, alias = "maxHeadings")]
    pub max_headings: Option<usize>,
}

impl TocOverrides {
    /// Apply every field that is set onto `config`
    pub fn apply(&self, config: &mut TocConfig) {
        if let Some(depth) = self.minimum_depth {
            config.minimum_depth = depth;
        }
        if let Some(depth) = self.maximum_depth {
            config.maximum_depth = depth;
        }
        if let Some(style) = self.list_style {
            config.list_style = style;
        }
        if let Some(format) = self.link_format {
            config.link_format = format;
        }
        if let Some(compat) = self.external_compat {
            config.external_compat = compat;
        }
        if let Some(dialect) = self.anchor_dialect {
            config.anchor_dialect = dialect;
        }
        if let Some(title) = &self.title {
            config.title = Some(title.clone());
        }
        if let Some(limit) = self.max_headings {
            config.max_headings = limit;
        }
    }
}
