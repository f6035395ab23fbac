use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{AnchorDialect, LinkFormat, ListStyle, TocOverrides};

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "tocsmith")]
#[command(about = "Generate a sanitized table of contents from a document outline", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, global = true, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Print the table of contents for an insertion line
    #[command(alias = "b")]
    Build {
        #[command(flatten)]
        toc: TocArgs,
    },

    /// Insert the table of contents into a document
    #[command(alias = "i")]
    Insert {
        /// Document to insert into
        #[arg(short, long, value_name = "FILE")]
        document: PathBuf,

        /// Write the result here instead of overwriting the document
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        toc: TocArgs,
    },

    /// Show the effective configuration
    Config {
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

/// Arguments shared by the commands that build a TOC
#[derive(Args, Debug, Clone)]
pub struct TocArgs {
    /// Heading outline snapshot (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub outline: PathBuf,

    /// 0-based line the TOC is inserted at
    #[arg(short, long, value_name = "LINE", default_value_t = 0)]
    pub line: usize,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Configuration sources and per-run overrides
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Custom configuration file(s), merged in order
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<Vec<PathBuf>>,

    /// Directory searched for _toc.* files (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Shallowest heading level to include
    #[arg(long, value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub min_depth: Option<u8>,

    /// Deepest heading level to include
    #[arg(long, value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub max_depth: Option<u8>,

    /// Use a numbered list instead of bullets
    #[arg(short, long, default_value_t = false)]
    pub numbered: bool,

    /// Use markdown links instead of wiki links
    #[arg(short, long, default_value_t = false)]
    pub markdown_links: bool,

    /// Use the external-compatibility anchors for markdown links
    #[arg(long, default_value_t = false)]
    pub github_compat: bool,

    /// Anchor dialect for compatible anchors (github, jekyll)
    #[arg(long, value_name = "DIALECT")]
    pub dialect: Option<AnchorDialect>,

    /// Title line placed above the list
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Abort when more headings than this are selected
    #[arg(long, value_name = "COUNT")]
    pub max_headings: Option<usize>,
}

impl SettingsArgs {
    /// Command line flags as a configuration layer
    pub fn overrides(&self) -> TocOverrides {
        TocOverrides {
            minimum_depth: self.min_depth,
            maximum_depth: self.max_depth,
            list_style: self.numbered.then_some(ListStyle::Numbered),
            link_format: self.markdown_links.then_some(LinkFormat::External),
            external_compat: self.github_compat.then_some(true),
            anchor_dialect: self.dialect,
            title: self.title.clone(),
            max_headings: self.max_headings,
        }
    }
}
