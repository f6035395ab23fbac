//! Sanitized, incrementally rendered tables of contents for document outlines.
//!
//! The engine lives in [`markdown::toc`]: it scopes an outline to an
//! insertion line, sanitizes labels, derives anchors and renders the list in
//! batches, yielding to the async runtime between them. [`config`],
//! [`document`] and [`cli`] are the host around it.

pub mod cli;
pub mod config;
pub mod document;
pub mod markdown;
pub mod utils;

pub use config::TocConfig;
pub use markdown::toc::{build_toc, build_toc_blocking, build_toc_default, HeadingRecord, TocOutcome};
