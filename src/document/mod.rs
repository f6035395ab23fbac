//! Host-side glue around the TOC engine: reading outline snapshots and
//! splicing rendered text into documents.

pub mod insert;
pub mod outline;

pub use insert::{insert_at_line, insert_into_file};
pub use outline::{load_outline, parse_outline, OutlineFormat};
