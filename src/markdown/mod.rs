pub mod toc;

pub use toc::{build_toc, build_toc_blocking, build_toc_default, HeadingRecord, TocOutcome};
