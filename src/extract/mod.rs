//! Reading-order reconstruction and table merging.

mod extractor;
mod linearize;
pub mod merge;
mod options;

pub use extractor::Extractor;
pub use linearize::PageLinearizer;
pub use merge::{merge, merge_with_report, MergeReport};
pub use options::{ErrorMode, ExtractOptions, PageSelection};
