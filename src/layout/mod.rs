//! Layout collaborator boundary.

mod backend;
mod dump;
mod plumber;

pub use backend::{DetectedTable, LayoutBackend, PageSource};
pub use dump::{LayoutDump, PageLayout, TextLine};
pub use plumber::PdfPlumberBackend;
