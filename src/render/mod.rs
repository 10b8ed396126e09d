//! Rendering module for converting rebuilt documents to output formats.

mod ascii;
mod html;
mod json;
mod normalize;
mod options;
pub mod retrofit;
mod table;
mod text;

pub use ascii::render_ascii;
pub use html::render_html;
pub use json::{to_json, JsonFormat};
pub use normalize::{normalize, NormalizedGrid};
pub use options::{RenderOptions, SummaryRowRule, TableFormat, DEFAULT_SUMMARY_KEYWORDS};
pub use retrofit::{convert_ascii_tables_to_html, parse_ascii_table, TableRetrofitter};
pub use table::format_table;
pub use text::{page_banner, serialize_elements, to_text, TABLE_END, TABLE_START};
