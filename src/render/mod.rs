//! Rendering module for proposal markdown and its output formats.

mod html;
mod inline;
mod json;
mod markdown;
mod options;
mod text;

pub use html::to_html;
pub use inline::{split_bold, spans_to_markdown, spans_to_plain, InlineParser, InlineSpan};
pub use json::{to_json, JsonFormat};
pub use markdown::{render_lines, LineKind, LineRecord, MarkdownRenderer, TableCell};
pub use options::RenderOptions;
pub use text::{snippet, to_text};
