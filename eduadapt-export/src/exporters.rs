//! Built-in exporters

pub mod docx;
pub mod html;
pub mod plain_text;

pub use docx::DocxExporter;
pub use html::HtmlExporter;
pub use plain_text::PlainTextExporter;
