//! Downloadable renderings of adaptation sets
//!
//!     Every adaptation set can be handed out as self-contained files: a plain text copy, an
//!     accessible HTML page and a word-processor document. Documents are disposable and always
//!     re-derivable from the set, so nothing here keeps state between calls.
//!
//! Architecture
//!
//!     - Exporter trait: uniform interface for one output kind
//!     - ExporterRegistry: ordered collection of exporters, looked up by name
//!     - ExportStyle: reading style baked into the styled outputs
//!     - build_exports / build_export_report: run every registered exporter over a set
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── exporter.rs             # Exporter trait definition
//!     ├── registry.rs             # ExporterRegistry and the batch entry points
//!     ├── style.rs                # ExportStyle
//!     ├── exporters
//!     │   ├── plain_text.rs
//!     │   ├── html
//!     │   │   ├── serializer.rs   # RcDom construction and serialization
//!     │   │   └── mod.rs
//!     │   └── docx.rs
//!     ├── lib.rs
//!
//! Escaping
//!
//!     Text never reaches the HTML output through string formatting. Paragraphs, headings and the
//!     page title are DOM text nodes, so html5ever's serializer neutralizes every character that
//!     would break the markup. Word documents go through docx-rs, which escapes its XML the same way.
//!
//! Failure
//!
//!     A failing exporter never takes the others down with it. The report variant records it as an
//!     ExportSkipped issue and carries on; plain text and HTML cannot fail for well-formed sets.

pub mod error;
pub mod exporter;
pub mod exporters;
pub mod registry;
pub mod style;

pub use error::ExportError;
pub use exporter::Exporter;
pub use registry::{
    attach_exports, build_export_report, build_exports, documents_of_kind, ExporterRegistry,
};
pub use style::ExportStyle;
