//! Exporter trait definition
//!
//! Every output kind implements [Exporter]. Exporters are stateless: the same set and style
//! always produce the same document.

use crate::error::ExportError;
use crate::style::ExportStyle;
use eduadapt_core::adapt::document::{export_file_name, ExportKind};
use eduadapt_core::{AdaptationSet, ExportContent, ExportableDocument};

pub trait Exporter: Send + Sync {
    /// Stable name, also used as the document id (e.g. "txt", "html-accesible")
    fn name(&self) -> &str;

    /// Human readable title of the produced document
    fn description(&self) -> &str {
        ""
    }

    fn kind(&self) -> ExportKind;

    /// Render `set` into a document.
    fn export(&self, set: &AdaptationSet, style: &ExportStyle)
        -> Result<ExportableDocument, ExportError>;

    /// Number of markup-significant characters this exporter had to escape for `set`.
    fn neutralized_hazards(&self, _set: &AdaptationSet) -> usize {
        0
    }
}

/// Document shell shared by the exporters: id, kind, title and file name filled in.
pub(crate) fn document_for(
    exporter: &dyn Exporter,
    set: &AdaptationSet,
    content: ExportContent,
) -> ExportableDocument {
    let kind = exporter.kind();
    ExportableDocument {
        id: exporter.name().to_string(),
        kind,
        title: exporter.description().to_string(),
        description: format!("{} ({})", set.title(), kind.extension()),
        file_name: export_file_name(set.title(), kind),
        content,
    }
}
