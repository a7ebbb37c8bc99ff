//! Accessible HTML export
//!
//! A single self-contained page: no external stylesheet, fonts referenced by name with safe
//! fallbacks, `lang="es"` for screen readers.
//!
//! | Set field      | HTML element                                |
//! |----------------|---------------------------------------------|
//! | title          | `<title>` and `<h1>`                        |
//! | base text      | one `<p>` per non-blank line, in order      |
//! | easy-read text | `<section class="easy-read">`, one `<p>` per block |

pub mod serializer;

use crate::error::ExportError;
use crate::exporter::{document_for, Exporter};
use crate::style::ExportStyle;
use eduadapt_core::adapt::document::ExportKind;
use eduadapt_core::{AdaptationSet, ExportContent, ExportableDocument};

/// Characters html5ever rewrites as entities inside text.
pub const MARKUP_HAZARDS: [char; 3] = ['<', '>', '&'];

/// Count the markup-significant characters in `text`.
pub fn count_hazards(text: &str) -> usize {
    text.chars().filter(|c| MARKUP_HAZARDS.contains(c)).count()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlExporter;

impl Exporter for HtmlExporter {
    fn name(&self) -> &str {
        "html-accesible"
    }

    fn description(&self) -> &str {
        "HTML accesible (OpenDyslexic)"
    }

    fn kind(&self) -> ExportKind {
        ExportKind::StyledMarkup
    }

    fn export(
        &self,
        set: &AdaptationSet,
        style: &ExportStyle,
    ) -> Result<ExportableDocument, ExportError> {
        let html = serializer::serialize_to_html(set, style)?;
        Ok(document_for(self, set, ExportContent::Text(html)))
    }

    fn neutralized_hazards(&self, set: &AdaptationSet) -> usize {
        count_hazards(set.title()) + count_hazards(set.base_text()) + count_hazards(set.easy_read_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduadapt_core::adapt::adaptation::Variants;
    use eduadapt_core::SourceFormat;

    #[test]
    fn test_counts_hazards_in_every_rendered_field() {
        let set = AdaptationSet::from_variants(
            "m1",
            "A & B",
            SourceFormat::Text,
            Variants {
                base_text: "<x>".into(),
                easy_read_text: "<x>".into(),
                summary: "<<<<".into(),
                ..Variants::default()
            },
        );
        assert_eq!(HtmlExporter.neutralized_hazards(&set), 5);
    }

    #[test]
    fn test_export_metadata() {
        let set = AdaptationSet::from_variants("m1", "Tema", SourceFormat::Text, Variants::default());
        let doc = HtmlExporter.export(&set, &ExportStyle::default()).unwrap();
        assert_eq!(doc.id, "html-accesible");
        assert_eq!(doc.kind, ExportKind::StyledMarkup);
        assert_eq!(doc.file_name, "Tema_adaptado.html");
        assert!(doc.content.as_text().unwrap().contains("<h1>Tema</h1>"));
    }
}
