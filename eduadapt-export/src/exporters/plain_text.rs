//! Plain text export: the base text, verbatim.

use crate::error::ExportError;
use crate::exporter::{document_for, Exporter};
use crate::style::ExportStyle;
use eduadapt_core::adapt::document::ExportKind;
use eduadapt_core::{AdaptationSet, ExportContent, ExportableDocument};

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExporter;

impl Exporter for PlainTextExporter {
    fn name(&self) -> &str {
        "txt"
    }

    fn description(&self) -> &str {
        "Versión texto plano"
    }

    fn kind(&self) -> ExportKind {
        ExportKind::PlainText
    }

    fn export(
        &self,
        set: &AdaptationSet,
        _style: &ExportStyle,
    ) -> Result<ExportableDocument, ExportError> {
        Ok(document_for(
            self,
            set,
            ExportContent::Text(set.base_text().to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduadapt_core::adapt::adaptation::Variants;
    use eduadapt_core::SourceFormat;

    #[test]
    fn test_base_text_is_verbatim() {
        let base = "Línea <uno> & \"dos\"\n\n  tres  ";
        let set = AdaptationSet::from_variants(
            "m1",
            "Tema 1",
            SourceFormat::Text,
            Variants {
                base_text: base.into(),
                ..Variants::default()
            },
        );
        let doc = PlainTextExporter
            .export(&set, &ExportStyle::default())
            .unwrap();
        assert_eq!(doc.content.as_text(), Some(base));
        assert_eq!(doc.id, "txt");
        assert_eq!(doc.file_name, "Tema 1_adaptado.txt");
        assert_eq!(doc.kind, ExportKind::PlainText);
    }
}
