//! Word document export
//!
//! Same order as the HTML page: title, one paragraph per non-blank line of the base text, then
//! the easy-read heading and one paragraph per block. Every run uses the configured font, size
//! and line spacing. docx-rs escapes the XML, so the text goes in untouched.

use crate::error::ExportError;
use crate::exporter::{document_for, Exporter};
use crate::exporters::html::serializer::{EASY_READ_HEADING, UNTITLED};
use crate::style::ExportStyle;
use docx_rs::{Docx, LineSpacing, Paragraph, Run, RunFonts};
use eduadapt_core::adapt::document::ExportKind;
use eduadapt_core::adapt::generating::easy_read::BLOCK_SEPARATOR;
use eduadapt_core::{AdaptationSet, ExportContent, ExportableDocument};
use std::io::Cursor;

/// Extra half points for the title and section heading.
const HEADING_BOOST_HALF_POINTS: u32 = 8;

#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExporter;

impl Exporter for DocxExporter {
    fn name(&self) -> &str {
        "docx"
    }

    fn description(&self) -> &str {
        "Documento Word adaptado"
    }

    fn kind(&self) -> ExportKind {
        ExportKind::WordDocument
    }

    fn export(
        &self,
        set: &AdaptationSet,
        style: &ExportStyle,
    ) -> Result<ExportableDocument, ExportError> {
        let bytes = render_docx(set, style)?;
        Ok(document_for(self, set, ExportContent::Binary(bytes)))
    }
}

/// Render `set` as a packed `.docx`.
pub fn render_docx(set: &AdaptationSet, style: &ExportStyle) -> Result<Vec<u8>, ExportError> {
    let heading_size = style.docx_font_half_points + HEADING_BOOST_HALF_POINTS;
    let title = match set.title().trim() {
        "" => UNTITLED,
        title => title,
    };

    let mut docx = Docx::new().add_paragraph(paragraph(title, style, heading_size, true));

    for line in set
        .base_text()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
    {
        docx = docx.add_paragraph(paragraph(line, style, style.docx_font_half_points, style.docx_bold));
    }

    docx = docx.add_paragraph(paragraph(EASY_READ_HEADING, style, heading_size, true));
    for block in set
        .easy_read_text()
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
    {
        docx = docx.add_paragraph(paragraph(block, style, style.docx_font_half_points, style.docx_bold));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ExportError::Packaging(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn paragraph(text: &str, style: &ExportStyle, half_points: u32, bold: bool) -> Paragraph {
    let fonts = RunFonts::new()
        .ascii(style.docx_font.as_str())
        .hi_ansi(style.docx_font.as_str())
        .cs(style.docx_font.as_str());
    let mut run = Run::new()
        .add_text(text)
        .size(half_points as usize)
        .fonts(fonts);
    if bold {
        run = run.bold();
    }
    Paragraph::new()
        .add_run(run)
        .line_spacing(LineSpacing::new().line(style.docx_line_spacing as _))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{read_docx, DocumentChild};
    use eduadapt_core::adapt::adaptation::Variants;
    use eduadapt_core::SourceFormat;

    fn set() -> AdaptationSet {
        AdaptationSet::from_variants(
            "m1",
            "Normas",
            SourceFormat::Text,
            Variants {
                base_text: "Usar el cuaderno.\n\nHacer los ejercicios.".into(),
                easy_read_text: "Usar el cuaderno.\n\nHacer los ejercicios.".into(),
                ..Variants::default()
            },
        )
    }

    #[test]
    fn test_package_is_a_zip() {
        let bytes = render_docx(&set(), &ExportStyle::default()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_paragraph_order_and_count() {
        let bytes = render_docx(&set(), &ExportStyle::default()).unwrap();
        let docx = read_docx(&bytes).unwrap();
        let paragraphs = docx
            .document
            .children
            .iter()
            .filter(|child| matches!(child, DocumentChild::Paragraph(_)))
            .count();
        // title, two lines, heading, two blocks
        assert_eq!(paragraphs, 6);
    }

    #[test]
    fn test_export_metadata() {
        let doc = DocxExporter.export(&set(), &ExportStyle::default()).unwrap();
        assert_eq!(doc.id, "docx");
        assert_eq!(doc.file_name, "Normas_adaptado.docx");
        assert!(doc.content.as_text().is_none());
    }
}
