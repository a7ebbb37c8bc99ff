//! Exportable documents
//!
//! Self-contained downloadable renderings of one adaptation set. They are disposable: the set is
//! the authoritative value and any document can be produced again from it.

use serde::{Deserialize, Serialize};

/// Rendering formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    PlainText,
    /// Self-contained HTML page.
    StyledMarkup,
    /// Word-processor package (`.docx`).
    WordDocument,
}

impl ExportKind {
    pub fn extension(self) -> &'static str {
        match self {
            ExportKind::PlainText => "txt",
            ExportKind::StyledMarkup => "html",
            ExportKind::WordDocument => "docx",
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            ExportKind::PlainText => "text/plain; charset=utf-8",
            ExportKind::StyledMarkup => "text/html; charset=utf-8",
            ExportKind::WordDocument => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// Document payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "encoding", content = "data", rename_all = "kebab-case")]
pub enum ExportContent {
    Text(String),
    Binary(Vec<u8>),
}

impl ExportContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExportContent::Text(text) => Some(text),
            ExportContent::Binary(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ExportContent::Text(text) => text.as_bytes(),
            ExportContent::Binary(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportableDocument {
    pub id: String,
    pub kind: ExportKind,
    pub title: String,
    pub description: String,
    pub file_name: String,
    pub content: ExportContent,
}

/// Suffix appended to every exported file stem.
pub const FILE_STEM_SUFFIX: &str = "_adaptado";

/// File name for an export of `title`: path-hostile characters replaced, fixed suffix added.
pub fn export_file_name(title: &str, kind: ExportKind) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = if stem.is_empty() { "material" } else { stem.as_str() };
    format!("{stem}{FILE_STEM_SUFFIX}.{}", kind.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_has_suffix_and_extension() {
        assert_eq!(
            export_file_name("Tema 2", ExportKind::WordDocument),
            "Tema 2_adaptado.docx"
        );
    }

    #[test]
    fn test_file_name_replaces_hostile_characters() {
        assert_eq!(
            export_file_name("a/b: <c>?", ExportKind::PlainText),
            "a_b_ _c___adaptado.txt"
        );
        assert_eq!(
            export_file_name("   ", ExportKind::StyledMarkup),
            "material_adaptado.html"
        );
    }

    #[test]
    fn test_content_accessors() {
        let text = ExportContent::Text("hola".into());
        assert_eq!(text.as_text(), Some("hola"));
        assert_eq!(text.len(), 4);
        let bin = ExportContent::Binary(vec![0x50, 0x4b]);
        assert_eq!(bin.as_text(), None);
        assert!(!bin.is_empty());
    }
}
