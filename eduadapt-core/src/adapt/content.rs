//! Source content records
//!
//! The authoring side owns these; the engine only reads them. `raw_text` is optional because
//! records arrive from storage where the field may be missing or null.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of material a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    /// Text typed directly by the author.
    #[default]
    Text,
    /// A class announcement.
    Announcement,
    /// An uploaded file whose text was extracted upstream.
    Document,
    Audio,
    Video,
}

impl ContentKind {
    /// Audio and video carry no text of their own.
    pub fn is_media(self) -> bool {
        matches!(self, ContentKind::Audio | ContentKind::Video)
    }
}

/// One piece of material as handed over by the authoring collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceContent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub raw_text: Option<String>,
    /// Text extracted upstream from a file or media asset.
    #[serde(default)]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub kind: ContentKind,
    pub created_at: DateTime<Utc>,
}

impl SourceContent {
    /// A plain text material created now.
    pub fn text(id: impl Into<String>, title: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            raw_text: Some(raw_text.into()),
            extracted_text: None,
            kind: ContentKind::Text,
            created_at: Utc::now(),
        }
    }

    /// An announcement created now.
    pub fn announcement(
        id: impl Into<String>,
        title: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            kind: ContentKind::Announcement,
            ..Self::text(id, title, raw_text)
        }
    }

    /// An uploaded asset, optionally with text extracted from it.
    pub fn asset(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ContentKind,
        extracted_text: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            raw_text: None,
            extracted_text,
            kind,
            created_at: Utc::now(),
        }
    }

    /// The text the engine adapts, if the record has any.
    ///
    /// Typed content reads `raw_text`, falling back to extracted text. Uploaded files and media read
    /// the extracted text first.
    pub fn body(&self) -> Option<&str> {
        match self.kind {
            ContentKind::Text | ContentKind::Announcement => self
                .raw_text
                .as_deref()
                .or(self.extracted_text.as_deref()),
            ContentKind::Document | ContentKind::Audio | ContentKind::Video => self
                .extracted_text
                .as_deref()
                .or(self.raw_text.as_deref()),
        }
    }
}
