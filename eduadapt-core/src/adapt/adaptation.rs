//! Adaptation sets
//!
//! An [AdaptationSet] bundles every derived variant of one content version. It is built once
//! (at authoring time or lazily on first view) and never patched: an edit to the content produces
//! a fresh set, and readers holding the old one keep a consistent snapshot. The type has no
//! interior mutability, so sharing it across viewers is a matter of `Arc<AdaptationSet>`.

use crate::adapt::content::{ContentKind, SourceContent};
use crate::adapt::document::ExportableDocument;
use crate::adapt::generating::{
    easy_read_text, simplified_text, summary, transcript, GenerationOptions,
};
use crate::adapt::issues::{AdaptationIssue, Outcome};
use crate::adapt::normalizing::normalize_base_text;
use crate::adapt::styling::StyleHints;
use serde::{Deserialize, Serialize};

/// Where the base text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    Text,
    Document,
    Audio,
    Video,
}

impl From<ContentKind> for SourceFormat {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Text | ContentKind::Announcement => SourceFormat::Text,
            ContentKind::Document => SourceFormat::Document,
            ContentKind::Audio => SourceFormat::Audio,
            ContentKind::Video => SourceFormat::Video,
        }
    }
}

/// Text variants used to assemble a set by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variants {
    pub base_text: String,
    pub summary: String,
    pub simplified_text: String,
    pub easy_read_text: String,
    pub transcript: String,
}

/// Immutable bundle of the derived renderings of one content version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptationSet {
    content_id: String,
    title: String,
    base_text: String,
    summary: String,
    simplified_text: String,
    easy_read_text: String,
    transcript: String,
    source_format: SourceFormat,
    style_hints: StyleHints,
    #[serde(default)]
    exportable_documents: Vec<ExportableDocument>,
}

impl AdaptationSet {
    /// Derive every variant of `content`.
    ///
    /// Missing text on a non-media record degrades to an all-empty set reported as
    /// [AdaptationIssue::MalformedInput]; it never fails.
    pub fn generate(content: &SourceContent, options: &GenerationOptions) -> Outcome<Self> {
        let mut issues = Vec::new();
        let body = match content.body() {
            Some(body) => body,
            None if content.kind.is_media() => "",
            None => {
                tracing::warn!(content_id = %content.id, "content has no text to adapt");
                issues.push(AdaptationIssue::MalformedInput {
                    content_id: content.id.clone(),
                    reason: "source text is missing".to_string(),
                });
                ""
            }
        };

        let base_text = normalize_base_text(body);
        let variants = Variants {
            summary: summary(&base_text, options),
            simplified_text: simplified_text(&base_text, options),
            easy_read_text: easy_read_text(&base_text, options),
            transcript: transcript(&base_text, &content.title, content.kind),
            base_text,
        };

        tracing::debug!(
            content_id = %content.id,
            base_chars = variants.base_text.len(),
            "generated adaptation set"
        );

        let set = Self::from_variants(
            content.id.clone(),
            content.title.clone(),
            content.kind.into(),
            variants,
        );
        Outcome::from_parts(set, issues)
    }

    /// Assemble a set from already computed variants.
    pub fn from_variants(
        content_id: impl Into<String>,
        title: impl Into<String>,
        source_format: SourceFormat,
        variants: Variants,
    ) -> Self {
        Self {
            content_id: content_id.into(),
            title: title.into(),
            base_text: variants.base_text,
            summary: variants.summary,
            simplified_text: variants.simplified_text,
            easy_read_text: variants.easy_read_text,
            transcript: variants.transcript,
            source_format,
            style_hints: StyleHints::document_defaults(),
            exportable_documents: Vec::new(),
        }
    }

    /// A new set carrying `documents`; `self` is consumed, never patched.
    pub fn with_exports(self, documents: Vec<ExportableDocument>) -> Self {
        Self {
            exportable_documents: documents,
            ..self
        }
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn base_text(&self) -> &str {
        &self.base_text
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn simplified_text(&self) -> &str {
        &self.simplified_text
    }

    pub fn easy_read_text(&self) -> &str {
        &self.easy_read_text
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn source_format(&self) -> SourceFormat {
        self.source_format
    }

    pub fn style_hints(&self) -> &StyleHints {
        &self.style_hints
    }

    pub fn exportable_documents(&self) -> &[ExportableDocument] {
        &self.exportable_documents
    }
}

/// Generate sets for many records. A bad record yields a degraded entry; the batch always
/// completes.
pub fn generate_batch<'a>(
    contents: impl IntoIterator<Item = &'a SourceContent>,
    options: &GenerationOptions,
) -> Vec<(String, Outcome<AdaptationSet>)> {
    let results: Vec<_> = contents
        .into_iter()
        .map(|content| {
            (
                content.id.clone(),
                AdaptationSet::generate(content, options),
            )
        })
        .collect();
    let degraded = results.iter().filter(|(_, o)| !o.is_ready()).count();
    tracing::info!(total = results.len(), degraded, "batch adaptation finished");
    results
}
