//! Transcript variant. Speech-to-text is out of reach, so media get a placeholder naming the asset.

use crate::adapt::content::ContentKind;

/// Transcript of a piece of content.
pub fn transcript(base_text: &str, title: &str, kind: ContentKind) -> String {
    match kind {
        ContentKind::Audio => format!("[Transcripción no disponible para el audio «{title}»]"),
        ContentKind::Video => format!("[Transcripción no disponible para el vídeo «{title}»]"),
        ContentKind::Text | ContentKind::Announcement | ContentKind::Document => {
            base_text.to_string()
        }
    }
}
