//! Style hints
//!
//! Declarative reading-style directives attached to a resolved variant. They say what the view
//! should look like, never how a particular toolkit renders it; [crate::adapt::presentation]
//! turns them into concrete declarations.

use serde::{Deserialize, Serialize};

/// Font stack recommended for readers with dyslexia.
pub const DYSLEXIA_FONT_STACK: &str = "'OpenDyslexic', Arial, sans-serif";
/// Letter spacing for dyslexia, in em.
pub const DYSLEXIA_LETTER_SPACING_EM: f32 = 0.12;
/// Line height for dyslexia.
pub const DYSLEXIA_LINE_HEIGHT: f32 = 2.0;
/// Line height of exported documents.
pub const DOCUMENT_LINE_HEIGHT: f32 = 1.8;
/// Low vision never renders text below this size.
pub const LOW_VISION_MIN_FONT_PX: u32 = 20;
/// Extra size added on top of the viewer's own choice for low vision.
pub const LOW_VISION_FONT_BOOST_PX: u32 = 4;
pub const LOW_VISION_FONT_WEIGHT: u16 = 500;
/// Focus ring drawn around the content for attention needs.
pub const FOCUS_RING_BORDER: &str = "3px solid #3b82f6";
pub const FOCUS_RING_SHADOW: &str = "0 0 20px rgba(59, 130, 246, 0.3)";

/// Background/foreground pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Palette {
    /// Warm off-white paper, easier on readers with dyslexia.
    WarmPaper,
    /// Light cream used by exported documents.
    LightPaper,
    /// Pure black on white.
    HighContrast,
}

impl Palette {
    pub fn background(self) -> &'static str {
        match self {
            Palette::WarmPaper => "#faf8f3",
            Palette::LightPaper => "#FFFBEA",
            Palette::HighContrast => "#ffffff",
        }
    }

    pub fn foreground(self) -> &'static str {
        match self {
            Palette::WarmPaper | Palette::LightPaper => "#1a1a1a",
            Palette::HighContrast => "#000000",
        }
    }
}

/// Visible labels for the adaptations in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdaptationBadge {
    ReadableFont,
    WiderSpacing,
    FocusMode,
    LargerFont,
    HighContrast,
    SimplifiedVersion,
    Summary,
    EasyRead,
    Transcript,
}

impl AdaptationBadge {
    pub fn label(self) -> &'static str {
        match self {
            AdaptationBadge::ReadableFont => "Fuente legible",
            AdaptationBadge::WiderSpacing => "Mayor espaciado",
            AdaptationBadge::FocusMode => "Modo concentración",
            AdaptationBadge::LargerFont => "Fuente ampliada",
            AdaptationBadge::HighContrast => "Alto contraste",
            AdaptationBadge::SimplifiedVersion => "Versión simplificada",
            AdaptationBadge::Summary => "Resumen",
            AdaptationBadge::EasyRead => "Lectura fácil",
            AdaptationBadge::Transcript => "Transcripción disponible",
        }
    }
}

/// Accumulated style directives. Unset fields leave the renderer's defaults alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleHints {
    pub font_family: Option<String>,
    pub letter_spacing_em: Option<f32>,
    pub line_height: Option<f32>,
    pub palette: Option<Palette>,
    pub align_left: bool,
    pub focus_ring: bool,
    pub timer_control: bool,
    pub min_font_px: Option<u32>,
    pub font_boost_px: u32,
    pub font_weight: Option<u16>,
    /// High contrast is mandatory; manual toggles may not turn it off.
    pub force_high_contrast: bool,
    pub transcript_affordance: bool,
}

impl StyleHints {
    /// No directives at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Reading style baked into exported documents.
    pub fn document_defaults() -> Self {
        Self {
            font_family: Some(DYSLEXIA_FONT_STACK.to_string()),
            line_height: Some(DOCUMENT_LINE_HEIGHT),
            palette: Some(Palette::LightPaper),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_empty() {
        assert!(StyleHints::none().is_empty());
        assert!(!StyleHints::document_defaults().is_empty());
    }

    #[test]
    fn test_high_contrast_palette() {
        assert_eq!(Palette::HighContrast.foreground(), "#000000");
        assert_eq!(Palette::HighContrast.background(), "#ffffff");
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(AdaptationBadge::FocusMode.label(), "Modo concentración");
    }
}
