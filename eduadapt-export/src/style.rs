//! Reading style for exported documents

use eduadapt_core::adapt::styling::{Palette, StyleHints, DOCUMENT_LINE_HEIGHT, DYSLEXIA_FONT_STACK};
use serde::{Deserialize, Serialize};

pub const HTML_FONT_PX: u32 = 18;
pub const DOCX_FONT: &str = "Arial";
/// Word sizes are in half points: 28 is 14pt.
pub const DOCX_FONT_HALF_POINTS: u32 = 28;
/// Word line spacing in 240ths of a line: 400 is about 1.7 lines.
pub const DOCX_LINE_SPACING: u32 = 400;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportStyle {
    pub html_font_stack: String,
    pub html_font_px: u32,
    pub html_line_height: f32,
    pub html_background: String,
    pub html_foreground: String,
    pub docx_font: String,
    pub docx_font_half_points: u32,
    pub docx_line_spacing: u32,
    pub docx_bold: bool,
}

impl ExportStyle {
    /// Style taken from a set's hints, falling back to the defaults for anything unset.
    pub fn from_hints(hints: &StyleHints) -> Self {
        let defaults = Self::default();
        let palette = hints.palette.unwrap_or(Palette::LightPaper);
        Self {
            html_font_stack: hints
                .font_family
                .clone()
                .unwrap_or(defaults.html_font_stack),
            html_line_height: hints.line_height.unwrap_or(defaults.html_line_height),
            html_background: palette.background().to_string(),
            html_foreground: palette.foreground().to_string(),
            ..defaults
        }
    }
}

impl Default for ExportStyle {
    fn default() -> Self {
        Self {
            html_font_stack: DYSLEXIA_FONT_STACK.to_string(),
            html_font_px: HTML_FONT_PX,
            html_line_height: DOCUMENT_LINE_HEIGHT,
            html_background: Palette::LightPaper.background().to_string(),
            html_foreground: Palette::LightPaper.foreground().to_string(),
            docx_font: DOCX_FONT.to_string(),
            docx_font_half_points: DOCX_FONT_HALF_POINTS,
            docx_line_spacing: DOCX_LINE_SPACING,
            docx_bold: true,
        }
    }
}
