//! Shared configuration loader for the eduadapt engine.
//!
//! `defaults/eduadapt.default.toml` is embedded so that documented defaults and runtime
//! behavior stay in sync. Applications layer deployment-specific files on top of those defaults
//! via [`Loader`] before deserializing into [`EngineConfig`], then hand the typed sections to the
//! engine through the `From` conversions below.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use eduadapt_core::{GenerationOptions, PresentationLimits, SpeechOptions};
use eduadapt_export::ExportStyle;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/eduadapt.default.toml");

/// Top-level configuration consumed by eduadapt applications.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub generation: GenerationConfig,
    pub presentation: PresentationConfig,
    pub speech: SpeechConfig,
    pub export: ExportConfig,
}

/// Text variant generator knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub summary_max_sentences: usize,
    pub simplify_max_words: usize,
    pub simplify_keep_words: usize,
    pub easy_read_block_words: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PresentationConfig {
    pub min_font_px: u32,
    pub max_font_px: u32,
    pub step_px: u32,
    pub default_font_px: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    pub language: String,
    pub rate: f32,
}

/// Format-specific export knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub html: HtmlExportConfig,
    pub docx: DocxExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlExportConfig {
    pub font_stack: String,
    pub font_px: u32,
    pub line_height: f32,
    pub background: String,
    pub foreground: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocxExportConfig {
    pub font: String,
    pub font_half_points: u32,
    pub line_spacing: u32,
    pub bold: bool,
}

impl From<&GenerationConfig> for GenerationOptions {
    fn from(config: &GenerationConfig) -> Self {
        GenerationOptions {
            summary_max_sentences: config.summary_max_sentences,
            simplify_max_words: config.simplify_max_words,
            simplify_keep_words: config.simplify_keep_words,
            easy_read_block_words: config.easy_read_block_words,
        }
    }
}

impl From<&PresentationConfig> for PresentationLimits {
    fn from(config: &PresentationConfig) -> Self {
        PresentationLimits {
            min_font_px: config.min_font_px,
            max_font_px: config.max_font_px,
            step_px: config.step_px,
            default_font_px: config.default_font_px,
        }
        .normalized()
    }
}

impl From<&SpeechConfig> for SpeechOptions {
    fn from(config: &SpeechConfig) -> Self {
        SpeechOptions {
            language: config.language.clone(),
            rate: config.rate,
        }
    }
}

impl From<&ExportConfig> for ExportStyle {
    fn from(config: &ExportConfig) -> Self {
        ExportStyle {
            html_font_stack: config.html.font_stack.clone(),
            html_font_px: config.html.font_px,
            html_line_height: config.html.line_height,
            html_background: config.html.background.clone(),
            html_foreground: config.html.foreground.clone(),
            docx_font: config.docx.font.clone(),
            docx_font_half_points: config.docx.font_half_points,
            docx_line_spacing: config.docx.line_spacing,
            docx_bold: config.docx.bold,
        }
    }
}

impl EngineConfig {
    pub fn generation_options(&self) -> GenerationOptions {
        (&self.generation).into()
    }

    pub fn presentation_limits(&self) -> PresentationLimits {
        (&self.presentation).into()
    }

    pub fn speech_options(&self) -> SpeechOptions {
        (&self.speech).into()
    }

    pub fn export_style(&self) -> ExportStyle {
        (&self.export).into()
    }
}

/// Helper for layering overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<EngineConfig, ConfigError> {
    Loader::new().build()
}
