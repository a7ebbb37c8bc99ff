//! Exporter registry
//!
//! Exporters are kept in registration order, which is also the order of the produced documents.
//! Registering a name that already exists replaces that exporter in place.

use crate::error::ExportError;
use crate::exporter::Exporter;
use crate::exporters::{DocxExporter, HtmlExporter, PlainTextExporter};
use crate::style::ExportStyle;
use eduadapt_core::adapt::document::ExportKind;
use eduadapt_core::{AdaptationIssue, AdaptationSet, ExportableDocument, Outcome};

/// Registry of exporters
pub struct ExporterRegistry {
    exporters: Vec<Box<dyn Exporter>>,
}

impl ExporterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ExporterRegistry {
            exporters: Vec::new(),
        }
    }

    /// Register an exporter, replacing any exporter with the same name
    pub fn register<X: Exporter + 'static>(&mut self, exporter: X) {
        match self
            .exporters
            .iter()
            .position(|existing| existing.name() == exporter.name())
        {
            Some(index) => self.exporters[index] = Box::new(exporter),
            None => self.exporters.push(Box::new(exporter)),
        }
    }

    /// Get an exporter by name
    pub fn get(&self, name: &str) -> Result<&dyn Exporter, ExportError> {
        self.exporters
            .iter()
            .find(|exporter| exporter.name() == name)
            .map(|exporter| exporter.as_ref())
            .ok_or_else(|| ExportError::ExporterNotFound(name.to_string()))
    }

    /// Check if an exporter exists
    pub fn has(&self, name: &str) -> bool {
        self.exporters.iter().any(|exporter| exporter.name() == name)
    }

    /// Exporter names in registration order
    pub fn list_exporters(&self) -> Vec<String> {
        self.exporters
            .iter()
            .map(|exporter| exporter.name().to_string())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Exporter> {
        self.exporters.iter().map(|exporter| exporter.as_ref())
    }

    /// Create a registry with the built-in exporters: plain text, HTML, docx
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(PlainTextExporter);
        registry.register(HtmlExporter);
        registry.register(DocxExporter);

        registry
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Run every exporter over `set`, collecting issues instead of stopping at the first failure.
pub fn build_export_report(
    set: &AdaptationSet,
    registry: &ExporterRegistry,
    style: &ExportStyle,
) -> Outcome<Vec<ExportableDocument>> {
    let mut documents = Vec::new();
    let mut issues = Vec::new();

    for exporter in registry.iter() {
        match exporter.export(set, style) {
            Ok(document) => {
                let neutralized = exporter.neutralized_hazards(set);
                if neutralized > 0 {
                    issues.push(AdaptationIssue::ExportEncodingHazard {
                        document: document.id.clone(),
                        neutralized,
                    });
                }
                documents.push(document);
            }
            Err(err) => {
                tracing::warn!(
                    content_id = set.content_id(),
                    exporter = exporter.name(),
                    error = %err,
                    "export skipped"
                );
                issues.push(AdaptationIssue::ExportSkipped {
                    exporter: exporter.name().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        content_id = set.content_id(),
        documents = documents.len(),
        "exports built"
    );
    Outcome::from_parts(documents, issues)
}

/// Default documents for `set`, styled from the set's own hints.
pub fn build_exports(set: &AdaptationSet) -> Vec<ExportableDocument> {
    let style = ExportStyle::from_hints(set.style_hints());
    build_export_report(set, &ExporterRegistry::with_defaults(), &style).into_value()
}

/// A new set carrying freshly built documents.
pub fn attach_exports(
    set: AdaptationSet,
    registry: &ExporterRegistry,
    style: &ExportStyle,
) -> Outcome<AdaptationSet> {
    let report = build_export_report(&set, registry, style);
    report.map(|documents| set.with_exports(documents))
}

/// Documents of `kind` in `documents`.
pub fn documents_of_kind(
    documents: &[ExportableDocument],
    kind: ExportKind,
) -> impl Iterator<Item = &ExportableDocument> {
    documents.iter().filter(move |document| document.kind == kind)
}
