//! Export errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("exporter '{0}' not found")]
    ExporterNotFound(String),

    #[error("markup serialization failed: {0}")]
    Serialization(String),

    #[error("document packaging failed: {0}")]
    Packaging(String),
}
