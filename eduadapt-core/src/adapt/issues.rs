//! Degradation reporting
//!
//! Accessibility tooling must never take a lesson view down, so the engine never fails on learner
//! input. Instead every operation that may fall back to a safe default hands back an [Outcome]:
//! the value it produced plus the issues it settled on the way.

use crate::adapt::profile::Need;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conditions the engine detects and degrades around.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "kebab-case")]
pub enum AdaptationIssue {
    /// Source text was absent or unusable; the affected variants are empty.
    #[error("malformed input for content '{content_id}': {reason}")]
    MalformedInput { content_id: String, reason: String },

    /// Requested speech language is not offered by the engine; its default voice is used.
    #[error("no voice for language '{requested}', using {fallback}")]
    UnsupportedVoice { requested: String, fallback: String },

    /// Characters that would break the markup were escaped.
    #[error("{neutralized} markup-breaking characters escaped in '{document}'")]
    ExportEncodingHazard { document: String, neutralized: usize },

    /// Two needs asked for incompatible things; `winner` took precedence.
    #[error("{winner:?} overrides {loser:?}: {detail}")]
    ProfileConflict {
        winner: Need,
        loser: Need,
        detail: String,
    },

    /// An optional rendering could not be produced; the remaining ones are still returned.
    #[error("export '{exporter}' skipped: {reason}")]
    ExportSkipped { exporter: String, reason: String },
}

/// Result of an operation that cannot fail but may degrade.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Produced exactly as requested.
    Ready(T),
    /// Produced with safe defaults standing in for something.
    Degraded {
        value: T,
        issues: Vec<AdaptationIssue>,
    },
}

impl<T> Outcome<T> {
    /// Build an outcome from a value and whatever issues were collected while producing it.
    pub fn from_parts(value: T, issues: Vec<AdaptationIssue>) -> Self {
        if issues.is_empty() {
            Outcome::Ready(value)
        } else {
            Outcome::Degraded { value, issues }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Ready(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Ready(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn issues(&self) -> &[AdaptationIssue] {
        match self {
            Outcome::Ready(_) => &[],
            Outcome::Degraded { issues, .. } => issues,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Ready(value) => Outcome::Ready(f(value)),
            Outcome::Degraded { value, issues } => Outcome::Degraded {
                value: f(value),
                issues,
            },
        }
    }
}
