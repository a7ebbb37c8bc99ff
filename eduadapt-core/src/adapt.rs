//! Adaptation engine modules
//!
//! The leaves (segmenting, generating) are pure string functions. The adaptation set bundles
//! their output once per content version; resolving, presentation and playback work at view time
//! on top of that immutable bundle.

pub mod adaptation;
pub mod content;
pub mod document;
pub mod generating;
pub mod issues;
pub mod normalizing;
pub mod playback;
pub mod presentation;
pub mod profile;
pub mod resolving;
pub mod segmenting;
pub mod styling;
pub mod viewing;
