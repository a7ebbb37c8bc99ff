//! # eduadapt-core
//!
//! The accessibility adaptation engine behind the EduAdapt teaching portal.
//!
//! Given one piece of source content and a learner's declared needs, the engine derives a set of
//! alternate renderings (summary, simplified text, easy-read blocks, transcript) and, at render
//! time, picks the right variant and style for each viewer.
//!
//! Layout
//!
//!     src/adapt
//!       ├── content        Source records handed over by the authoring side
//!       ├── segmenting     Sentence segmentation
//!       ├── generating     Pure text-variant generators
//!       ├── adaptation     The immutable AdaptationSet and batch generation
//!       ├── profile        Need vocabulary and learner profiles
//!       ├── resolving      Variant and style selection per viewer
//!       ├── playback       Speech playback sessions
//!       ├── presentation   Per-viewer transient UI state
//!       └── viewing        Viewer sessions tying resolution, state and playback together
//!
//! Everything here is synchronous and allocation-light. Nothing in the engine is fatal: degraded
//! results are reported through [adapt::issues::Outcome] rather than raised.

pub mod adapt;

pub use adapt::adaptation::{AdaptationSet, SourceFormat};
pub use adapt::content::{ContentKind, SourceContent};
pub use adapt::document::{ExportContent, ExportKind, ExportableDocument};
pub use adapt::generating::GenerationOptions;
pub use adapt::issues::{AdaptationIssue, Outcome};
pub use adapt::playback::{PlaybackSession, PlaybackStatus, SpeechEngine, SpeechOptions};
pub use adapt::presentation::{PresentationLimits, PresentationState, ViewStyle};
pub use adapt::profile::{Need, NeedProfile};
pub use adapt::resolving::{resolve, resolve_with_mode, Resolution, Variant, ViewMode, ViewerRole};
pub use adapt::segmenting::segment;
pub use adapt::styling::StyleHints;
pub use adapt::viewing::ViewerSession;
