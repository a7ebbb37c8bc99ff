//! Speech playback sessions
//!
//! Each viewer owns exactly one [PlaybackSession]; there is no process-wide speech singleton.
//! The platform synthesizer sits behind the [SpeechEngine] trait and is treated as opaque: the
//! session issues commands and learns about completion through [EngineEvent]s.
//!
//! State machine:
//!
//!     Stopped --start--> Playing --pause--> Paused --resume--> Playing
//!        ^                  |                  |
//!        +------stop--------+-------stop-------+
//!
//! Calls that do not apply to the current state are no-ops. Starting again supersedes the
//! running utterance: it is cancelled first, so at most one utterance is ever active.

use crate::adapt::issues::{AdaptationIssue, Outcome};
use serde::{Deserialize, Serialize};

/// Language every lesson is read in unless configured otherwise.
pub const DEFAULT_LANGUAGE: &str = "es-ES";
/// Slightly slower than normal speech.
pub const DEFAULT_RATE: f32 = 0.85;

/// BCP-47 language tag (e.g. "es-ES").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language(String);

impl Language {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// Primary subtag, e.g. "es" for "es-MX".
    pub fn primary(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or("")
    }

    pub fn same_tag(&self, other: &Language) -> bool {
        self.0.replace('_', "-").eq_ignore_ascii_case(&other.0.replace('_', "-"))
    }

    pub fn same_primary(&self, other: &Language) -> bool {
        self.primary().eq_ignore_ascii_case(other.primary())
    }
}

/// Opaque voice identifier assigned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub id: VoiceId,
    pub name: String,
    pub language: Language,
}

/// What the viewer would like to hear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceHint {
    pub language: Language,
    pub rate: f32,
}

/// Speech defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechOptions {
    pub language: String,
    pub rate: f32,
}

impl SpeechOptions {
    pub fn hint(&self) -> VoiceHint {
        VoiceHint {
            language: Language::new(self.language.clone()),
            rate: self.rate,
        }
    }
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            rate: DEFAULT_RATE,
        }
    }
}

/// Handle of one utterance, unique per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtteranceId(pub u64);

/// A request handed to the engine. `voice: None` asks for the engine default.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<Voice>,
    pub language: Language,
    pub rate: f32,
}

/// Platform speech synthesizer.
pub trait SpeechEngine {
    /// Voices currently installed.
    fn voices(&self) -> Vec<Voice>;

    /// Queue an utterance and begin speaking it.
    fn speak(&mut self, utterance: Utterance) -> UtteranceId;

    fn cancel(&mut self, id: UtteranceId);

    fn pause(&mut self, id: UtteranceId);

    fn resume(&mut self, id: UtteranceId);
}

/// Asynchronous notifications from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    Finished(UtteranceId),
    Cancelled(UtteranceId),
    Failed(UtteranceId),
}

impl EngineEvent {
    fn utterance(self) -> UtteranceId {
        match self {
            EngineEvent::Finished(id) | EngineEvent::Cancelled(id) | EngineEvent::Failed(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug, Clone)]
struct ActiveUtterance {
    id: UtteranceId,
    text: String,
    voice: Option<Voice>,
}

/// Pick the voice for `language`: exact tag first, then same primary language.
pub fn select_voice(voices: &[Voice], language: &Language) -> Option<Voice> {
    voices
        .iter()
        .find(|voice| voice.language.same_tag(language))
        .or_else(|| {
            voices
                .iter()
                .find(|voice| voice.language.same_primary(language))
        })
        .cloned()
}

/// One viewer's speech playback.
#[derive(Debug)]
pub struct PlaybackSession<E: SpeechEngine> {
    engine: E,
    options: SpeechOptions,
    status: PlaybackStatus,
    current: Option<ActiveUtterance>,
}

impl<E: SpeechEngine> PlaybackSession<E> {
    pub fn new(engine: E, options: SpeechOptions) -> Self {
        Self {
            engine,
            options,
            status: PlaybackStatus::Stopped,
            current: None,
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Text of the utterance being played or paused.
    pub fn current_text(&self) -> Option<&str> {
        self.current.as_ref().map(|active| active.text.as_str())
    }

    /// Voice chosen for the current utterance (`None` means the engine default).
    pub fn current_voice(&self) -> Option<&Voice> {
        self.current.as_ref().and_then(|active| active.voice.as_ref())
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Read `text` aloud, superseding whatever is playing.
    ///
    /// Without a hint the configured language and rate are used. An unavailable language falls
    /// back to the engine default voice and is reported as [AdaptationIssue::UnsupportedVoice].
    pub fn start(&mut self, text: &str, hint: Option<&VoiceHint>) -> Outcome<PlaybackStatus> {
        self.stop();

        if text.trim().is_empty() {
            tracing::debug!("nothing to read aloud");
            return Outcome::Ready(self.status);
        }

        let hint = hint.cloned().unwrap_or_else(|| self.options.hint());
        let voice = select_voice(&self.engine.voices(), &hint.language);
        let mut issues = Vec::new();
        if voice.is_none() {
            tracing::warn!(language = hint.language.code(), "no matching voice, using default");
            issues.push(AdaptationIssue::UnsupportedVoice {
                requested: hint.language.code().to_string(),
                fallback: "engine default".to_string(),
            });
        }

        let id = self.engine.speak(Utterance {
            text: text.to_string(),
            voice: voice.clone(),
            language: hint.language.clone(),
            rate: hint.rate,
        });
        self.current = Some(ActiveUtterance {
            id,
            text: text.to_string(),
            voice,
        });
        self.status = PlaybackStatus::Playing;
        tracing::debug!(utterance = id.0, "playback started");

        Outcome::from_parts(self.status, issues)
    }

    /// Pause; only meaningful while playing.
    pub fn pause(&mut self) -> PlaybackStatus {
        if let (PlaybackStatus::Playing, Some(active)) = (self.status, &self.current) {
            self.engine.pause(active.id);
            self.status = PlaybackStatus::Paused;
        }
        self.status
    }

    /// Resume; only meaningful while paused.
    pub fn resume(&mut self) -> PlaybackStatus {
        if let (PlaybackStatus::Paused, Some(active)) = (self.status, &self.current) {
            self.engine.resume(active.id);
            self.status = PlaybackStatus::Playing;
        }
        self.status
    }

    /// Stop and forget the current utterance. Idempotent.
    pub fn stop(&mut self) -> PlaybackStatus {
        if let Some(active) = self.current.take() {
            self.engine.cancel(active.id);
            tracing::debug!(utterance = active.id.0, "playback stopped");
        }
        self.status = PlaybackStatus::Stopped;
        self.status
    }

    /// The text to read has changed. Any utterance of different text is stopped so stale text is
    /// never read. Returns true if playback was stopped.
    pub fn retarget(&mut self, text: &str) -> bool {
        match self.current_text() {
            Some(current) if current != text => {
                self.stop();
                true
            }
            _ => false,
        }
    }

    /// Apply an engine notification. Events for superseded utterances are ignored.
    pub fn handle_event(&mut self, event: EngineEvent) -> PlaybackStatus {
        let is_current = self
            .current
            .as_ref()
            .is_some_and(|active| active.id == event.utterance());
        if is_current {
            if let EngineEvent::Failed(id) = event {
                tracing::warn!(utterance = id.0, "speech engine reported a failure");
            }
            self.current = None;
            self.status = PlaybackStatus::Stopped;
        }
        self.status
    }
}

impl<E: SpeechEngine> Drop for PlaybackSession<E> {
    fn drop(&mut self) {
        if let Some(active) = self.current.take() {
            self.engine.cancel(active.id);
        }
    }
}
