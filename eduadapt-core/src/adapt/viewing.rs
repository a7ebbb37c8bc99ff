//! Viewer sessions
//!
//! Ties the pieces together for one person looking at one piece of content: the shared
//! [AdaptationSet], their need profile and role, their [PresentationState] and their own
//! [PlaybackSession]. Whenever the visible text changes, playback of the old text is stopped
//! before the new text is exposed.

use crate::adapt::adaptation::AdaptationSet;
use crate::adapt::issues::Outcome;
use crate::adapt::playback::{EngineEvent, PlaybackSession, PlaybackStatus, SpeechEngine, VoiceHint};
use crate::adapt::presentation::{PresentationState, TimerTick, ViewStyle};
use crate::adapt::profile::NeedProfile;
use crate::adapt::resolving::{resolve_with_mode, Resolution, ViewMode, ViewerRole};
use std::sync::Arc;

pub struct ViewerSession<E: SpeechEngine> {
    set: Arc<AdaptationSet>,
    profile: NeedProfile,
    role: ViewerRole,
    presentation: PresentationState,
    playback: PlaybackSession<E>,
    resolution: Resolution,
}

impl<E: SpeechEngine> ViewerSession<E> {
    pub fn open(
        set: Arc<AdaptationSet>,
        profile: NeedProfile,
        role: ViewerRole,
        mut presentation: PresentationState,
        mut playback: PlaybackSession<E>,
    ) -> Self {
        let resolution = resolve_with_mode(&profile, &set, role, presentation.view_mode());
        if playback.retarget(&resolution.text) {
            tracing::debug!("playback of other text stopped on open");
        }
        presentation.sync_playback(playback.status());
        tracing::debug!(
            content_id = set.content_id(),
            variant = ?resolution.variant,
            "viewer session opened"
        );
        Self {
            set,
            profile,
            role,
            presentation,
            playback,
            resolution,
        }
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn text(&self) -> &str {
        &self.resolution.text
    }

    pub fn presentation(&self) -> &PresentationState {
        &self.presentation
    }

    /// Live controls that never change the text (font, contrast, focus, timer). The view mode and
    /// the mirrored playback status only move through the session.
    pub fn presentation_mut(&mut self) -> &mut PresentationState {
        &mut self.presentation
    }

    pub fn playback(&self) -> &PlaybackSession<E> {
        &self.playback
    }

    pub fn profile(&self) -> &NeedProfile {
        &self.profile
    }

    pub fn set(&self) -> &Arc<AdaptationSet> {
        &self.set
    }

    /// Flip between the adapted text and the full original.
    pub fn toggle_full_version(&mut self) -> ViewMode {
        let mode = self.presentation.toggle_full_version();
        self.refresh();
        mode
    }

    /// Swap in a regenerated set for the same content.
    pub fn replace_set(&mut self, set: Arc<AdaptationSet>) {
        self.set = set;
        self.refresh();
    }

    pub fn replace_profile(&mut self, profile: NeedProfile) {
        self.profile = profile;
        self.refresh();
    }

    fn refresh(&mut self) {
        let next = resolve_with_mode(
            &self.profile,
            &self.set,
            self.role,
            self.presentation.view_mode(),
        );
        if self.playback.retarget(&next.text) {
            tracing::debug!("visible text changed, playback stopped");
        }
        self.presentation.sync_playback(self.playback.status());
        self.resolution = next;
    }

    /// Read the visible text aloud.
    pub fn read_aloud(&mut self, hint: Option<&VoiceHint>) -> Outcome<PlaybackStatus> {
        let outcome = self.playback.start(&self.resolution.text, hint);
        self.presentation.sync_playback(*outcome.value());
        outcome
    }

    pub fn pause_reading(&mut self) -> PlaybackStatus {
        let status = self.playback.pause();
        self.presentation.sync_playback(status);
        status
    }

    pub fn resume_reading(&mut self) -> PlaybackStatus {
        let status = self.playback.resume();
        self.presentation.sync_playback(status);
        status
    }

    pub fn stop_reading(&mut self) -> PlaybackStatus {
        let status = self.playback.stop();
        self.presentation.sync_playback(status);
        status
    }

    pub fn handle_engine_event(&mut self, event: EngineEvent) -> PlaybackStatus {
        let status = self.playback.handle_event(event);
        self.presentation.sync_playback(status);
        status
    }

    pub fn tick(&mut self) -> TimerTick {
        self.presentation.tick()
    }

    pub fn view_style(&self) -> ViewStyle {
        ViewStyle::compose(&self.resolution.style, &self.presentation)
    }
}
