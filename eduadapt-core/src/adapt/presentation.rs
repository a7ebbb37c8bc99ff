//! Presentation state
//!
//! Transient per-viewer controls: font size, contrast, focused reading, a countdown timer and the
//! "show full version" toggle. Every mutation is clamped so the state is always valid, and none
//! of it ever touches the need profile or the adaptation set.
//!
//! Manual contrast and the contrast mandated by low vision are kept apart. The viewer may toggle
//! their own preference freely; [effective_high_contrast] combines both so a mandated minimum is
//! never defeated.

use crate::adapt::playback::PlaybackStatus;
use crate::adapt::resolving::ViewMode;
use crate::adapt::styling::{Palette, StyleHints, FOCUS_RING_BORDER, FOCUS_RING_SHADOW};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub const MIN_FONT_PX: u32 = 12;
pub const MAX_FONT_PX: u32 = 28;
pub const FONT_STEP_PX: u32 = 2;
pub const DEFAULT_FONT_PX: u32 = 16;

/// Bounds for the font size control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationLimits {
    pub min_font_px: u32,
    pub max_font_px: u32,
    pub step_px: u32,
    pub default_font_px: u32,
}

impl PresentationLimits {
    /// Limits with min/max swapped into order and the default pulled inside them.
    pub fn normalized(self) -> Self {
        let (min, max) = if self.min_font_px <= self.max_font_px {
            (self.min_font_px, self.max_font_px)
        } else {
            (self.max_font_px, self.min_font_px)
        };
        Self {
            min_font_px: min,
            max_font_px: max,
            step_px: self.step_px.max(1),
            default_font_px: self.default_font_px.clamp(min, max),
        }
    }

    pub fn clamp(&self, px: u32) -> u32 {
        px.clamp(self.min_font_px, self.max_font_px)
    }
}

impl Default for PresentationLimits {
    fn default() -> Self {
        Self {
            min_font_px: MIN_FONT_PX,
            max_font_px: MAX_FONT_PX,
            step_px: FONT_STEP_PX,
            default_font_px: DEFAULT_FONT_PX,
        }
    }
}

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// Timer not running; nothing happened.
    Idle,
    Running { remaining_seconds: u32 },
    /// Reached zero on this tick; the timer is now stopped and cleared.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationState {
    font_size_px: u32,
    high_contrast: bool,
    focused_reading: bool,
    timer_remaining_seconds: u32,
    timer_running: bool,
    playback_status: PlaybackStatus,
    show_full_version: bool,
    #[serde(skip)]
    limits: PresentationLimits,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self::new(PresentationLimits::default())
    }
}

impl PresentationState {
    pub fn new(limits: PresentationLimits) -> Self {
        let limits = limits.normalized();
        Self {
            font_size_px: limits.default_font_px,
            high_contrast: false,
            focused_reading: false,
            timer_remaining_seconds: 0,
            timer_running: false,
            playback_status: PlaybackStatus::Stopped,
            show_full_version: false,
            limits,
        }
    }

    pub fn limits(&self) -> &PresentationLimits {
        &self.limits
    }

    pub fn font_size_px(&self) -> u32 {
        self.font_size_px
    }

    pub fn high_contrast(&self) -> bool {
        self.high_contrast
    }

    pub fn focused_reading(&self) -> bool {
        self.focused_reading
    }

    pub fn timer_remaining_seconds(&self) -> u32 {
        self.timer_remaining_seconds
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn playback_status(&self) -> PlaybackStatus {
        self.playback_status
    }

    pub fn show_full_version(&self) -> bool {
        self.show_full_version
    }

    pub fn view_mode(&self) -> ViewMode {
        if self.show_full_version {
            ViewMode::FullVersion
        } else {
            ViewMode::Adapted
        }
    }

    pub fn increase_font(&mut self) -> u32 {
        self.set_font_size(self.font_size_px.saturating_add(self.limits.step_px))
    }

    pub fn decrease_font(&mut self) -> u32 {
        self.set_font_size(self.font_size_px.saturating_sub(self.limits.step_px))
    }

    pub fn set_font_size(&mut self, px: u32) -> u32 {
        self.font_size_px = self.limits.clamp(px);
        self.font_size_px
    }

    pub fn reset_font(&mut self) -> u32 {
        self.font_size_px = self.limits.default_font_px;
        self.font_size_px
    }

    pub fn toggle_high_contrast(&mut self) -> bool {
        self.high_contrast = !self.high_contrast;
        self.high_contrast
    }

    pub fn toggle_focused_reading(&mut self) -> bool {
        self.focused_reading = !self.focused_reading;
        self.focused_reading
    }

    pub(crate) fn toggle_full_version(&mut self) -> ViewMode {
        self.show_full_version = !self.show_full_version;
        self.view_mode()
    }

    /// Start a countdown of `seconds`. Zero clears the timer instead.
    pub fn start_timer(&mut self, seconds: u32) {
        self.timer_remaining_seconds = seconds;
        self.timer_running = seconds > 0;
    }

    pub fn pause_timer(&mut self) {
        self.timer_running = false;
    }

    /// Continue a paused countdown, if any time is left.
    pub fn resume_timer(&mut self) {
        self.timer_running = self.timer_remaining_seconds > 0;
    }

    pub fn reset_timer(&mut self) {
        self.timer_remaining_seconds = 0;
        self.timer_running = false;
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TimerTick {
        if !self.timer_running {
            return TimerTick::Idle;
        }
        self.timer_remaining_seconds = self.timer_remaining_seconds.saturating_sub(1);
        if self.timer_remaining_seconds == 0 {
            self.reset_timer();
            TimerTick::Expired
        } else {
            TimerTick::Running {
                remaining_seconds: self.timer_remaining_seconds,
            }
        }
    }

    /// Mirror the playback session's status.
    pub(crate) fn sync_playback(&mut self, status: PlaybackStatus) {
        self.playback_status = status;
    }
}

/// Font size actually rendered: the viewer's choice plus any boost, never below the floor.
pub fn effective_font_px(state: &PresentationState, hints: &StyleHints) -> u32 {
    let boosted = state.font_size_px().saturating_add(hints.font_boost_px);
    hints.min_font_px.map_or(boosted, |floor| boosted.max(floor))
}

pub fn effective_high_contrast(state: &PresentationState, hints: &StyleHints) -> bool {
    state.high_contrast() || hints.force_high_contrast
}

/// Concrete styling for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewStyle {
    pub font_size_px: u32,
    pub font_family: Option<String>,
    pub font_weight: Option<u16>,
    pub letter_spacing_em: Option<f32>,
    pub line_height: Option<f32>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub text_align_left: bool,
    pub focus_ring: bool,
    pub show_timer: bool,
    pub show_transcript: bool,
}

impl ViewStyle {
    pub fn compose(hints: &StyleHints, state: &PresentationState) -> Self {
        let palette = if effective_high_contrast(state, hints) {
            Some(Palette::HighContrast)
        } else {
            hints.palette
        };
        Self {
            font_size_px: effective_font_px(state, hints),
            font_family: hints.font_family.clone(),
            font_weight: hints.font_weight,
            letter_spacing_em: hints.letter_spacing_em,
            line_height: hints.line_height,
            background: palette.map(|p| p.background().to_string()),
            foreground: palette.map(|p| p.foreground().to_string()),
            text_align_left: hints.align_left,
            focus_ring: hints.focus_ring || state.focused_reading(),
            show_timer: hints.timer_control,
            show_transcript: hints.transcript_affordance,
        }
    }

    /// Inline CSS declarations, e.g. for a `style` attribute.
    pub fn to_css(&self) -> String {
        let mut css = format!("font-size: {}px;", self.font_size_px);
        if let Some(family) = &self.font_family {
            let _ = write!(css, " font-family: {family};");
        }
        if let Some(weight) = self.font_weight {
            let _ = write!(css, " font-weight: {weight};");
        }
        if let Some(spacing) = self.letter_spacing_em {
            let _ = write!(css, " letter-spacing: {spacing}em;");
        }
        if let Some(height) = self.line_height {
            let _ = write!(css, " line-height: {height};");
        }
        if let Some(background) = &self.background {
            let _ = write!(css, " background-color: {background};");
        }
        if let Some(foreground) = &self.foreground {
            let _ = write!(css, " color: {foreground};");
        }
        if self.text_align_left {
            css.push_str(" text-align: left;");
        }
        if self.focus_ring {
            let _ = write!(
                css,
                " border: {FOCUS_RING_BORDER}; box-shadow: {FOCUS_RING_SHADOW};"
            );
        }
        css
    }
}
