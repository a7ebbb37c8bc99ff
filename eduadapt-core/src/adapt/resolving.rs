//! Need profile resolution
//!
//! Picks which variant of an adaptation set a viewer reads and which style directives apply.
//! This is a pure function of its inputs, so it can be exercised without any rendering.
//!
//! Text choice (first match wins):
//!
//!     1. Teacher                                   → base text, no style
//!     2. ComprehensionDifficulty, adapted view     → simplified text (summary if simplified is empty)
//!     3. Dyslexia, adapted view, easy-read present → easy-read text
//!     4. otherwise                                 → base text
//!
//! Style directives accumulate across all needs independently of the text choice. When low vision
//! and dyslexia both set a background, the high-contrast palette wins.

use crate::adapt::adaptation::AdaptationSet;
use crate::adapt::issues::AdaptationIssue;
use crate::adapt::profile::{Need, NeedProfile};
use crate::adapt::styling::{
    AdaptationBadge, Palette, StyleHints, DYSLEXIA_FONT_STACK, DYSLEXIA_LETTER_SPACING_EM,
    DYSLEXIA_LINE_HEIGHT, LOW_VISION_FONT_BOOST_PX, LOW_VISION_FONT_WEIGHT,
    LOW_VISION_MIN_FONT_PX,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewerRole {
    Teacher,
    Student,
}

/// Whether the viewer asked to see the full original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Adapted,
    FullVersion,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Adapted => ViewMode::FullVersion,
            ViewMode::FullVersion => ViewMode::Adapted,
        }
    }
}

/// The text variant a resolution settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Base,
    Simplified,
    Summary,
    EasyRead,
}

/// What one viewer should see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub text: String,
    pub style: StyleHints,
    pub variant: Variant,
    /// Adaptations in effect, in need order, for display next to the content.
    pub badges: Vec<AdaptationBadge>,
    /// Competing directives settled by the fixed override order.
    pub conflicts: Vec<AdaptationIssue>,
}

impl Resolution {
    fn unadapted(set: &AdaptationSet) -> Self {
        Self {
            text: set.base_text().to_string(),
            style: StyleHints::none(),
            variant: Variant::Base,
            badges: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    /// True when the text shown differs from the base text.
    pub fn is_adapted_text(&self) -> bool {
        self.variant != Variant::Base
    }
}

/// Resolve the adapted view for `role` with the given `profile`.
pub fn resolve(profile: &NeedProfile, set: &AdaptationSet, role: ViewerRole) -> Resolution {
    resolve_with_mode(profile, set, role, ViewMode::Adapted)
}

/// Resolve, honoring the viewer's "show full version" choice.
pub fn resolve_with_mode(
    profile: &NeedProfile,
    set: &AdaptationSet,
    role: ViewerRole,
    mode: ViewMode,
) -> Resolution {
    if role == ViewerRole::Teacher || profile.is_unadapted() {
        return Resolution::unadapted(set);
    }

    let (variant, text) = choose_text(profile, set, mode);
    let mut badges = Vec::new();
    match variant {
        Variant::Simplified => badges.push(AdaptationBadge::SimplifiedVersion),
        Variant::Summary => badges.push(AdaptationBadge::Summary),
        Variant::EasyRead => badges.push(AdaptationBadge::EasyRead),
        Variant::Base => {}
    }

    let (style, style_badges, conflicts) = accumulate_style(profile);
    badges.extend(style_badges);

    Resolution {
        text: text.to_string(),
        style,
        variant,
        badges,
        conflicts,
    }
}

fn choose_text<'s>(
    profile: &NeedProfile,
    set: &'s AdaptationSet,
    mode: ViewMode,
) -> (Variant, &'s str) {
    if mode == ViewMode::FullVersion {
        return (Variant::Base, set.base_text());
    }
    if profile.contains(Need::ComprehensionDifficulty) {
        if !set.simplified_text().is_empty() {
            return (Variant::Simplified, set.simplified_text());
        }
        if !set.summary().is_empty() {
            tracing::debug!(
                content_id = set.content_id(),
                "simplified text empty, falling back to summary"
            );
            return (Variant::Summary, set.summary());
        }
    }
    if profile.contains(Need::Dyslexia) && !set.easy_read_text().is_empty() {
        return (Variant::EasyRead, set.easy_read_text());
    }
    (Variant::Base, set.base_text())
}

fn accumulate_style(
    profile: &NeedProfile,
) -> (StyleHints, Vec<AdaptationBadge>, Vec<AdaptationIssue>) {
    let mut style = StyleHints::none();
    let mut badges = Vec::new();
    let mut conflicts = Vec::new();

    if profile.contains(Need::Dyslexia) {
        style.font_family = Some(DYSLEXIA_FONT_STACK.to_string());
        style.letter_spacing_em = Some(DYSLEXIA_LETTER_SPACING_EM);
        style.line_height = Some(DYSLEXIA_LINE_HEIGHT);
        style.palette = Some(Palette::WarmPaper);
        style.align_left = true;
        badges.push(AdaptationBadge::ReadableFont);
        badges.push(AdaptationBadge::WiderSpacing);
    }

    if profile.contains(Need::Adhd) {
        style.focus_ring = true;
        style.timer_control = true;
        badges.push(AdaptationBadge::FocusMode);
    }

    if profile.contains(Need::LowVision) {
        if style.palette.is_some_and(|p| p != Palette::HighContrast) {
            conflicts.push(AdaptationIssue::ProfileConflict {
                winner: Need::LowVision,
                loser: Need::Dyslexia,
                detail: "high-contrast palette replaces the warm background".to_string(),
            });
        }
        style.palette = Some(Palette::HighContrast);
        style.force_high_contrast = true;
        style.min_font_px = Some(LOW_VISION_MIN_FONT_PX);
        style.font_boost_px = LOW_VISION_FONT_BOOST_PX;
        style.font_weight = Some(LOW_VISION_FONT_WEIGHT);
        badges.push(AdaptationBadge::LargerFont);
        badges.push(AdaptationBadge::HighContrast);
    }

    if profile.contains(Need::HearingImpairment) {
        style.transcript_affordance = true;
        badges.push(AdaptationBadge::Transcript);
    }

    (style, badges, conflicts)
}
