//! End-to-end scenarios: generate a set from source content, resolve it for different viewers
//! and drive their presentation and playback state.

use eduadapt_core::adapt::adaptation::Variants;
use eduadapt_core::adapt::playback::{
    EngineEvent, Language, Utterance, UtteranceId, Voice, VoiceHint, VoiceId,
};
use eduadapt_core::adapt::styling::Palette;
use eduadapt_core::{
    resolve, AdaptationIssue, AdaptationSet, GenerationOptions, Need, NeedProfile,
    PlaybackSession, PlaybackStatus, PresentationState, SourceContent, SourceFormat,
    SpeechEngine, SpeechOptions, Variant, ViewMode, ViewerRole, ViewerSession,
};
use proptest::prelude::*;
use rstest::rstest;
use std::sync::Arc;

const CLASSROOM: &str = "Utilizar el cuaderno. Vamos a comenzar ahora. Realizar todos los ejercicios. Finalizar antes de las 10.";

/// Engine that accepts everything and only counts utterances.
#[derive(Debug, Default)]
struct SilentEngine {
    spoken: u64,
    voices: Vec<Voice>,
}

impl SilentEngine {
    fn spanish() -> Self {
        Self {
            spoken: 0,
            voices: vec![Voice {
                id: VoiceId("es".into()),
                name: "Lucía".into(),
                language: Language::new("es-ES"),
            }],
        }
    }
}

impl SpeechEngine for SilentEngine {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&mut self, _utterance: Utterance) -> UtteranceId {
        self.spoken += 1;
        UtteranceId(self.spoken)
    }

    fn cancel(&mut self, _id: UtteranceId) {}

    fn pause(&mut self, _id: UtteranceId) {}

    fn resume(&mut self, _id: UtteranceId) {}
}

fn classroom_set() -> Arc<AdaptationSet> {
    let content = SourceContent::text("c1", "Normas de clase", CLASSROOM);
    Arc::new(AdaptationSet::generate(&content, &GenerationOptions::default()).into_value())
}

fn profile(needs: &[Need]) -> NeedProfile {
    NeedProfile::from_needs(needs.iter().copied()).into_value()
}

fn need_strategy() -> impl Strategy<Value = Need> {
    prop::sample::select(Need::ALL.to_vec())
}

#[test]
fn classroom_rules_are_simplified() {
    let set = classroom_set();
    assert_eq!(
        set.simplified_text(),
        "Usar el cuaderno. Vamos a empezar ahora. Hacer todos los ejercicios. Terminar antes de las 10."
    );
}

#[test]
fn comprehension_profile_gets_simplified_text_unstyled() {
    let set = AdaptationSet::from_variants(
        "c2",
        "Tema",
        SourceFormat::Text,
        Variants {
            base_text: "A. B. C.".into(),
            simplified_text: "• A. • B.".into(),
            ..Variants::default()
        },
    );
    let res = resolve(
        &profile(&[Need::ComprehensionDifficulty]),
        &set,
        ViewerRole::Student,
    );
    assert_eq!(res.text, "• A. • B.");
    assert!(res.style.is_empty());
    assert_eq!(res.variant, Variant::Simplified);
}

#[rstest]
#[case(&[Need::Dyslexia], Variant::EasyRead)]
#[case(&[Need::ComprehensionDifficulty], Variant::Simplified)]
#[case(&[Need::Adhd], Variant::Base)]
#[case(&[Need::LowVision], Variant::Base)]
#[case(&[Need::HearingImpairment], Variant::Base)]
#[case(&[Need::None], Variant::Base)]
#[case(&[], Variant::Base)]
fn student_variant_by_need(#[case] needs: &[Need], #[case] expected: Variant) {
    let res = resolve(&profile(needs), &classroom_set(), ViewerRole::Student);
    assert_eq!(res.variant, expected);
}

#[test]
fn mixed_none_profile_is_reported() {
    let outcome = NeedProfile::from_needs([Need::None, Need::Adhd]);
    assert!(matches!(
        outcome.issues(),
        [AdaptationIssue::ProfileConflict { .. }]
    ));
    assert!(outcome.value().contains(Need::Adhd));
    assert!(!outcome.value().contains(Need::None));
}

#[test]
fn pause_when_stopped_is_a_noop() {
    let mut session = PlaybackSession::new(SilentEngine::spanish(), SpeechOptions::default());
    assert_eq!(session.pause(), PlaybackStatus::Stopped);
    assert_eq!(session.status(), PlaybackStatus::Stopped);
}

#[test]
fn reading_aloud_with_foreign_hint_falls_back() {
    let mut session = PlaybackSession::new(SilentEngine::spanish(), SpeechOptions::default());
    let hint = VoiceHint {
        language: Language::new("fr-FR"),
        rate: 1.0,
    };
    let outcome = session.start("Bonjour.", Some(&hint));
    assert_eq!(*outcome.value(), PlaybackStatus::Playing);
    assert!(matches!(
        outcome.issues(),
        [AdaptationIssue::UnsupportedVoice { requested, .. }] if requested == "fr-FR"
    ));
    assert_eq!(
        session.handle_event(EngineEvent::Finished(UtteranceId(1))),
        PlaybackStatus::Stopped
    );
}

#[test]
fn student_session_full_version_round_trip() {
    let mut viewer = ViewerSession::open(
        classroom_set(),
        profile(&[Need::ComprehensionDifficulty, Need::LowVision]),
        ViewerRole::Student,
        PresentationState::default(),
        PlaybackSession::new(SilentEngine::spanish(), SpeechOptions::default()),
    );
    assert!(viewer.text().starts_with("Usar"));
    viewer.read_aloud(None);

    assert_eq!(viewer.toggle_full_version(), ViewMode::FullVersion);
    assert_eq!(viewer.text(), CLASSROOM);
    assert_eq!(viewer.playback().status(), PlaybackStatus::Stopped);

    let style = viewer.view_style();
    assert_eq!(style.background.as_deref(), Some(Palette::HighContrast.background()));
    assert!(style.font_size_px >= 20);

    assert_eq!(viewer.toggle_full_version(), ViewMode::Adapted);
    assert!(viewer.text().starts_with("Usar"));
}

#[test]
fn opening_a_viewer_silences_another_material() {
    let mut playback = PlaybackSession::new(SilentEngine::spanish(), SpeechOptions::default());
    playback.start("texto de otro material", None);

    let mut viewer = ViewerSession::open(
        classroom_set(),
        profile(&[Need::ComprehensionDifficulty]),
        ViewerRole::Student,
        PresentationState::default(),
        playback,
    );
    assert_eq!(viewer.playback().current_text(), None);
    assert_eq!(viewer.presentation().playback_status(), PlaybackStatus::Stopped);

    viewer.read_aloud(None);
    viewer.presentation_mut().increase_font();
    viewer.presentation_mut().toggle_high_contrast();
    assert_eq!(viewer.presentation().view_mode(), ViewMode::Adapted);
    assert_eq!(viewer.playback().current_text(), Some(viewer.text()));
    assert_eq!(viewer.presentation().playback_status(), PlaybackStatus::Playing);
}

proptest! {
    #[test]
    fn teacher_always_reads_base_text(needs in prop::collection::vec(need_strategy(), 0..6)) {
        let set = classroom_set();
        let res = resolve(&profile(&needs), &set, ViewerRole::Teacher);
        prop_assert_eq!(res.text.as_str(), set.base_text());
        prop_assert!(res.style.is_empty());
    }

    #[test]
    fn low_vision_background_beats_dyslexia(extra in prop::collection::vec(need_strategy(), 0..6)) {
        let mut needs = vec![Need::LowVision, Need::Dyslexia];
        needs.extend(extra.into_iter().filter(|n| *n != Need::None));
        let res = resolve(&profile(&needs), &classroom_set(), ViewerRole::Student);
        prop_assert_eq!(res.style.palette, Some(Palette::HighContrast));
        prop_assert!(res.style.force_high_contrast);
    }
}
