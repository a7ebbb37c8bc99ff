//! Learner need profiles
//!
//! A learner declares any number of needs from a closed vocabulary, or the `None` sentinel which
//! excludes all others. The set is kept ordered so every consumer sees needs in the same order.

use crate::adapt::issues::{AdaptationIssue, Outcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One declared accessibility need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Need {
    Dyslexia,
    Adhd,
    LowVision,
    HearingImpairment,
    ComprehensionDifficulty,
    /// Explicitly no needs. Mutually exclusive with every other need.
    None,
}

impl Need {
    pub const ALL: [Need; 6] = [
        Need::Dyslexia,
        Need::Adhd,
        Need::LowVision,
        Need::HearingImpairment,
        Need::ComprehensionDifficulty,
        Need::None,
    ];

    /// Short identifier used by the portal's roster forms.
    pub fn id(self) -> &'static str {
        match self {
            Need::Dyslexia => "dislexia",
            Need::Adhd => "tdah",
            Need::LowVision => "visual",
            Need::HearingImpairment => "auditiva",
            Need::ComprehensionDifficulty => "comprension",
            Need::None => "ninguna",
        }
    }

    /// Learner-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Need::Dyslexia => "Dislexia",
            Need::Adhd => "TDAH",
            Need::LowVision => "Discapacidad Visual",
            Need::HearingImpairment => "Discapacidad Auditiva",
            Need::ComprehensionDifficulty => "Dificultad de Comprensión",
            Need::None => "Ninguna",
        }
    }
}

impl fmt::Display for Need {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a need name is outside the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown need '{0}'")]
pub struct UnknownNeed(pub String);

impl FromStr for Need {
    type Err = UnknownNeed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let need = match key.as_str() {
            "dislexia" | "dyslexia" => Need::Dyslexia,
            "tdah" | "adhd" => Need::Adhd,
            "visual" | "discapacidad visual" | "low-vision" | "lowvision" => Need::LowVision,
            "auditiva" | "discapacidad auditiva" | "hearing-impairment" | "hearingimpairment" => {
                Need::HearingImpairment
            }
            "comprension"
            | "comprensión"
            | "dificultad de comprensión"
            | "dificultad de comprension"
            | "comprehension-difficulty"
            | "comprehensiondifficulty" => Need::ComprehensionDifficulty,
            "ninguna" | "none" => Need::None,
            _ => return Err(UnknownNeed(s.to_string())),
        };
        Ok(need)
    }
}

/// The set of needs declared for one learner.
///
/// Invariant: if `Need::None` is present it is the only member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Need>", into = "Vec<Need>")]
pub struct NeedProfile {
    needs: BTreeSet<Need>,
}

impl NeedProfile {
    /// An empty profile (nothing declared yet).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The explicit "no needs" profile.
    pub fn none() -> Self {
        Self {
            needs: BTreeSet::from([Need::None]),
        }
    }

    /// Build a profile from any list of needs.
    ///
    /// A list mixing `None` with real needs keeps the real needs and reports the conflict.
    pub fn from_needs(needs: impl IntoIterator<Item = Need>) -> Outcome<Self> {
        let mut set: BTreeSet<Need> = needs.into_iter().collect();
        let mut issues = Vec::new();
        if set.contains(&Need::None) && set.len() > 1 {
            set.remove(&Need::None);
            if let Some(first) = set.iter().next().copied() {
                issues.push(AdaptationIssue::ProfileConflict {
                    winner: first,
                    loser: Need::None,
                    detail: "declared needs replace the 'none' sentinel".to_string(),
                });
            }
        }
        Outcome::from_parts(Self { needs: set }, issues)
    }

    /// Parse the portal's stored need strings, skipping entries outside the vocabulary.
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Outcome<Self> {
        let mut issues = Vec::new();
        let mut needs = Vec::new();
        for label in labels {
            match label.parse::<Need>() {
                Ok(need) => needs.push(need),
                Err(err) => {
                    tracing::warn!(%err, "ignoring need outside the vocabulary");
                    issues.push(AdaptationIssue::MalformedInput {
                        content_id: "profile".to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }
        match Self::from_needs(needs) {
            Outcome::Ready(profile) => Outcome::from_parts(profile, issues),
            Outcome::Degraded {
                value,
                issues: more,
            } => {
                issues.extend(more);
                Outcome::from_parts(value, issues)
            }
        }
    }

    /// Flip one need on or off, keeping `None` exclusive.
    pub fn toggle(&mut self, need: Need) {
        if need == Need::None {
            if self.needs.contains(&Need::None) {
                self.needs.clear();
            } else {
                self.needs = BTreeSet::from([Need::None]);
            }
            return;
        }
        if !self.needs.remove(&need) {
            self.needs.remove(&Need::None);
            self.needs.insert(need);
        }
    }

    pub fn contains(&self, need: Need) -> bool {
        self.needs.contains(&need)
    }

    /// True when no adaptation applies (empty or the `None` sentinel).
    pub fn is_unadapted(&self) -> bool {
        self.needs.is_empty() || self.needs.contains(&Need::None)
    }

    pub fn len(&self) -> usize {
        self.needs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.needs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Need> + '_ {
        self.needs.iter().copied()
    }
}

impl TryFrom<Vec<Need>> for NeedProfile {
    type Error = String;

    fn try_from(needs: Vec<Need>) -> Result<Self, Self::Error> {
        let set: BTreeSet<Need> = needs.into_iter().collect();
        if set.contains(&Need::None) && set.len() > 1 {
            return Err("'none' cannot be combined with other needs".to_string());
        }
        Ok(Self { needs: set })
    }
}

impl From<NeedProfile> for Vec<Need> {
    fn from(profile: NeedProfile) -> Self {
        profile.needs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("dislexia", Need::Dyslexia)]
    #[case("Dislexia", Need::Dyslexia)]
    #[case("TDAH", Need::Adhd)]
    #[case("Discapacidad Visual", Need::LowVision)]
    #[case("auditiva", Need::HearingImpairment)]
    #[case("Dificultad de Comprensión", Need::ComprehensionDifficulty)]
    #[case("comprension", Need::ComprehensionDifficulty)]
    #[case("Ninguna", Need::None)]
    #[case("low-vision", Need::LowVision)]
    fn test_parse_portal_labels(#[case] input: &str, #[case] expected: Need) {
        assert_eq!(input.parse::<Need>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_need() {
        assert_eq!(
            "daltonismo".parse::<Need>(),
            Err(UnknownNeed("daltonismo".to_string()))
        );
    }

    #[test]
    fn test_labels_round_trip_through_parse() {
        for need in Need::ALL {
            assert_eq!(need.label().parse::<Need>().unwrap(), need);
            assert_eq!(need.id().parse::<Need>().unwrap(), need);
        }
    }

    #[test]
    fn test_toggle_none_clears_others() {
        let mut profile = NeedProfile::from_needs([Need::Dyslexia, Need::Adhd]).into_value();
        profile.toggle(Need::None);
        assert_eq!(profile, NeedProfile::none());
        profile.toggle(Need::None);
        assert!(profile.is_empty());
    }

    #[test]
    fn test_toggle_need_replaces_none() {
        let mut profile = NeedProfile::none();
        profile.toggle(Need::LowVision);
        assert!(profile.contains(Need::LowVision));
        assert!(!profile.contains(Need::None));
        profile.toggle(Need::LowVision);
        assert!(profile.is_empty());
    }

    #[test]
    fn test_from_needs_drops_none_when_mixed() {
        let outcome = NeedProfile::from_needs([Need::None, Need::Dyslexia]);
        assert!(!outcome.is_ready());
        let profile = outcome.into_value();
        assert_eq!(profile.len(), 1);
        assert!(profile.contains(Need::Dyslexia));
    }

    #[test]
    fn test_from_labels_skips_unknown() {
        let outcome = NeedProfile::from_labels(["Dislexia", "sinestesia"]);
        assert_eq!(outcome.issues().len(), 1);
        assert!(outcome.value().contains(Need::Dyslexia));
    }

    #[test]
    fn test_unadapted() {
        assert!(NeedProfile::empty().is_unadapted());
        assert!(NeedProfile::none().is_unadapted());
        assert!(!NeedProfile::from_needs([Need::Adhd]).into_value().is_unadapted());
    }

    #[test]
    fn test_serde_rejects_none_with_others() {
        let parsed: Result<NeedProfile, _> = serde_json::from_str(r#"["none","dyslexia"]"#);
        assert!(parsed.is_err());
        let parsed: NeedProfile = serde_json::from_str(r#"["adhd","low-vision"]"#).unwrap();
        assert!(parsed.contains(Need::Adhd));
        assert!(parsed.contains(Need::LowVision));
    }
}
