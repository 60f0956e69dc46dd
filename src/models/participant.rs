//! Participant records.

use super::category::Preferences;
use super::role::Role;
use crate::error::{Result, TeamingError};

/// Stable participant identifier.
pub type ParticipantId = u64;

/// Big Five personality scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BigFive {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

/// MBTI axis scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MbtiAxes {
    pub ei: f64,
    pub sn: f64,
    pub tf: f64,
    pub jp: f64,
}

/// Continuous trait scores. A roster may mix both questionnaires.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Traits {
    BigFive(BigFive),
    Mbti(MbtiAxes),
}

impl Traits {
    /// Neutral Big Five profile (every score 0.5).
    pub fn neutral() -> Self {
        Traits::BigFive(BigFive {
            openness: 0.5,
            conscientiousness: 0.5,
            extraversion: 0.5,
            agreeableness: 0.5,
            neuroticism: 0.5,
        })
    }

    pub fn big_five(&self) -> Option<&BigFive> {
        match self {
            Traits::BigFive(b) => Some(b),
            Traits::Mbti(_) => None,
        }
    }

    fn named_scores(&self) -> Vec<(&'static str, f64)> {
        match self {
            Traits::BigFive(b) => vec![
                ("openness", b.openness),
                ("conscientiousness", b.conscientiousness),
                ("extraversion", b.extraversion),
                ("agreeableness", b.agreeableness),
                ("neuroticism", b.neuroticism),
            ],
            Traits::Mbti(m) => vec![("ei", m.ei), ("sn", m.sn), ("tf", m.tf), ("jp", m.jp)],
        }
    }
}

/// One participant as loaded from the survey.
///
/// Under `serde` the record is flat: preference and trait scores sit next
/// to `id` and `role` rather than in nested objects.
///
/// Records are read-only inputs; teams hold clones, so a swap inside a
/// partition never touches the caller's roster.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub id: ParticipantId,
    #[cfg_attr(feature = "serde", serde(alias = "part"))]
    pub role: Role,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub preferences: Preferences,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub traits: Traits,
}

impl Participant {
    /// Creates a participant with default preferences and neutral traits.
    pub fn new(id: ParticipantId, role: Role) -> Self {
        Self {
            id,
            role,
            preferences: Preferences::default(),
            traits: Traits::neutral(),
        }
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_traits(mut self, traits: Traits) -> Self {
        self.traits = traits;
        self
    }

    /// Checks that every trait score lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.traits.named_scores() {
            if !(0.0..=1.0).contains(&value) {
                return Err(TeamingError::InvalidParticipant {
                    participant: self.id,
                    reason: format!("{name} must be in [0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_neutral() {
        assert!(Participant::new(1, Role::Pm).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_trait() {
        let p = Participant::new(7, Role::Backend).with_traits(Traits::Mbti(MbtiAxes {
            ei: 0.2,
            sn: 1.3,
            tf: 0.5,
            jp: 0.5,
        }));
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("sn"), "{err}");
    }

    #[test]
    fn test_validate_rejects_nan() {
        let p = Participant::new(3, Role::Design).with_traits(Traits::BigFive(BigFive {
            openness: f64::NAN,
            conscientiousness: 0.5,
            extraversion: 0.5,
            agreeableness: 0.5,
            neuroticism: 0.5,
        }));
        assert!(p.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_flat_survey_record() {
        use crate::models::{ActiveHours, MeetingMode, TeamVibe};

        let json = r#"{
            "id": 1, "part": "pm",
            "team_vibe": "learning", "active_hours": "night", "meeting_preference": "offline",
            "openness": 0.73, "conscientiousness": 0.4, "extraversion": 0.5,
            "agreeableness": 0.6, "neuroticism": 0.2
        }"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.role, Role::Pm);
        assert_eq!(p.preferences.team_vibe, TeamVibe::Learning);
        assert_eq!(p.preferences.active_hours, ActiveHours::Night);
        assert_eq!(p.preferences.meeting, MeetingMode::Offline);
        let big_five = p.traits.big_five().unwrap();
        assert_eq!(big_five.openness, 0.73);
        assert_eq!(big_five.neuroticism, 0.2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_flat_mbti_record_round_trip() {
        let p = Participant::new(4, Role::Frontend).with_traits(Traits::Mbti(MbtiAxes {
            ei: 0.1,
            sn: 0.9,
            tf: 0.4,
            jp: 0.6,
        }));
        let value = serde_json::to_value(&p).unwrap();
        assert!(value.get("traits").is_none(), "traits must not nest: {value}");
        assert!(value.get("preferences").is_none(), "{value}");
        assert_eq!(value["ei"], 0.1);
        assert_eq!(value["role"], "frontend");

        let back: Participant = serde_json::from_value(value).unwrap();
        assert_eq!(back, p);
    }
}
