//! Two-valued categorical preferences.
//!
//! Every category has a closed domain of exactly two values. Scoring code
//! works on the uniform [`Choice`] view; records carry the typed enums.

use std::fmt;

/// A categorical preference dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    TeamVibe,
    ActiveHours,
    MeetingPreference,
}

impl Category {
    /// All categories in fixed enumeration order.
    pub const ALL: [Category; 3] = [
        Category::TeamVibe,
        Category::ActiveHours,
        Category::MeetingPreference,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// The two value labels of this category, in enumeration order.
    pub fn domain(self) -> [&'static str; 2] {
        match self {
            Category::TeamVibe => ["learning", "professional"],
            Category::ActiveHours => ["day", "night"],
            Category::MeetingPreference => ["online", "offline"],
        }
    }

    /// Label of `choice` within this category.
    pub fn label(self, choice: Choice) -> &'static str {
        self.domain()[choice.index()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::TeamVibe => "team_vibe",
            Category::ActiveHours => "active_hours",
            Category::MeetingPreference => "meeting_preference",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a value within its category's two-valued domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Choice {
    First,
    Second,
}

impl Choice {
    pub const BOTH: [Choice; 2] = [Choice::First, Choice::Second];

    pub fn index(self) -> usize {
        match self {
            Choice::First => 0,
            Choice::Second => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TeamVibe {
    Learning,
    Professional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActiveHours {
    Day,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MeetingMode {
    Online,
    Offline,
}

/// A participant's answers to every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    pub team_vibe: TeamVibe,
    pub active_hours: ActiveHours,
    #[cfg_attr(feature = "serde", serde(rename = "meeting_preference"))]
    pub meeting: MeetingMode,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            team_vibe: TeamVibe::Learning,
            active_hours: ActiveHours::Day,
            meeting: MeetingMode::Online,
        }
    }
}

impl Preferences {
    pub fn new(team_vibe: TeamVibe, active_hours: ActiveHours, meeting: MeetingMode) -> Self {
        Self {
            team_vibe,
            active_hours,
            meeting,
        }
    }

    /// The chosen value for `category`.
    pub fn choice(&self, category: Category) -> Choice {
        match category {
            Category::TeamVibe => match self.team_vibe {
                TeamVibe::Learning => Choice::First,
                TeamVibe::Professional => Choice::Second,
            },
            Category::ActiveHours => match self.active_hours {
                ActiveHours::Day => Choice::First,
                ActiveHours::Night => Choice::Second,
            },
            Category::MeetingPreference => match self.meeting {
                MeetingMode::Online => Choice::First,
                MeetingMode::Offline => Choice::Second,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_matches_domain_order() {
        let prefs = Preferences::new(TeamVibe::Professional, ActiveHours::Day, MeetingMode::Offline);
        assert_eq!(prefs.choice(Category::TeamVibe), Choice::Second);
        assert_eq!(prefs.choice(Category::ActiveHours), Choice::First);
        assert_eq!(
            Category::MeetingPreference.label(prefs.choice(Category::MeetingPreference)),
            "offline"
        );
    }

    #[test]
    fn test_every_category_has_two_labels() {
        for category in Category::ALL {
            let [a, b] = category.domain();
            assert_ne!(a, b, "{category} has duplicate labels");
        }
    }
}
