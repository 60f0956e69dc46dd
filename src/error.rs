//! Error and warning types.
//!
//! Fatal conditions abort the operation that raised them and surface as
//! [`TeamingError`]. Non-fatal conditions never abort; they are collected as
//! [`MatchWarning`] values and handed back alongside the result.

use thiserror::Error;

use crate::models::{ParticipantId, Role};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TeamingError>;

/// Fatal errors raised by the assignment pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TeamingError {
    /// The requested team count exceeds what a role quota allows.
    #[error(
        "cannot form {requested_teams} teams: role {role} needs {quota} per team \
         but only {available} participants hold it (at most {max_teams} teams)"
    )]
    Capacity {
        role: Role,
        quota: usize,
        available: usize,
        requested_teams: usize,
        max_teams: usize,
    },

    /// A template asked for more members of a role than the roster supplies.
    ///
    /// Indicates the template was built from a different roster.
    #[error(
        "team {team} requires {required} {role} members but only {available} remain in the pool"
    )]
    InsufficientMembers {
        role: Role,
        team: usize,
        required: usize,
        available: usize,
    },

    /// No participant holds a role present in the quota table.
    #[error("roster contains no participant with a configured role")]
    EmptyRoster,

    /// A participant record carries values outside their domain.
    #[error("participant {participant}: {reason}")]
    InvalidParticipant {
        participant: ParticipantId,
        reason: String,
    },

    /// A configuration value was rejected by `validate`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A role name matched no known role.
    #[error("unknown role '{0}'")]
    UnknownRole(String),
}

/// Non-fatal conditions reported to the caller as data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchWarning {
    /// The participant's role is not in the quota table; they were excluded.
    UnrecognizedRole { participant: ParticipantId, role: Role },

    /// A team of size 0 or 1 has no member pairs; its affinity score fell
    /// back to 0.
    DegenerateTeam { team: usize, size: usize },

    /// An interest edge pointed back at its own source and was dropped.
    SelfInterest { participant: ParticipantId },

    /// An interest edge references an id absent from the roster.
    UnknownInterestTarget {
        wagger: ParticipantId,
        waggee: ParticipantId,
    },
}

impl std::fmt::Display for MatchWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchWarning::UnrecognizedRole { participant, role } => write!(
                f,
                "participant {participant} has role {role} outside the quota table and was excluded"
            ),
            MatchWarning::DegenerateTeam { team, size } => {
                write!(f, "team {team} has {size} member(s); affinity scored as 0")
            }
            MatchWarning::SelfInterest { participant } => {
                write!(f, "participant {participant} expressed interest in themselves")
            }
            MatchWarning::UnknownInterestTarget { wagger, waggee } => {
                write!(f, "interest edge {wagger} -> {waggee} references an unknown participant")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_carries_context() {
        let err = TeamingError::Capacity {
            role: Role::Frontend,
            quota: 2,
            available: 8,
            requested_teams: 5,
            max_teams: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("5 teams"), "{msg}");
        assert!(msg.contains("frontend"), "{msg}");
        assert!(msg.contains("at most 4"), "{msg}");
    }

    #[test]
    fn test_insufficient_members_message() {
        let err = TeamingError::InsufficientMembers {
            role: Role::Backend,
            team: 1,
            required: 3,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "team 1 requires 3 backend members but only 1 remain in the pool"
        );
    }

    #[test]
    fn test_warning_display() {
        let w = MatchWarning::DegenerateTeam { team: 2, size: 1 };
        assert_eq!(w.to_string(), "team 2 has 1 member(s); affinity scored as 0");
    }
}
