//! Teams and partitions.

use super::participant::{Participant, ParticipantId};
use super::role::{RoleCounts, RoleQuotas};

/// An unordered group of participant copies.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub members: Vec<Participant>,
}

impl Team {
    pub fn new(members: Vec<Participant>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.members.iter().map(|m| m.id)
    }

    /// Headcount per role of `quotas`, in table order.
    pub fn role_counts(&self, quotas: &RoleQuotas) -> RoleCounts {
        let mut counts = RoleCounts::zeroed(quotas);
        for member in &self.members {
            counts.add(member.role, 1);
        }
        counts
    }
}

/// An ordered sequence of disjoint teams.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    pub teams: Vec<Team>,
}

impl Partition {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Total members across all teams.
    pub fn member_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    pub fn members(&self) -> impl Iterator<Item = &Participant> {
        self.teams.iter().flat_map(|t| t.members.iter())
    }

    /// Team index holding `id`, if any.
    pub fn team_of(&self, id: ParticipantId) -> Option<usize> {
        self.teams
            .iter()
            .position(|t| t.members.iter().any(|m| m.id == id))
    }

    /// Role headcounts of every team.
    pub fn role_counts(&self, quotas: &RoleQuotas) -> Vec<RoleCounts> {
        self.teams.iter().map(|t| t.role_counts(quotas)).collect()
    }

    /// Sorted member ids per team; a canonical form for comparing partitions.
    pub fn id_sets(&self) -> Vec<Vec<ParticipantId>> {
        self.teams
            .iter()
            .map(|t| {
                let mut ids: Vec<_> = t.ids().collect();
                ids.sort_unstable();
                ids
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn sample() -> Partition {
        Partition::new(vec![
            Team::new(vec![
                Participant::new(3, Role::Frontend),
                Participant::new(1, Role::Design),
            ]),
            Team::new(vec![Participant::new(2, Role::Frontend)]),
        ])
    }

    #[test]
    fn test_team_of() {
        let p = sample();
        assert_eq!(p.team_of(1), Some(0));
        assert_eq!(p.team_of(2), Some(1));
        assert_eq!(p.team_of(9), None);
        assert_eq!(p.member_count(), 3);
    }

    #[test]
    fn test_role_counts_per_team() {
        let counts = sample().role_counts(&RoleQuotas::default());
        assert_eq!(counts[0].get(Role::Frontend), 1);
        assert_eq!(counts[0].get(Role::Design), 1);
        assert_eq!(counts[1].get(Role::Frontend), 1);
        assert_eq!(counts[1].get(Role::Backend), 0);
    }

    #[test]
    fn test_id_sets_sorted() {
        assert_eq!(sample().id_sets(), vec![vec![1, 3], vec![2]]);
    }
}
