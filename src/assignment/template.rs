//! Team template construction.
//!
//! # Algorithm
//!
//! 1. Tally holders of each quota role; participants whose role is not in
//!    the table are excluded and reported.
//! 2. Feasibility: for every role with a positive quota `q` and `n`
//!    holders, the team count `K` must satisfy `K <= n / q`.
//! 3. Base allocation `n / K` per team; the `n % K` remainder units are
//!    dealt one per team, round-robin, continuing across roles in table
//!    order and starting at team 0.

use tracing::{debug, instrument, warn};

use crate::error::{MatchWarning, Result, TeamingError};
use crate::models::{Participant, ParticipantId, Role, RoleCounts, RoleQuotas};

/// Role headcounts of a roster, split into configured and excluded holders.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleCensus {
    /// Holders per configured role, in quota-table order.
    pub totals: RoleCounts,
    /// Participants whose role is outside the quota table.
    pub excluded: Vec<(ParticipantId, Role)>,
}

impl RoleCensus {
    /// Counts `roster` against `quotas`.
    pub fn tally(roster: &[Participant], quotas: &RoleQuotas) -> Self {
        let mut totals = RoleCounts::zeroed(quotas);
        let mut excluded = Vec::new();
        for p in roster {
            if quotas.contains(p.role) {
                totals.add(p.role, 1);
            } else {
                warn!(participant = p.id, role = %p.role, "role outside quota table; excluding participant");
                excluded.push((p.id, p.role));
            }
        }
        Self { totals, excluded }
    }

    /// One [`MatchWarning::UnrecognizedRole`] per excluded participant.
    pub fn warnings(&self) -> Vec<MatchWarning> {
        self.excluded
            .iter()
            .map(|&(participant, role)| MatchWarning::UnrecognizedRole { participant, role })
            .collect()
    }

    /// Largest team count every positive quota can support.
    ///
    /// `None` when no role has a positive quota (unbounded).
    pub fn max_teams(&self, quotas: &RoleQuotas) -> Option<usize> {
        quotas
            .iter()
            .filter(|&(_, min)| min > 0)
            .map(|(role, min)| self.totals.get(role) / min)
            .min()
    }
}

/// Required headcount per role for each of `K` teams.
///
/// Invariant: summing any role across all slots gives the number of roster
/// members holding that role.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamTemplate {
    slots: Vec<RoleCounts>,
}

impl TeamTemplate {
    /// Builds the template for `team_count` teams.
    ///
    /// # Errors
    ///
    /// - [`TeamingError::InvalidConfig`] if `team_count` is 0 or the quota
    ///   table is empty.
    /// - [`TeamingError::Capacity`] if some role cannot give every team its
    ///   minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_teaming::assignment::TeamTemplate;
    /// use u_teaming::models::{Participant, Role, RoleQuotas};
    ///
    /// let roster: Vec<_> = (0..6)
    ///     .map(|i| Participant::new(i, if i < 2 { Role::Design } else { Role::Frontend }))
    ///     .collect();
    /// let quotas = RoleQuotas::new().with_quota(Role::Design, 1).with_quota(Role::Frontend, 2);
    /// let template = TeamTemplate::build(&roster, &quotas, 2).unwrap();
    /// assert_eq!(template.slot(0).get(Role::Frontend), 2);
    /// ```
    pub fn build(roster: &[Participant], quotas: &RoleQuotas, team_count: usize) -> Result<Self> {
        let census = RoleCensus::tally(roster, quotas);
        Self::from_census(&census, quotas, team_count)
    }

    /// Builds the template from a precomputed census.
    #[instrument(skip_all, name = "team_template", fields(team_count = team_count))]
    pub fn from_census(census: &RoleCensus, quotas: &RoleQuotas, team_count: usize) -> Result<Self> {
        quotas.validate()?;
        if team_count == 0 {
            return Err(TeamingError::InvalidConfig(
                "team_count must be positive".into(),
            ));
        }

        if let Some(max_teams) = census.max_teams(quotas) {
            if team_count > max_teams {
                // Report the scarcest role.
                let (role, quota) = quotas
                    .iter()
                    .filter(|&(_, min)| min > 0)
                    .min_by_key(|&(role, min)| census.totals.get(role) / min)
                    .unwrap_or((Role::Pm, 0));
                return Err(TeamingError::Capacity {
                    role,
                    quota,
                    available: census.totals.get(role),
                    requested_teams: team_count,
                    max_teams,
                });
            }
        }

        let mut slots: Vec<RoleCounts> = (0..team_count)
            .map(|_| {
                RoleCounts::from_pairs(
                    quotas
                        .roles()
                        .map(|role| (role, census.totals.get(role) / team_count)),
                )
            })
            .collect();

        let mut team_idx = 0;
        for role in quotas.roles() {
            let leftover = census.totals.get(role) % team_count;
            for _ in 0..leftover {
                slots[team_idx].add(role, 1);
                team_idx = (team_idx + 1) % team_count;
            }
        }

        debug!(
            teams = team_count,
            members = census.totals.total(),
            "team template built"
        );
        Ok(Self { slots })
    }

    /// Number of teams.
    pub fn team_count(&self) -> usize {
        self.slots.len()
    }

    /// Required counts for team `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= team_count()`.
    pub fn slot(&self, index: usize) -> &RoleCounts {
        &self.slots[index]
    }

    pub fn slots(&self) -> &[RoleCounts] {
        &self.slots
    }

    /// Sum of `role` across every team.
    pub fn role_total(&self, role: Role) -> usize {
        self.slots.iter().map(|s| s.get(role)).sum()
    }
}
