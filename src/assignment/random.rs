//! Random initial assignment.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

use super::template::TeamTemplate;
use crate::error::{Result, TeamingError};
use crate::models::{Participant, Partition, Role, Team};

/// Fills `template` with shuffled copies of `roster` members.
///
/// Members are pooled by role, each pool is shuffled, and teams are filled
/// in order by popping from the pools. Participants whose role the
/// template never asks for are left out. The roster itself is not touched.
///
/// # Errors
///
/// [`TeamingError::InsufficientMembers`] when a pool runs dry before a
/// team's requirement is met, i.e. the template came from another roster.
#[instrument(skip_all, name = "random_assignment", fields(teams = template.team_count()))]
pub fn random_assignment<R: Rng>(
    roster: &[Participant],
    template: &TeamTemplate,
    rng: &mut R,
) -> Result<Partition> {
    // Roles in first-seen template order so shuffling consumes the RNG
    // deterministically.
    let mut roles: Vec<Role> = Vec::new();
    for slot in template.slots() {
        for (role, _) in slot.iter() {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
    }

    let mut pools: HashMap<Role, Vec<&Participant>> =
        roles.iter().map(|&role| (role, Vec::new())).collect();
    for p in roster {
        if let Some(pool) = pools.get_mut(&p.role) {
            pool.push(p);
        }
    }

    for role in &roles {
        if let Some(pool) = pools.get_mut(role) {
            pool.shuffle(rng);
        }
    }

    let mut teams = Vec::with_capacity(template.team_count());
    for (team_idx, slot) in template.slots().iter().enumerate() {
        let mut members = Vec::with_capacity(slot.total());
        for (role, required) in slot.iter() {
            let pool = pools.entry(role).or_default();
            if pool.len() < required {
                return Err(TeamingError::InsufficientMembers {
                    role,
                    team: team_idx,
                    required,
                    available: pool.len(),
                });
            }
            for _ in 0..required {
                if let Some(person) = pool.pop() {
                    members.push(person.clone());
                }
            }
        }
        teams.push(Team::new(members));
    }

    debug!(
        assigned = teams.iter().map(Team::len).sum::<usize>(),
        "random assignment complete"
    );
    Ok(Partition::new(teams))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoleQuotas;
    use crate::random::create_rng;

    fn roster() -> Vec<Participant> {
        let roles = [
            (Role::Pm, 2),
            (Role::Design, 4),
            (Role::Frontend, 8),
            (Role::Backend, 6),
        ];
        let mut out = Vec::new();
        let mut id = 0;
        for (role, n) in roles {
            for _ in 0..n {
                out.push(Participant::new(id, role));
                id += 1;
            }
        }
        out
    }

    #[test]
    fn test_every_member_placed_once() {
        let roster = roster();
        let quotas = RoleQuotas::default();
        let template = TeamTemplate::build(&roster, &quotas, 2).unwrap();
        let mut rng = create_rng(7);

        let partition = random_assignment(&roster, &template, &mut rng).unwrap();

        let mut ids: Vec<_> = partition.members().map(|m| m.id).collect();
        ids.sort_unstable();
        let expected: Vec<_> = (0..20).collect();
        assert_eq!(ids, expected);

        for (team, slot) in partition.teams.iter().zip(template.slots()) {
            let counts = team.role_counts(&quotas);
            for role in Role::ALL {
                assert_eq!(counts.get(role), slot.get(role), "role {role}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_partition() {
        let roster = roster();
        let template = TeamTemplate::build(&roster, &RoleQuotas::default(), 2).unwrap();
        let a = random_assignment(&roster, &template, &mut create_rng(11)).unwrap();
        let b = random_assignment(&roster, &template, &mut create_rng(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stale_template_reports_insufficient_members() {
        let full = roster();
        let template = TeamTemplate::build(&full, &RoleQuotas::default(), 2).unwrap();
        let smaller: Vec<_> = full
            .into_iter()
            .filter(|p| p.role != Role::Backend || p.id < 17)
            .collect();

        let err = random_assignment(&smaller, &template, &mut create_rng(1)).unwrap_err();
        match err {
            TeamingError::InsufficientMembers {
                role,
                team,
                required,
                available,
            } => {
                assert_eq!(role, Role::Backend);
                assert_eq!(team, 1);
                assert_eq!(required, 3);
                assert_eq!(available, 0);
            }
            other => panic!("expected insufficient members, got {other:?}"),
        }
    }

    #[test]
    fn test_roster_untouched() {
        let roster = roster();
        let before = roster.clone();
        let template = TeamTemplate::build(&roster, &RoleQuotas::default(), 2).unwrap();
        let _ = random_assignment(&roster, &template, &mut create_rng(3)).unwrap();
        assert_eq!(roster, before);
    }
}
