//! Role-preserving swap neighborhood.
//!
//! A move exchanges two members of the same role between two different
//! teams, so every team keeps its per-role headcount and the partition
//! stays valid against the template it was built from.

use rand::Rng;
use tracing::trace;

use crate::models::{Participant, Partition};

/// Default number of sampling attempts before giving up on a swap.
pub const DEFAULT_SWAP_ATTEMPTS: usize = 200;

/// A completed swap: `(team, position)` of each exchanged member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapMove {
    pub first: (usize, usize),
    pub second: (usize, usize),
}

/// Swaps two same-role members of different teams in place.
///
/// Samples up to `max_attempts` random (team, member) pairs. Returns the
/// move on success, `None` when no same-role pair was hit (fewer than two
/// teams, or a configuration where no cross-team same-role pair exists).
pub fn swap_same_role<R: Rng>(
    partition: &mut Partition,
    max_attempts: usize,
    rng: &mut R,
) -> Option<SwapMove> {
    let team_count = partition.teams.len();
    if team_count < 2 || partition.member_count() < 2 {
        return None;
    }

    for _ in 0..max_attempts {
        let a = rng.random_range(0..team_count);
        let mut b = rng.random_range(0..team_count - 1);
        if b >= a {
            b += 1;
        }

        let len_a = partition.teams[a].len();
        let len_b = partition.teams[b].len();
        if len_a == 0 || len_b == 0 {
            continue;
        }

        let i = rng.random_range(0..len_a);
        let j = rng.random_range(0..len_b);
        if partition.teams[a].members[i].role != partition.teams[b].members[j].role {
            continue;
        }

        let (left, right) = two_mut(&mut partition.teams, a, b);
        std::mem::swap(&mut left.members[i], &mut right.members[j]);
        trace!(team_a = a, team_b = b, "swapped same-role members");
        return Some(SwapMove {
            first: (a, i),
            second: (b, j),
        });
    }

    None
}

/// Returns a swapped copy of `partition`; the input is never aliased.
///
/// When no swap is found within `max_attempts`, the copy is returned
/// unchanged.
pub fn neighbor<R: Rng>(partition: &Partition, max_attempts: usize, rng: &mut R) -> Partition {
    let mut next = partition.clone();
    swap_same_role(&mut next, max_attempts, rng);
    next
}

fn two_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

/// Member at `(team, position)`.
pub fn member_at(partition: &Partition, at: (usize, usize)) -> Option<&Participant> {
    partition.teams.get(at.0)?.members.get(at.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, RoleQuotas, Team};
    use crate::random::create_rng;

    fn two_teams() -> Partition {
        Partition::new(vec![
            Team::new(vec![
                Participant::new(1, Role::Frontend),
                Participant::new(2, Role::Backend),
                Participant::new(3, Role::Design),
            ]),
            Team::new(vec![
                Participant::new(4, Role::Frontend),
                Participant::new(5, Role::Backend),
                Participant::new(6, Role::Design),
            ]),
        ])
    }

    #[test]
    fn test_swap_preserves_role_counts() {
        let quotas = RoleQuotas::default();
        let original = two_teams();
        let mut rng = create_rng(42);

        for _ in 0..50 {
            let next = neighbor(&original, DEFAULT_SWAP_ATTEMPTS, &mut rng);
            assert_eq!(next.role_counts(&quotas), original.role_counts(&quotas));
            assert_eq!(next.member_count(), original.member_count());
        }
    }

    #[test]
    fn test_swap_moves_members_across_teams() {
        let mut p = two_teams();
        let mv = swap_same_role(&mut p, DEFAULT_SWAP_ATTEMPTS, &mut create_rng(5))
            .expect("three same-role pairs exist");
        assert_ne!(mv.first.0, mv.second.0);
        let a = member_at(&p, mv.first).unwrap();
        let b = member_at(&p, mv.second).unwrap();
        assert_eq!(a.role, b.role);
        assert_ne!(p.id_sets(), two_teams().id_sets());
    }

    #[test]
    fn test_input_not_mutated() {
        let original = two_teams();
        let _ = neighbor(&original, DEFAULT_SWAP_ATTEMPTS, &mut create_rng(9));
        assert_eq!(original, two_teams());
    }

    #[test]
    fn test_single_team_returns_copy() {
        let p = Partition::new(vec![two_teams().teams[0].clone()]);
        let next = neighbor(&p, DEFAULT_SWAP_ATTEMPTS, &mut create_rng(1));
        assert_eq!(next, p);
    }

    #[test]
    fn test_no_shared_roles_gives_up() {
        let mut p = Partition::new(vec![
            Team::new(vec![Participant::new(1, Role::Pm)]),
            Team::new(vec![Participant::new(2, Role::Design)]),
        ]);
        assert_eq!(swap_same_role(&mut p, 50, &mut create_rng(2)), None);
    }
}
