//! Interest-graph ("wagging") affinity scoring.
//!
//! Both queries read the same [`InterestGraph`]:
//!
//! - [`team_affinity`]: pairwise aggregate per team. Each unordered member
//!   pair contributes 2 when interest is mutual, 1 when one-directional.
//!   The score is that total as a percentage of the maximum (every pair
//!   mutual), rounded to two decimals, so it lies in `[0, 100]`.
//! - [`member_affinity`]: per participant, how many teammates they picked
//!   and how many teammates picked them.

use crate::models::{InterestGraph, ParticipantId, Team};

/// Pair statistics of one team.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamAffinity {
    /// Pairs with interest in exactly one direction.
    pub one_way: usize,
    /// Pairs with mutual interest.
    pub mutual: usize,
    /// Unordered member pairs, `n * (n - 1) / 2`.
    pub pairs: usize,
    /// Percentage score in `[0, 100]`; 0 for teams with fewer than two members.
    pub score: f64,
}

impl TeamAffinity {
    /// Whether the team has no member pairs and the score is a fallback.
    pub fn is_degenerate(&self) -> bool {
        self.pairs == 0
    }
}

/// Scores one team against `graph`.
///
/// # Examples
///
/// ```
/// use u_teaming::models::{AffinityEdge, InterestGraph, Participant, Role, Team};
/// use u_teaming::scoring::team_affinity;
///
/// let graph = InterestGraph::from_edges(&[AffinityEdge::new(1, 2), AffinityEdge::new(2, 1)]);
/// let team = Team::new(vec![Participant::new(1, Role::Pm), Participant::new(2, Role::Design)]);
/// assert_eq!(team_affinity(&graph, &team).score, 100.0);
/// ```
pub fn team_affinity(graph: &InterestGraph, team: &Team) -> TeamAffinity {
    let ids: Vec<ParticipantId> = team.ids().collect();
    let n = ids.len();
    let pairs = n * n.saturating_sub(1) / 2;

    let mut one_way = 0;
    let mut mutual = 0;
    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            match (graph.expresses(a, b), graph.expresses(b, a)) {
                (true, true) => mutual += 1,
                (true, false) | (false, true) => one_way += 1,
                (false, false) => {}
            }
        }
    }

    let score = if pairs == 0 {
        0.0
    } else {
        let raw = 100.0 * (one_way + 2 * mutual) as f64 / (2 * pairs) as f64;
        round2(raw)
    };

    TeamAffinity {
        one_way,
        mutual,
        pairs,
        score,
    }
}

/// Scores every team, in order.
pub fn team_affinities(graph: &InterestGraph, teams: &[Team]) -> Vec<TeamAffinity> {
    teams.iter().map(|t| team_affinity(graph, t)).collect()
}

/// One participant's interest links inside their team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberAffinity {
    pub id: ParticipantId,
    /// Teammates this participant expressed interest in.
    pub sent: usize,
    /// Teammates who expressed interest in this participant.
    pub received: usize,
}

/// Per-member interest counts for `team`, in member order.
pub fn member_affinity(graph: &InterestGraph, team: &Team) -> Vec<MemberAffinity> {
    team.members
        .iter()
        .map(|me| {
            let mut sent = 0;
            let mut received = 0;
            for other in team.members.iter().filter(|o| o.id != me.id) {
                if graph.expresses(me.id, other.id) {
                    sent += 1;
                }
                if graph.expresses(other.id, me.id) {
                    received += 1;
                }
            }
            MemberAffinity {
                id: me.id,
                sent,
                received,
            }
        })
        .collect()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
