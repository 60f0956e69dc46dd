//! Directed interest ("wagging") edges and their aggregated graph.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use super::participant::{Participant, ParticipantId};
use crate::error::MatchWarning;

/// `wagger` expressed interest in `waggee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffinityEdge {
    pub wagger: ParticipantId,
    pub waggee: ParticipantId,
}

impl AffinityEdge {
    pub fn new(wagger: ParticipantId, waggee: ParticipantId) -> Self {
        Self { wagger, waggee }
    }
}

/// Mapping from each participant to the set of participants they are
/// interested in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterestGraph {
    targets: HashMap<ParticipantId, HashSet<ParticipantId>>,
    edge_count: usize,
}

impl InterestGraph {
    /// Aggregates edges; duplicate edges collapse and self-loops are dropped.
    pub fn from_edges(edges: &[AffinityEdge]) -> Self {
        Self::from_edges_checked(edges, None).0
    }

    /// Like [`from_edges`](Self::from_edges), additionally reporting
    /// self-loops and, when a roster is given, endpoints missing from it.
    pub fn from_edges_checked(
        edges: &[AffinityEdge],
        roster: Option<&[Participant]>,
    ) -> (Self, Vec<MatchWarning>) {
        let known: Option<HashSet<ParticipantId>> =
            roster.map(|r| r.iter().map(|p| p.id).collect());
        let mut graph = Self::default();
        let mut warnings = Vec::new();

        for edge in edges {
            if edge.wagger == edge.waggee {
                warn!(participant = edge.wagger, "dropping self-interest edge");
                warnings.push(MatchWarning::SelfInterest {
                    participant: edge.wagger,
                });
                continue;
            }
            if let Some(ids) = &known {
                if !ids.contains(&edge.wagger) || !ids.contains(&edge.waggee) {
                    warn!(
                        wagger = edge.wagger,
                        waggee = edge.waggee,
                        "interest edge references unknown participant"
                    );
                    warnings.push(MatchWarning::UnknownInterestTarget {
                        wagger: edge.wagger,
                        waggee: edge.waggee,
                    });
                }
            }
            if graph
                .targets
                .entry(edge.wagger)
                .or_default()
                .insert(edge.waggee)
            {
                graph.edge_count += 1;
            }
        }

        (graph, warnings)
    }

    /// Whether `from` expressed interest in `to`.
    pub fn expresses(&self, from: ParticipantId, to: ParticipantId) -> bool {
        self.targets
            .get(&from)
            .is_some_and(|set| set.contains(&to))
    }

    /// Everyone `from` expressed interest in.
    pub fn targets_of(&self, from: ParticipantId) -> impl Iterator<Item = ParticipantId> + '_ {
        self.targets.get(&from).into_iter().flatten().copied()
    }

    /// Number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}
