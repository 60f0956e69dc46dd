//! Criterion benchmarks for team scoring and the full match pipeline.
//!
//! Rosters are synthetic: preferences and interest edges are derived from
//! participant ids so every run sees the same input.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_teaming::assignment::{random_assignment, TeamTemplate};
use u_teaming::matcher::{MatchConfig, TeamMatcher};
use u_teaming::models::{
    ActiveHours, AffinityEdge, InterestGraph, MeetingMode, Participant, Preferences, Role,
    RoleQuotas, TeamVibe,
};
use u_teaming::random::create_rng;
use u_teaming::sa::SaConfig;
use u_teaming::scoring::{CategoryScoring, CostWeights, Evaluator};

// ===========================================================================
// Synthetic rosters
// ===========================================================================

fn roster(n: u64) -> Vec<Participant> {
    (0..n)
        .map(|id| {
            let role = match id % 10 {
                0 => Role::Pm,
                1 | 2 => Role::Design,
                3..=6 => Role::Frontend,
                _ => Role::Backend,
            };
            let vibe = if id % 3 == 0 {
                TeamVibe::Professional
            } else {
                TeamVibe::Learning
            };
            let hours = if id % 4 < 2 {
                ActiveHours::Day
            } else {
                ActiveHours::Night
            };
            let meeting = if id % 5 == 0 {
                MeetingMode::Offline
            } else {
                MeetingMode::Online
            };
            Participant::new(id, role).with_preferences(Preferences::new(vibe, hours, meeting))
        })
        .collect()
}

fn edges(n: u64) -> Vec<AffinityEdge> {
    (0..n)
        .flat_map(|id| {
            [
                AffinityEdge::new(id, (id + 7) % n),
                AffinityEdge::new(id, (id * 13 + 1) % n),
            ]
        })
        .filter(|e| e.wagger != e.waggee)
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &n in &[20u64, 100, 400] {
        let roster = roster(n);
        let quotas = RoleQuotas::default();
        let template = TeamTemplate::build(&roster, &quotas, (n / 10) as usize)
            .expect("synthetic roster is feasible");
        let mut rng = create_rng(42);
        let partition =
            random_assignment(&roster, &template, &mut rng).expect("template matches roster");
        let evaluator = Evaluator::for_partition(
            &partition,
            InterestGraph::from_edges(&edges(n)),
            &CategoryScoring::default(),
            CostWeights::default(),
        );
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(evaluator, partition),
            |b, (e, p)| b.iter(|| black_box(e.evaluate(black_box(p)))),
        );
    }
    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("team_match");
    group.sample_size(10);

    for &n in &[20u64, 100] {
        let roster = roster(n);
        let edges = edges(n);
        let matcher = TeamMatcher::new(
            MatchConfig::default()
                .with_team_count((n / 10) as usize)
                .with_annealing(SaConfig::default().with_max_iterations(2_000))
                .with_seed(42),
        );
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(matcher, roster, edges),
            |b, (m, r, e)| {
                b.iter(|| {
                    let outcome = m.run(black_box(r), black_box(e));
                    black_box(outcome)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_match);
criterion_main!(benches);
