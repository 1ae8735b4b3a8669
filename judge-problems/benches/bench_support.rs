//! Deterministic input generation for evaluator benchmarks.
//!
//! Every generator returns a testcase text and a matching, feasible
//! submission text so that the benchmarks measure a full accepted grading.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Number of options in generated car sequencing instances.
const OPTION_COUNT: usize = 5;

/// Number of car types in generated car sequencing instances.
const TYPE_COUNT: usize = 12;

/// Side of the square TSP points are scattered over.
const AREA_SIZE: f64 = 1_000.0;

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate a car sequencing testcase with `cars` cars and a shuffled,
/// count-respecting sequence.
///
/// The submission claims zero violations, so grading ends with a consistency
/// rejection after the full violation count has run.
#[must_use]
pub fn car_sequencing_inputs(cars: usize, seed: u64) -> (String, String) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let capacities: Vec<usize> = (0..OPTION_COUNT).map(|_| rng.gen_range(1..=3)).collect();
    let sizes: Vec<usize> = capacities
        .iter()
        .map(|&capacity| capacity + rng.gen_range(1..=4))
        .collect();

    let mut counts = vec![0_usize; TYPE_COUNT];
    for _ in 0..cars {
        if let Some(count) = counts.get_mut(rng.gen_range(0..TYPE_COUNT)) {
            *count += 1;
        }
    }

    let mut lines = vec![
        format!("{cars} {OPTION_COUNT} {TYPE_COUNT}"),
        join(&capacities),
        join(&sizes),
    ];
    for (id, count) in counts.iter().enumerate() {
        let flags: Vec<u8> = (0..OPTION_COUNT).map(|_| u8::from(rng.gen_bool(0.3))).collect();
        lines.push(format!("{id} {count} {}", join(&flags)));
    }

    let mut sequence: Vec<usize> = counts
        .iter()
        .enumerate()
        .flat_map(|(id, &count)| std::iter::repeat_n(id, count))
        .collect();
    sequence.shuffle(&mut rng);

    (lines.join("\n"), format!("0\n{}\n", join(&sequence)))
}

/// Generate a TSP testcase with `points` scattered points and a shuffled
/// route visiting each once.
#[must_use]
pub fn tsp_inputs(points: usize, seed: u64) -> (String, String) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut lines = vec![points.to_string()];
    lines.extend((0..points).map(|_| {
        format!(
            "{} {}",
            rng.gen_range(0.0..AREA_SIZE),
            rng.gen_range(0.0..AREA_SIZE)
        )
    }));

    let mut route: Vec<usize> = (1..=points).collect();
    route.shuffle(&mut rng);

    (lines.join("\n"), format!("0\n{}\n", join(&route)))
}
