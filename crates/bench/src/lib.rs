use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

const PROJECT_PREFIXES: [&str; 6] = ["BTY", "LIU", "GEN", "Mx", "lab", "QC"];

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the runtime preset for an input of `size` rows.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 4096 {
        apply_small_runtime_config(group);
    } else if size <= 65536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Alphanumeric identifier such as `BTY659A2081`: prefix, number, letter,
/// number.
pub fn random_identifier<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = PROJECT_PREFIXES[rng.random_range(0..PROJECT_PREFIXES.len())];
    let letter = char::from(b'A' + rng.random_range(0..26_u8));
    format!(
        "{prefix}{}{letter}{}",
        rng.random_range(0..1000_u32),
        rng.random_range(0..10_000_u32)
    )
}

/// Sample-sheet style comma-delimited rows:
/// `ID,Name,Plate,Well,Project`, with `distinct_projects` project values.
pub fn random_sample_sheet<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    distinct_projects: u32,
) -> Vec<String> {
    let distinct_projects = distinct_projects.max(1);
    (0..rows)
        .map(|i| {
            let prefix = PROJECT_PREFIXES[rng.random_range(0..2)];
            format!(
                "2-{},{},27-{},{}:{:02},{prefix}{}",
                536_000 + i,
                random_identifier(rng),
                rng.random_range(116_000..117_000_u32),
                rng.random_range(1..13_u32),
                rng.random_range(1..9_u32),
                200 + rng.random_range(0..distinct_projects),
            )
        })
        .collect()
}
