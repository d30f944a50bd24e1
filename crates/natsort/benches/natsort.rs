use std::hint::black_box;
use std::time::Duration;

use bench::{apply_runtime_for_size, default_rng, random_identifier, random_sample_sheet};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use natsort::{SortOptions, SortSpec, quicksort, sort_by_natural_key, sort_lines};
use rand::Rng;

const BENCH_SIZES: [usize; 3] = [1024, 16384, 131072];
const PROJECT_COUNTS: [u32; 2] = [4, 512];
const CASCADE_SPECS: [(&str, &str); 3] = [
    ("one_level", "4"),
    ("project_cascade", "4:0,4:1,1:3"),
    ("plate_then_name", "2:0,1:1,0:0"),
];

fn bench_cascade(c: &mut Criterion) {
    for &projects in &PROJECT_COUNTS {
        for &(label, spec_text) in &CASCADE_SPECS {
            let spec: SortSpec = spec_text.parse().expect("bench spec parses");
            let mut group = c.benchmark_group(format!("cascade/projects_{projects}/{label}"));

            for &size in &BENCH_SIZES {
                apply_runtime_for_size(&mut group, size);
                let sheet = random_sample_sheet(&mut default_rng(), size, projects);
                let options = SortOptions::default();

                group.bench_function(BenchmarkId::new("sort_lines", size), |bencher| {
                    bencher.iter(|| black_box(sort_lines(&sheet, &spec, &options)));
                });
            }

            group.finish();
        }
    }
}

fn bench_single_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("natural_key/identifiers");

    for &size in &BENCH_SIZES {
        apply_runtime_for_size(&mut group, size);
        let mut rng = default_rng();
        let rows: Vec<Vec<String>> = (0..size)
            .map(|_| vec![random_identifier(&mut rng)])
            .collect();

        group.bench_function(BenchmarkId::new("sort_by_natural_key", size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let data = rows.clone();
                    let start = std::time::Instant::now();
                    black_box(sort_by_natural_key(data, 0, None));
                    total += start.elapsed();
                }
                total
            });
        });

        group.bench_function(BenchmarkId::new("std_lexicographic", size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mut data = rows.clone();
                    let start = std::time::Instant::now();
                    data.sort();
                    total += start.elapsed();
                    black_box(&data);
                }
                total
            });
        });
    }

    group.finish();
}

fn bench_quicksort(c: &mut Criterion) {
    let mut group = c.benchmark_group("quicksort/u64");

    for &size in &BENCH_SIZES {
        apply_runtime_for_size(&mut group, size);
        let mut rng = default_rng();
        let data: Vec<u64> = (0..size).map(|_| rng.random::<u64>()).collect();

        group.bench_function(BenchmarkId::new("three_way", size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let input = data.clone();
                    let start = std::time::Instant::now();
                    black_box(quicksort(input));
                    total += start.elapsed();
                }
                total
            });
        });

        group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mut input = data.clone();
                    let start = std::time::Instant::now();
                    input.sort();
                    total += start.elapsed();
                    black_box(&input);
                }
                total
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cascade, bench_single_level, bench_quicksort);
criterion_main!(benches);
