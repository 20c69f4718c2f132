use std::env;

use regex::Regex;

use criterion::{black_box, BatchSize, Criterion};

use once_cell::sync::OnceCell;

pub fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                core_affinity::set_for_current(*core_id);
            }

            affinity_already_set.set(true);
        }
    });
}

/// `BENCH_PATTERNS` is a comma separated list of pattern names. Unset runs all patterns.
pub fn should_run_pattern(pattern_name: &str) -> bool {
    static PATTERNS: OnceCell<Option<Vec<String>>> = OnceCell::new();

    PATTERNS
        .get_or_init(|| {
            env::var("BENCH_PATTERNS")
                .ok()
                .map(|val| val.split(',').map(|name| name.trim().to_string()).collect())
        })
        .as_ref()
        .map(|names| names.iter().any(|name| name == pattern_name))
        .unwrap_or(true)
}

fn should_run_benchmark(bench_name: &str) -> bool {
    static FILTER_REGEX: OnceCell<Option<Regex>> = OnceCell::new();

    FILTER_REGEX
        .get_or_init(|| {
            env::var("CUSTOM_BENCH_REGEX")
                .ok()
                .map(|filter_regex| Regex::new(&filter_regex).unwrap())
        })
        .as_ref()
        .map(|reg| reg.is_match(bench_name))
        .unwrap_or(true)
}

#[inline(never)]
pub fn bench_fn(
    c: &mut Criterion,
    test_len: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    mut test_fn: impl FnMut(&mut [i32]),
) {
    // Pin the benchmark to the same core to improve repeatability. Doing it this way allows
    // criterion to do other stuff with other threads, which greatly impacts overall benchmark
    // throughput.
    pin_thread_to_core();

    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    let full_name = format!("{bench_name}-hot-i32-{pattern_name}-{test_len}");
    if !should_run_benchmark(&full_name) {
        return;
    }

    c.bench_function(&full_name, |b| {
        b.iter_batched_ref(
            || pattern_provider(test_len),
            |test_data| {
                test_fn(black_box(test_data.as_mut_slice()));
                black_box(test_data); // side-effect
            },
            batch_size,
        )
    });
}
