use std::cell::RefCell;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sort_test_tools::patterns;

use lanesort::Sorter;

mod util;

thread_local! {
    // Scratch memory is reused across iterations, the way a long lived caller would use a sorter.
    static SORTER: RefCell<Sorter> = RefCell::new(Sorter::new());
}

fn split_len(size: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((size as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = size - len_a;

    (len_a, len_b)
}

fn shuffle_vec(mut v: Vec<i32>) -> Vec<i32> {
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    let mut rng = thread_rng();
    v.shuffle(&mut rng);

    v
}

fn bench_patterns(c: &mut Criterion, test_len: usize) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size.max(1) as f64).log2().round()) as i32))
        }),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("random_z1", |size| {
            if size > 0 {
                patterns::random_zipf(size, 1.0)
            } else {
                Vec::new()
            }
        }),
        ("random_5p", |size| {
            let (len_95p, len_5p) = split_len(size, 95.0);
            let v: Vec<i32> = std::iter::repeat(0)
                .take(len_95p)
                .chain(patterns::random(len_5p))
                .collect();

            shuffle_vec(v)
        }),
        ("all_equal", patterns::all_equal),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if !util::should_run_pattern(pattern_name) {
            continue;
        }

        util::bench_fn(
            c,
            test_len,
            pattern_name,
            pattern_provider,
            &format!("lanesort_{:?}", lanesort::backend()),
            |v| SORTER.with(|sorter| sorter.borrow_mut().sort(v)),
        );

        util::bench_fn(
            c,
            test_len,
            pattern_name,
            pattern_provider,
            "rust_std_unstable",
            |v| v.sort_unstable(),
        );

        #[cfg(feature = "rust_radsort")]
        util::bench_fn(
            c,
            test_len,
            pattern_name,
            pattern_provider,
            "rust_radsort",
            |v| radsort::sort(v),
        );

        let mut scratch = vec![0; test_len];
        util::bench_fn(
            c,
            test_len,
            pattern_name,
            pattern_provider,
            &format!("lanesort_partition_{:?}", lanesort::backend()),
            |v| {
                black_box(lanesort::partition(v, &mut scratch));
            },
        );
    }
}

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_lens = [8, 10, 100, 1_000, 10_000, 100_000, 1_000_000];

    // Detection and table setup must not show up in the first measurement.
    lanesort::init();

    patterns::use_random_seed_each_time();
    ensure_true_random();

    for test_len in test_lens {
        bench_patterns(c, test_len);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
