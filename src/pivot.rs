use crate::network;

/// Shorter spans keep their last element as pivot.
pub(crate) const SAMPLE_THRESHOLD: usize = 64;

const SAMPLE_COUNT: usize = 8;

/// Chooses a pivot for `v` and moves it to `v[v.len() - 1]`.
///
/// Spans of at least [`SAMPLE_THRESHOLD`] elements take 8 samples at stride `len / 8` and use their
/// upper median. Shorter spans use whatever is already in the last slot.
pub(crate) fn choose_pivot(v: &mut [i32]) {
    let len = v.len();
    if len < SAMPLE_THRESHOLD {
        return;
    }

    let stride = len / SAMPLE_COUNT;

    let mut samples = [0; SAMPLE_COUNT];
    for (i, sample) in samples.iter_mut().enumerate() {
        *sample = v[i * stride];
    }

    let mut sorted = samples;
    network::sort8_exact(&mut sorted);
    let pivot = sorted[SAMPLE_COUNT / 2];

    match samples.iter().position(|&sample| sample == pivot) {
        Some(i) => v.swap(i * stride, len - 1),
        None => panic_on_pivot_lookup_failure(),
    }
}

// The sorted samples are a permutation of the samples, so this can only be reached if the network
// is broken.
#[cold]
#[inline(never)]
fn panic_on_pivot_lookup_failure() -> ! {
    panic!("Sampled pivot not found among its sample positions");
}
