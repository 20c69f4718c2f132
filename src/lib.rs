//! In-place quicksort for `i32` built on vectorized partitioning.
//!
//! The lane backend is picked once per process, see [`backend`]. Spans of up to 115 elements are
//! partitioned in place, longer spans stream through a caller provided scratch buffer. Use
//! [`Sorter`] to have the scratch memory managed and reused for you.

mod heapsort;
mod lanes;
mod network;
mod partition;
mod pivot;
mod quicksort;
mod scratch;

pub use lanes::{backend, Backend};
pub use scratch::{ScratchBuffer, Sorter};

use lanes::tables::PermutationTables;
use lanes::Lanes;
use partition::IN_PLACE_MAX_LEN;

/// Number of `i32` lanes per vector of the selected backend.
pub fn lane_width() -> usize {
    backend().lane_width()
}

/// Detects the backend and builds its lane tables, so the first sort does not pay for it.
pub fn init() {
    PermutationTables::for_width(lane_width());
}

/// Sorts `v` in ascending order.
///
/// `scratch` must hold at least `v.len()` elements if `v` is longer than 115 elements, shorter
/// inputs never touch it.
///
/// # Panics
///
/// Panics if `scratch` is too short.
pub fn quicksort(v: &mut [i32], scratch: &mut [i32]) {
    let len = v.len();
    if len < 2 {
        return;
    }

    check_scratch(len, scratch);

    // Limit the number of imbalanced partitions to `2 * floor(log2(len))`.
    let limit = 2 * (len | 1).ilog2();

    // SAFETY: `backend()` only reports backends the CPU supports.
    unsafe {
        match backend() {
            #[cfg(target_arch = "x86_64")]
            Backend::Avx2 => lanes::avx2::Avx2::sort_entry(v, scratch, None, limit),
            Backend::Portable => {
                lanes::portable::Portable::<{ lanes::PORTABLE_LANES }>::sort_entry(v, scratch, None, limit)
            }
        }
    }
}

/// Chooses a pivot and partitions `v` around it.
///
/// Returns the pivot's final position `mid`. Afterwards all of `v[..mid]` are `<= v[mid]` and all
/// of `v[mid + 1..]` are `> v[mid]`. Empty and single element inputs return 0.
///
/// # Panics
///
/// Panics if `scratch` is too short, see [`quicksort`].
pub fn partition(v: &mut [i32], scratch: &mut [i32]) -> usize {
    let len = v.len();
    if len < 2 {
        return 0;
    }

    check_scratch(len, scratch);

    // SAFETY: `backend()` only reports backends the CPU supports.
    unsafe {
        match backend() {
            #[cfg(target_arch = "x86_64")]
            Backend::Avx2 => lanes::avx2::Avx2::partition_entry(v, scratch),
            Backend::Portable => {
                lanes::portable::Portable::<{ lanes::PORTABLE_LANES }>::partition_entry(v, scratch)
            }
        }
    }
}

#[inline(always)]
fn check_scratch(len: usize, scratch: &[i32]) {
    if len > IN_PLACE_MAX_LEN && scratch.len() < len {
        panic_on_scratch_too_small(len, scratch.len());
    }
}

#[cold]
#[inline(never)]
fn panic_on_scratch_too_small(len: usize, scratch_len: usize) -> ! {
    panic!("Scratch buffer of length {scratch_len} is too small to sort {len} elements");
}
