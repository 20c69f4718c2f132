//! Packed-lane vector abstraction used by the partition kernels.
//!
//! The kernels are written once, generic over [`Lanes`]. A backend provides the handful of
//! primitive operations (load, store, compare, permute, blend) for its register width, and the two
//! `unsafe` entry points that get compiled with the backend's target features enabled. Everything
//! the entry points call is `#[inline(always)]`, so the whole sort for a backend ends up in code
//! generated for that backend's instruction set.

use once_cell::sync::Lazy;

pub(crate) mod portable;
pub(crate) mod tables;

#[cfg(target_arch = "x86_64")]
pub(crate) mod avx2;

use tables::PermutationTables;

/// Register width on targets without a dedicated backend. 128 bits is the common denominator of
/// SSE2 and NEON.
pub(crate) const PORTABLE_LANES: usize = 4;

/// The lane backend used by the process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Backend {
    /// 256-bit AVX2 registers, 8 lanes of `i32`.
    #[cfg(target_arch = "x86_64")]
    Avx2,
    /// Lane arrays without explicit intrinsics, left to the auto-vectorizer.
    Portable,
}

impl Backend {
    fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx2") {
                return Backend::Avx2;
            }
        }

        Backend::Portable
    }

    /// Number of `i32` values packed in one register of this backend.
    pub fn lane_width(self) -> usize {
        match self {
            #[cfg(target_arch = "x86_64")]
            Backend::Avx2 => avx2::Avx2::LANES,
            Backend::Portable => PORTABLE_LANES,
        }
    }
}

static BACKEND: Lazy<Backend> = Lazy::new(|| {
    let backend = Backend::detect();

    // Build the tables together with the backend choice, so that no sort ever pays for it.
    PermutationTables::for_width(backend.lane_width());

    backend
});

/// Returns the backend selected for this process. Detection happens once, on first call.
pub fn backend() -> Backend {
    *BACKEND
}

/// One register worth of `i32` lanes.
///
/// Masks are `u32` bit sets, bit `i` describing lane `i`. `LANES` is at most 16.
pub(crate) trait Lanes: Copy {
    const LANES: usize;

    fn tables() -> &'static PermutationTables {
        PermutationTables::for_width(Self::LANES)
    }

    fn splat(value: i32) -> Self;

    /// Loads the first `LANES` values of `src`. Panics if `src` is shorter.
    fn load(src: &[i32]) -> Self;

    /// Stores all lanes into the first `LANES` slots of `dst`. Panics if `dst` is shorter.
    fn store(self, dst: &mut [i32]);

    /// Bit set of the lanes that are less than or equal to the matching lane of `pivot`.
    fn le_mask(self, pivot: Self) -> u32;

    /// `out[j] = self[perm[j]]`.
    fn permute(self, perm: &[u32]) -> Self;

    /// Takes the lanes of `other` where `mask` is set, and the lanes of `self` elsewhere.
    fn blend(self, other: Self, mask: u32) -> Self;

    /// Moves the lanes set in `mask` to the front, keeping their order, followed by the remaining
    /// lanes in their order.
    #[inline(always)]
    fn compress(self, mask: u32) -> Self {
        self.permute(Self::tables().compress(mask))
    }

    #[inline(always)]
    fn reverse(self) -> Self {
        self.permute(Self::tables().reverse())
    }

    /// Cyclic rotation towards higher lanes, `by` in `0..=LANES`.
    #[inline(always)]
    fn rotate_right(self, by: usize) -> Self {
        self.permute(Self::tables().rotate_right(by))
    }

    /// Sorts `v` with this backend.
    ///
    /// # Safety
    ///
    /// The CPU must support the backend's instruction set.
    unsafe fn sort_entry(v: &mut [i32], scratch: &mut [i32], ancestor_pivot: Option<i32>, limit: u32);

    /// Partitions `v` with this backend, see [`crate::partition`].
    ///
    /// # Safety
    ///
    /// The CPU must support the backend's instruction set.
    unsafe fn partition_entry(v: &mut [i32], scratch: &mut [i32]) -> usize;
}

/// Mask with the lowest `count` lanes set.
#[inline(always)]
pub(crate) fn prefix_mask(count: usize) -> u32 {
    debug_assert!(count <= 16);
    (1u32 << count) - 1
}
