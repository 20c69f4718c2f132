use core::arch::x86_64::{
    __m256i, _mm256_and_si256, _mm256_blendv_epi8, _mm256_castsi256_ps, _mm256_cmpeq_epi32,
    _mm256_cmpgt_epi32, _mm256_loadu_si256, _mm256_movemask_ps, _mm256_permutevar8x32_epi32,
    _mm256_set1_epi32, _mm256_setr_epi32, _mm256_storeu_si256,
};

use super::Lanes;

/// Eight `i32` lanes in a 256-bit AVX2 register.
///
/// The lane operations below are safe functions that issue AVX2 instructions. Calling any of them
/// on a CPU without AVX2 is undefined behavior. Crate code only reaches them through
/// [`Avx2::sort_entry`] and [`Avx2::partition_entry`], which are `unsafe` and which the dispatcher
/// in `lib.rs` calls only when [`crate::backend`] reported [`crate::Backend::Avx2`], that is after
/// `is_x86_feature_detected!("avx2")` returned true. Tests call the lane operations directly only
/// after the same check.
#[derive(Copy, Clone)]
pub(crate) struct Avx2(__m256i);

impl Lanes for Avx2 {
    const LANES: usize = 8;

    #[inline(always)]
    fn splat(value: i32) -> Self {
        // SAFETY: AVX2 is available, see type level comment.
        unsafe { Self(_mm256_set1_epi32(value)) }
    }

    #[inline(always)]
    fn load(src: &[i32]) -> Self {
        let src = &src[..Self::LANES];
        // SAFETY: `src` is valid for 8 reads, unaligned loads are fine. See type level comment.
        unsafe { Self(_mm256_loadu_si256(src.as_ptr() as *const __m256i)) }
    }

    #[inline(always)]
    fn store(self, dst: &mut [i32]) {
        let dst = &mut dst[..Self::LANES];
        // SAFETY: `dst` is valid for 8 writes. See type level comment.
        unsafe { _mm256_storeu_si256(dst.as_mut_ptr() as *mut __m256i, self.0) }
    }

    #[inline(always)]
    fn le_mask(self, pivot: Self) -> u32 {
        // SAFETY: AVX2 is available, see type level comment.
        unsafe {
            let gt = _mm256_cmpgt_epi32(self.0, pivot.0);
            let gt_bits = _mm256_movemask_ps(_mm256_castsi256_ps(gt)) as u32;
            !gt_bits & 0xFF
        }
    }

    #[inline(always)]
    fn permute(self, perm: &[u32]) -> Self {
        let perm = &perm[..Self::LANES];
        // SAFETY: `perm` is valid for 8 reads and every index is below 8. See type level comment.
        unsafe {
            let idx = _mm256_loadu_si256(perm.as_ptr() as *const __m256i);
            Self(_mm256_permutevar8x32_epi32(self.0, idx))
        }
    }

    #[inline(always)]
    fn blend(self, other: Self, mask: u32) -> Self {
        // SAFETY: AVX2 is available, see type level comment.
        unsafe {
            // Spread the mask bits into full lanes.
            let bits = _mm256_setr_epi32(1, 2, 4, 8, 16, 32, 64, 128);
            let spread = _mm256_and_si256(_mm256_set1_epi32(mask as i32), bits);
            let select = _mm256_cmpeq_epi32(spread, bits);
            Self(_mm256_blendv_epi8(self.0, other.0, select))
        }
    }

    #[target_feature(enable = "avx2")]
    unsafe fn sort_entry(v: &mut [i32], scratch: &mut [i32], ancestor_pivot: Option<i32>, limit: u32) {
        crate::quicksort::quicksort::<Self>(v, scratch, ancestor_pivot, limit);
    }

    #[target_feature(enable = "avx2")]
    unsafe fn partition_entry(v: &mut [i32], scratch: &mut [i32]) -> usize {
        crate::partition::partition::<Self>(v, scratch)
    }
}
