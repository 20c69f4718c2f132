use super::Lanes;

/// `W` lanes held in a plain array. Used on targets without a dedicated backend, and in tests to
/// exercise the kernels at every supported width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Portable<const W: usize>(pub(crate) [i32; W]);

impl<const W: usize> Lanes for Portable<W> {
    const LANES: usize = W;

    #[inline(always)]
    fn splat(value: i32) -> Self {
        Self([value; W])
    }

    #[inline(always)]
    fn load(src: &[i32]) -> Self {
        let mut lanes = [0; W];
        lanes.copy_from_slice(&src[..W]);
        Self(lanes)
    }

    #[inline(always)]
    fn store(self, dst: &mut [i32]) {
        dst[..W].copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn le_mask(self, pivot: Self) -> u32 {
        let mut mask = 0;
        for i in 0..W {
            mask |= ((self.0[i] <= pivot.0[i]) as u32) << i;
        }
        mask
    }

    #[inline(always)]
    fn permute(self, perm: &[u32]) -> Self {
        let perm = &perm[..W];
        let mut lanes = [0; W];
        for i in 0..W {
            lanes[i] = self.0[perm[i] as usize];
        }
        Self(lanes)
    }

    #[inline(always)]
    fn blend(self, other: Self, mask: u32) -> Self {
        let mut lanes = self.0;
        for i in 0..W {
            if mask & (1 << i) != 0 {
                lanes[i] = other.0[i];
            }
        }
        Self(lanes)
    }

    unsafe fn sort_entry(v: &mut [i32], scratch: &mut [i32], ancestor_pivot: Option<i32>, limit: u32) {
        crate::quicksort::quicksort::<Self>(v, scratch, ancestor_pivot, limit);
    }

    unsafe fn partition_entry(v: &mut [i32], scratch: &mut [i32]) -> usize {
        crate::partition::partition::<Self>(v, scratch)
    }
}
