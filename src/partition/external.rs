use super::{Partition, ScalarPartition};
use crate::lanes::Lanes;

/// Vectorized partition that streams the large elements into a scratch buffer.
///
/// Each chunk is compressed once. The full vector is stored at the left cursor, where the next
/// store overwrites everything past its small elements. The reversed vector is stored at the
/// scratch cursor, which likewise keeps only the large elements. Afterwards the scratch content is
/// copied back behind the small elements.
pub(crate) struct ExternalPartition;

impl Partition for ExternalPartition {
    fn name() -> &'static str {
        "external"
    }

    #[inline(always)]
    fn partition<V: Lanes>(v: &mut [i32], pivot: i32, scratch: &mut [i32]) -> usize {
        let len = v.len();
        let lanes = V::LANES;
        let upper = len - len % lanes;

        if lanes >= upper {
            return ScalarPartition::partition::<V>(v, pivot, scratch);
        }

        // Never more than `upper` elements go to scratch.
        let scratch = &mut scratch[..upper];
        let pivot_vec = V::splat(pivot);

        let mut left = 0;
        let mut right = 0;

        for chunk_start in (0..upper).step_by(lanes) {
            let chunk = V::load(&v[chunk_start..]);
            let mask = chunk.le_mask(pivot_vec);
            let count = mask.count_ones() as usize;
            let compressed = chunk.compress(mask);

            // `left <= chunk_start`, so this only overwrites processed slots.
            compressed.store(&mut v[left..]);
            // Large elements come first after reversal, in reverse order.
            compressed.reverse().store(&mut scratch[right..]);

            left += count;
            right += lanes - count;
        }

        v[left..left + right].copy_from_slice(&scratch[..right]);

        for i in upper..len {
            if v[i] <= pivot {
                v.swap(i, left);
                left += 1;
            }
        }

        left
    }
}
