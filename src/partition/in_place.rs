use super::{Partition, ScalarPartition};
use crate::lanes::{prefix_mask, Lanes};

/// Vectorized partition that needs no memory besides the span itself.
///
/// One compressed vector is carried in registers. Its first `cached_count` lanes are elements
/// `<= pivot` that have not been written back yet. Every step compresses the next chunk and
/// combines it with the carried vector. If the two hold a full vector of small elements, that
/// vector is stored at the write cursor. Otherwise the large elements are stored at the end of the
/// unprocessed region, after moving the chunk that lived there into the slot just read.
pub(crate) struct InPlacePartition;

impl Partition for InPlacePartition {
    fn name() -> &'static str {
        "in_place"
    }

    #[inline(always)]
    fn partition<V: Lanes>(v: &mut [i32], pivot: i32, scratch: &mut [i32]) -> usize {
        let len = v.len();
        let lanes = V::LANES;

        // The vector loop covers the whole chunks, the remainder is handled element wise.
        let mut upper = len - len % lanes;
        let tail_start = upper;

        if lanes >= upper {
            return ScalarPartition::partition::<V>(v, pivot, scratch);
        }

        let pivot_vec = V::splat(pivot);

        let first = V::load(v);
        let first_mask = first.le_mask(pivot_vec);
        let mut cached = first.compress(first_mask);
        let mut cached_count = first_mask.count_ones() as usize;

        // [0, index) is final. [index, index + lanes) is free, its content lives in `cached`.
        // [index + lanes, upper) is unprocessed and [upper, tail_start) holds elements > pivot.
        let mut index = 0;

        while index + lanes < upper {
            let next_index = index + lanes;

            let next = V::load(&v[next_index..]);
            let next_mask = next.le_mask(pivot_vec);
            let next_count = next_mask.count_ones() as usize;
            let next = next.compress(next_mask);

            // Line up the small elements of `next` right after the cached ones.
            let rotated = next.rotate_right(cached_count);
            let cached_prefix = prefix_mask(cached_count);
            let low = rotated.blend(cached, cached_prefix);
            let high = cached.blend(rotated, cached_prefix);

            let total = cached_count + next_count;
            if total < lanes {
                // `low` starts with all `total` small elements, `high` holds only large ones.
                cached = low;
                cached_count = total;

                upper -= lanes;
                v.copy_within(upper..upper + lanes, next_index);
                high.store(&mut v[upper..]);
            } else {
                // `low` is a full vector of small elements.
                low.store(&mut v[index..]);
                cached = high;
                cached_count = total - lanes;
                index += lanes;
            }
        }

        cached.store(&mut v[index..]);
        index += cached_count;

        for i in tail_start..len {
            if v[i] <= pivot {
                v.swap(i, index);
                index += 1;
            }
        }

        index
    }
}
