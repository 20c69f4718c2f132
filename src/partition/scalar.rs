use super::Partition;
use crate::lanes::Lanes;

/// Two cursor partition without vector instructions. Handles spans too short for the vector
/// kernels, and the remainders they leave behind.
pub(crate) struct ScalarPartition;

impl Partition for ScalarPartition {
    fn name() -> &'static str {
        "scalar"
    }

    #[inline(always)]
    fn partition<V: Lanes>(v: &mut [i32], pivot: i32, _scratch: &mut [i32]) -> usize {
        let mut lo = 0;
        let mut hi = v.len();

        // [0, lo) holds elements <= pivot and [hi, len) elements > pivot.
        while lo < hi {
            let mut advanced = false;

            if v[lo] <= pivot {
                lo += 1;
                advanced = true;
            }

            if lo < hi && v[hi - 1] > pivot {
                hi -= 1;
                advanced = true;
            }

            if !advanced {
                // v[lo] > pivot and v[hi - 1] <= pivot, both are on the wrong side.
                v.swap(lo, hi - 1);
                lo += 1;
                hi -= 1;
            }
        }

        lo
    }
}
