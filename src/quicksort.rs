use crate::heapsort;
use crate::lanes::Lanes;
use crate::network;
use crate::partition;
use crate::pivot;

/// Sorts `v` recursively.
///
/// If the slice is the left side of an earlier partition, that partition's pivot is passed as
/// `ancestor_pivot`. Every element of `v` is then `<= ancestor_pivot`.
///
/// `limit` is the number of allowed imbalanced partitions before switching to `heapsort`. If zero,
/// this function will immediately switch to heapsort.
#[inline(always)]
pub(crate) fn quicksort<V: Lanes>(
    mut v: &mut [i32],
    scratch: &mut [i32],
    mut ancestor_pivot: Option<i32>,
    mut limit: u32,
) {
    loop {
        let len = v.len();

        if len <= 1 {
            return;
        }

        if V::LANES >= 16 && len <= 16 {
            network::sort16(v);
            return;
        }

        if len <= 8 {
            network::sort8(v);
            return;
        }

        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(n * log(n))` worst-case.
        if limit == 0 {
            heapsort::heapsort(v);
            return;
        }

        limit -= 1;

        pivot::choose_pivot(v);
        let pivot = v[len - 1];

        // If the chosen pivot is not below the ancestor pivot, it is equal to it and to the
        // maximum of the slice. Split off every element equal to the pivot, they are already in
        // their final place. This case is usually hit when the slice contains many duplicates.
        if let Some(ancestor) = ancestor_pivot {
            if pivot >= ancestor {
                if pivot == i32::MIN {
                    // All elements are `i32::MIN`.
                    return;
                }

                let mid = partition::partition_at_last::<V>(v, scratch, pivot - 1);

                // Continue sorting the elements strictly less than the pivot.
                v = &mut v[..mid];
                ancestor_pivot = None;
                continue;
            }
        }

        let mid = partition::partition_at_last::<V>(v, scratch, pivot);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        // Recurse into the left side through the backend entry, so that the recursion stays in
        // code compiled for the backend's instruction set.
        //
        // SAFETY: This function is only reached through `V::sort_entry`, so the CPU supports `V`.
        unsafe {
            V::sort_entry(left, scratch, Some(pivot), limit);
        }

        // Continue with the right side, all its elements are greater than the pivot.
        v = right;
    }
}
