//! Partition strategies and their size based selection.
//!
//! Every strategy takes a span without its pivot slot and rearranges it so that all elements
//! `<= pivot` come first, followed by all elements `> pivot`. It returns the number of elements in
//! the first group.

use crate::lanes::Lanes;
use crate::pivot;

mod external;
mod in_place;
mod scalar;

pub(crate) use external::ExternalPartition;
pub(crate) use in_place::InPlacePartition;
pub(crate) use scalar::ScalarPartition;

/// Spans up to this length, pivot included, are partitioned in place. Longer spans go through the
/// scratch buffer.
pub(crate) const IN_PLACE_MAX_LEN: usize = 115;

pub(crate) trait Partition {
    fn name() -> &'static str;

    /// Partitions `v` around `pivot` and returns the number of elements `<= pivot`.
    fn partition<V: Lanes>(v: &mut [i32], pivot: i32, scratch: &mut [i32]) -> usize;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    Scalar,
    InPlace,
    External,
}

impl Strategy {
    /// Picks the strategy for a span of `len` elements, pivot included.
    #[inline(always)]
    pub(crate) fn for_len<V: Lanes>(len: usize) -> Self {
        // The vector kernels need two full registers worth of data besides the pivot.
        if len.saturating_sub(1) < 2 * V::LANES {
            Strategy::Scalar
        } else if len <= IN_PLACE_MAX_LEN {
            Strategy::InPlace
        } else {
            Strategy::External
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Strategy::Scalar => ScalarPartition::name(),
            Strategy::InPlace => InPlacePartition::name(),
            Strategy::External => ExternalPartition::name(),
        }
    }

    #[inline(always)]
    pub(crate) fn partition<V: Lanes>(self, v: &mut [i32], pivot: i32, scratch: &mut [i32]) -> usize {
        match self {
            Strategy::Scalar => ScalarPartition::partition::<V>(v, pivot, scratch),
            Strategy::InPlace => InPlacePartition::partition::<V>(v, pivot, scratch),
            Strategy::External => ExternalPartition::partition::<V>(v, pivot, scratch),
        }
    }
}

/// Partitions `v` around the value in its last slot, using every element `<= threshold` as the
/// left group. The pivot value ends up between the two groups, its position is returned.
///
/// `threshold` is normally the pivot itself. Passing `pivot - 1` splits off the elements equal to
/// the pivot instead.
#[inline(always)]
pub(crate) fn partition_at_last<V: Lanes>(v: &mut [i32], scratch: &mut [i32], threshold: i32) -> usize {
    let len = v.len();
    debug_assert!(len >= 1);

    let strategy = Strategy::for_len::<V>(len);
    let mid = strategy.partition::<V>(&mut v[..len - 1], threshold, scratch);
    debug_assert!(mid < len, "{} partition returned {mid} for len {len}", strategy.name());

    // Place the pivot between the two partitions.
    v.swap(mid, len - 1);

    mid
}

/// Chooses a pivot and partitions `v` around it. Returns the final position of the pivot.
#[inline(always)]
pub(crate) fn partition<V: Lanes>(v: &mut [i32], scratch: &mut [i32]) -> usize {
    if v.len() <= 1 {
        return 0;
    }

    pivot::choose_pivot(v);
    let pivot = v[v.len() - 1];
    partition_at_last::<V>(v, scratch, pivot)
}
