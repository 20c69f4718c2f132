//! Lane permutation tables.
//!
//! Every vector rearrangement the partition kernels need is expressed as a permutation of lane
//! indices, `out[j] = in[table[j]]`. The tables are built once per lane width and are read-only
//! afterwards, so they can be shared freely between threads.

use once_cell::sync::Lazy;

static TABLES_4: Lazy<PermutationTables> = Lazy::new(|| PermutationTables::new(4));
static TABLES_8: Lazy<PermutationTables> = Lazy::new(|| PermutationTables::new(8));
static TABLES_16: Lazy<PermutationTables> = Lazy::new(|| PermutationTables::new(16));

pub(crate) struct PermutationTables {
    lanes: usize,
    // (1 << lanes) rows, each `lanes` wide. Row `m` gathers the lanes set in `m` to the front.
    compress: Box<[u32]>,
    reverse: Box<[u32]>,
    // (lanes + 1) rows, row `k` rotates right by `k`.
    rotate: Box<[u32]>,
}

impl PermutationTables {
    /// Returns the process-wide tables for `lanes`, building them on first use.
    pub(crate) fn for_width(lanes: usize) -> &'static PermutationTables {
        match lanes {
            4 => Lazy::force(&TABLES_4),
            8 => Lazy::force(&TABLES_8),
            16 => Lazy::force(&TABLES_16),
            _ => panic!("Unsupported lane width: {lanes}"),
        }
    }

    fn new(lanes: usize) -> Self {
        debug_assert!(lanes.is_power_of_two() && lanes <= 16);

        let mut compress = Vec::with_capacity((1 << lanes) * lanes);
        for mask in 0..(1u32 << lanes) {
            compress.extend_from_slice(&compress_row(mask, lanes));
        }

        let reverse = (0..lanes as u32).rev().collect::<Vec<_>>();

        let mut rotate = Vec::with_capacity((lanes + 1) * lanes);
        for by in 0..=lanes {
            rotate.extend((0..lanes).map(|i| ((i + lanes - by) % lanes) as u32));
        }

        Self {
            lanes,
            compress: compress.into_boxed_slice(),
            reverse: reverse.into_boxed_slice(),
            rotate: rotate.into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub(crate) fn compress(&self, mask: u32) -> &[u32] {
        let start = mask as usize * self.lanes;
        &self.compress[start..start + self.lanes]
    }

    #[inline(always)]
    pub(crate) fn reverse(&self) -> &[u32] {
        &self.reverse
    }

    #[inline(always)]
    pub(crate) fn rotate_right(&self, by: usize) -> &[u32] {
        let start = by * self.lanes;
        &self.rotate[start..start + self.lanes]
    }
}

/// Lanes set in `mask` first, then the others, both in ascending lane order.
fn compress_row(mask: u32, lanes: usize) -> Vec<u32> {
    let mut row = vec![0; lanes];
    let mut selected = 0;
    let mut rest = mask.count_ones() as usize;

    for lane in 0..lanes {
        if mask & (1 << lane) != 0 {
            row[selected] = lane as u32;
            selected += 1;
        } else {
            row[rest] = lane as u32;
            rest += 1;
        }
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(values: &[u32], perm: &[u32]) -> Vec<u32> {
        perm.iter().map(|&i| values[i as usize]).collect()
    }

    #[test]
    fn compress_keeps_relative_order() {
        for lanes in [4, 8, 16] {
            let tables = PermutationTables::for_width(lanes);
            let values = (0..lanes as u32).collect::<Vec<_>>();

            for mask in 0..(1u32 << lanes) {
                let out = apply(&values, tables.compress(mask));
                let selected = values
                    .iter()
                    .copied()
                    .filter(|&i| mask & (1 << i) != 0)
                    .collect::<Vec<_>>();
                let others = values
                    .iter()
                    .copied()
                    .filter(|&i| mask & (1 << i) == 0)
                    .collect::<Vec<_>>();

                assert_eq!(&out[..selected.len()], selected.as_slice());
                assert_eq!(&out[selected.len()..], others.as_slice());
            }
        }
    }

    #[test]
    fn rotate_and_reverse() {
        for lanes in [4, 8, 16] {
            let tables = PermutationTables::for_width(lanes);
            let values = (0..lanes as u32).collect::<Vec<_>>();

            assert_eq!(apply(&values, tables.rotate_right(0)), values);
            assert_eq!(apply(&values, tables.rotate_right(lanes)), values);

            for by in 0..=lanes {
                let mut expected = values.clone();
                expected.rotate_right(by % lanes);
                assert_eq!(apply(&values, tables.rotate_right(by)), expected);
            }

            let mut reversed = values.clone();
            reversed.reverse();
            assert_eq!(apply(&values, tables.reverse()), reversed);
        }
    }

    #[test]
    #[should_panic]
    fn unsupported_width() {
        PermutationTables::for_width(5);
    }
}
