//! Fixed-size sorting networks used as the recursion base case.
//!
//! Shorter inputs are padded with `i32::MAX`, which sorts behind every real value, so the fixed
//! networks can handle any length up to their width.

#[inline(always)]
fn swap_if_less<const N: usize>(v: &mut [i32; N], a: usize, b: usize) {
    // Branchless: min and max compile down to cmov or vector min/max.
    let (x, y) = (v[a], v[b]);
    v[a] = x.min(y);
    v[b] = x.max(y);
}

/// Optimal sorting network see:
/// https://bertdobbelaere.github.io/sorting_networks.html.
#[inline(never)]
pub(crate) fn sort8_exact(v: &mut [i32; 8]) {
    swap_if_less(v, 0, 2);
    swap_if_less(v, 1, 3);
    swap_if_less(v, 4, 6);
    swap_if_less(v, 5, 7);
    swap_if_less(v, 0, 4);
    swap_if_less(v, 1, 5);
    swap_if_less(v, 2, 6);
    swap_if_less(v, 3, 7);
    swap_if_less(v, 0, 1);
    swap_if_less(v, 2, 3);
    swap_if_less(v, 4, 5);
    swap_if_less(v, 6, 7);
    swap_if_less(v, 2, 4);
    swap_if_less(v, 3, 5);
    swap_if_less(v, 1, 4);
    swap_if_less(v, 3, 6);
    swap_if_less(v, 1, 2);
    swap_if_less(v, 3, 4);
    swap_if_less(v, 5, 6);
}

/// Green's 60 comparator network, optimal in size for 16 inputs.
#[inline(never)]
pub(crate) fn sort16_exact(v: &mut [i32; 16]) {
    const LAYERS: [&[(usize, usize)]; 10] = [
        &[(0, 13), (1, 12), (2, 15), (3, 14), (4, 8), (5, 6), (7, 11), (9, 10)],
        &[(0, 5), (1, 7), (2, 9), (3, 4), (6, 13), (8, 14), (10, 15), (11, 12)],
        &[(0, 1), (2, 3), (4, 5), (6, 8), (7, 9), (10, 11), (12, 13), (14, 15)],
        &[(0, 2), (1, 3), (4, 10), (5, 11), (6, 7), (8, 9), (12, 14), (13, 15)],
        &[(1, 2), (3, 12), (4, 6), (5, 7), (8, 10), (9, 11), (13, 14)],
        &[(1, 4), (2, 6), (5, 8), (7, 10), (9, 13), (11, 14)],
        &[(2, 4), (3, 6), (9, 12), (11, 13)],
        &[(3, 5), (6, 8), (7, 9), (10, 12)],
        &[(3, 4), (5, 6), (7, 8), (9, 10), (11, 12)],
        &[(6, 7), (8, 9)],
    ];

    for layer in LAYERS {
        for &(a, b) in layer {
            swap_if_less(v, a, b);
        }
    }
}

/// Sorts `v`, which must hold at most 8 elements.
pub(crate) fn sort8(v: &mut [i32]) {
    let len = v.len();
    debug_assert!(len <= 8);

    let mut padded = [i32::MAX; 8];
    padded[..len].copy_from_slice(v);
    sort8_exact(&mut padded);
    v.copy_from_slice(&padded[..len]);
}

/// Sorts `v`, which must hold at most 16 elements.
pub(crate) fn sort16(v: &mut [i32]) {
    let len = v.len();
    debug_assert!(len <= 16);

    let mut padded = [i32::MAX; 16];
    padded[..len].copy_from_slice(v);
    sort16_exact(&mut padded);
    v.copy_from_slice(&padded[..len]);
}
