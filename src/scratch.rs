/// Growable scratch memory for the external partition.
///
/// The buffer only ever grows. A sorter that handled a long input keeps that capacity for all
/// following calls.
#[derive(Debug, Default)]
pub struct ScratchBuffer {
    buf: Vec<i32>,
}

impl ScratchBuffer {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Grows the buffer to hold at least `len` elements and returns all of it.
    pub fn ensure_capacity(&mut self, len: usize) -> &mut [i32] {
        if self.buf.len() < len {
            self.buf.resize(len, 0);
        }

        &mut self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// Sorts `i32` slices, reusing its scratch memory across calls.
///
/// A `Sorter` is not meant to be shared between threads while sorting, give every thread its own.
///
/// ```ignore
/// let mut sorter = lanesort::Sorter::new();
/// let mut v = vec![5, 3, 8, 1, 9, 2, 7, 4];
/// sorter.sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 4, 5, 7, 8, 9]);
/// ```
#[derive(Debug, Default)]
pub struct Sorter {
    scratch: ScratchBuffer,
}

impl Sorter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts `v` in ascending order.
    pub fn sort(&mut self, v: &mut [i32]) {
        let scratch = self.scratch.ensure_capacity(v.len());
        crate::quicksort(v, scratch);
    }

    /// Current scratch capacity in elements.
    pub fn scratch_len(&self) -> usize {
        self.scratch.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_grows_monotonically() {
        let mut scratch = ScratchBuffer::new();
        assert!(scratch.is_empty());

        assert_eq!(scratch.ensure_capacity(100).len(), 100);
        assert_eq!(scratch.ensure_capacity(10).len(), 100);
        assert_eq!(scratch.ensure_capacity(1000).len(), 1000);
        assert_eq!(scratch.len(), 1000);
    }

    #[test]
    fn sorter_reuse() {
        let mut sorter = Sorter::new();

        let mut long = (0..5000).rev().collect::<Vec<i32>>();
        sorter.sort(&mut long);
        assert!(long.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sorter.scratch_len(), 5000);

        let mut short = vec![3, -1, 2];
        sorter.sort(&mut short);
        assert_eq!(short, [-1, 2, 3]);
        assert_eq!(sorter.scratch_len(), 5000);
    }
}
