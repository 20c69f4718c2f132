/// A sort implementation for `i32` slices under test.
pub trait Sort {
    fn name() -> String;

    fn sort(arr: &mut [i32]);
}

/// A partition implementation under test.
///
/// `partition` chooses a pivot, places it at the returned position `mid` and moves all elements
/// `<= pivot` before it and all elements `> pivot` after it. `scratch` holds at least `arr.len()`
/// elements.
pub trait Partition {
    fn name() -> String;

    fn partition(arr: &mut [i32], scratch: &mut [i32]) -> usize;
}

pub mod patterns;
