#![no_main]

use libfuzzer_sys::fuzz_target;

#[path = "../src/util.rs"]
mod util;

fuzz_target!(|data: &[u8]| {
    let mut v = util::u8_as_i32(data);
    let mut scratch = vec![0; v.len()];

    let mid = lanesort::partition(&mut v, &mut scratch);
    if v.is_empty() {
        return;
    }

    let pivot = v[mid];
    assert!(v[..mid].iter().all(|&x| x <= pivot));
    assert!(v[mid + 1..].iter().all(|&x| x > pivot));
});
