#![no_main]

use libfuzzer_sys::fuzz_target;

#[path = "../src/util.rs"]
mod util;

fuzz_target!(|data: &[u8]| {
    let mut v = util::u8_as_i32(data);
    let mut expected = v.clone();
    expected.sort_unstable();

    lanesort::Sorter::new().sort(&mut v);
    assert_eq!(v, expected);
});
