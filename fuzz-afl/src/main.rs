#[macro_use]
extern crate afl;

#[path = "../../fuzz/src/util.rs"]
mod util;

fn main() {
    fuzz!(|data: &[u8]| {
        let mut v = util::u8_as_i32(data);

        let mut expected = v.clone();
        expected.sort_unstable();

        lanesort::Sorter::new().sort(&mut v);
        assert_eq!(v, expected);
    });
}
