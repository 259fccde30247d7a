#![no_main]

use libfuzzer_sys::{
    arbitrary::{self, Arbitrary},
    fuzz_target,
};
use ropedit::Rope;

const SMALL_TEXT: &str = "Hello there!  How're you doing?  It's a fine day, \
                          isn't it?  Aren't you glad we're alive?  \
                          こんにちは、みんなさん！";

#[derive(Arbitrary, Copy, Clone, Debug)]
enum Op<'a> {
    Insert(usize, &'a str),
    Remove(usize, usize),
    SplitOff(usize, bool),
    Append(&'a str),
    Prepend(&'a str),
}

#[derive(Arbitrary, Copy, Clone, Debug)]
enum StartingText<'a> {
    Small,
    Custom(&'a str),
}

fuzz_target!(|data: (StartingText, Vec<Op>)| {
    let mut r = Rope::from_str(match data.0 {
        StartingText::Small => SMALL_TEXT,
        StartingText::Custom(s) => s,
    });

    for op in data.1 {
        match op {
            Op::Insert(idx, s) => {
                let _ = r.try_insert(idx, s);
            }
            Op::Remove(idx_1, idx_2) => {
                let _ = r.try_remove(idx_1, idx_2);
            }
            Op::SplitOff(idx, keep_right) => {
                if let Ok(right) = r.try_split_off(idx) {
                    if keep_right {
                        r = right;
                    }
                }
            }
            Op::Append(s) => {
                r.append(Rope::from_str(s));
            }
            Op::Prepend(s) => {
                r = Rope::from_str(s).concat(r);
            }
        }
    }

    r.assert_integrity();
    r.assert_invariants();

    // Same text with different chunk boundaries.
    let r2 = Rope::from_str(&r.to_string());
    assert_eq!(r, r2);
});
