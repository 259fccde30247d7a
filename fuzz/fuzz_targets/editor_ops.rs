#![no_main]

use libfuzzer_sys::{
    arbitrary::{self, Arbitrary},
    fuzz_target,
};
use ropedit::{Editor, TextEditor};

#[derive(Arbitrary, Copy, Clone, Debug)]
enum Op<'a> {
    Cut(usize, usize),
    Copy(usize, usize),
    Paste(usize),
    Insert(usize, &'a str),
}

fn byte_idx(text: &str, char_idx: usize) -> Option<usize> {
    if char_idx == text.chars().count() {
        Some(text.len())
    } else {
        text.char_indices().nth(char_idx).map(|(i, _)| i)
    }
}

fuzz_target!(|data: (&str, Vec<&str>, Vec<Op>)| {
    let (start_text, words, ops) = data;
    let mut editor = Editor::new(start_text, &words);
    let mut text = start_text.to_string();
    let mut clipboard = String::new();

    for op in ops {
        match op {
            Op::Cut(start, end) => match (byte_idx(&text, start), byte_idx(&text, end)) {
                (Some(s), Some(e)) if s <= e => {
                    editor.cut(start, end).unwrap();
                    clipboard = text.drain(s..e).collect();
                }
                _ => assert!(editor.cut(start, end).is_err()),
            },
            Op::Copy(start, end) => match (byte_idx(&text, start), byte_idx(&text, end)) {
                (Some(s), Some(e)) if s <= e => {
                    editor.copy(start, end).unwrap();
                    clipboard = text[s..e].to_string();
                }
                _ => assert!(editor.copy(start, end).is_err()),
            },
            Op::Paste(idx) => match byte_idx(&text, idx) {
                Some(i) => {
                    editor.paste(idx).unwrap();
                    text.insert_str(i, &clipboard);
                }
                None => assert!(editor.paste(idx).is_err()),
            },
            Op::Insert(idx, s) => match byte_idx(&text, idx) {
                Some(i) => {
                    editor.insert(idx, s).unwrap();
                    text.insert_str(i, s);
                }
                None => assert!(editor.insert(idx, s).is_err()),
            },
        }

        assert_eq!(text, editor.get_text());
        assert_eq!(clipboard, editor.clipboard());
    }

    editor.document().assert_integrity();
    editor.document().assert_invariants();

    // Misspellings is a pure query.
    let count = editor.misspellings();
    assert_eq!(count, editor.misspellings());
    assert!(count <= text.split_whitespace().count());
});
