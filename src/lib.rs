//! Ropedit is an in-memory text editing engine.
//!
//! It is built from three pieces:
//!
//! - [`Rope`]: a height-balanced binary tree of text fragments, giving
//!   O(log N) split, concatenation, insertion, and removal on large
//!   documents.
//! - [`Trie`]: a static prefix tree over the printable ASCII alphabet,
//!   used as a dictionary with O(word length) membership lookup.
//! - [`Editor`]: a document plus a single-slot clipboard and a shared
//!   dictionary, exposing cut/copy/paste, whole-document retrieval, and a
//!   count of distinct misspelled words.
//!
//! All indices are char indices, and all fallible operations return a
//! [`Result`] rather than panicking or clamping.
//!
//! # Example
//!
//! ```
//! use ropedit::{Editor, TextEditor};
//!
//! let mut editor = Editor::new("hello world", ["hello", "world"]);
//! assert_eq!(editor.misspellings(), 0);
//!
//! editor.cut(0, 6).unwrap();
//! assert_eq!(editor.get_text(), "world");
//! assert_eq!(editor.clipboard(), "hello ");
//!
//! editor.paste(5).unwrap();
//! assert_eq!(editor.get_text(), "worldhello ");
//! ```

#![allow(clippy::collapsible_if)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::inline_always)]
#![allow(clippy::needless_return)]

mod editor;
pub mod iter;
mod rope;
mod rope_builder;
mod tree;
mod trie;

pub use editor::{Editor, TextEditor};
pub use rope::Rope;
pub use rope_builder::RopeBuilder;
pub use trie::{Trie, ALPHABET_SIZE};

//=============================================================
// Error reporting types.

/// Ropedit's result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Ropedit's error type.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Indicates that the passed char index was out of bounds.
    ///
    /// Contains the index attempted and the actual length of the text, in
    /// that order.
    IndexOutOfRange(usize, usize),

    /// Indicates that the passed char range was reversed or partially or
    /// fully out of bounds.
    ///
    /// Contains the [start, end) indices of the range and the actual length
    /// of the text, in that order.
    RangeOutOfRange(usize, usize, usize),

    /// Indicates that a dictionary word contained a char outside of the
    /// supported alphabet (`'!'..='~'`).
    ///
    /// Contains the rejected word, the offending char, and that char's
    /// index within the word.
    InvalidCharacter {
        word: String,
        ch: char,
        position: usize,
    },

    /// Indicates that an empty dictionary word was passed.
    EmptyWord,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IndexOutOfRange(index, len) => {
                write!(
                    f,
                    "Index out of range: char index {}, text length {}",
                    index, len
                )
            }
            Error::RangeOutOfRange(start, end, len) => {
                if start > end {
                    write!(
                        f,
                        "Invalid char range {}..{}: start must be <= end",
                        start, end
                    )
                } else {
                    write!(
                        f,
                        "Range out of range: char range {}..{}, text length {}",
                        start, end, len
                    )
                }
            }
            Error::InvalidCharacter { word, ch, position } => {
                write!(
                    f,
                    "Invalid character {:?} at position {} in dictionary word {:?}",
                    ch, position, word
                )
            }
            Error::EmptyWord => write!(f, "Empty dictionary word"),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Just re-use the debug impl.
        std::fmt::Debug::fmt(self, f)
    }
}

//=============================================================
// Utilities.

/// Checks that `char_idx` is a valid position in text of length `len`.
#[inline]
pub(crate) fn check_index(char_idx: usize, len: usize) -> Result<()> {
    if char_idx > len {
        return Err(Error::IndexOutOfRange(char_idx, len));
    }
    Ok(())
}

/// Checks that `start..end` is a valid range in text of length `len`.
#[inline]
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end || end > len {
        return Err(Error::RangeOutOfRange(start, end, len));
    }
    Ok(())
}

/// Scans left from `byte_idx` to find a char boundary.
///
/// This is used to find an appropriate split position on utf8 strings.
///
/// Precondition: `text` must be a well-formed utf8 string.
///
/// Note for convenience, if `byte_idx > text.len()`, this simply
/// returns `text.len()`.
pub(crate) fn find_split_l(mut byte_idx: usize, text: &[u8]) -> usize {
    if byte_idx >= text.len() {
        return text.len();
    }

    while (text[byte_idx] >> 6) == 0b10 && byte_idx > 0 {
        byte_idx -= 1;
    }

    byte_idx
}

//=============================================================
