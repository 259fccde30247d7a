use std::borrow::Cow;

use crate::iter::{Chars, Chunks};
use crate::rope_builder::RopeBuilder;
use crate::tree::{Node, MAX_LEAF_BYTES};
use crate::{check_index, check_range, Result};

/// A utf8 text rope.
///
/// The time complexity of nearly all edit and query operations on `Rope`
/// are worst-case `O(log N)` in the length of the rope.  `Rope` is
/// designed to work efficiently even for huge documents.
///
/// All indices are char indices.  Out-of-range indices are reported as
/// errors, never clamped.
///
/// # Structure
///
/// A `Rope` is a binary tree.  Leaves hold fragments of text, and each
/// internal node exclusively owns its two children and caches the length
/// of its left subtree (its "weight") as well as its total length.  The
/// tree is kept height balanced, so its depth stays `O(log N)` no matter
/// the sequence of edits.
///
/// # Value-consuming and in-place APIs
///
/// The structural operations come in two flavors:
///
/// - [`split()`](Rope::split), [`concat()`](Rope::concat) and
///   [`insert()`](Rope::insert) consume their inputs and return new ropes,
///   redistributing the nodes of the inputs into the outputs.
/// - [`try_split_off()`](Rope::try_split_off), [`append()`](Rope::append),
///   [`try_insert()`](Rope::try_insert) and
///   [`try_remove()`](Rope::try_remove) edit a rope in place.  On error the
///   rope is left unmodified.
///
/// # Example
///
/// ```
/// # use ropedit::Rope;
/// #
/// let rope = Rope::from_str("Hello world!");
/// let (left, right) = rope.split(5).unwrap();
/// assert_eq!(left, "Hello");
/// assert_eq!(right, " world!");
///
/// let rope = left.concat(Rope::from_str(",")).concat(right);
/// assert_eq!(rope, "Hello, world!");
/// assert_eq!(rope.substr(7, 12).unwrap(), "world");
/// ```
#[derive(Clone, Default)]
pub struct Rope {
    pub(crate) root: Node,
}

impl Rope {
    //-----------------------------------------------------------------------
    // Constructors

    /// Creates an empty `Rope`.
    #[inline]
    pub fn new() -> Self {
        Rope { root: Node::new() }
    }

    /// Creates a `Rope` with the contents of a string slice.
    ///
    /// Runs in O(N) time.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        let mut builder = RopeBuilder::new();
        builder.append(text);
        builder.finish()
    }

    pub(crate) fn from_root(root: Node) -> Self {
        Rope { root }
    }

    //-----------------------------------------------------------------------
    // Informational methods

    /// Total number of chars in the `Rope`.
    ///
    /// Runs in O(1) time.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.root.char_count()
    }

    /// Total number of bytes in the `Rope`.
    ///
    /// Runs in O(1) time.
    #[inline]
    pub fn len_bytes(&self) -> usize {
        self.root.byte_count()
    }

    /// Returns whether the `Rope` contains no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Height of the underlying tree.  A rope that fits in a single leaf
    /// has a depth of 1.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.height() as usize
    }

    //-----------------------------------------------------------------------
    // Value-consuming structural operations

    /// Splits the `Rope` at `char_idx`, consuming it.
    ///
    /// Returns the text before `char_idx` and the text from `char_idx`
    /// onward as two new ropes.  `char_idx == len_chars()` is valid, and
    /// yields an empty right side.
    ///
    /// Runs in O(log N) time.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `char_idx > len_chars()`.
    pub fn split(mut self, char_idx: usize) -> Result<(Rope, Rope)> {
        let right = self.try_split_off(char_idx)?;
        Ok((self, right))
    }

    /// Concatenates two ropes, consuming both.
    ///
    /// The result contains the text of `self` followed by the text of
    /// `other`.  Two small leaves are merged into a single leaf; otherwise
    /// the shorter tree is attached to the taller one and rebalanced.
    ///
    /// Runs in O(log N) time.
    #[must_use]
    pub fn concat(mut self, other: Rope) -> Rope {
        self.append(other);
        self
    }

    /// Inserts `text` at `char_idx`, consuming the rope and returning the
    /// result.
    ///
    /// Equivalent to splitting at `char_idx` and concatenating the left
    /// side, the new text, and the right side.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `char_idx > len_chars()`.
    pub fn insert(mut self, char_idx: usize, text: &str) -> Result<Rope> {
        self.try_insert(char_idx, text)?;
        Ok(self)
    }

    //-----------------------------------------------------------------------
    // In-place edit methods

    /// Splits the `Rope` at `char_idx`.
    ///
    /// The left side of the split remains in this `Rope`, and the right
    /// side is returned as a new `Rope`.
    ///
    /// Runs in O(log N) time.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `char_idx > len_chars()`, in which case
    /// the rope is left unmodified.
    pub fn try_split_off(&mut self, char_idx: usize) -> Result<Rope> {
        check_index(char_idx, self.len_chars())?;

        let (left, right) = std::mem::take(&mut self.root).split(char_idx);
        self.root = left;
        Ok(Rope { root: right })
    }

    /// Appends a `Rope` to the end of this one, consuming the other `Rope`.
    ///
    /// Runs in O(log N) time.
    pub fn append(&mut self, other: Rope) {
        let left = std::mem::take(&mut self.root);
        self.root = Node::join(left, other.root);
    }

    /// Inserts `text` at `char_idx`.
    ///
    /// Runs in O(M + log N) time, where N is the length of the `Rope` and M
    /// is the length of `text`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `char_idx > len_chars()`, in which case
    /// the rope is left unmodified.
    pub fn try_insert(&mut self, char_idx: usize, text: &str) -> Result<()> {
        check_index(char_idx, self.len_chars())?;

        if text.is_empty() {
            return Ok(());
        }
        if text.len() > MAX_LEAF_BYTES * 64 {
            tracing::debug!(len = text.len(), "rope insert large text");
        }

        let right = self.try_split_off(char_idx)?;
        self.append(Rope::from_str(text));
        self.append(right);
        Ok(())
    }

    /// Removes the text in char range `start..end`, and returns it as its
    /// own `Rope`.
    ///
    /// Runs in O(log N) time.
    ///
    /// # Errors
    ///
    /// Returns `RangeOutOfRange` if `start > end` or `end > len_chars()`,
    /// in which case the rope is left unmodified.
    pub fn try_remove(&mut self, start: usize, end: usize) -> Result<Rope> {
        check_range(start, end, self.len_chars())?;

        if start == end {
            return Ok(Rope::new());
        }

        let mut removed = self.try_split_off(start)?;
        let right = removed.try_split_off(end - start)?;
        self.append(right);
        Ok(removed)
    }

    //-----------------------------------------------------------------------
    // Queries

    /// Returns the text in char range `start..end` as a newly allocated
    /// `String`, without modifying the rope.
    ///
    /// Runs in O(M + log N) time, where M is the length of the range.
    ///
    /// # Errors
    ///
    /// Returns `RangeOutOfRange` if `start > end` or `end > len_chars()`.
    pub fn substr(&self, start: usize, end: usize) -> Result<String> {
        check_range(start, end, self.len_chars())?;

        let mut text = String::with_capacity(end - start);
        self.root.append_range_to(start, end, &mut text);
        Ok(text)
    }

    //-----------------------------------------------------------------------
    // Iterators

    /// Creates an iterator over the chunks of the `Rope`.
    #[inline]
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks::new(&self.root)
    }

    /// Creates an iterator over the chars of the `Rope`.
    #[inline]
    pub fn chars(&self) -> Chars<'_> {
        Chars::new(&self.root)
    }

    //-----------------------------------------------------------------------
    // Debugging

    /// NOT PART OF THE PUBLIC API (hidden from docs for a reason!)
    ///
    /// Debugging tool to make sure that all of the meta-data of the
    /// tree is consistent with the actual data.
    #[doc(hidden)]
    pub fn assert_integrity(&self) {
        self.root.assert_integrity();
    }

    /// NOT PART OF THE PUBLIC API (hidden from docs for a reason!)
    ///
    /// Debugging tool to make sure that all of the following invariants
    /// hold true throughout the tree:
    ///
    /// - No node's children differ in height by more than one.
    /// - All leaf nodes are non-empty, except for the root of an empty
    ///   rope.
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        self.root.assert_invariants(true);
    }
}

//==============================================================
// Stdlib trait impls.

impl std::fmt::Debug for Rope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.chunks()).finish()
    }
}

impl std::fmt::Display for Rope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.chunks() {
            write!(f, "{}", chunk)?;
        }
        Ok(())
    }
}

impl From<&str> for Rope {
    #[inline]
    fn from(text: &str) -> Self {
        Rope::from_str(text)
    }
}

impl From<String> for Rope {
    #[inline]
    fn from(text: String) -> Self {
        Rope::from_str(&text)
    }
}

impl<'a> From<Cow<'a, str>> for Rope {
    #[inline]
    fn from(text: Cow<'a, str>) -> Self {
        Rope::from_str(&text)
    }
}

impl From<Rope> for String {
    #[inline]
    fn from(r: Rope) -> Self {
        let mut text = String::with_capacity(r.len_bytes());
        for chunk in r.chunks() {
            text.push_str(chunk);
        }
        text
    }
}

impl From<&Rope> for String {
    #[inline]
    fn from(r: &Rope) -> Self {
        let mut text = String::with_capacity(r.len_bytes());
        for chunk in r.chunks() {
            text.push_str(chunk);
        }
        text
    }
}

impl std::iter::FromIterator<String> for Rope {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = String>,
    {
        let mut builder = RopeBuilder::new();
        for chunk in iter {
            builder.append(&chunk);
        }
        builder.finish()
    }
}

impl<'a> std::iter::FromIterator<&'a str> for Rope {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = &'a str>,
    {
        let mut builder = RopeBuilder::new();
        for chunk in iter {
            builder.append(chunk);
        }
        builder.finish()
    }
}

//-------------------------------------------------------------
// Comparison.
//
// Ropes with the same text compare equal regardless of how that text is
// split into chunks.

impl std::cmp::Eq for Rope {}

impl std::cmp::PartialEq<Rope> for Rope {
    fn eq(&self, other: &Rope) -> bool {
        if self.len_bytes() != other.len_bytes() {
            return false;
        }

        let mut chunk_itr_1 = self.chunks();
        let mut chunk_itr_2 = other.chunks();
        let mut chunk1 = chunk_itr_1.next().unwrap_or("").as_bytes();
        let mut chunk2 = chunk_itr_2.next().unwrap_or("").as_bytes();

        loop {
            if chunk1.len() > chunk2.len() {
                if &chunk1[..chunk2.len()] != chunk2 {
                    return false;
                }
                chunk1 = &chunk1[chunk2.len()..];
                chunk2 = &[];
            } else {
                if &chunk2[..chunk1.len()] != chunk1 {
                    return false;
                }
                chunk2 = &chunk2[chunk1.len()..];
                chunk1 = &[];
            }

            if chunk1.is_empty() {
                if let Some(chunk) = chunk_itr_1.next() {
                    chunk1 = chunk.as_bytes();
                } else {
                    break;
                }
            }

            if chunk2.is_empty() {
                if let Some(chunk) = chunk_itr_2.next() {
                    chunk2 = chunk.as_bytes();
                } else {
                    break;
                }
            }
        }

        return true;
    }
}

impl std::cmp::PartialEq<str> for Rope {
    fn eq(&self, other: &str) -> bool {
        if self.len_bytes() != other.len() {
            return false;
        }
        let other = other.as_bytes();

        let mut idx = 0;
        for chunk in self.chunks() {
            let chunk = chunk.as_bytes();
            if chunk != &other[idx..(idx + chunk.len())] {
                return false;
            }
            idx += chunk.len();
        }

        return true;
    }
}

impl std::cmp::PartialEq<&str> for Rope {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl std::cmp::PartialEq<Rope> for &str {
    #[inline]
    fn eq(&self, other: &Rope) -> bool {
        *other == **self
    }
}

impl std::cmp::PartialEq<Rope> for str {
    #[inline]
    fn eq(&self, other: &Rope) -> bool {
        *other == *self
    }
}

impl std::cmp::PartialEq<String> for Rope {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        *self == *other.as_str()
    }
}

impl std::cmp::PartialEq<Rope> for String {
    #[inline]
    fn eq(&self, other: &Rope) -> bool {
        *other == *self.as_str()
    }
}

//-------------------------------------------------------------
// Hashing.

impl std::hash::Hash for Rope {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // `std::hash::Hasher` only guarantees the same hash output for
        // exactly the same calls to `Hasher::write()`.  Just submitting
        // the same data in the same order isn't enough--it also has
        // to be split the same between calls.  So we always submit the
        // text data in the same fixed-size blocks, even if those blocks
        // don't align with chunk boundaries at all.
        const BLOCK_SIZE: usize = 256;

        let mut buffer = [0u8; BLOCK_SIZE];
        let mut buffer_len = 0;

        for chunk in self.chunks() {
            let mut data = chunk.as_bytes();

            while !data.is_empty() {
                if buffer_len == 0 && data.len() >= BLOCK_SIZE {
                    // Process data directly, skipping the buffer.
                    let (head, tail) = data.split_at(BLOCK_SIZE);
                    state.write(head);
                    data = tail;
                } else if buffer_len == BLOCK_SIZE {
                    // Process the filled buffer.
                    state.write(&buffer[..]);
                    buffer_len = 0;
                } else {
                    // Append to the buffer.
                    let n = (BLOCK_SIZE - buffer_len).min(data.len());
                    let (head, tail) = data.split_at(n);
                    buffer[buffer_len..(buffer_len + n)].copy_from_slice(head);
                    buffer_len += n;
                    data = tail;
                }
            }
        }

        // Write any remaining unprocessed data in the buffer.
        if buffer_len > 0 {
            state.write(&buffer[..buffer_len]);
        }

        // Same strategy as `&str` in stdlib, so that e.g. two adjacent
        // fields in a `#[derive(Hash)]` struct with "Hi " and "there"
        // vs "Hi t" and "here" give the struct a different hash.
        state.write_u8(0xff)
    }
}

//==============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    // 127 bytes, 103 chars
    const TEXT: &str = "Hello there!  How're you doing?\r\nIt's \
                        a fine day, isn't it?\r\nAren't you glad \
                        we're alive?\r\nこんにちは、みんなさん！";

    #[test]
    fn new_01() {
        let r = Rope::new();
        assert_eq!(r, "");
        assert_eq!(0, r.len_chars());
        assert_eq!(0, r.len_bytes());
        assert_eq!(1, r.depth());
        assert!(r.is_empty());

        r.assert_integrity();
        r.assert_invariants();
    }

    #[test]
    fn from_str_01() {
        let r = Rope::from_str(TEXT);
        assert_eq!(r, TEXT);
        assert_eq!(103, r.len_chars());
        assert_eq!(127, r.len_bytes());
        assert!(r.depth() > 1);

        r.assert_integrity();
        r.assert_invariants();
    }

    #[test]
    fn insert_01() {
        let r = Rope::from_str("Hello world!").insert(3, "zopter").unwrap();
        assert_eq!("Helzopterlo world!", r);

        r.assert_integrity();
        r.assert_invariants();
    }

    #[test]
    fn insert_02() {
        let r = Rope::from_str("Hello world!").insert(0, "zopter").unwrap();
        assert_eq!("zopterHello world!", r);
    }

    #[test]
    fn insert_03() {
        let r = Rope::from_str("Hello world!").insert(12, "zopter").unwrap();
        assert_eq!("Hello world!zopter", r);
    }

    #[test]
    fn insert_04() {
        let mut r = Rope::new();
        r.try_insert(0, "He").unwrap();
        r.try_insert(2, "l").unwrap();
        r.try_insert(3, "l").unwrap();
        r.try_insert(4, "o w").unwrap();
        r.try_insert(7, "o").unwrap();
        r.try_insert(8, "rl").unwrap();
        r.try_insert(10, "d!").unwrap();
        r.try_insert(3, "zopter").unwrap();

        assert_eq!("Helzopterlo world!", r);

        r.assert_integrity();
        r.assert_invariants();
    }

    #[test]
    fn insert_05() {
        let r = Rope::new().insert(0, "こんいちは、みんなさん！").unwrap();
        let r = r.insert(7, "zopter").unwrap();
        assert_eq!("こんいちは、みzopterんなさん！", r);

        r.assert_integrity();
        r.assert_invariants();
    }

    #[test]
    fn insert_06() {
        let r = Rope::from_str("Hello").insert(5, "").unwrap();
        assert_eq!("Hello", r);
    }

    #[test]
    fn insert_07() {
        let mut r = Rope::from_str("Hello");
        assert_eq!(Err(Error::IndexOutOfRange(6, 5)), r.try_insert(6, "!"));
        assert_eq!("Hello", r);

        let r = Rope::from_str("Hello");
        assert_eq!(
            Err(Error::IndexOutOfRange(100, 5)),
            r.insert(100, "!").map(|_| ())
        );
    }

    #[test]
    fn remove_01() {
        let mut r = Rope::from_str("Hello world! How are you doing? こんいちは、みんなさん！");

        assert_eq!(" world", r.try_remove(5, 11).unwrap());
        assert_eq!(" doing?", r.try_remove(18, 25).unwrap());
        assert_eq!("you ", r.try_remove(15, 19).unwrap());
        assert_eq!("Hello! How are こんいちは、みんなさん！", r);

        r.assert_integrity();
        r.assert_invariants();
    }

    #[test]
    fn remove_02() {
        let mut r = Rope::from_str(TEXT);

        assert_eq!("", r.try_remove(5, 5).unwrap());
        assert_eq!(r, TEXT);

        assert_eq!(TEXT, r.try_remove(0, 103).unwrap());
        assert_eq!(r, "");

        r.assert_integrity();
        r.assert_invariants();
    }

    #[test]
    fn remove_03() {
        let mut r = Rope::from_str(TEXT);
        assert_eq!(
            Err(Error::RangeOutOfRange(6, 5, 103)),
            r.try_remove(6, 5).map(|_| ())
        );
        assert_eq!(
            Err(Error::RangeOutOfRange(5, 104, 103)),
            r.try_remove(5, 104).map(|_| ())
        );
        assert_eq!(r, TEXT);
    }

    #[test]
    fn split_01() {
        let r = Rope::from_str(TEXT);
        let (r1, r2) = r.split(20).unwrap();
        assert_eq!(&TEXT[..20], r1);
        assert_eq!(&TEXT[20..], r2);

        r1.assert_integrity();
        r2.assert_integrity();
        r1.assert_invariants();
        r2.assert_invariants();
    }

    #[test]
    fn split_02() {
        let (r1, r2) = Rope::from_str(TEXT).split(0).unwrap();
        assert_eq!("", r1);
        assert_eq!(TEXT, r2);

        r1.assert_integrity();
        r2.assert_integrity();
        r1.assert_invariants();
        r2.assert_invariants();
    }

    #[test]
    fn split_03() {
        let (r1, r2) = Rope::from_str(TEXT).split(103).unwrap();
        assert_eq!(TEXT, r1);
        assert_eq!("", r2);

        r1.assert_integrity();
        r2.assert_integrity();
        r1.assert_invariants();
        r2.assert_invariants();
    }

    #[test]
    fn split_04() {
        assert_eq!(
            Err(Error::IndexOutOfRange(104, 103)),
            Rope::from_str(TEXT).split(104).map(|_| ())
        );
    }

    #[test]
    fn split_05() {
        // Split in the middle of the non-ascii text.
        let (r1, r2) = Rope::from_str(TEXT).split(97).unwrap();
        assert_eq!("Hello there!  How're you doing?\r\nIt's a fine day, isn't it?\r\nAren't you glad we're alive?\r\nこんにちは、", r1);
        assert_eq!("みんなさん！", r2);
    }

    #[test]
    fn try_split_off_01() {
        let mut r = Rope::from_str(TEXT);
        assert!(r.try_split_off(200).is_err());
        assert_eq!(r, TEXT);

        let r2 = r.try_split_off(50).unwrap();
        assert_eq!(&TEXT[..50], r);
        assert_eq!(&TEXT[50..], r2);
    }

    #[test]
    fn concat_01() {
        let r = Rope::from_str("Hello world! How are")
            .concat(Rope::from_str(" you doing? こんいちは、みんなさん！"));
        assert_eq!(r, "Hello world! How are you doing? こんいちは、みんなさん！");

        r.assert_integrity();
        r.assert_invariants();
    }

    #[test]
    fn concat_02() {
        // Small leaves merge.
        let r = Rope::from_str("Hel").concat(Rope::from_str("lo"));
        assert_eq!(1, r.depth());
        assert_eq!(vec!["Hello"], r.chunks().collect::<Vec<_>>());
    }

    #[test]
    fn concat_03() {
        let r = Rope::new().concat(Rope::from_str(TEXT));
        assert_eq!(r, TEXT);
        let r = r.concat(Rope::new());
        assert_eq!(r, TEXT);

        r.assert_integrity();
        r.assert_invariants();
    }

    #[test]
    fn concat_04() {
        // Repeated appends of tiny ropes keep the depth logarithmic.
        let mut r = Rope::new();
        for _ in 0..2000 {
            r.append(Rope::from_str("Hello world! "));
        }
        assert_eq!(26000, r.len_chars());
        assert!(r.depth() <= 20);

        r.assert_integrity();
        r.assert_invariants();
    }

    #[test]
    fn substr_01() {
        let r = Rope::from_str(TEXT);
        assert_eq!(&TEXT[5..21], r.substr(5, 21).unwrap());
        assert_eq!("", r.substr(21, 21).unwrap());
        assert_eq!(TEXT, r.substr(0, 103).unwrap());
        assert_eq!("こんにちは", r.substr(91, 96).unwrap());
    }

    #[test]
    fn substr_02() {
        let r = Rope::from_str(TEXT);
        assert_eq!(Err(Error::RangeOutOfRange(21, 20, 103)), r.substr(21, 20));
        assert_eq!(Err(Error::RangeOutOfRange(0, 104, 103)), r.substr(0, 104));
    }

    #[test]
    fn round_trip_01() {
        // Splitting and rejoining reproduces the original.
        for (i, j) in [(0, 0), (0, 103), (10, 50), (50, 50), (96, 103)] {
            let substr = Rope::from_str(TEXT).substr(i, j).unwrap();
            let (left, _) = Rope::from_str(TEXT).split(i).unwrap();
            let (_, right) = Rope::from_str(TEXT).split(j).unwrap();
            let r = left.concat(Rope::from_str(&substr).concat(right));
            assert_eq!(r, TEXT);
            r.assert_integrity();
            r.assert_invariants();
        }
    }

    #[test]
    fn eq_01() {
        let r1 = Rope::from_str("Hello world!");
        let r2 = Rope::from_str("Hel").concat(Rope::from_str("lo world!"));
        assert_eq!(r1, r2);
        assert_eq!(r2, r1);
        assert_eq!(r1, "Hello world!");
        assert_eq!("Hello world!", r1);
        assert_eq!(r1, String::from("Hello world!"));
        assert_eq!(String::from("Hello world!"), r1);
    }

    #[test]
    fn eq_02() {
        let r1 = Rope::from_str("Hello world!");
        let r2 = Rope::from_str("Hello world?");
        let r3 = Rope::from_str("Hello world");
        assert_ne!(r1, r2);
        assert_ne!(r1, r3);
        assert_ne!(r1, "Hello world?");
    }

    #[test]
    fn display_01() {
        let r = Rope::from_str(TEXT);
        assert_eq!(TEXT, r.to_string());
        assert_eq!(TEXT, String::from(&r));
        assert_eq!(TEXT, String::from(r));
    }

    #[test]
    fn from_iter_01() {
        let r: Rope = ["Hello ", "world", "!"].into_iter().collect();
        assert_eq!("Hello world!", r);

        r.assert_integrity();
        r.assert_invariants();
    }
}
