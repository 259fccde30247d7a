use super::TextInfo;

/// A leaf node of the Rope, containing a contiguous fragment of text.
///
/// Leaves are treated as immutable once they are in a tree: splitting
/// or merging a leaf produces new leaves rather than editing in place.
#[derive(Clone, Default)]
pub(crate) struct Leaf {
    text: String,
    chars: usize,
}

impl Leaf {
    /// Creates a new `Leaf` with the same contents as the given `&str`.
    pub fn from_str(text: &str) -> Leaf {
        Leaf {
            text: text.into(),
            chars: str_indices::chars::count(text),
        }
    }

    #[inline(always)]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline(always)]
    pub fn text_info(&self) -> TextInfo {
        TextInfo {
            bytes: self.text.len(),
            chars: self.chars,
        }
    }

    /// Returns the byte index of the given char index.
    ///
    /// If `char_idx` is past the end, returns the byte length.
    #[inline]
    pub fn char_to_byte(&self, char_idx: usize) -> usize {
        if self.text.len() == self.chars {
            // Pure ascii, so chars and bytes coincide.
            char_idx.min(self.text.len())
        } else {
            str_indices::chars::to_byte_idx(&self.text, char_idx)
        }
    }

    /// Returns the text in the char range `[start, end)`.
    pub fn char_slice(&self, start: usize, end: usize) -> &str {
        debug_assert!(start <= end && end <= self.chars);
        let start_byte = self.char_to_byte(start);
        let end_byte = self.char_to_byte(end);
        &self.text[start_byte..end_byte]
    }

    /// Splits the leaf at `char_idx`, consuming it.
    ///
    /// The left side reuses this leaf's allocation.
    pub fn split(mut self, char_idx: usize) -> (Leaf, Leaf) {
        debug_assert!(char_idx <= self.chars);
        let byte_idx = self.char_to_byte(char_idx);
        let right_text = self.text.split_off(byte_idx);
        let right = Leaf {
            chars: self.chars - char_idx,
            text: right_text,
        };
        self.chars = char_idx;
        self.text.shrink_to_fit();
        (self, right)
    }

    /// Appends the contents of `other` to the end of this leaf.
    pub fn merge(mut self, other: Leaf) -> Leaf {
        self.text.push_str(&other.text);
        self.chars += other.chars;
        self
    }
}

impl std::fmt::Debug for Leaf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_fmt(format_args!("Leaf {{ text: {:?} }}", self.text))
    }
}

//===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_01() {
        let leaf = Leaf::from_str("Hello!");
        assert_eq!("Hello!", leaf.text());
        assert_eq!(6, leaf.len());
        assert_eq!(6, leaf.text_info().chars);
        assert!(!leaf.is_empty());
        assert!(Leaf::from_str("").is_empty());
    }

    #[test]
    fn char_to_byte_01() {
        let leaf = Leaf::from_str("aみb");
        assert_eq!(0, leaf.char_to_byte(0));
        assert_eq!(1, leaf.char_to_byte(1));
        assert_eq!(4, leaf.char_to_byte(2));
        assert_eq!(5, leaf.char_to_byte(3));
    }

    #[test]
    fn char_slice_01() {
        let leaf = Leaf::from_str("aみbc");
        assert_eq!("", leaf.char_slice(0, 0));
        assert_eq!("みb", leaf.char_slice(1, 3));
        assert_eq!("aみbc", leaf.char_slice(0, 4));
    }

    #[test]
    fn split_01() {
        let (left, right) = Leaf::from_str("Hello!").split(2);
        assert_eq!("He", left.text());
        assert_eq!("llo!", right.text());
        assert_eq!(2, left.text_info().chars);
        assert_eq!(4, right.text_info().chars);
    }

    #[test]
    fn split_02() {
        let (left, right) = Leaf::from_str("みんな").split(1);
        assert_eq!("み", left.text());
        assert_eq!("んな", right.text());
        assert_eq!(TextInfo { bytes: 6, chars: 2 }, right.text_info());
    }

    #[test]
    fn split_03() {
        let (left, right) = Leaf::from_str("Hi").split(2);
        assert_eq!("Hi", left.text());
        assert!(right.is_empty());

        let (left, right) = Leaf::from_str("Hi").split(0);
        assert!(left.is_empty());
        assert_eq!("Hi", right.text());
    }

    #[test]
    fn merge_01() {
        let leaf = Leaf::from_str("He").merge(Leaf::from_str("llo"));
        assert_eq!("Hello", leaf.text());
        assert_eq!(TextInfo { bytes: 5, chars: 5 }, leaf.text_info());
    }
}
