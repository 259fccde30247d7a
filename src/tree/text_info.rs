/// Cached text metrics of a subtree.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub(crate) struct TextInfo {
    pub(crate) bytes: usize,
    pub(crate) chars: usize,
}

impl TextInfo {
    #[inline]
    pub(crate) fn new() -> TextInfo {
        TextInfo { bytes: 0, chars: 0 }
    }

    #[inline]
    pub(crate) fn from_str(text: &str) -> TextInfo {
        TextInfo {
            bytes: text.len(),
            chars: str_indices::chars::count(text),
        }
    }

    #[inline]
    pub(crate) fn combine(self, other: TextInfo) -> TextInfo {
        TextInfo {
            bytes: self.bytes + other.bytes,
            chars: self.chars + other.chars,
        }
    }
}
