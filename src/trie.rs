//! A static dictionary over the printable ASCII alphabet.

use crate::{Error, Result};

/// First char of the supported alphabet.
const ALPHABET_START: u8 = b'!';
/// Last char of the supported alphabet.
const ALPHABET_END: u8 = b'~';

/// Number of symbols in the supported alphabet: the printable, non-space
/// ASCII chars `'!'..='~'`.
pub const ALPHABET_SIZE: usize = (ALPHABET_END - ALPHABET_START + 1) as usize;

/// Maps a char to its alphabet index, or `None` if it is outside the
/// alphabet.
#[inline(always)]
fn symbol(c: char) -> Option<u8> {
    if c.is_ascii() && (ALPHABET_START..=ALPHABET_END).contains(&(c as u8)) {
        Some(c as u8 - ALPHABET_START)
    } else {
        None
    }
}

/// A prefix tree used as a dictionary for exact, case-sensitive word
/// lookup.
///
/// Lookup runs in O(word length) time regardless of the number of words
/// stored.  Words may only contain chars in the alphabet `'!'..='~'`; any
/// other char makes insertion fail and lookup miss.
///
/// A `Trie` has no removal operation.  Once built it is meant to be
/// shared read-only, e.g. behind an `Arc`, across any number of editors
/// and threads.
///
/// # Example
///
/// ```
/// # use ropedit::Trie;
/// #
/// let (trie, rejected) = Trie::build(["go", "golang", "man", "mango", "über"]);
///
/// assert!(trie.contains("mango"));
/// assert!(!trie.contains("mang"));
/// assert_eq!(4, trie.len());
/// assert_eq!(1, rejected.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

/// Each node stores only the children that are present, sorted by symbol
/// so they can be binary searched.  Most nodes in a natural-language
/// dictionary have only a handful of the 94 possible children.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: Vec<(u8, Box<TrieNode>)>,
    terminal: bool,
}

impl TrieNode {
    #[inline]
    fn child(&self, sym: u8) -> Option<&TrieNode> {
        self.children
            .binary_search_by_key(&sym, |&(s, _)| s)
            .ok()
            .map(|i| &*self.children[i].1)
    }

    fn child_or_insert(&mut self, sym: u8) -> &mut TrieNode {
        let i = match self.children.binary_search_by_key(&sym, |&(s, _)| s) {
            Ok(i) => i,
            Err(i) => {
                self.children.insert(i, (sym, Box::default()));
                i
            }
        };
        &mut self.children[i].1
    }
}

impl Trie {
    /// Creates an empty `Trie`.
    #[inline]
    pub fn new() -> Self {
        Trie::default()
    }

    /// Builds a `Trie` from a sequence of words.
    ///
    /// Words that can't be inserted (see [`insert()`](Trie::insert)) are
    /// skipped, and their errors are returned alongside the trie in input
    /// order.  Duplicate words are not errors.
    pub fn build<I>(words: I) -> (Trie, Vec<Error>)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut trie = Trie::new();
        let mut rejected = Vec::new();
        for word in words {
            if let Err(err) = trie.insert(word.as_ref()) {
                tracing::trace!(%err, "rejected dictionary word");
                rejected.push(err);
            }
        }

        tracing::debug!(
            words = trie.len(),
            rejected = rejected.len(),
            "built dictionary"
        );
        (trie, rejected)
    }

    /// Inserts a word.
    ///
    /// Returns `true` if the word was newly added, and `false` if it was
    /// already present.
    ///
    /// # Errors
    ///
    /// - `InvalidCharacter` if the word contains a char outside the
    ///   alphabet.
    /// - `EmptyWord` if the word is empty.
    ///
    /// On error the trie is left unmodified.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        if word.is_empty() {
            return Err(Error::EmptyWord);
        }
        if let Some((position, ch)) = word.chars().enumerate().find(|&(_, c)| symbol(c).is_none())
        {
            return Err(Error::InvalidCharacter {
                word: word.into(),
                ch,
                position,
            });
        }

        // Everything is in the alphabet now, and therefore ascii.
        let mut node = &mut self.root;
        for byte in word.bytes() {
            node = node.child_or_insert(byte - ALPHABET_START);
        }

        if node.terminal {
            Ok(false)
        } else {
            node.terminal = true;
            self.len += 1;
            Ok(true)
        }
    }

    /// Returns whether `word` is in the dictionary.
    ///
    /// Only exact matches count: a prefix of a stored word is not itself
    /// contained unless it was inserted too.  Words with chars outside the
    /// alphabet are never contained.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            let next = symbol(c).and_then(|sym| node.child(sym));
            match next {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// Number of distinct words in the dictionary.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the dictionary has no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Collects words into a `Trie`, silently skipping any that can't be
/// inserted.  Use [`Trie::build()`] to find out which words were skipped.
impl<S: AsRef<str>> std::iter::FromIterator<S> for Trie {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = S>,
    {
        Trie::build(iter).0
    }
}

//===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_01() {
        assert_eq!(94, ALPHABET_SIZE);
        assert_eq!(Some(0), symbol('!'));
        assert_eq!(Some(93), symbol('~'));
        assert_eq!(Some(b'a' - b'!'), symbol('a'));
        assert_eq!(None, symbol(' '));
        assert_eq!(None, symbol('\n'));
        assert_eq!(None, symbol('\u{7f}'));
        assert_eq!(None, symbol('み'));
    }

    #[test]
    fn insert_01() {
        let mut trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(Ok(true), trie.insert("mango"));
        assert_eq!(Ok(true), trie.insert("man"));
        assert_eq!(Ok(false), trie.insert("mango"));
        assert_eq!(2, trie.len());
        assert!(!trie.is_empty());
    }

    #[test]
    fn insert_02() {
        let mut trie = Trie::new();
        assert_eq!(
            Err(Error::InvalidCharacter {
                word: "new york".into(),
                ch: ' ',
                position: 3,
            }),
            trie.insert("new york")
        );
        assert_eq!(
            Err(Error::InvalidCharacter {
                word: "café".into(),
                ch: 'é',
                position: 3,
            }),
            trie.insert("café")
        );
        assert_eq!(Err(Error::EmptyWord), trie.insert(""));

        // Nothing was partially inserted.
        assert!(trie.is_empty());
        assert!(!trie.contains("new"));
        assert!(!trie.contains("caf"));
        assert!(trie.root.children.is_empty());
    }

    #[test]
    fn contains_01() {
        let trie: Trie = ["a", "and", "an", "go", "golang", "man", "mango"]
            .into_iter()
            .collect();

        assert!(trie.contains("a"));
        assert!(trie.contains("and"));
        assert!(trie.contains("golang"));
        assert!(trie.contains("mango"));

        assert!(!trie.contains("lang"));
        assert!(!trie.contains("gol"));
        assert!(!trie.contains("mangos"));
        assert!(!trie.contains("Mango"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn contains_02() {
        let trie: Trie = ["don't", "C++", "e-mail", "~!@#"].into_iter().collect();

        assert!(trie.contains("don't"));
        assert!(trie.contains("C++"));
        assert!(trie.contains("e-mail"));
        assert!(trie.contains("~!@#"));

        // Out-of-alphabet chars are a miss, not a fault.
        assert!(!trie.contains("don t"));
        assert!(!trie.contains("C++\n"));
        assert!(!trie.contains("e\u{0}mail"));
        assert!(!trie.contains("みんな"));
    }

    #[test]
    fn build_01() {
        let (trie, rejected) = Trie::build(vec![
            String::from("hello"),
            String::from("hello world"),
            String::from("world"),
            String::from(""),
            String::from("world"),
        ]);

        assert_eq!(2, trie.len());
        assert!(trie.contains("hello"));
        assert!(trie.contains("world"));
        assert_eq!(
            vec![
                Error::InvalidCharacter {
                    word: "hello world".into(),
                    ch: ' ',
                    position: 5,
                },
                Error::EmptyWord,
            ],
            rejected
        );
    }

    #[test]
    fn children_sorted_01() {
        let trie: Trie = ["z", "a", "m", "~", "!"].into_iter().collect();
        let syms: Vec<u8> = trie.root.children.iter().map(|&(s, _)| s).collect();
        let mut sorted = syms.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, syms);
        assert_eq!(5, syms.len());
    }
}
