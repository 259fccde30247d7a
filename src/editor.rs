use std::cell::OnceCell;
use std::collections::HashSet;
use std::sync::Arc;

use crate::rope::Rope;
use crate::trie::Trie;
use crate::{check_index, Error, Result};

/// The editing operations of a text document with a single-slot
/// clipboard.
///
/// All indices are 0-based char offsets into the current document.
pub trait TextEditor {
    /// Removes chars `[start, end)` from the document and places them in
    /// the clipboard, overwriting its previous contents.
    fn cut(&mut self, start: usize, end: usize) -> Result<()>;

    /// Places chars `[start, end)` of the document in the clipboard,
    /// overwriting its previous contents.
    fn copy(&mut self, start: usize, end: usize) -> Result<()>;

    /// Inserts the contents of the clipboard into the document at
    /// `char_idx`.  Nothing is inserted if the clipboard is empty.
    fn paste(&mut self, char_idx: usize) -> Result<()>;

    /// Returns the document as a string.
    fn get_text(&self) -> &str;

    /// Returns the number of distinct misspelled words in the document.
    fn misspellings(&self) -> usize;
}

/// A text document backed by a [`Rope`], with a clipboard and a
/// dictionary for counting misspellings.
///
/// An `Editor` is not meant for concurrent use.  Wrap it in a `Mutex` if
/// more than one thread needs to edit the same document.  The dictionary,
/// on the other hand, is immutable and can be shared by any number of
/// editors via [`Editor::with_dictionary()`].
///
/// # Example
///
/// ```
/// use ropedit::{Editor, TextEditor};
///
/// let mut editor = Editor::new("Neeva is awesome!", ["Neeva", "is"]);
/// assert_eq!(editor.misspellings(), 1);
///
/// editor.copy(0, 6).unwrap();
/// editor.paste(0).unwrap();
/// editor.paste(0).unwrap();
/// assert_eq!(editor.get_text(), "Neeva Neeva Neeva is awesome!");
/// assert_eq!(editor.misspellings(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Editor {
    document: Rope,
    clipboard: String,
    dictionary: Arc<Trie>,
    rejected: Vec<Error>,
    // Flattened `document`, filled on demand.  Must be reset on every
    // mutation of `document`.
    flattened: OnceCell<String>,
}

impl Editor {
    /// Creates an editor over `text`, building its dictionary from `words`.
    ///
    /// Words that can't be added to the dictionary are skipped; see
    /// [`rejected_words()`](Editor::rejected_words).
    pub fn new<I>(text: &str, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let (trie, rejected) = Trie::build(words);
        let mut editor = Editor::with_dictionary(text, Arc::new(trie));
        editor.rejected = rejected;
        editor
    }

    /// Creates an editor over `text` that uses an already built, shared
    /// dictionary.
    pub fn with_dictionary(text: &str, dictionary: Arc<Trie>) -> Self {
        tracing::debug!(
            bytes = text.len(),
            dictionary_words = dictionary.len(),
            "new editor"
        );
        Editor {
            document: Rope::from_str(text),
            clipboard: String::new(),
            dictionary,
            rejected: Vec::new(),
            flattened: OnceCell::new(),
        }
    }

    /// Inserts `text` directly into the document at `char_idx`, leaving the
    /// clipboard untouched.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> Result<()> {
        self.document.try_insert(char_idx, text)?;
        self.invalidate();
        Ok(())
    }

    /// The current document.
    #[inline]
    pub fn document(&self) -> &Rope {
        &self.document
    }

    /// Length of the current document in chars.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.document.len_chars()
    }

    /// The current clipboard contents.
    #[inline]
    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    /// The dictionary used for spell checking.
    #[inline]
    pub fn dictionary(&self) -> &Arc<Trie> {
        &self.dictionary
    }

    /// The words that were skipped when building the dictionary in
    /// [`Editor::new()`], in input order.
    #[inline]
    pub fn rejected_words(&self) -> &[Error] {
        &self.rejected
    }

    fn invalidate(&mut self) {
        self.flattened.take();
    }
}

impl TextEditor for Editor {
    fn cut(&mut self, start: usize, end: usize) -> Result<()> {
        let removed = self.document.try_remove(start, end)?;
        tracing::trace!(start, end, "cut");

        self.clipboard = removed.into();
        if start != end {
            self.invalidate();
        }
        Ok(())
    }

    fn copy(&mut self, start: usize, end: usize) -> Result<()> {
        self.clipboard = self.document.substr(start, end)?;
        tracing::trace!(start, end, "copy");
        Ok(())
    }

    fn paste(&mut self, char_idx: usize) -> Result<()> {
        check_index(char_idx, self.document.len_chars())?;
        tracing::trace!(char_idx, len = self.clipboard.len(), "paste");

        if self.clipboard.is_empty() {
            return Ok(());
        }
        self.document.try_insert(char_idx, &self.clipboard)?;
        self.invalidate();
        Ok(())
    }

    fn get_text(&self) -> &str {
        self.flattened.get_or_init(|| self.document.to_string())
    }

    fn misspellings(&self) -> usize {
        let mut seen = HashSet::new();
        self.get_text()
            .split_whitespace()
            .filter(|word| seen.insert(*word))
            .filter(|word| !self.dictionary.contains(word))
            .count()
    }
}

//===========================================================================
