use crate::find_split_l;
use crate::rope::Rope;
use crate::tree::{Leaf, Node, MAX_LEAF_BYTES};

/// An incremental `Rope` builder.
///
/// `RopeBuilder` is used to efficiently build `Rope`s from sequences
/// of text chunks.  It is useful for situations such as:
///
/// - Creating a rope from a large string without going through repeated
///   concatenation (`Rope::from_str()` uses `RopeBuilder` internally for
///   precisely this use-case).
/// - Creating a rope from a streaming data source.
///
/// Unlike repeatedly calling `Rope::concat()` or `Rope::append()`, this
/// API runs in time linear to the amount of data fed to it, and the
/// resulting tree has every leaf filled close to capacity.
///
/// (The converse of this API is the [`Chunks`](iter/struct.Chunks.html)
/// iterator.)
///
/// # Example
/// ```
/// # use ropedit::RopeBuilder;
/// #
/// let mut builder = RopeBuilder::new();
///
/// builder.append("Hello ");
/// builder.append("world!\n");
/// builder.append("How's ");
/// builder.append("it goin");
/// builder.append("g?");
///
/// let rope = builder.finish();
///
/// assert_eq!(rope, "Hello world!\nHow's it going?");
/// ```
#[derive(Debug, Clone)]
pub struct RopeBuilder {
    // Subtrees of strictly decreasing height, left to right.
    stack: Vec<Node>,
    buffer: String,
}

impl RopeBuilder {
    /// Creates a new RopeBuilder, ready for input.
    pub fn new() -> RopeBuilder {
        RopeBuilder {
            stack: Vec::with_capacity(16),
            buffer: String::with_capacity(MAX_LEAF_BYTES),
        }
    }

    /// Appends `chunk` to the end of the in-progress `Rope`.
    ///
    /// This method is called repeatedly to incrementally build up a
    /// `Rope`.  The passed text chunk can be as large or small as
    /// desired, but larger chunks are more efficient.
    pub fn append(&mut self, chunk: &str) {
        let mut chunk = chunk;

        // Repeatedly chop text off the front of the input, creating
        // leaf nodes out of it and appending them to the tree.
        while !chunk.is_empty() {
            let (leaf_text, remainder) = self.get_next_leaf_text(chunk);
            chunk = remainder;

            match leaf_text {
                NextText::None => break,
                NextText::UseBuffer => {
                    let leaf = Leaf::from_str(&self.buffer);
                    self.buffer.clear();
                    self.append_leaf_node(Node::Leaf(leaf));
                }
                NextText::String(s) => {
                    self.append_leaf_node(Node::Leaf(Leaf::from_str(s)));
                }
            }
        }
    }

    /// Finishes the build, and returns the `Rope`.
    ///
    /// Note: this consumes the builder.  If you want to continue building
    /// other ropes with the same prefix, you can clone the builder before
    /// calling `finish()`.
    pub fn finish(mut self) -> Rope {
        // Append the last leaf.
        if !self.buffer.is_empty() {
            let leaf = Leaf::from_str(&self.buffer);
            self.buffer.clear();
            self.append_leaf_node(Node::Leaf(leaf));
        }

        // Zip up all the remaining subtrees on the stack, right to left.
        let mut root = self.stack.pop().unwrap_or_default();
        while let Some(node) = self.stack.pop() {
            root = Node::join(node, root);
        }

        Rope::from_root(root)
    }

    //-----------------------------------------------------------------
    // Internal APIs for testing.

    /// NOT PART OF THE PUBLIC API (hidden from docs for a reason!).
    ///
    /// Appends `chunk` as its own leaf(s), without combining it with
    /// previously appended text.  This lets tests build ropes with specific
    /// chunk boundaries.
    #[doc(hidden)]
    pub fn _append_chunk(&mut self, chunk: &str) {
        if !self.buffer.is_empty() {
            let leaf = Leaf::from_str(&self.buffer);
            self.buffer.clear();
            self.append_leaf_node(Node::Leaf(leaf));
        }
        self.append(chunk);
        if !self.buffer.is_empty() {
            let leaf = Leaf::from_str(&self.buffer);
            self.buffer.clear();
            self.append_leaf_node(Node::Leaf(leaf));
        }
    }

    //-----------------------------------------------------------------

    // Returns (next_leaf_text, remaining_text)
    fn get_next_leaf_text<'a>(&mut self, text: &'a str) -> (NextText<'a>, &'a str) {
        if self.buffer.is_empty() {
            if text.len() > MAX_LEAF_BYTES {
                // Simplest case: just chop off the front of `text`.
                let split_idx = find_split_l(MAX_LEAF_BYTES, text.as_bytes());
                (NextText::String(&text[..split_idx]), &text[split_idx..])
            } else {
                self.buffer.push_str(text);
                (NextText::None, "")
            }
        } else if (text.len() + self.buffer.len()) > MAX_LEAF_BYTES {
            let split_idx = find_split_l(MAX_LEAF_BYTES - self.buffer.len(), text.as_bytes());
            self.buffer.push_str(&text[..split_idx]);
            (NextText::UseBuffer, &text[split_idx..])
        } else {
            self.buffer.push_str(text);
            (NextText::None, "")
        }
    }

    fn append_leaf_node(&mut self, leaf: Node) {
        if leaf.is_empty() {
            return;
        }
        self.stack.push(leaf);

        // Merge equal-height subtrees so the stack always holds perfect
        // trees of strictly decreasing height.
        while self.stack.len() >= 2 {
            let len = self.stack.len();
            if self.stack[len - 2].height() > self.stack[len - 1].height() {
                break;
            }
            if let (Some(right), Some(left)) = (self.stack.pop(), self.stack.pop()) {
                self.stack.push(Node::branch(left, right));
            }
        }
    }
}

impl Default for RopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

enum NextText<'a> {
    None,
    UseBuffer,
    String(&'a str),
}

//===========================================================================
