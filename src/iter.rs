//! Iterators over a `Rope`'s data.
//!
//! The iterators in Ropedit can be created from `Rope`s with the
//! `chunks()` and `chars()` methods.  Both walk the tree in order using an
//! explicit stack, so they never allocate more than O(log N) space.

use std::str::Chars as StrChars;

use crate::tree::Node;

//==========================================================

/// An iterator over a `Rope`'s contiguous `str` chunks.
///
/// Internally, each `Rope` stores text as a tree of leaf fragments.  This
/// iterator yields those fragments in order, skipping empty ones.  The
/// chunk boundaries are an implementation detail and may differ between
/// ropes with identical contents.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    node_stack: Vec<&'a Node>,
}

impl<'a> Chunks<'a> {
    pub(crate) fn new(root: &'a Node) -> Chunks<'a> {
        let mut node_stack = Vec::with_capacity(root.height() as usize + 1);
        node_stack.push(root);
        Chunks { node_stack }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(node) = self.node_stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    self.node_stack.push(right);
                    self.node_stack.push(left);
                }
                None => {
                    if let Some(text) = node.leaf_text() {
                        if !text.is_empty() {
                            return Some(text);
                        }
                    }
                }
            }
        }
        None
    }
}

//==========================================================

/// An iterator over a `Rope`'s `char`s.
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    chunks: Chunks<'a>,
    cur_chunk: StrChars<'a>,
}

impl<'a> Chars<'a> {
    pub(crate) fn new(root: &'a Node) -> Chars<'a> {
        Chars {
            chunks: Chunks::new(root),
            cur_chunk: "".chars(),
        }
    }
}

impl<'a> Iterator for Chars<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.cur_chunk.next() {
                return Some(c);
            }
            self.cur_chunk = self.chunks.next()?.chars();
        }
    }
}

//===========================================================
