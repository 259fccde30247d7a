use super::{Leaf, TextInfo, MERGE_THRESHOLD};

/// A node of the rope tree.
///
/// Internal nodes exclusively own their two children.  Every operation
/// that restructures the tree consumes the nodes involved and hands their
/// ownership to the result, so no subtree is ever reachable from two
/// ropes at once.
#[derive(Debug, Clone)]
pub(crate) enum Node {
    Leaf(Leaf),
    Internal(Internal),
}

#[derive(Debug, Clone)]
pub(crate) struct Internal {
    left: Box<Node>,
    right: Box<Node>,
    /// Text info of the left subtree.  Its char count is the "weight" used
    /// to route index lookups.
    weight: TextInfo,
    /// Text info of the whole subtree.
    info: TextInfo,
    height: u32,
}

impl Default for Node {
    fn default() -> Node {
        Node::new()
    }
}

impl Node {
    /// Creates an empty leaf, the canonical empty rope.
    #[inline]
    pub fn new() -> Node {
        Node::Leaf(Leaf::default())
    }

    /// Creates an internal node from two children, without balancing.
    pub fn branch(left: Node, right: Node) -> Node {
        let weight = left.text_info();
        let info = weight.combine(right.text_info());
        let height = left.height().max(right.height()) + 1;
        Node::Internal(Internal {
            left: Box::new(left),
            right: Box::new(right),
            weight,
            info,
            height,
        })
    }

    #[inline]
    pub fn text_info(&self) -> TextInfo {
        match self {
            Node::Leaf(leaf) => leaf.text_info(),
            Node::Internal(internal) => internal.info,
        }
    }

    #[inline]
    pub fn char_count(&self) -> usize {
        self.text_info().chars
    }

    #[inline]
    pub fn byte_count(&self) -> usize {
        self.text_info().bytes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text_info().bytes == 0
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        match self {
            Node::Leaf(_) => true,
            Node::Internal(_) => false,
        }
    }

    /// Height of the subtree.  Leaves have a height of 1.
    #[inline]
    pub fn height(&self) -> u32 {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal(internal) => internal.height,
        }
    }

    /// Returns the children of an internal node, or `None` for a leaf.
    #[inline]
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Leaf(_) => None,
            Node::Internal(internal) => Some((&internal.left, &internal.right)),
        }
    }

    /// Returns the text of a leaf, or `None` for an internal node.
    #[inline]
    pub fn leaf_text(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => Some(leaf.text()),
            Node::Internal(_) => None,
        }
    }

    fn into_children(self) -> (Node, Node) {
        match self {
            Node::Internal(internal) => (*internal.left, *internal.right),
            Node::Leaf(_) => unreachable!("attempted to take the children of a leaf"),
        }
    }

    //-----------------------------------------------------------------
    // Structural operations.

    /// Concatenates two subtrees, consuming both.
    ///
    /// Descends the taller tree's inner spine until the heights are within
    /// one of each other, attaches the shorter tree there, and rebalances on
    /// the way back up.  Runs in time proportional to the difference in
    /// height, so O(log N) worst case.
    pub fn join(left: Node, right: Node) -> Node {
        if left.is_empty() {
            return right;
        }
        if right.is_empty() {
            return left;
        }

        let l_height = left.height();
        let r_height = right.height();

        if l_height > r_height + 1 {
            let (a, b) = left.into_children();
            Node::balance(a, Node::join(b, right))
        } else if r_height > l_height + 1 {
            let (a, b) = right.into_children();
            Node::balance(Node::join(left, a), b)
        } else {
            Node::merge_or_branch(left, right)
        }
    }

    /// Splits the subtree at `char_idx`, consuming it.
    ///
    /// Descends by comparing `char_idx` against each node's weight.  The
    /// sibling that isn't descended into is reattached untouched with
    /// `join()`.
    ///
    /// Precondition: `char_idx <= self.char_count()`.
    pub fn split(self, char_idx: usize) -> (Node, Node) {
        debug_assert!(char_idx <= self.char_count());

        match self {
            Node::Leaf(leaf) => {
                let (left, right) = leaf.split(char_idx);
                (Node::Leaf(left), Node::Leaf(right))
            }
            Node::Internal(internal) => {
                let weight = internal.weight.chars;
                let left = *internal.left;
                let right = *internal.right;

                if char_idx < weight {
                    let (l, r) = left.split(char_idx);
                    (l, Node::join(r, right))
                } else if char_idx == weight {
                    (left, right)
                } else {
                    let (l, r) = right.split(char_idx - weight);
                    (Node::join(left, l), r)
                }
            }
        }
    }

    /// Appends the text in the char range `[start, end)` to `out`.
    ///
    /// Precondition: `start <= end <= self.char_count()`.
    pub fn append_range_to(&self, start: usize, end: usize, out: &mut String) {
        if start == end {
            return;
        }

        match self {
            Node::Leaf(leaf) => out.push_str(leaf.char_slice(start, end)),
            Node::Internal(internal) => {
                let weight = internal.weight.chars;
                if start < weight {
                    internal
                        .left
                        .append_range_to(start, end.min(weight), out);
                }
                if end > weight {
                    internal.right.append_range_to(
                        start.saturating_sub(weight),
                        end - weight,
                        out,
                    );
                }
            }
        }
    }

    /// Joins two subtrees whose heights are within one of each other.
    ///
    /// Two small leaves are merged into one to keep fragmentation down.
    fn merge_or_branch(left: Node, right: Node) -> Node {
        match (left, right) {
            (Node::Leaf(l), Node::Leaf(r)) if l.len() + r.len() < MERGE_THRESHOLD => {
                Node::Leaf(l.merge(r))
            }
            (left, right) => Node::branch(left, right),
        }
    }

    /// Creates an internal node from two children, rotating as needed to
    /// restore the height balance.
    ///
    /// Precondition: both children are themselves balanced and their
    /// heights differ by at most two.
    fn balance(left: Node, right: Node) -> Node {
        let l_height = left.height();
        let r_height = right.height();

        if l_height > r_height + 1 {
            // Left side higher than right side.
            let (a, b) = left.into_children();
            if a.height() >= b.height() {
                Node::branch(a, Node::branch(b, right))
            } else {
                let (b1, b2) = b.into_children();
                Node::branch(Node::branch(a, b1), Node::branch(b2, right))
            }
        } else if r_height > l_height + 1 {
            // Right side higher than left side.
            let (a, b) = right.into_children();
            if b.height() >= a.height() {
                Node::branch(Node::branch(left, a), b)
            } else {
                let (a1, a2) = a.into_children();
                Node::branch(Node::branch(left, a1), Node::branch(a2, b))
            }
        } else {
            Node::branch(left, right)
        }
    }

    //-----------------------------------------------------------------
    // Debugging helpers.

    /// Checks that all cached metadata matches the actual data.
    pub fn assert_integrity(&self) {
        match self {
            Node::Leaf(leaf) => {
                assert_eq!(TextInfo::from_str(leaf.text()), leaf.text_info());
            }
            Node::Internal(internal) => {
                internal.left.assert_integrity();
                internal.right.assert_integrity();

                assert_eq!(internal.weight, internal.left.text_info());
                assert_eq!(
                    internal.info,
                    internal.weight.combine(internal.right.text_info())
                );
                assert_eq!(
                    internal.height,
                    internal.left.height().max(internal.right.height()) + 1
                );
            }
        }
    }

    /// Checks the structural invariants of the tree:
    ///
    /// - Every internal node's children differ in height by at most one.
    /// - No leaf is empty, unless it is the root.
    pub fn assert_invariants(&self, is_root: bool) {
        match self {
            Node::Leaf(leaf) => {
                if !is_root {
                    assert!(!leaf.is_empty(), "Empty leaf in a non-empty rope.");
                }
            }
            Node::Internal(internal) => {
                let l_height = internal.left.height();
                let r_height = internal.right.height();
                assert!(
                    l_height.abs_diff(r_height) <= 1,
                    "Unbalanced node: left height {}, right height {}",
                    l_height,
                    r_height
                );
                internal.left.assert_invariants(false);
                internal.right.assert_invariants(false);
            }
        }
    }
}

//===========================================================================
