mod leaf;
mod node;
mod text_info;

pub(crate) use self::leaf::Leaf;
pub(crate) use self::node::Node;
pub(crate) use self::text_info::TextInfo;

// Leaf and merge sizes.
// For testing, they're set small to trigger deeper trees.  For
// non-testing, leaves are sized to keep allocations in the ~1KB range.
// MAX_LEAF_BYTES must be >= 4 to allow for 4-byte utf8 characters, and
// MERGE_THRESHOLD must not exceed MAX_LEAF_BYTES.
#[cfg(any(test, feature = "small_chunks"))]
pub(crate) const MAX_LEAF_BYTES: usize = 9;
#[cfg(not(any(test, feature = "small_chunks")))]
pub(crate) const MAX_LEAF_BYTES: usize = 1024 - 32;

// Concatenating two leaves whose combined length (in bytes) is below this
// produces a single merged leaf instead of a new internal node.
#[cfg(any(test, feature = "small_chunks"))]
pub(crate) const MERGE_THRESHOLD: usize = 8;
#[cfg(not(any(test, feature = "small_chunks")))]
pub(crate) const MERGE_THRESHOLD: usize = 32;
