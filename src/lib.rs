mod error;

/// This module provides an implementation of a B+ tree.
///
/// The tree stores key-value pairs in sorted order and supports point
/// lookups, insertion, removal, and an in-order walk over all pairs.
/// Every pair lives in a leaf node and the leaves are chained together,
/// so a full scan is a single pass along the bottom of the tree while
/// the internal nodes only route lookups.
mod bptree;

pub use bptree::{BPlusTree, Walk};
pub use error::Error;
