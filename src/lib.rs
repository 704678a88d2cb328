//! A handful of walks over trees, lists and rooms full of keys: preorder
//! listing, greater-sum trees, rebuilding a search tree from its preorder,
//! path sums, lowest common ancestors, reversing a list in groups, and
//! working out whether every room can be opened.
//!
//! Trees and lists keep their nodes flat in a Vec and hand out
//! [`NodeHandle`]s, so every walk runs off an explicit stack rather than the
//! call stack.
//!
//! ```
//! use tree_walks::{bst_from_preorder, path_sum, preorder_traversal};
//!
//! let tree = bst_from_preorder(&[8, 5, 1, 7, 10, 12]);
//! assert_eq!(vec![8, 5, 1, 7, 10, 12], preorder_traversal(&tree));
//! assert_eq!(vec![vec![8, 10, 12]], path_sum(&tree, 30));
//! ```

mod error;
mod handle;
pub mod list;
pub mod rooms;
pub mod tree;

pub use error::{Error, Result};
pub use handle::NodeHandle;
pub use list::{reverse_k_group, List};
pub use rooms::{can_visit_all_rooms, RoomGraph};
pub use tree::{
    bst_from_preorder, bst_to_gst, lowest_common_ancestor, path_sum, preorder_traversal,
    try_bst_from_preorder, Tree,
};
