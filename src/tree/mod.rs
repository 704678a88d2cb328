//! A binary tree that flattens all its nodes onto a Vec, addressed by handle.
//! Every child link is created by allocating a fresh node into an empty slot,
//! so each node is owned by exactly one parent and the shape can never turn
//! into a graph.

mod ancestor;
mod reconstruct;
mod traversal;

use std::{cmp::Ordering, collections::VecDeque, convert::TryFrom};

use crate::error::{Error, Result};
use crate::handle::{next_owner, NodeHandle};

pub use ancestor::lowest_common_ancestor;
pub use reconstruct::{bst_from_preorder, try_bst_from_preorder};
pub use traversal::{bst_to_gst, path_sum, preorder_traversal, Inorder, Preorder, ReverseInorder};

/// A node that lives in a tree.
#[derive(Clone, Debug)]
struct Node {
    /// The value being stored.
    value: i32,

    /// The root of the left subtree, if any.
    left: Option<NodeHandle>,

    /// The root of the right subtree, if any.
    right: Option<NodeHandle>,
}

/// Somewhere a new node may be hung.
#[derive(Copy, Clone, Debug)]
enum Slot {
    Root,
    Left(NodeHandle),
    Right(NodeHandle),
}

/// A binary tree of `i32`s. Nodes are never removed, so the storage vec only
/// ever grows and every handle given out stays valid for the life of the tree.
/// Handles carry the id of the tree that made them, and a handle from any
/// other tree (a clone included) finds nothing here.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Option<i32>>", into = "Vec<Option<i32>>")
)]
#[derive(Debug)]
pub struct Tree {
    /// Stamped on every handle this tree gives out.
    id: usize,

    /// The nodes in the tree.
    store: Vec<Node>,

    /// The topmost node, absent for an empty tree.
    root: Option<NodeHandle>,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tree with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: next_owner(),
            store: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Builds a tree from its level-order listing, where `None` marks a
    /// missing child and the children of missing nodes are not listed at all.
    /// So `[1, None, 2, 3]` is 1 with a right child 2, which has a left child
    /// 3.
    pub fn from_level_order(entries: &[Option<i32>]) -> Result<Self> {
        let mut tree = Tree::with_capacity(entries.len());

        let root = match entries.first() {
            Some(Some(value)) => tree.fill(Slot::Root, *value),
            Some(None) if entries.len() > 1 => {
                return Err(Error::DanglingLevelOrder { position: 1 })
            }
            _ => return Ok(tree),
        };

        let mut parents = VecDeque::new();
        parents.push_back(root);
        let mut position = 1;

        while position < entries.len() {
            let parent = match parents.pop_front() {
                Some(parent) => parent,
                None => return Err(Error::DanglingLevelOrder { position }),
            };

            for &slot in &[Slot::Left(parent), Slot::Right(parent)] {
                if position == entries.len() {
                    break;
                }

                if let Some(value) = entries[position] {
                    let child = tree.fill(slot, value);
                    parents.push_back(child);
                }

                position += 1;
            }
        }

        Ok(tree)
    }

    /// Lists the tree in level order, the inverse of `from_level_order`.
    /// Trailing `None`s are trimmed off.
    pub fn to_level_order(&self) -> Vec<Option<i32>> {
        let mut entries = Vec::with_capacity(self.len() * 2 + 1);
        let mut queue = VecDeque::new();
        queue.push_back(self.root);

        while let Some(entry) = queue.pop_front() {
            match entry {
                Some(node) => {
                    let n = &self.store[node.0];
                    entries.push(Some(n.value));
                    queue.push_back(n.left);
                    queue.push_back(n.right);
                }
                None => entries.push(None),
            }
        }

        while let Some(None) = entries.last() {
            entries.pop();
        }

        entries
    }

    /// Inserts a value by binary search tree order, returning the handle of
    /// the new node. Duplicates are not inserted, and give `None`.
    pub fn insert(&mut self, value: i32) -> Option<NodeHandle> {
        let mut current = match self.root {
            Some(root) => root,
            None => return Some(self.fill(Slot::Root, value)),
        };

        loop {
            let node = &self.store[current.0];
            let (next, slot) = match value.cmp(&node.value) {
                Ordering::Less => (node.left, Slot::Left(current)),
                Ordering::Greater => (node.right, Slot::Right(current)),
                Ordering::Equal => return None,
            };

            match next {
                Some(child) => current = child,
                None => return Some(self.fill(slot, value)),
            }
        }
    }

    /// The topmost node of the tree.
    pub fn root(&self) -> Option<NodeHandle> {
        self.root
    }

    /// True when `node` was given out by this tree.
    pub fn owns(&self, node: NodeHandle) -> bool {
        node.1 == self.id && node.0 < self.store.len()
    }

    /// Gets the value held at a node.
    pub fn value(&self, node: NodeHandle) -> Option<i32> {
        self.get(node).map(|n| n.value)
    }

    /// The left child of a node.
    pub fn left(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.get(node).and_then(|n| n.left)
    }

    /// The right child of a node.
    pub fn right(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.get(node).and_then(|n| n.right)
    }

    /// True when the node has neither a left nor a right child.
    pub fn is_leaf(&self, node: NodeHandle) -> bool {
        self.get(node)
            .map_or(false, |n| n.left.is_none() && n.right.is_none())
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The first node holding `value`, in preorder.
    pub fn find(&self, value: i32) -> Option<NodeHandle> {
        self.preorder().find(|node| self.store[node.0].value == value)
    }

    /// True when an inorder walk yields strictly increasing values.
    pub fn is_search_tree(&self) -> bool {
        let mut last: Option<i32> = None;

        for node in self.inorder() {
            let value = self.store[node.0].value;
            if last.map_or(false, |last| last >= value) {
                return false;
            }
            last = Some(value);
        }

        true
    }

    /// Looks a node up, refusing handles from other trees.
    fn get(&self, node: NodeHandle) -> Option<&Node> {
        if node.1 != self.id {
            return None;
        }

        self.store.get(node.0)
    }

    /// Hangs a new node in an empty slot and returns its handle. The slot
    /// must be empty, otherwise the subtree that was there is orphaned.
    fn fill(&mut self, slot: Slot, value: i32) -> NodeHandle {
        let idx = NodeHandle(self.store.len(), self.id);
        self.store.push(Node {
            value,
            left: None,
            right: None,
        });

        match slot {
            Slot::Root => self.root = Some(idx),
            Slot::Left(parent) => self.store[parent.0].left = Some(idx),
            Slot::Right(parent) => self.store[parent.0].right = Some(idx),
        }

        idx
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// A clone is a tree in its own right, with its own id, so handles from the
/// original don't carry over to it.
impl Clone for Tree {
    fn clone(&self) -> Self {
        let id = next_owner();
        let restamp = |link: Option<NodeHandle>| link.map(|h| NodeHandle(h.0, id));

        Self {
            id,
            store: self
                .store
                .iter()
                .map(|n| Node {
                    value: n.value,
                    left: restamp(n.left),
                    right: restamp(n.right),
                })
                .collect(),
            root: restamp(self.root),
        }
    }
}

/// Trees are equal when they have the same shape and values, regardless of
/// where their nodes happen to sit in storage.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.to_level_order() == other.to_level_order()
    }
}

impl Eq for Tree {}

impl TryFrom<Vec<Option<i32>>> for Tree {
    type Error = Error;

    fn try_from(entries: Vec<Option<i32>>) -> Result<Self> {
        Tree::from_level_order(&entries)
    }
}

impl From<Tree> for Vec<Option<i32>> {
    fn from(tree: Tree) -> Self {
        tree.to_level_order()
    }
}

/// Reads a leetcode style listing like `[3,5,1,null,2]`.
#[cfg(test)]
pub(crate) fn parse_level_order(listing: &str) -> Tree {
    let entries: Vec<Option<i32>> = listing
        .trim_matches(|c| c == '[' || c == ']')
        .split(',')
        .map(|entry| entry.trim().parse().ok())
        .collect();

    Tree::from_level_order(&entries).unwrap()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{parse_level_order, Tree};
    use crate::error::Error;

    #[test]
    fn level_order_round_trip() {
        let tree = parse_level_order("[5,4,8,11,null,13,4,7,2,null,null,5,1]");

        assert_eq!(10, tree.len());
        assert_eq!(
            vec![
                Some(5),
                Some(4),
                Some(8),
                Some(11),
                None,
                Some(13),
                Some(4),
                Some(7),
                Some(2),
                None,
                None,
                Some(5),
                Some(1)
            ],
            tree.to_level_order()
        );
    }

    #[test]
    fn level_order_shape() {
        let tree = parse_level_order("[1,null,2,3]");
        let root = tree.root().unwrap();

        assert_eq!(Some(1), tree.value(root));
        assert_eq!(None, tree.left(root));

        let two = tree.right(root).unwrap();
        assert_eq!(Some(2), tree.value(two));
        assert_eq!(Some(3), tree.left(two).and_then(|n| tree.value(n)));
        assert!(tree.is_leaf(tree.left(two).unwrap()));
        assert!(!tree.is_leaf(root));
    }

    #[test]
    fn empty_listings() {
        assert!(parse_level_order("[]").is_empty());
        assert!(Tree::from_level_order(&[]).unwrap().is_empty());
        assert!(Tree::from_level_order(&[None]).unwrap().is_empty());
        assert_eq!(Vec::<Option<i32>>::new(), Tree::new().to_level_order());
    }

    #[test]
    fn dangling_entries_are_rejected() {
        assert_eq!(
            Err(Error::DanglingLevelOrder { position: 1 }),
            Tree::from_level_order(&[None, Some(1)])
        );

        // 1 has no children, so nobody is left to adopt 4
        assert_eq!(
            Err(Error::DanglingLevelOrder { position: 3 }),
            Tree::from_level_order(&[Some(1), None, None, Some(4)])
        );
    }

    #[test]
    fn bst_insert() {
        let mut tree = Tree::new();

        for &value in &[4, 2, 6, 1, 3, 5, 7] {
            assert!(tree.insert(value).is_some());
        }

        // duplicates are refused
        assert_eq!(None, tree.insert(5));

        assert_eq!(7, tree.len());
        assert!(tree.is_search_tree());
        assert_eq!(parse_level_order("[4,2,6,1,3,5,7]"), tree);
    }

    #[test]
    fn search_tree_check() {
        assert!(Tree::new().is_search_tree());
        assert!(parse_level_order("[2,1,3]").is_search_tree());
        assert!(!parse_level_order("[2,3,1]").is_search_tree());
        assert!(!parse_level_order("[2,2]").is_search_tree());
    }

    #[test]
    fn find_is_preorder_first() {
        let tree = parse_level_order("[1,2,2]");
        let root = tree.root().unwrap();

        assert_eq!(tree.left(root), tree.find(2));
        assert_eq!(None, tree.find(9));
    }

    #[test]
    fn foreign_handles_miss() {
        let small = parse_level_order("[1]");
        let big = parse_level_order("[1,2,3]");
        let far = big.find(3).unwrap();

        assert_eq!(None, small.value(far));
        assert_eq!(None, small.left(far));
        assert!(!small.is_leaf(far));
    }

    #[test]
    fn foreign_handles_miss_in_range() {
        let tree = parse_level_order("[1,2,3]");
        let other = parse_level_order("[10,20,30]");
        let stranger = other.find(20).unwrap();

        // same slot in storage as tree's 2, but it belongs to the other tree
        assert_eq!(tree.find(2).map(|n| n.index()), Some(stranger.index()));
        assert!(!tree.owns(stranger));
        assert!(other.owns(stranger));
        assert_eq!(None, tree.value(stranger));
        assert_eq!(None, tree.left(stranger));
        assert_eq!(None, tree.right(other.root().unwrap()));
        assert!(!tree.is_leaf(stranger));
    }

    #[test]
    fn clones_are_their_own_trees() {
        let tree = parse_level_order("[1,2,3]");
        let copy = tree.clone();
        let two = tree.find(2).unwrap();

        assert_eq!(tree, copy);
        assert_eq!(None, copy.value(two));
        assert_eq!(Some(2), copy.find(2).and_then(|n| copy.value(n)));
        assert_eq!(Some(3), copy.root().and_then(|r| copy.right(r)).and_then(|n| copy.value(n)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_level_order() {
        let tree: Tree = serde_json::from_str("[3,5,1,6,2,0,8,null,null,7,4]").unwrap();

        assert_eq!(9, tree.len());
        assert_eq!(
            "[3,5,1,6,2,0,8,null,null,7,4]",
            serde_json::to_string(&tree).unwrap()
        );
        assert!(serde_json::from_str::<Tree>("[null,1]").is_err());
    }
}
