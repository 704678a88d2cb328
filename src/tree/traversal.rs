//! Depth-first walks over a tree. All of them keep their own explicit stack,
//! so a tree as deep as it is long won't blow the call stack.

use tracing::debug;

use super::Tree;
use crate::error::{Error, Result};
use crate::handle::NodeHandle;

/// Walks a tree node, then left subtree, then right subtree.
pub struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeHandle>,
}

/// Walks a tree left subtree, then node, then right subtree.
pub struct Inorder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeHandle>,
    current: Option<NodeHandle>,
}

/// Walks a tree right subtree, then node, then left subtree. On a search tree
/// that's largest value first.
pub struct ReverseInorder<'z> {
    tree: &'z Tree,
    stack: Vec<NodeHandle>,
    current: Option<NodeHandle>,
}

impl Tree {
    /// Walks the nodes in preorder.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Walks the nodes in inorder.
    pub fn inorder(&self) -> Inorder<'_> {
        Inorder {
            tree: self,
            stack: Vec::new(),
            current: self.root,
        }
    }

    /// Walks the nodes in inorder, back to front.
    pub fn reverse_inorder(&self) -> ReverseInorder<'_> {
        ReverseInorder {
            tree: self,
            stack: Vec::new(),
            current: self.root,
        }
    }

    /// The values of the tree in preorder.
    pub fn preorder_values(&self) -> Vec<i32> {
        self.preorder().map(|node| self.store[node.0].value).collect()
    }

    /// The values of the tree in inorder, sorted if this is a search tree.
    pub fn inorder_values(&self) -> Vec<i32> {
        self.inorder().map(|node| self.store[node.0].value).collect()
    }

    /// Rewrites a binary search tree so every node holds the sum of all the
    /// original values greater than or equal to its own. If the sum would
    /// overflow the tree is left exactly as it was.
    pub fn greater_sum_transform(&mut self) -> Result<()> {
        debug!(nodes = self.len(), "accumulating greater sums");

        // the running total belongs to this call alone; work the totals out
        // first so an overflow half way through doesn't leave a mangled tree
        let mut running: i32 = 0;
        let mut totals = Vec::with_capacity(self.len());

        for node in self.reverse_inorder() {
            let value = self.store[node.0].value;
            running = running
                .checked_add(value)
                .ok_or(Error::SumOverflow { value })?;
            totals.push((node, running));
        }

        for (node, total) in totals {
            self.store[node.0].value = total;
        }

        Ok(())
    }

    /// Every root-to-leaf path whose values add up to `target`, leftmost
    /// path first. Only real leaves count; an inner node that happens to hit
    /// the target along the way doesn't.
    pub fn path_sum(&self, target: i64) -> Vec<Vec<i32>> {
        let mut found = Vec::new();
        let mut path: Vec<i32> = Vec::new();

        // (node, depth of node, remainder before node)
        let mut frames: Vec<(NodeHandle, usize, i64)> = self
            .root
            .map(|root| (root, 0, target))
            .into_iter()
            .collect();

        while let Some((node, depth, remaining)) = frames.pop() {
            let n = &self.store[node.0];

            // drop whatever the previously finished branch left on the path
            path.truncate(depth);
            path.push(n.value);
            let remaining = remaining.saturating_sub(i64::from(n.value));

            if n.left.is_none() && n.right.is_none() {
                if remaining == 0 {
                    found.push(path.clone());
                }
                continue;
            }

            if let Some(right) = n.right {
                frames.push((right, depth + 1, remaining));
            }
            if let Some(left) = n.left {
                frames.push((left, depth + 1, remaining));
            }
        }

        debug!(target_sum = target, paths = found.len(), "path sum search finished");
        found
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let n = &self.tree.store[node.0];

        // right goes on first so left comes off first
        if let Some(right) = n.right {
            self.stack.push(right);
        }
        if let Some(left) = n.left {
            self.stack.push(left);
        }

        Some(node)
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = self.tree.store[node.0].left;
        }

        let node = self.stack.pop()?;
        self.current = self.tree.store[node.0].right;
        Some(node)
    }
}

impl<'z> Iterator for ReverseInorder<'z> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = self.tree.store[node.0].right;
        }

        let node = self.stack.pop()?;
        self.current = self.tree.store[node.0].left;
        Some(node)
    }
}

/// Lists the values of a tree in preorder.
pub fn preorder_traversal(tree: &Tree) -> Vec<i32> {
    tree.preorder_values()
}

/// Turns a binary search tree into its greater-sum tree.
pub fn bst_to_gst(mut tree: Tree) -> Result<Tree> {
    tree.greater_sum_transform()?;
    Ok(tree)
}

/// Every root-to-leaf path of `tree` summing to `target`.
pub fn path_sum(tree: &Tree, target: i64) -> Vec<Vec<i32>> {
    tree.path_sum(target)
}
