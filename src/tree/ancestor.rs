use std::collections::HashSet;

use tracing::trace;

use super::Tree;
use crate::handle::{BuildIndexHasher, NodeHandle};

impl Tree {
    /// The chain of nodes from `target` up to the root, target first. `None`
    /// if the target can't be reached from the root of this tree.
    pub fn ancestor_path(&self, target: NodeHandle) -> Option<Vec<NodeHandle>> {
        if !self.owns(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut frames: Vec<(NodeHandle, usize)> =
            self.root.map(|root| (root, 0)).into_iter().collect();

        while let Some((node, depth)) = frames.pop() {
            path.truncate(depth);
            path.push(node);

            if node == target {
                path.reverse();
                return Some(path);
            }

            let n = &self.store[node.0];
            if let Some(right) = n.right {
                frames.push((right, depth + 1));
            }
            if let Some(left) = n.left {
                frames.push((left, depth + 1));
            }
        }

        None
    }

    /// The deepest node with both `p` and `q` beneath it, where a node counts
    /// as beneath itself. `None` when either of them isn't in the tree; that
    /// case isn't told apart from any other, so check presence first if it
    /// matters.
    pub fn lowest_common_ancestor(&self, p: NodeHandle, q: NodeHandle) -> Option<NodeHandle> {
        let p_path = self.ancestor_path(p)?;
        let q_path = self.ancestor_path(q)?;
        trace!(?p_path, ?q_path, "ancestor paths");

        let mut p_ancestors: HashSet<NodeHandle, BuildIndexHasher> =
            HashSet::with_capacity_and_hasher(p_path.len(), BuildIndexHasher);
        p_ancestors.extend(p_path);

        // q's path runs bottom up, so the first shared node is the lowest
        q_path.into_iter().find(|node| p_ancestors.contains(node))
    }
}

/// The lowest common ancestor of two nodes of `tree`.
pub fn lowest_common_ancestor(tree: &Tree, p: NodeHandle, q: NodeHandle) -> Option<NodeHandle> {
    tree.lowest_common_ancestor(p, q)
}
