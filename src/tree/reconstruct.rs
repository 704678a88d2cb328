//! Rebuilding a binary search tree from nothing but its preorder listing.

use tracing::{debug, warn};

use super::{Slot, Tree};
use crate::error::{Error, Result};

/// How far into the preorder listing the build has got. One cursor is shared
/// by the whole build and thrown away with it.
struct Cursor<'a> {
    values: &'a [i32],
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(values: &'a [i32]) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Takes the next value if it sits strictly between the bounds.
    fn take_within(&mut self, lower: i64, upper: i64) -> Option<i32> {
        let value = *self.values.get(self.position)?;
        let wide = i64::from(value);

        if wide <= lower || wide >= upper {
            return None;
        }

        self.position += 1;
        Some(value)
    }

    fn is_exhausted(&self) -> bool {
        self.position == self.values.len()
    }
}

/// Builds the tree, returning it along with how many values it used up.
fn build(preorder: &[i32]) -> (Tree, usize) {
    let mut tree = Tree::with_capacity(preorder.len());
    let mut cursor = Cursor::new(preorder);

    // each pending slot carries the open range its subtree must fall inside.
    // a right slot is pushed before its sibling left slot so the left subtree
    // consumes the listing first, just as preorder lays it out
    let mut pending = vec![(Slot::Root, i64::MIN, i64::MAX)];

    while let Some((slot, lower, upper)) = pending.pop() {
        if cursor.is_exhausted() {
            break;
        }

        if let Some(value) = cursor.take_within(lower, upper) {
            let node = tree.fill(slot, value);
            let wide = i64::from(value);

            pending.push((Slot::Right(node), wide, upper));
            pending.push((Slot::Left(node), lower, wide));
        }
    }

    (tree, cursor.position)
}

/// Rebuilds the binary search tree whose preorder walk is `preorder`. The
/// values must be distinct and must really be a search tree's preorder; if
/// they aren't, the build stops at the first value that can't be placed and
/// whatever was built so far is returned.
pub fn bst_from_preorder(preorder: &[i32]) -> Tree {
    debug!(len = preorder.len(), "rebuilding bst from preorder");

    let (tree, consumed) = build(preorder);
    if consumed < preorder.len() {
        warn!(
            consumed,
            len = preorder.len(),
            "preorder listing is not a bst, tree is incomplete"
        );
    }

    tree
}

/// Like `bst_from_preorder`, but refuses a listing that can't all be placed.
pub fn try_bst_from_preorder(preorder: &[i32]) -> Result<Tree> {
    let tree = bst_from_preorder(preorder);

    if tree.len() < preorder.len() {
        return Err(Error::InvalidPreorder {
            consumed: tree.len(),
            len: preorder.len(),
        });
    }

    Ok(tree)
}
