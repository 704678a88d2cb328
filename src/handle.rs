//! Node handles, and a hasher which just proxies for the index it's given.
//! Handles are already unique small integers, so hashing them again when we
//! keep a set of them makes little sense.

use std::{
    hash::{BuildHasher, Hash, Hasher},
    sync::atomic::{AtomicUsize, Ordering},
};

/// Owner ids start at 1; 0 is left for structures that never hand out
/// handles.
static NEXT_OWNER: AtomicUsize = AtomicUsize::new(1);

/// A fresh id for a structure that gives out handles.
pub(crate) fn next_owner() -> usize {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

/// The index of a node in its structure's storage vec, stamped with the id of
/// that structure. A handle is only meaningful to the tree that gave it out;
/// any other tree treats it as absent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeHandle(pub(crate) usize, pub(crate) usize);

impl NodeHandle {
    /// The raw position of the node in storage.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Only the index goes into the hash. Handles in one set nearly always share
/// an owner, so hashing it too would just pile them into one bucket.
impl Hash for NodeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.0);
    }
}

/// Proxies indices for themselves.
pub(crate) struct IndexHasher(u64);

impl Hasher for IndexHasher {
    fn write(&mut self, bytes: &[u8]) {
        // anything that isn't a usize gets folded in a byte at a time
        for byte in bytes.iter() {
            self.0 = (self.0 << 8) | *byte as u64;
        }
    }

    fn write_usize(&mut self, i: usize) {
        self.0 = i as u64;
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Builds new IndexHashers on demand.
#[derive(Clone, Copy, Default)]
pub(crate) struct BuildIndexHasher;

impl BuildHasher for BuildIndexHasher {
    type Hasher = IndexHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IndexHasher(0)
    }
}
