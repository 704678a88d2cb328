//! A singly linked list that flattens all its nodes onto a Vec for storage.
//! Rearranging the list only ever rewrites `next` handles; values never move
//! and nothing is reallocated.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::handle::NodeHandle;

/// A node that lives in a linked list.
#[derive(Clone, Debug)]
struct Node {
    /// The value being stored.
    value: i32,

    /// The index of the next node in the list.
    next: Option<NodeHandle>,
}

/// A chain of `i32`s. The nodes sit in one contiguous Vec and are addressed by
/// their position in it, so the chain can be relinked freely without any node
/// ever being shared between two owners.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<i32>", into = "Vec<i32>")
)]
#[derive(Clone, Debug, Default)]
pub struct List {
    /// The nodes in the list.
    store: Vec<Node>,

    /// The first node in the list.
    head: Option<NodeHandle>,

    /// The last node in the list, so pushes are O(1).
    tail: Option<NodeHandle>,
}

/// Walks a list from head to tail.
pub struct Iter<'a> {
    list: &'a List,
    idx: Option<NodeHandle>,
}

impl List {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new linked list with a specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// The length of this linked list.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Pushes a value onto the back of the list.
    pub fn push(&mut self, value: i32) {
        // lists never give handles out, so they all share owner 0
        let idx = NodeHandle(self.store.len(), 0);
        self.store.push(Node { value, next: None });

        match self.tail {
            Some(tail) => self.store[tail.0].next = Some(idx),
            None => self.head = Some(idx),
        }

        self.tail = Some(idx);
    }

    /// Walks the values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            idx: self.head,
        }
    }

    /// The values of the list, head first.
    pub fn values(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Clears this linked list. Does not free the underlying buffer.
    pub fn clear(&mut self) {
        self.store.clear();
        self.head = None;
        self.tail = None;
    }

    /// Reverses the list `k` nodes at a time. A last group shorter than `k` is
    /// left in the order it was in.
    pub fn reverse_k_group(&mut self, k: usize) -> Result<()> {
        if k == 0 {
            return Err(Error::ZeroGroupSize);
        }

        debug!(len = self.len(), k, "reversing in groups");

        let mut group_start = self.head;
        // the last node of the group reversed before this one, which has to be
        // pointed at this group's new first node
        let mut previous_group_end: Option<NodeHandle> = None;
        let mut groups = 0;

        loop {
            // make sure there's a whole group to reverse
            let mut rest = group_start;
            let mut count = 0;
            while let Some(node) = rest {
                if count == k {
                    break;
                }
                rest = self.store[node.0].next;
                count += 1;
            }

            if count < k {
                break;
            }

            // relink the group back to front, with its old first node pointing
            // at whatever follows the group
            let mut prev = rest;
            let mut current = group_start;
            for _ in 0..k {
                if let Some(node) = current {
                    current = self.store[node.0].next;
                    self.store[node.0].next = prev;
                    prev = Some(node);
                }
            }

            match previous_group_end {
                Some(end) => self.store[end.0].next = prev,
                None => self.head = prev,
            }

            // the old first node is now the group's last
            previous_group_end = group_start;
            if rest.is_none() {
                self.tail = group_start;
            }

            group_start = rest;
            groups += 1;
        }

        trace!(groups, "groups reversed");
        Ok(())
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.list.store[self.idx?.0];
        self.idx = node.next;
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::iter::FromIterator<i32> for List {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = List::with_capacity(iter.size_hint().0);

        for value in iter {
            list.push(value);
        }

        list
    }
}

impl From<Vec<i32>> for List {
    fn from(values: Vec<i32>) -> Self {
        values.into_iter().collect()
    }
}

impl From<List> for Vec<i32> {
    fn from(list: List) -> Self {
        list.values()
    }
}

/// Lists compare by their values in order, not by how they're laid out.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for List {}

/// Reverses `list` in groups of `k`.
pub fn reverse_k_group(mut list: List, k: usize) -> Result<List> {
    list.reverse_k_group(k)?;
    Ok(list)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{reverse_k_group, List};
    use crate::error::Error;

    fn reversed(values: &[i32], k: usize) -> Vec<i32> {
        reverse_k_group(List::from(values.to_vec()), k)
            .unwrap()
            .values()
    }

    #[test]
    fn test_list() {
        let mut list = List::with_capacity(3);
        assert!(list.is_empty());

        list.push(1);
        list.push(2);
        list.push(3);

        assert_eq!(3, list.len());
        assert_eq!(vec![1, 2, 3], list.values());

        list.clear();
        assert!(list.is_empty());
        assert_eq!(Vec::<i32>::new(), list.values());

        list.push(9);
        assert_eq!(vec![9], list.values());
    }

    #[test]
    fn reverse_in_pairs() {
        assert_eq!(vec![2, 1, 4, 3, 5], reversed(&[1, 2, 3, 4, 5], 2));
        assert_eq!(vec![3, 2, 1, 4, 5], reversed(&[1, 2, 3, 4, 5], 3));
        assert_eq!(vec![2, 1, 4, 3], reversed(&[1, 2, 3, 4], 2));
    }

    #[test]
    fn reverse_degenerate_groups() {
        assert_eq!(vec![1, 2, 3, 4, 5], reversed(&[1, 2, 3, 4, 5], 1));
        assert_eq!(vec![1, 2, 3, 4, 5], reversed(&[1, 2, 3, 4, 5], 6));
        assert_eq!(vec![5, 4, 3, 2, 1], reversed(&[1, 2, 3, 4, 5], 5));
        assert_eq!(Vec::<i32>::new(), reversed(&[], 3));

        assert_eq!(
            Err(Error::ZeroGroupSize),
            reverse_k_group(List::from(vec![1, 2]), 0)
        );
    }

    #[test]
    fn tail_follows_reversal() {
        // whole groups all the way down: the old first of the last group is
        // the new tail
        let mut list = List::from(vec![1, 2, 3, 4]);
        list.reverse_k_group(2).unwrap();
        list.push(5);
        assert_eq!(vec![2, 1, 4, 3, 5], list.values());

        // a leftover stub keeps its tail
        let mut list = List::from(vec![1, 2, 3]);
        list.reverse_k_group(2).unwrap();
        list.push(4);
        assert_eq!(vec![2, 1, 3, 4], list.values());
    }

    #[test]
    fn long_lists() {
        let list: List = (0..100_000).collect();
        let list = reverse_k_group(list, 1_000).unwrap();

        assert_eq!(100_000, list.len());
        assert_eq!(Some(999), list.iter().next());
        assert_eq!(Some(99_000), list.iter().last());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_values() {
        let list: List = serde_json::from_str("[1,2,3,4,5]").unwrap();
        let list = reverse_k_group(list, 2).unwrap();

        assert_eq!("[2,1,4,3,5]", serde_json::to_string(&list).unwrap());
    }
}
