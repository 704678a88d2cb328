//! Rooms that hold the keys to other rooms. Room 0 starts unlocked; every key
//! picked up unlocks the room with the same index.

use std::{
    collections::{HashSet, VecDeque},
    convert::TryFrom,
};

use tracing::debug;

use crate::error::{Error, Result};
use crate::handle::BuildIndexHasher;

/// For each room, the keys lying in it. Keys may repeat and may open the room
/// they're found in, but every key opens a room that exists.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")
)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomGraph {
    rooms: Vec<Vec<usize>>,
}

impl RoomGraph {
    /// Makes a graph of rooms, refusing any key for a room that isn't there.
    pub fn new(rooms: Vec<Vec<usize>>) -> Result<Self> {
        check_keys(&rooms)?;
        Ok(Self { rooms })
    }

    /// The number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// True when there are no rooms at all.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// The keys found in a room, or `None` if there's no such room.
    pub fn keys(&self, room: usize) -> Option<&[usize]> {
        self.rooms.get(room).map(|keys| keys.as_slice())
    }

    /// The rooms that can be opened starting from room 0, in the order a
    /// breadth first search reaches them.
    pub fn visit_order(&self) -> Vec<usize> {
        visit_order(&self.rooms)
    }

    /// True when every room can be opened. Holds trivially with no rooms.
    pub fn can_visit_all(&self) -> bool {
        opens_everything(&self.rooms)
    }

    /// The rooms that stay locked, lowest first.
    pub fn locked_rooms(&self) -> Vec<usize> {
        let mut opened = vec![false; self.len()];
        for room in self.visit_order() {
            opened[room] = true;
        }

        (0..self.len()).filter(|&room| !opened[room]).collect()
    }
}

impl TryFrom<Vec<Vec<usize>>> for RoomGraph {
    type Error = Error;

    fn try_from(rooms: Vec<Vec<usize>>) -> Result<Self> {
        RoomGraph::new(rooms)
    }
}

impl From<RoomGraph> for Vec<Vec<usize>> {
    fn from(graph: RoomGraph) -> Self {
        graph.rooms
    }
}

/// Refuses any key for a room that isn't there.
fn check_keys(rooms: &[Vec<usize>]) -> Result<()> {
    for (room, keys) in rooms.iter().enumerate() {
        if let Some(&key) = keys.iter().find(|&&key| key >= rooms.len()) {
            return Err(Error::KeyOutOfRange {
                room,
                key,
                rooms: rooms.len(),
            });
        }
    }

    Ok(())
}

/// Breadth first from room 0. Keys have to be checked before this runs.
fn visit_order(rooms: &[Vec<usize>]) -> Vec<usize> {
    if rooms.is_empty() {
        return Vec::new();
    }

    let mut visited: HashSet<usize, BuildIndexHasher> =
        HashSet::with_capacity_and_hasher(rooms.len(), BuildIndexHasher);
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(0);
    queue.push_back(0);

    while let Some(room) = queue.pop_front() {
        order.push(room);
        for &key in &rooms[room] {
            // insert is false for rooms we've already opened
            if visited.insert(key) {
                queue.push_back(key);
            }
        }
    }

    order
}

fn opens_everything(rooms: &[Vec<usize>]) -> bool {
    let opened = visit_order(rooms).len();
    debug!(rooms = rooms.len(), opened, "visited rooms");

    opened == rooms.len()
}

/// Whether every room can be opened starting from room 0. Works straight off
/// the caller's rooms; nothing is copied.
pub fn can_visit_all_rooms(rooms: &[Vec<usize>]) -> Result<bool> {
    check_keys(rooms)?;
    Ok(opens_everything(rooms))
}

#[cfg(test)]
mod tests {
    use super::{can_visit_all_rooms, RoomGraph};
    use crate::error::Error;

    #[test]
    fn test_rooms() {
        assert_eq!(Ok(true), can_visit_all_rooms(&[vec![1], vec![2], vec![3], vec![]]));
        assert_eq!(
            Ok(false),
            can_visit_all_rooms(&[vec![1, 3], vec![3, 0, 1], vec![2], vec![0]])
        );
    }

    #[test]
    fn visit_order_is_breadth_first() {
        let graph = RoomGraph::new(vec![vec![2, 1], vec![3], vec![1, 1, 0], vec![]]).unwrap();

        assert_eq!(vec![0, 2, 1, 3], graph.visit_order());
        assert!(graph.can_visit_all());
        assert!(graph.locked_rooms().is_empty());
    }

    #[test]
    fn locked_rooms() {
        let graph = RoomGraph::new(vec![vec![1, 3], vec![3, 0, 1], vec![2], vec![0]]).unwrap();

        assert_eq!(vec![2], graph.locked_rooms());
        assert_eq!(Some(&[3, 0, 1][..]), graph.keys(1));
        assert_eq!(None, graph.keys(4));
    }

    #[test]
    fn odd_graphs() {
        // nothing to open, so everything's open
        assert_eq!(Ok(true), can_visit_all_rooms(&[]));
        assert!(RoomGraph::default().visit_order().is_empty());

        // a room full of its own key
        assert_eq!(Ok(true), can_visit_all_rooms(&[vec![0, 0]]));
        assert_eq!(Ok(false), can_visit_all_rooms(&[vec![0], vec![1]]));
    }

    #[test]
    fn keys_must_open_something() {
        assert_eq!(
            Err(Error::KeyOutOfRange {
                room: 1,
                key: 5,
                rooms: 2
            }),
            can_visit_all_rooms(&[vec![1], vec![0, 5]])
        );
    }

    #[test]
    fn borrowed_rooms_agree_with_graph() {
        let rooms = vec![vec![2, 1], vec![3], vec![1, 1, 0], vec![]];
        let locked = vec![vec![1, 3], vec![3, 0, 1], vec![2], vec![0]];

        assert_eq!(
            Ok(RoomGraph::new(rooms.clone()).unwrap().can_visit_all()),
            can_visit_all_rooms(&rooms)
        );
        assert_eq!(
            Ok(RoomGraph::new(locked.clone()).unwrap().can_visit_all()),
            can_visit_all_rooms(&locked)
        );

        // still the caller's, untouched
        assert_eq!(vec![3], rooms[1]);
        assert!(can_visit_all_rooms(&[vec![1], vec![2]]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_lists() {
        let graph: RoomGraph = serde_json::from_str("[[1],[2],[3],[]]").unwrap();
        assert!(graph.can_visit_all());

        assert!(serde_json::from_str::<RoomGraph>("[[7]]").is_err());
    }
}
