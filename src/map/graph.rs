//! Fixed adjacency between the ten map slots.
//!
//! Slots are laid out as two rows of five:
//!
//! ```text
//! 0 1 2 3 4
//! 5 6 7 8 9
//! ```
//!
//! Every slot touches the slot in the other row directly above or below it,
//! and the slots left and right of it in its own row. Row ends therefore have
//! two neighbors and row interiors three. The shape depends only on slot
//! indices, never on which card occupies a slot.

use serde::Serialize;
use smallvec::SmallVec;

/// Number of slots on the map.
pub const SLOT_COUNT: usize = 10;

/// Number of slots per row.
pub const ROW_LEN: usize = 5;

/// Neighbor list of one slot.
pub type SlotNeighbors = SmallVec<[usize; 3]>;

/// Neighbors of `slot`: horizontal neighbors left to right, then the vertical one.
///
/// Returns an empty list for slots outside the map.
#[must_use]
pub fn slot_neighbors(slot: usize) -> SlotNeighbors {
    let mut neighbors = SlotNeighbors::new();
    if slot >= SLOT_COUNT {
        return neighbors;
    }

    let column = slot % ROW_LEN;
    if column > 0 {
        neighbors.push(slot - 1);
    }
    if column + 1 < ROW_LEN {
        neighbors.push(slot + 1);
    }
    neighbors.push(if slot < ROW_LEN { slot + ROW_LEN } else { slot - ROW_LEN });
    neighbors
}

/// Adjacency lists for every slot, built once per map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotGraph {
    adjacency: Vec<SlotNeighbors>,
}

impl SlotGraph {
    /// Build the two-row graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: (0..SLOT_COUNT).map(slot_neighbors).collect(),
        }
    }

    /// Neighbors of `slot`, empty for slots outside the map.
    #[must_use]
    pub fn neighbors(&self, slot: usize) -> &[usize] {
        self.adjacency.get(slot).map_or(&[][..], |n| n.as_slice())
    }

    /// Check if two slots share an edge.
    #[must_use]
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }
}

impl Default for SlotGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_ends() {
        assert_eq!(slot_neighbors(0).as_slice(), &[1, 5]);
        assert_eq!(slot_neighbors(4).as_slice(), &[3, 9]);
        assert_eq!(slot_neighbors(5).as_slice(), &[6, 0]);
        assert_eq!(slot_neighbors(9).as_slice(), &[8, 4]);
    }

    #[test]
    fn test_row_interiors() {
        assert_eq!(slot_neighbors(1).as_slice(), &[0, 2, 6]);
        assert_eq!(slot_neighbors(3).as_slice(), &[2, 4, 8]);
        assert_eq!(slot_neighbors(7).as_slice(), &[6, 8, 2]);
    }

    #[test]
    fn test_out_of_range() {
        assert!(slot_neighbors(10).is_empty());
        assert!(SlotGraph::new().neighbors(42).is_empty());
    }

    #[test]
    fn test_degrees() {
        let graph = SlotGraph::new();
        for slot in 0..SLOT_COUNT {
            let expected = if slot % ROW_LEN == 0 || slot % ROW_LEN == ROW_LEN - 1 { 2 } else { 3 };
            assert_eq!(graph.neighbors(slot).len(), expected, "slot {slot}");
        }
        assert_eq!(graph.edge_count(), 13);
    }

    #[test]
    fn test_symmetric() {
        let graph = SlotGraph::new();
        for a in 0..SLOT_COUNT {
            for &b in graph.neighbors(a) {
                assert!(graph.are_adjacent(b, a), "{a} -> {b}");
            }
        }
    }

    #[test]
    fn test_no_self_loops() {
        let graph = SlotGraph::new();
        assert!((0..SLOT_COUNT).all(|slot| !graph.are_adjacent(slot, slot)));
    }
}
