//! Placement-count heat map over a target board.
//!
//! Each cell counts how many placements of the remaining enemy ships are
//! consistent with what is known (a run of in-bounds cells containing no
//! miss) and would cover it. Cells next to hits on unsunk ships are then
//! boosted so partially hit ships get finished first.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::ai::AiMemory;
use crate::board::{Board, CellStatus};
use crate::common::Coordinate;
use crate::config::{HUNT_BOOST_BIAS, HUNT_BOOST_FACTOR};
use crate::ship::Orientation;

/// Derived view of a board; recompute it whenever the board or memory changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatMap {
    size: usize,
    values: Vec<u32>,
    max: u32,
}

impl HeatMap {
    /// Compute the heat map of `board` as seen by an AI holding `memory`.
    pub fn compute(board: &Board, memory: &AiMemory) -> HeatMap {
        let size = board.size();
        let mut map = HeatMap {
            size,
            values: vec![0; size * size],
            max: 0,
        };

        for ship in board.remaining_ships() {
            let length = ship.length();
            for origin in board.coordinates() {
                for orient in [Orientation::Horizontal, Orientation::Vertical] {
                    let span = orient.span(origin, length);
                    if !fits(board, &span) {
                        continue;
                    }
                    for &c in &span {
                        if board.status(c).is_some_and(|s| !s.is_resolved()) {
                            map.values[c.y * size + c.x] += 1;
                        }
                    }
                }
            }
        }

        for hit in unfinished_hits(board) {
            for adj in hit.neighbors() {
                if memory.is_valid_target(board, adj) {
                    let v = &mut map.values[adj.y * size + adj.x];
                    *v = *v * HUNT_BOOST_FACTOR + HUNT_BOOST_BIAS;
                }
            }
        }

        map.max = map.values.iter().copied().max().unwrap_or(0);
        map
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest value on the map; zero when nothing is known or no ships remain.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Heat at `coord`, zero when out of bounds.
    pub fn get(&self, coord: Coordinate) -> u32 {
        if coord.x < self.size && coord.y < self.size {
            self.values[coord.y * self.size + coord.x]
        } else {
            0
        }
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.values.chunks(self.size)
    }

    /// Coordinates whose heat equals the maximum, row-major.
    pub fn hottest(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let size = self.size;
        self.values
            .iter()
            .enumerate()
            .filter(move |&(_, &v)| v == self.max)
            .map(move |(i, _)| Coordinate::new(i % size, i / size))
    }

    /// Values scaled to sum to one. A map with no heat becomes uniform.
    pub fn normalized(&self) -> Vec<f64> {
        let total: u64 = self.values.iter().map(|&v| u64::from(v)).sum();
        if total == 0 {
            let uniform = 1.0 / self.values.len() as f64;
            return vec![uniform; self.values.len()];
        }
        self.values
            .iter()
            .map(|&v| f64::from(v) / total as f64)
            .collect()
    }
}

/// A hypothetical ship fits when every cell is on the board and not a miss.
fn fits(board: &Board, span: &[Coordinate]) -> bool {
    span.iter()
        .all(|&c| matches!(board.status(c), Some(s) if s != CellStatus::Miss))
}

/// Hit cells belonging to ships that are still afloat.
fn unfinished_hits(board: &Board) -> impl Iterator<Item = Coordinate> + '_ {
    board
        .cells()
        .filter(|cell| cell.status == CellStatus::Hit)
        .filter(move |cell| board.ship_at(cell.coordinates).is_some_and(|s| !s.is_sunk()))
        .map(|cell| cell.coordinates)
}
