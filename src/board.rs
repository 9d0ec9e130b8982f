//! Game board: a square grid of cells plus the ships placed on it.
//!
//! Boards are values. Placement and attacks return a new board and leave the
//! receiver untouched, so callers thread the latest snapshot forward.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::common::{BoardError, Coordinate};
use crate::ship::{Ship, ShipId};

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellStatus {
    /// `Hit` and `Miss` are terminal: the cell has been fired at.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellStatus::Hit | CellStatus::Miss)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub coordinates: Coordinate,
    pub status: CellStatus,
    pub ship_id: Option<ShipId>,
}

/// Outcome of [`Board::receive_attack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attack {
    /// Board after the shot. Equal to the input board when `changed` is false.
    pub board: Board,
    pub hit: bool,
    /// Ship record after the shot, present only when this shot sank it.
    pub sunk_ship: Option<Ship>,
    /// `false` for out-of-bounds or repeated shots, which must not consume a turn.
    pub changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty `size`×`size` board with no ships.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize { size });
        }
        let cells = (0..size * size)
            .map(|i| Cell {
                coordinates: Coordinate::new(i % size, i / size),
                status: CellStatus::Empty,
                ship_id: None,
            })
            .collect();
        Ok(Board {
            size,
            cells,
            ships: Vec::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        self.in_bounds(coord).then(|| coord.y * self.size + coord.x)
    }

    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    /// Status at `coord`, or `None` when out of bounds.
    pub fn status(&self, coord: Coordinate) -> Option<CellStatus> {
        self.cell(coord).map(|c| c.status)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Every in-bounds coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size * size).map(move |i| Coordinate::new(i % size, i / size))
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: &ShipId) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id() == id)
    }

    /// Ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.cell(coord)?.ship_id.as_ref().and_then(|id| self.ship(id))
    }

    /// Ships that still have unhit segments.
    pub fn remaining_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|s| !s.is_sunk())
    }

    /// `true` iff every coordinate is in bounds and currently empty.
    pub fn can_place_ship_at(&self, coordinates: &[Coordinate]) -> bool {
        coordinates
            .iter()
            .all(|&c| self.status(c) == Some(CellStatus::Empty))
    }

    /// Place `ship` on `coordinates`, returning the new board.
    ///
    /// Does not validate: guard with [`Board::can_place_ship_at`]. Cells
    /// already holding something are overwritten and coordinates outside
    /// the grid are skipped.
    pub fn place_ship_at(&self, ship: &Ship, coordinates: &[Coordinate]) -> Board {
        let mut next = self.clone();
        next.ships.push(ship.placed_at(coordinates));
        for &coord in coordinates {
            if let Some(i) = next.index(coord) {
                let cell = &mut next.cells[i];
                cell.status = CellStatus::Ship;
                cell.ship_id = Some(ship.id().clone());
            }
        }
        next
    }

    /// Resolve one shot at `target`.
    ///
    /// Out-of-bounds and already resolved targets are no-ops: the returned
    /// board equals `self` and `changed` is false.
    pub fn receive_attack(&self, target: Coordinate) -> Attack {
        let status = match self.status(target) {
            Some(status) => status,
            None => return self.unchanged(false),
        };
        if status.is_resolved() {
            return self.unchanged(status == CellStatus::Hit);
        }

        let mut next = self.clone();
        let idx = target.y * self.size + target.x;

        if status == CellStatus::Ship {
            next.cells[idx].status = CellStatus::Hit;
            let owner = next.cells[idx].ship_id.clone();
            let pos = owner.and_then(|id| next.ships.iter().position(|s| *s.id() == id));
            let mut sunk_ship = None;
            if let Some(pos) = pos {
                let updated = next.ships[pos].with_hit();
                if updated.is_sunk() {
                    sunk_ship = Some(updated.clone());
                }
                next.ships[pos] = updated;
            }
            return Attack {
                board: next,
                hit: true,
                sunk_ship,
                changed: true,
            };
        }

        next.cells[idx].status = CellStatus::Miss;
        Attack {
            board: next,
            hit: false,
            sunk_ship: None,
            changed: true,
        }
    }

    fn unchanged(&self, hit: bool) -> Attack {
        Attack {
            board: self.clone(),
            hit,
            sunk_ship: None,
            changed: false,
        }
    }

    /// `true` iff at least one ship is placed and every ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }
}
