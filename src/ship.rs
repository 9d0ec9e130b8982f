//! Ship definitions and the per-board ship record.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use core::fmt;

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The `length` cells starting at `origin` and running along this axis.
    /// Cells may lie outside the board; callers check bounds.
    pub fn span(self, origin: Coordinate, length: usize) -> Vec<Coordinate> {
        (0..length)
            .map(|i| match self {
                Orientation::Horizontal => Coordinate::new(origin.x + i, origin.y),
                Orientation::Vertical => Coordinate::new(origin.x, origin.y + i),
            })
            .collect()
    }
}

/// Identifier of a ship, unique within one board.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(String);

impl ShipId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShipId {
    fn from(id: &str) -> Self {
        ShipId(id.into())
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static description of a fleet member: id, name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipDef {
    id: &'static str,
    name: &'static str,
    length: usize,
}

impl ShipDef {
    pub const fn new(id: &'static str, name: &'static str, length: usize) -> Self {
        Self { id, name, length }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Fresh, unplaced ship record for this definition.
    pub fn build(&self) -> Ship {
        Ship::new(self.id, self.name, self.length)
    }
}

/// A ship record. Coordinates are empty until the ship is placed.
///
/// Updates never mutate a record shared with another board snapshot: the
/// board replaces the record with a new value (see [`Ship::with_hit`]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: ShipId,
    name: String,
    length: usize,
    coordinates: Vec<Coordinate>,
    hits: usize,
}

impl Ship {
    /// Create an unplaced ship. `length` must be at least 1: a zero-length
    /// ship would count as sunk before any shot.
    pub fn new(id: &str, name: &str, length: usize) -> Self {
        debug_assert!(length >= 1, "ship {} has zero length", id);
        Self {
            id: ShipId::from(id),
            name: name.into(),
            length,
            coordinates: Vec::new(),
            hits: 0,
        }
    }

    pub fn id(&self) -> &ShipId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Occupied cells in placement order; empty until placed.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// A ship is sunk once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }

    /// Copy of this ship attached to `coordinates`.
    pub(crate) fn placed_at(&self, coordinates: &[Coordinate]) -> Ship {
        Ship {
            coordinates: coordinates.to_vec(),
            ..self.clone()
        }
    }

    /// Copy of this ship with one more hit, capped at its length.
    pub(crate) fn with_hit(&self) -> Ship {
        Ship {
            hits: (self.hits + 1).min(self.length),
            ..self.clone()
        }
    }
}
