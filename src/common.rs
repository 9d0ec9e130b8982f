//! Common types for the engine: coordinates, compass directions and errors.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// A grid position, 0-indexed, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbour one step in `direction`, or `None` when it would leave
    /// the non-negative quadrant. Upper bounds are the board's concern.
    pub fn step(self, direction: Direction) -> Option<Coordinate> {
        let (x, y) = match direction {
            Direction::North => (Some(self.x), self.y.checked_sub(1)),
            Direction::South => (Some(self.x), self.y.checked_add(1)),
            Direction::West => (self.x.checked_sub(1), Some(self.y)),
            Direction::East => (self.x.checked_add(1), Some(self.y)),
        };
        Some(Coordinate::new(x?, y?))
    }

    /// Orthogonal neighbours in north, south, west, east order.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    /// `true` when `other` is exactly one orthogonal step away.
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass direction used for neighbour lookup and pursuit tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];
}

/// Errors returned by board construction and placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board dimension must be positive.
    InvalidSize { size: usize },
    /// Random placement ran out of attempts for the named ship.
    PlacementExhausted {
        ship: String,
        board_size: usize,
        attempts: usize,
    },
    /// No legal layout exists for the fleet on this board.
    PlacementImpossible { board_size: usize },
    /// Ship placement leaves the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Operation is not allowed in the current game phase.
    WrongPhase,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize { size } => {
                write!(f, "Invalid board size {}, must be positive", size)
            }
            BoardError::PlacementExhausted {
                ship,
                board_size,
                attempts,
            } => write!(
                f,
                "Unable to place ship '{}' on board of size {} after {} attempts",
                ship, board_size, attempts
            ),
            BoardError::PlacementImpossible { board_size } => {
                write!(f, "Fleet does not fit on board of size {}", board_size)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::WrongPhase => write!(f, "Action not allowed in the current game phase"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
