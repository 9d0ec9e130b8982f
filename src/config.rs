#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::ai::Difficulty;
use crate::ship::{Ship, ShipDef};

pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const STANDARD_FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("carrier", "Carrier", 5),
    ShipDef::new("battleship", "Battleship", 4),
    ShipDef::new("cruiser", "Cruiser", 3),
    ShipDef::new("submarine", "Submarine", 3),
    ShipDef::new("destroyer", "Destroyer", 2),
];

/// Random placement tries `size * size * PLACEMENT_ATTEMPTS_PER_CELL` anchors per ship.
pub const PLACEMENT_ATTEMPTS_PER_CELL: usize = 10;

/// Heat of a cell next to an unsunk hit becomes `heat * FACTOR + BIAS`.
pub const HUNT_BOOST_FACTOR: u32 = 4;
pub const HUNT_BOOST_BIAS: u32 = 1;

/// Fresh, unplaced ship records for the standard fleet.
pub fn standard_fleet() -> Vec<Ship> {
    STANDARD_FLEET.iter().map(ShipDef::build).collect()
}

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub difficulty: Difficulty,
    pub fleet: Vec<ShipDef>,
}

impl GameConfig {
    pub fn new(board_size: usize, difficulty: Difficulty) -> Self {
        Self {
            board_size,
            difficulty,
            ..Self::default()
        }
    }

    /// Fresh, unplaced ship records for this configuration's fleet.
    pub fn build_fleet(&self) -> Vec<Ship> {
        self.fleet.iter().map(ShipDef::build).collect()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            difficulty: Difficulty::Easy,
            fleet: STANDARD_FLEET.to_vec(),
        }
    }
}
