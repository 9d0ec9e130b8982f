//! Solo simulations: one strategy clears a randomly placed fleet.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use rand::Rng;

use crate::ai::{self, AiMemory, Difficulty};
use crate::board::Board;
use crate::common::{BoardError, Coordinate};
use crate::config::GameConfig;
use crate::game::deploy_fleet;

/// Summary of one solo game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SoloReport {
    pub difficulty: Difficulty,
    pub shots: usize,
    pub hits: usize,
    pub misses: usize,
    pub ships_sunk: usize,
    /// `true` when every ship went down before the AI ran out of moves.
    pub completed: bool,
    pub history: Vec<Coordinate>,
    #[cfg_attr(feature = "std", serde(skip))]
    pub final_board: Board,
}

/// Place `config`'s fleet at random and let `difficulty` fire until it is sunk.
pub fn play_solo<R: Rng>(
    difficulty: Difficulty,
    config: &GameConfig,
    rng: &mut R,
) -> Result<SoloReport, BoardError> {
    let mut board = deploy_fleet(config, rng)?;
    let mut memory = AiMemory::new();
    let (mut hits, mut misses, mut ships_sunk) = (0, 0, 0);

    while !board.all_ships_sunk() {
        let Some(target) = ai::choose_move(difficulty, &board, &memory, rng) else {
            break;
        };
        let attack = board.receive_attack(target);
        memory = memory.after_shot(target, attack.hit, &attack.board, attack.sunk_ship.as_ref());
        if attack.hit {
            hits += 1;
        } else {
            misses += 1;
        }
        if let Some(ship) = &attack.sunk_ship {
            ships_sunk += 1;
            log::debug!("{} sank {} at {}", difficulty, ship.name(), target);
        }
        board = attack.board;
    }

    let history = memory.shot_history().to_vec();
    Ok(SoloReport {
        difficulty,
        shots: history.len(),
        hits,
        misses,
        ships_sunk,
        completed: board.all_ships_sunk(),
        history,
        final_board: board,
    })
}
