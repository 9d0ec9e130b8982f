//! Game session: both boards, turn order, phases and the AI counter-shot.

use rand::Rng;

use crate::ai::{self, AiMemory, Difficulty};
use crate::board::Board;
use crate::common::{BoardError, Coordinate};
use crate::config::GameConfig;
use crate::heatmap::HeatMap;
use crate::placement::{place_fleet_backtracking, place_fleet_randomly};
use crate::ship::{Orientation, Ship, ShipDef};

/// Stage of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placing,
    Playing,
    Finished,
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Ai,
}

/// A resolved shot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotReport {
    pub target: Coordinate,
    pub hit: bool,
    pub sunk_ship: Option<Ship>,
}

/// What happened during [`GameState::player_fire`].
///
/// `human` is `None` when the shot was ignored: wrong phase or turn, out of
/// bounds, or a cell already fired at. Such a shot does not consume a turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnReport {
    pub human: Option<ShotReport>,
    pub ai: Option<ShotReport>,
}

impl TurnReport {
    pub fn is_noop(&self) -> bool {
        self.human.is_none()
    }
}

/// Full state of one human-versus-AI session.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameState {
    config: GameConfig,
    player_board: Board,
    ai_board: Board,
    current_turn: Side,
    phase: Phase,
    winner: Option<Side>,
    turn_count: u32,
    difficulty: Difficulty,
    ai_memory: AiMemory,
    heat_map: Option<HeatMap>,
    next_ship: usize,
}

impl GameState {
    /// Start a game with both fleets placed at random.
    pub fn new_auto<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let player_board = deploy_fleet(&config, rng)?;
        let ai_board = deploy_fleet(&config, rng)?;
        log::info!(
            "new game: {}x{} board, {} ships, difficulty {}",
            config.board_size,
            config.board_size,
            config.fleet.len(),
            config.difficulty
        );
        Ok(Self {
            difficulty: config.difficulty,
            next_ship: config.fleet.len(),
            config,
            player_board,
            ai_board,
            current_turn: Side::Human,
            phase: Phase::Playing,
            winner: None,
            turn_count: 0,
            ai_memory: AiMemory::new(),
            heat_map: None,
        })
    }

    /// Start a game in which the human places each ship by hand.
    pub fn new_manual(config: GameConfig) -> Result<Self, BoardError> {
        let empty = Board::new(config.board_size)?;
        log::info!("new game: manual placement of {} ships", config.fleet.len());
        Ok(Self {
            difficulty: config.difficulty,
            next_ship: 0,
            config,
            player_board: empty.clone(),
            ai_board: empty,
            current_turn: Side::Human,
            phase: Phase::Placing,
            winner: None,
            turn_count: 0,
            ai_memory: AiMemory::new(),
            heat_map: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn ai_memory(&self) -> &AiMemory {
        &self.ai_memory
    }

    /// Heat map computed after the latest Hard AI shot, for display.
    pub fn heat_map(&self) -> Option<&HeatMap> {
        self.heat_map.as_ref()
    }

    /// Ship the human places next, while in the placing phase.
    pub fn next_ship_to_place(&self) -> Option<&ShipDef> {
        match self.phase {
            Phase::Placing => self.config.fleet.get(self.next_ship),
            _ => None,
        }
    }

    /// Place the next fleet ship on the human's board.
    ///
    /// Rejected placements leave the state untouched. Once the last ship is
    /// down the AI fleet is deployed and play begins.
    pub fn place_player_ship<R: Rng>(
        &mut self,
        origin: Coordinate,
        orientation: Orientation,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        let def = *self.next_ship_to_place().ok_or(BoardError::WrongPhase)?;
        let coords = orientation.span(origin, def.length());
        if !coords.iter().all(|&c| self.player_board.in_bounds(c)) {
            return Err(BoardError::ShipOutOfBounds);
        }
        if !self.player_board.can_place_ship_at(&coords) {
            return Err(BoardError::ShipOverlaps);
        }

        let placed = self.player_board.place_ship_at(&def.build(), &coords);
        if self.next_ship + 1 < self.config.fleet.len() {
            self.player_board = placed;
            self.next_ship += 1;
            return Ok(());
        }

        let ai_board = deploy_fleet(&self.config, rng)?;
        self.player_board = placed;
        self.ai_board = ai_board;
        self.next_ship = self.config.fleet.len();
        self.phase = Phase::Playing;
        self.current_turn = Side::Human;
        self.winner = None;
        self.turn_count = 0;
        self.ai_memory = AiMemory::new();
        self.heat_map = None;
        log::info!("fleet placed, game on at difficulty {}", self.difficulty);
        Ok(())
    }

    /// Change the AI difficulty.
    ///
    /// While placing ships only the setting changes; in any other phase a
    /// fresh auto-placed game starts at the new difficulty.
    pub fn set_difficulty<R: Rng>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        if self.phase == Phase::Placing {
            self.config.difficulty = difficulty;
            self.difficulty = difficulty;
            return Ok(());
        }
        let config = GameConfig {
            difficulty,
            ..self.config.clone()
        };
        *self = GameState::new_auto(config, rng)?;
        Ok(())
    }

    /// Fire the human's shot at `target`, then let the AI answer.
    pub fn player_fire<R: Rng>(&mut self, target: Coordinate, rng: &mut R) -> TurnReport {
        if self.phase != Phase::Playing || self.current_turn != Side::Human {
            return TurnReport::default();
        }

        let attack = self.ai_board.receive_attack(target);
        if !attack.changed {
            log::debug!("ignoring repeated or out-of-bounds shot at {}", target);
            return TurnReport::default();
        }
        let human = ShotReport {
            target,
            hit: attack.hit,
            sunk_ship: attack.sunk_ship,
        };
        self.ai_board = attack.board;

        if self.ai_board.all_ships_sunk() {
            self.winner = Some(Side::Human);
            self.phase = Phase::Finished;
            self.turn_count += 1;
            log::info!("human wins after {} turns", self.turn_count);
            return TurnReport {
                human: Some(human),
                ai: None,
            };
        }

        self.current_turn = Side::Ai;
        let ai = self.take_ai_turn(rng);
        self.current_turn = Side::Human;
        self.turn_count += 1;

        if self.player_board.all_ships_sunk() {
            self.winner = Some(Side::Ai);
            self.phase = Phase::Finished;
            log::info!("ai wins after {} turns", self.turn_count);
        }
        TurnReport {
            human: Some(human),
            ai,
        }
    }

    fn take_ai_turn<R: Rng>(&mut self, rng: &mut R) -> Option<ShotReport> {
        let target = ai::choose_move(self.difficulty, &self.player_board, &self.ai_memory, rng)?;
        let attack = self.player_board.receive_attack(target);
        self.ai_memory = self.ai_memory.after_shot(
            target,
            attack.hit,
            &attack.board,
            attack.sunk_ship.as_ref(),
        );
        self.player_board = attack.board;
        if self.difficulty == Difficulty::Hard {
            self.heat_map = Some(HeatMap::compute(&self.player_board, &self.ai_memory));
        }
        Some(ShotReport {
            target,
            hit: attack.hit,
            sunk_ship: attack.sunk_ship,
        })
    }
}

/// Random fleet on a fresh board, falling back to backtracking when the
/// random attempt budget runs out.
pub(crate) fn deploy_fleet<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Board, BoardError> {
    let empty = Board::new(config.board_size)?;
    let ships = config.build_fleet();
    place_fleet_randomly(&empty, &ships, rng).or_else(|err| {
        log::warn!("{}, retrying with backtracking placement", err);
        place_fleet_backtracking(&empty, &ships, rng)
    })
}
