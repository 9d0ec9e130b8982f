//! Computer opponent: targeting strategies and the memory they share.
//!
//! Every strategy reads the opponent's board plus the AI's own [`AiMemory`]
//! and proposes a coordinate. After the shot is resolved the controller
//! folds the outcome back in with [`AiMemory::after_shot`].

#[cfg(not(feature = "std"))]
use alloc::{
    collections::{BTreeSet, VecDeque},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{
    collections::{BTreeSet, VecDeque},
    vec::Vec,
};

use core::fmt;
use rand::{Rng, RngCore};

use crate::board::Board;
use crate::common::{Coordinate, Direction};
use crate::heatmap::HeatMap;
use crate::ship::Ship;

/// Opponent strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize, clap::ValueEnum)
)]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Uniformly random shots.
    #[default]
    Easy,
    /// Hunt and target around known hits.
    Medium,
    /// Placement-count heat map.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Strategy implementing this difficulty.
    pub fn strategy(self) -> &'static dyn TargetingStrategy {
        match self {
            Difficulty::Easy => &Easy,
            Difficulty::Medium => &Medium,
            Difficulty::Hard => &Hard,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

/// What the AI remembers about its own shots during one game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AiMemory {
    shot_history: Vec<Coordinate>,
    shots: BTreeSet<Coordinate>,
    hunt_queue: VecDeque<Coordinate>,
    last_hit: Option<Coordinate>,
    // Carried for a directional chase; no strategy reads it yet.
    current_direction: Option<Direction>,
    hit_streak: Vec<Coordinate>,
}

impl AiMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fired-at coordinates in firing order, without repeats.
    pub fn shot_history(&self) -> &[Coordinate] {
        &self.shot_history
    }

    pub fn hunt_queue(&self) -> impl ExactSizeIterator<Item = &Coordinate> {
        self.hunt_queue.iter()
    }

    pub fn last_hit(&self) -> Option<Coordinate> {
        self.last_hit
    }

    pub fn current_direction(&self) -> Option<Direction> {
        self.current_direction
    }

    /// Hits accumulated since the last sinking.
    pub fn hit_streak(&self) -> &[Coordinate] {
        &self.hit_streak
    }

    pub fn has_fired_at(&self, coord: Coordinate) -> bool {
        self.shots.contains(&coord)
    }

    /// In bounds, not yet resolved on the board, and never fired at.
    pub fn is_valid_target(&self, board: &Board, coord: Coordinate) -> bool {
        board.status(coord).is_some_and(|s| !s.is_resolved()) && !self.has_fired_at(coord)
    }

    /// All valid targets in row-major order.
    pub fn available_targets(&self, board: &Board) -> Vec<Coordinate> {
        board
            .coordinates()
            .filter(|&c| self.is_valid_target(board, c))
            .collect()
    }

    /// Memory after a shot at `target` resolved on `board` (the post-shot board).
    ///
    /// Sinking a ship closes the case on it: its queued cells are dropped and
    /// the streak, last hit and direction reset. A plain hit extends the
    /// streak and puts the fresh neighbours at the front of the hunt queue.
    /// A miss is removed from the queue.
    pub fn after_shot(
        &self,
        target: Coordinate,
        hit: bool,
        board: &Board,
        sunk_ship: Option<&Ship>,
    ) -> AiMemory {
        let mut next = self.clone();
        if next.shots.insert(target) {
            next.shot_history.push(target);
        }

        if let Some(sunk) = sunk_ship {
            next.hunt_queue.retain(|&c| {
                board
                    .cell(c)
                    .and_then(|cell| cell.ship_id.as_ref())
                    .map_or(true, |id| id != sunk.id())
            });
            next.hit_streak.clear();
            next.last_hit = None;
            next.current_direction = None;
            return next;
        }

        if hit {
            next.hit_streak.push(target);
            next.last_hit = Some(target);
            let fresh: Vec<Coordinate> = target
                .neighbors()
                .filter(|&c| next.is_valid_target(board, c) && !next.hunt_queue.contains(&c))
                .collect();
            for c in fresh.into_iter().rev() {
                next.hunt_queue.push_front(c);
            }
        } else {
            next.hunt_queue.retain(|&c| c != target);
        }
        next
    }
}

/// A way of picking the next shot. `None` means no valid cell remains.
pub trait TargetingStrategy {
    fn select_target(
        &self,
        board: &Board,
        memory: &AiMemory,
        rng: &mut dyn RngCore,
    ) -> Option<Coordinate>;
}

/// Uniform choice among all valid cells; ignores any pending leads.
pub struct Easy;

impl TargetingStrategy for Easy {
    fn select_target(
        &self,
        board: &Board,
        memory: &AiMemory,
        rng: &mut dyn RngCore,
    ) -> Option<Coordinate> {
        pick(&memory.available_targets(board), rng)
    }
}

/// Hunt-and-target: work the hunt queue first, then the neighbours of the
/// current hit streak, then shoot at random.
pub struct Medium;

impl TargetingStrategy for Medium {
    fn select_target(
        &self,
        board: &Board,
        memory: &AiMemory,
        rng: &mut dyn RngCore,
    ) -> Option<Coordinate> {
        if let Some(&queued) = memory
            .hunt_queue
            .iter()
            .find(|&&c| memory.is_valid_target(board, c))
        {
            return Some(queued);
        }

        let mut rebuilt: Vec<Coordinate> = Vec::new();
        for hit in &memory.hit_streak {
            for adj in hit.neighbors() {
                if memory.is_valid_target(board, adj) && !rebuilt.contains(&adj) {
                    rebuilt.push(adj);
                }
            }
        }
        if let Some(&first) = rebuilt.first() {
            return Some(first);
        }

        Easy.select_target(board, memory, rng)
    }
}

/// Shoot at a random cell among those with the highest heat.
pub struct Hard;

impl TargetingStrategy for Hard {
    fn select_target(
        &self,
        board: &Board,
        memory: &AiMemory,
        rng: &mut dyn RngCore,
    ) -> Option<Coordinate> {
        let heat = HeatMap::compute(board, memory);
        if heat.max() == 0 {
            return Easy.select_target(board, memory, rng);
        }
        let candidates: Vec<Coordinate> = heat
            .hottest()
            .filter(|&c| memory.is_valid_target(board, c))
            .collect();
        if candidates.is_empty() {
            return Easy.select_target(board, memory, rng);
        }
        pick(&candidates, rng)
    }
}

fn pick(candidates: &[Coordinate], rng: &mut dyn RngCore) -> Option<Coordinate> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

/// Next AI shot at `board` for the given difficulty.
pub fn choose_move(
    difficulty: Difficulty,
    board: &Board,
    memory: &AiMemory,
    rng: &mut dyn RngCore,
) -> Option<Coordinate> {
    let target = difficulty.strategy().select_target(board, memory, rng);
    log::debug!(
        "ai move: difficulty={} target={:?} hunt_queue={} hit_streak={} shots={}",
        difficulty,
        target,
        memory.hunt_queue.len(),
        memory.hit_streak.len(),
        memory.shot_history.len()
    );
    target
}
