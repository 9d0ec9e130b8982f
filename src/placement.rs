//! Randomized fleet placement.

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::{string::ToString, vec::Vec};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coordinate};
use crate::config::PLACEMENT_ATTEMPTS_PER_CELL;
use crate::ship::{Orientation, Ship};

/// Place `ship` at a random non-overlapping position on `board`.
///
/// Samples an orientation and an anchor that keeps the ship on the grid
/// until a free spot turns up, giving up after `size² × 10` attempts. Dense
/// fleets on small boards can exhaust the budget; see
/// [`place_fleet_backtracking`] for a placement that always succeeds when a
/// layout exists.
pub fn place_ship_randomly<R: Rng + ?Sized>(
    board: &Board,
    ship: &Ship,
    rng: &mut R,
) -> Result<Board, BoardError> {
    let size = board.size();
    let max_attempts = size * size * PLACEMENT_ATTEMPTS_PER_CELL;
    let mut attempts = 0;

    while attempts < max_attempts {
        attempts += 1;
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        // ship longer than the board never fits
        let Some(slack) = size.checked_sub(ship.length()) else {
            break;
        };
        let (max_x, max_y) = match orient {
            Orientation::Horizontal => (slack, size - 1),
            Orientation::Vertical => (size - 1, slack),
        };
        let origin = Coordinate::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
        let coords = orient.span(origin, ship.length());
        if board.can_place_ship_at(&coords) {
            log::trace!(
                "placed {} at {} {:?} after {} attempts",
                ship.id(),
                origin,
                orient,
                attempts
            );
            return Ok(board.place_ship_at(ship, &coords));
        }
    }

    log::warn!(
        "unable to place {} on {}x{} board after {} attempts",
        ship.id(),
        size,
        size,
        attempts
    );
    Err(BoardError::PlacementExhausted {
        ship: ship.id().to_string(),
        board_size: size,
        attempts,
    })
}

/// Place every ship in order, each on top of the previous snapshot.
///
/// Fails as a whole: on error nothing is returned and `board` is untouched.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    board: &Board,
    ships: &[Ship],
    rng: &mut R,
) -> Result<Board, BoardError> {
    ships
        .iter()
        .try_fold(board.clone(), |acc, ship| place_ship_randomly(&acc, ship, rng))
}

/// Place the fleet by depth-first search over shuffled candidate positions.
///
/// Succeeds whenever some legal layout exists, otherwise returns
/// [`BoardError::PlacementImpossible`]. Search time grows quickly with
/// fleet density, which is fine for fleets of classic size.
pub fn place_fleet_backtracking<R: Rng + ?Sized>(
    board: &Board,
    ships: &[Ship],
    rng: &mut R,
) -> Result<Board, BoardError> {
    search(board, ships, rng).ok_or(BoardError::PlacementImpossible {
        board_size: board.size(),
    })
}

fn search<R: Rng + ?Sized>(board: &Board, ships: &[Ship], rng: &mut R) -> Option<Board> {
    let Some((ship, rest)) = ships.split_first() else {
        return Some(board.clone());
    };
    let mut candidates = candidate_spans(board, ship.length());
    candidates.shuffle(rng);
    for coords in candidates {
        let next = board.place_ship_at(ship, &coords);
        if let Some(done) = search(&next, rest, rng) {
            return Some(done);
        }
    }
    None
}

/// Every legal span of `length` cells on the current board.
fn candidate_spans(board: &Board, length: usize) -> Vec<Vec<Coordinate>> {
    let mut spans = Vec::new();
    if length == 0 || length > board.size() {
        return spans;
    }
    for origin in board.coordinates() {
        for orient in [Orientation::Horizontal, Orientation::Vertical] {
            let coords = orient.span(origin, length);
            if board.can_place_ship_at(&coords) {
                spans.push(coords);
            }
        }
    }
    spans
}
