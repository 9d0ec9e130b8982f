use std::collections::BTreeSet;

use broadside::{
    place_fleet_randomly, standard_fleet, Board, CellStatus, Coordinate, DEFAULT_BOARD_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let empty = Board::new(DEFAULT_BOARD_SIZE).unwrap();
    place_fleet_randomly(&empty, &standard_fleet(), &mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_never_overlaps(seed in any::<u64>()) {
        let board = random_board(seed);
        let mut seen = BTreeSet::new();
        for ship in board.ships() {
            prop_assert_eq!(ship.coordinates().len(), ship.length());
            for &coord in ship.coordinates() {
                prop_assert!(seen.insert(coord), "cell {} used twice", coord);
                let cell = board.cell(coord).unwrap();
                prop_assert_eq!(cell.status, CellStatus::Ship);
                prop_assert_eq!(cell.ship_id.as_ref(), Some(ship.id()));
            }
        }
        let ship_cells = board.cells().filter(|c| c.status == CellStatus::Ship).count();
        prop_assert_eq!(ship_cells, seen.len());
    }

    #[test]
    fn occupied_cells_reject_placement(
        seed in any::<u64>(),
        x in 0..DEFAULT_BOARD_SIZE,
        y in 0..DEFAULT_BOARD_SIZE,
    ) {
        let board = random_board(seed);
        let coord = Coordinate::new(x, y);
        let occupied = board.status(coord) == Some(CellStatus::Ship);
        prop_assert_eq!(board.can_place_ship_at(&[coord]), !occupied);
    }

    #[test]
    fn attack_idempotent(
        seed in any::<u64>(),
        x in 0..DEFAULT_BOARD_SIZE,
        y in 0..DEFAULT_BOARD_SIZE,
    ) {
        let board = random_board(seed);
        let target = Coordinate::new(x, y);
        let once = board.receive_attack(target);
        prop_assert!(once.changed);
        prop_assert_ne!(&once.board, &board);
        let twice = once.board.receive_attack(target);
        prop_assert!(!twice.changed);
        prop_assert_eq!(twice.hit, once.hit);
        prop_assert_eq!(&twice.board, &once.board);
    }
}
