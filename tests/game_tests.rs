use broadside::{
    BoardError, CellStatus, Coordinate, Difficulty, GameConfig, GameState, Orientation, Phase,
    Side, DEFAULT_BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn c(x: usize, y: usize) -> Coordinate {
    Coordinate::new(x, y)
}

fn auto_game(difficulty: Difficulty, seed: u64) -> (GameState, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::new(DEFAULT_BOARD_SIZE, difficulty);
    let game = GameState::new_auto(config, &mut rng).unwrap();
    (game, rng)
}

fn ai_ship_cells(game: &GameState) -> Vec<Coordinate> {
    game.ai_board()
        .ships()
        .iter()
        .flat_map(|s| s.coordinates().iter().copied())
        .collect()
}

#[test]
fn test_new_auto_game() {
    let (game, _) = auto_game(Difficulty::Medium, 1);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.current_turn(), Side::Human);
    assert_eq!(game.turn_count(), 0);
    assert_eq!(game.winner(), None);
    assert_eq!(game.difficulty(), Difficulty::Medium);
    assert_eq!(game.player_board().ships().len(), 5);
    assert_eq!(game.ai_board().ships().len(), 5);
    assert!(game.ai_memory().shot_history().is_empty());
    assert!(game.next_ship_to_place().is_none());
}

#[test]
fn test_fire_consumes_a_turn() {
    let (mut game, mut rng) = auto_game(Difficulty::Easy, 2);
    let report = game.player_fire(c(0, 0), &mut rng);
    assert!(!report.is_noop());
    let human = report.human.unwrap();
    assert_eq!(human.target, c(0, 0));
    assert!(game.ai_board().status(c(0, 0)).unwrap().is_resolved());

    let ai = report.ai.expect("AI answers every live turn");
    assert!(game.player_board().status(ai.target).unwrap().is_resolved());
    assert_eq!(game.ai_memory().shot_history(), &[ai.target]);
    assert_eq!(game.turn_count(), 1);
    assert_eq!(game.current_turn(), Side::Human);
}

#[test]
fn test_ignored_shots_do_not_count() {
    let (mut game, mut rng) = auto_game(Difficulty::Easy, 3);
    game.player_fire(c(4, 4), &mut rng);
    let snapshot = (game.ai_board().clone(), game.player_board().clone());

    assert!(game.player_fire(c(4, 4), &mut rng).is_noop());
    assert!(game.player_fire(c(DEFAULT_BOARD_SIZE, 0), &mut rng).is_noop());
    assert_eq!(game.turn_count(), 1);
    assert_eq!(&snapshot.0, game.ai_board());
    assert_eq!(&snapshot.1, game.player_board());
}

#[test]
fn test_human_wins_by_sinking_everything() {
    let (mut game, mut rng) = auto_game(Difficulty::Hard, 4);
    let targets = ai_ship_cells(&game);
    assert_eq!(targets.len(), 17);

    let mut sunk = 0;
    for (i, &target) in targets.iter().enumerate() {
        let report = game.player_fire(target, &mut rng);
        let human = report.human.unwrap();
        assert!(human.hit);
        sunk += usize::from(human.sunk_ship.is_some());
        if i + 1 < targets.len() {
            assert!(report.ai.is_some());
            assert_eq!(game.phase(), Phase::Playing);
        } else {
            assert!(report.ai.is_none(), "no counter-shot after the final sink");
        }
    }

    assert_eq!(sunk, 5);
    assert_eq!(game.winner(), Some(Side::Human));
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.turn_count(), 17);
    assert!(game.ai_board().all_ships_sunk());

    let water = game
        .ai_board()
        .cells()
        .find(|cell| cell.status == CellStatus::Empty)
        .unwrap()
        .coordinates;
    assert!(game.player_fire(water, &mut rng).is_noop());
    assert_eq!(game.turn_count(), 17);
}

#[test]
fn test_game_always_ends_consistently() {
    for seed in 0..5 {
        let (mut game, mut rng) = auto_game(Difficulty::Hard, 100 + seed);
        let cells: Vec<Coordinate> = game.ai_board().coordinates().collect();
        for target in cells {
            if game.phase() == Phase::Finished {
                break;
            }
            game.player_fire(target, &mut rng);
        }
        assert_eq!(game.phase(), Phase::Finished);
        match game.winner() {
            Some(Side::Human) => assert!(game.ai_board().all_ships_sunk()),
            Some(Side::Ai) => assert!(game.player_board().all_ships_sunk()),
            None => panic!("finished game without a winner"),
        }
    }
}

#[test]
fn test_heat_map_tracks_hard_ai_only() {
    let (mut hard, mut rng) = auto_game(Difficulty::Hard, 5);
    assert!(hard.heat_map().is_none());
    hard.player_fire(c(0, 0), &mut rng);
    let heat = hard.heat_map().expect("hard AI exposes its heat map");
    assert_eq!(heat.size(), DEFAULT_BOARD_SIZE);

    let (mut easy, mut rng) = auto_game(Difficulty::Easy, 5);
    easy.player_fire(c(0, 0), &mut rng);
    assert!(easy.heat_map().is_none());
}

#[test]
fn test_manual_placement() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut game = GameState::new_manual(GameConfig::default()).unwrap();
    assert_eq!(game.phase(), Phase::Placing);
    assert_eq!(game.next_ship_to_place().unwrap().id(), "carrier");
    assert!(game.player_fire(c(0, 0), &mut rng).is_noop());

    assert_eq!(
        game.place_player_ship(c(6, 0), Orientation::Horizontal, &mut rng),
        Err(BoardError::ShipOutOfBounds)
    );
    game.place_player_ship(c(0, 0), Orientation::Horizontal, &mut rng)
        .unwrap();
    assert_eq!(
        game.place_player_ship(c(2, 0), Orientation::Vertical, &mut rng),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(game.next_ship_to_place().unwrap().id(), "battleship");
    assert_eq!(game.player_board().ships().len(), 1);

    for row in 1..5 {
        game.place_player_ship(c(0, row * 2), Orientation::Horizontal, &mut rng)
            .unwrap();
    }
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.player_board().ships().len(), 5);
    assert_eq!(game.ai_board().ships().len(), 5);
    assert_eq!(game.turn_count(), 0);
    assert!(game.next_ship_to_place().is_none());
    assert_eq!(
        game.place_player_ship(c(5, 5), Orientation::Vertical, &mut rng),
        Err(BoardError::WrongPhase)
    );
    assert!(!game.player_fire(c(9, 9), &mut rng).is_noop());
}

#[test]
fn test_set_difficulty() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut placing = GameState::new_manual(GameConfig::default()).unwrap();
    placing.set_difficulty(Difficulty::Hard, &mut rng).unwrap();
    assert_eq!(placing.difficulty(), Difficulty::Hard);
    assert_eq!(placing.config().difficulty, Difficulty::Hard);
    assert_eq!(placing.phase(), Phase::Placing);

    let (mut game, mut rng) = auto_game(Difficulty::Easy, 8);
    game.player_fire(c(3, 3), &mut rng);
    game.set_difficulty(Difficulty::Medium, &mut rng).unwrap();
    assert_eq!(game.difficulty(), Difficulty::Medium);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.turn_count(), 0, "changing difficulty restarts the game");
    assert!(game.ai_board().cells().all(|cell| !cell.status.is_resolved()));
}

#[test]
fn test_game_state_serializes() {
    let (game, _) = auto_game(Difficulty::Hard, 9);
    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["difficulty"], "hard");
    assert_eq!(value["phase"], "Playing");
    assert_eq!(value["turn_count"], 0);
}
