use broadside::render::{
    column_label, coord_to_string, parse_coord, render_board, render_heat_map,
};
use broadside::{AiMemory, Board, Coordinate, HeatMap, Ship};

#[test]
fn test_coordinate_labels() {
    assert_eq!(coord_to_string(Coordinate::new(0, 0)), "A1");
    assert_eq!(coord_to_string(Coordinate::new(1, 6)), "B7");
    assert_eq!(coord_to_string(Coordinate::new(9, 9)), "J10");
}

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("b7", 10), Some(Coordinate::new(1, 6)));
    assert_eq!(parse_coord("  J10 ", 10), Some(Coordinate::new(9, 9)));
    assert_eq!(parse_coord("K1", 10), None);
    assert_eq!(parse_coord("A0", 10), None);
    assert_eq!(parse_coord("A11", 10), None);
    assert_eq!(parse_coord("7B", 10), None);
    assert_eq!(parse_coord("", 10), None);
}

#[test]
fn test_render_hides_ships_unless_revealed() {
    let ship = Ship::new("destroyer", "Destroyer", 2);
    let board = Board::new(3)
        .unwrap()
        .place_ship_at(&ship, &[Coordinate::new(0, 0), Coordinate::new(1, 0)]);
    let board = board.receive_attack(Coordinate::new(0, 0)).board;
    let board = board.receive_attack(Coordinate::new(2, 2)).board;

    let shown = render_board(&board, true);
    let hidden = render_board(&board, false);
    let lines: Vec<&str> = shown.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].trim(), "A B C");
    assert_eq!(lines[1], " 1  X S .");
    assert_eq!(lines[3], " 3  . . o");
    assert!(!hidden.contains('S'));
    assert!(hidden.contains('X'));
}

#[test]
fn test_render_heat_map() {
    let board = Board::new(2).unwrap();
    let text = render_heat_map(&HeatMap::compute(&board, &AiMemory::new()));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Probability distribution:");
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[2], " 1  0.25 0.25");
}

#[test]
fn test_wide_boards_use_multi_letter_columns() {
    assert_eq!(column_label(25), "Z");
    assert_eq!(column_label(26), "AA");
    assert_eq!(column_label(51), "AZ");
    assert_eq!(column_label(52), "BA");
    assert_eq!(coord_to_string(Coordinate::new(26, 0)), "AA1");
    assert_eq!(parse_coord("AA1", 30), Some(Coordinate::new(26, 0)));
    assert_eq!(parse_coord("ad30", 30), Some(Coordinate::new(29, 29)));
    assert_eq!(parse_coord("AE1", 30), None);
    assert_eq!(parse_coord("ZZZZZZZZZZZZZZZZZZZZ1", 30), None);
}

#[test]
fn test_every_label_round_trips() {
    let size = 200;
    for x in 0..size {
        let coord = Coordinate::new(x, size - 1);
        assert_eq!(parse_coord(&coord_to_string(coord), size), Some(coord));
    }
}

#[test]
fn test_render_large_board() {
    let text = render_board(&Board::new(200).unwrap(), true);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 201);
    assert!(lines[0].trim_end().ends_with("GR"));
    assert!(lines[200].starts_with("200 "));
}
