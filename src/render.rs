#![cfg(feature = "std")]

//! Text rendering for terminal play.

use std::fmt::Write;
use std::string::{String, ToString};
use std::vec::Vec;

use crate::board::{Board, CellStatus};
use crate::common::Coordinate;
use crate::heatmap::HeatMap;

/// Column label in spreadsheet style: `A`..`Z`, then `AA`, `AB`, ...
pub fn column_label(x: usize) -> String {
    let mut letters = Vec::new();
    let mut n = x + 1;
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Label such as `B7` for column 1, row 6.
pub fn coord_to_string(coord: Coordinate) -> String {
    std::format!("{}{}", column_label(coord.x), coord.y + 1)
}

/// Parse a label such as `b7` or `AA12` into a coordinate on a
/// `size`×`size` board.
pub fn parse_coord(input: &str, size: usize) -> Option<Coordinate> {
    let input = input.trim();
    let split = input
        .find(|ch: char| !ch.is_ascii_alphabetic())
        .unwrap_or(input.len());
    let (letters, digits) = input.split_at(split);
    if letters.is_empty() {
        return None;
    }
    let mut n: usize = 0;
    for ch in letters.chars() {
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        n = n.checked_mul(26)?.checked_add(digit)?;
    }
    let col = n - 1;
    let row: usize = digits.trim().parse().ok()?;
    if row == 0 || row > size || col >= size {
        return None;
    }
    Some(Coordinate::new(col, row - 1))
}

fn label_width(size: usize) -> usize {
    column_label(size.saturating_sub(1)).len()
}

fn row_width(size: usize) -> usize {
    size.to_string().len().max(2)
}

fn header(out: &mut String, size: usize, width: usize) {
    let _ = write!(out, "{:rw$} ", "", rw = row_width(size));
    for c in 0..size {
        let _ = write!(out, " {:>width$}", column_label(c), width = width);
    }
    out.push('\n');
}

/// Grid with `X` for hits and `o` for misses. Ships show as `S` when `reveal`.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let size = board.size();
    let width = label_width(size);
    let rw = row_width(size);
    let mut out = String::new();
    header(&mut out, size, width);
    for (r, row) in board.cells().collect::<Vec<_>>().chunks(size).enumerate() {
        let _ = write!(out, "{:rw$} ", r + 1, rw = rw);
        for cell in row {
            let ch = match cell.status {
                CellStatus::Hit => 'X',
                CellStatus::Miss => 'o',
                CellStatus::Ship if reveal => 'S',
                _ => '.',
            };
            let _ = write!(out, " {:>width$}", ch, width = width);
        }
        out.push('\n');
    }
    out
}

/// Heat map as a normalized probability grid.
pub fn render_heat_map(heat: &HeatMap) -> String {
    let size = heat.size();
    let pdf = heat.normalized();
    let mut out = String::from("Probability distribution:\n");
    let width = label_width(size).max(4);
    let rw = row_width(size);
    header(&mut out, size, width);
    for (r, row) in pdf.chunks(size).enumerate() {
        let _ = write!(out, "{:rw$} ", r + 1, rw = rw);
        for p in row {
            let _ = write!(out, " {:>width$.2}", p, width = width);
        }
        out.push('\n');
    }
    out
}
