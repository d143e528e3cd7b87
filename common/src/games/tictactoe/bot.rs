use crate::games::SessionRng;

use super::board::Board;
use super::types::{Mark, Position};

/// Empty cells in row-major order.
pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.cells().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

/// Uniformly random empty cell, or `None` on a full board. Nothing is
/// retained between calls; the caller owns the RNG.
pub fn random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}
