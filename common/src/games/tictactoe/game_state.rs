use super::board::{Board, BoardError};
use super::types::{GameStatus, Mark, Position};
use super::win_detector::check_win;

/// One match: a board, a win length, the side to move and the outcome so
/// far. X always opens.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    win_length: usize,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
}

impl GameState {
    /// A win length of `None` or `Some(0)` defaults to the board size
    /// (classic full-row tic-tac-toe).
    pub fn new(board_size: i32, win_length: Option<u32>) -> Result<Self, BoardError> {
        let board = Board::new(board_size)?;
        let win_length = effective_win_length(board.size(), win_length);
        Ok(Self {
            board,
            win_length,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side to move while in progress; frozen at the side that moved last
    /// once the match is over.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Apply a move for the side to play. Returns false when the move is
    /// absorbed without effect: the match is already over, the target lies
    /// outside the board, or the cell is taken. Those arise from routine
    /// UI interaction (a stray click) and are not errors.
    pub fn apply_move(&mut self, row: i32, col: i32) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        match self.board.is_empty(row, col) {
            Ok(true) => {}
            Ok(false) | Err(_) => return false,
        }
        if self.board.set(row, col, self.current_mark).is_err() {
            return false;
        }
        self.last_move = Some(Position::new(row as usize, col as usize));

        self.status = check_win(self.board.cells(), self.win_length);
        if self.status == GameStatus::InProgress
            && let Some(next) = self.current_mark.opponent()
        {
            self.current_mark = next;
        }
        true
    }

    /// Back to an empty board of the same size, X to move. Callable from
    /// any state, terminal ones included.
    pub fn restart(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    /// Replace the board with a fresh one of the new size, update the win
    /// length, and restart.
    pub fn apply_settings(
        &mut self,
        board_size: i32,
        win_length: Option<u32>,
    ) -> Result<(), BoardError> {
        self.board = Board::new(board_size)?;
        self.win_length = effective_win_length(self.board.size(), win_length);
        self.restart();
        Ok(())
    }
}

fn effective_win_length(board_size: usize, win_length: Option<u32>) -> usize {
    match win_length {
        None | Some(0) => board_size,
        Some(length) => length as usize,
    }
}
