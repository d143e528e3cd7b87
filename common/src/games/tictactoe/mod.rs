mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, BoardError};
pub use bot::{get_available_moves, random_move};
pub use game_state::GameState;
pub use types::{GameStatus, Mark, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
