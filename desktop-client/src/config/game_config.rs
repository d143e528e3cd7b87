use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const MIN_BOARD_SIZE: i32 = 3;
pub const MAX_BOARD_SIZE: i32 = 10;
pub const MIN_WIN_LENGTH: u32 = 3;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub board_size: i32,
    pub win_length: u32,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ));
        }
        if self.win_length < MIN_WIN_LENGTH || self.win_length > self.board_size as u32 {
            return Err(format!(
                "Win length must be between {} and {} (the board size)",
                MIN_WIN_LENGTH, self.board_size
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            win_length: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_game_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_board_size_bounds() {
        let mut config = GameConfig::default();
        config.board_size = 2;
        assert!(config.validate().is_err());
        config.board_size = 11;
        assert!(config.validate().is_err());
        config.board_size = 10;
        config.win_length = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_win_length_cannot_exceed_board_size() {
        let config = GameConfig {
            board_size: 5,
            win_length: 6,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_win_length_lower_bound() {
        let config = GameConfig {
            board_size: 5,
            win_length: 2,
        };
        assert!(config.validate().is_err());
    }
}
