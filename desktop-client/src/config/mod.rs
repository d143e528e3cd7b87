mod config;
mod game_config;

pub use config::{
    config_manager_at, get_config_manager, Config, DEFAULT_FPS, FPS_STEP, MAX_FPS, MIN_FPS,
};
pub use game_config::{GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE, MIN_WIN_LENGTH};
