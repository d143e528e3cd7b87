use std::time::{Duration, Instant};

use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::games::SessionRng;
use common::games::tictactoe::GameState;
use common::logger::Logger;
use eframe::egui;

use crate::config::{Config, GameConfig};
use crate::themes::{ActiveTheme, ThemeEntry};
use crate::ui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Options,
    Themes,
    Game,
}

/// How the next match is played. `Unselected` until the player picks a
/// menu entry; never a nullable boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Unselected,
    PlayerVsPlayer,
    PlayerVsBot,
}

type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub struct TicTacToeApp {
    pub logger: Logger,
    config_manager: ClientConfigManager,
    pub config: Config,
    pub screen: Screen,
    pub game_mode: GameMode,
    pub game: GameState,
    pub rng: SessionRng,
    pub theme_entries: Vec<ThemeEntry>,
    pub active_theme: ActiveTheme,
    started_at: Instant,
}

impl TicTacToeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        logger: Logger,
        config_manager: ClientConfigManager,
    ) -> Self {
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(e) => {
                logger.error(&format!("Failed to load config: {}, using defaults", e));
                Config::default()
            }
        };

        let rng = SessionRng::from_random();
        logger.debug(&format!("Session seed: {}", rng.seed()));

        let game = new_game(&logger, &config.game);

        let theme_entries = crate::themes::load_theme_entries(&crate::themes::manifest_path(), &logger);
        let active_theme = restore_theme(&cc.egui_ctx, &logger, &theme_entries, &config.theme_id);

        Self {
            logger,
            config_manager,
            config,
            screen: Screen::Menu,
            game_mode: GameMode::Unselected,
            game,
            rng,
            theme_entries,
            active_theme,
            started_at: Instant::now(),
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.logger.debug(&format!("Switching screen to {:?}", screen));
        self.screen = screen;
    }

    /// Apply the configured board settings to the match and enter the game
    /// screen in the given mode.
    pub fn start_game(&mut self, mode: GameMode) {
        if let Err(e) = self
            .game
            .apply_settings(self.config.game.board_size, Some(self.config.game.win_length))
        {
            self.logger
                .error(&format!("Rejected board settings: {}", e));
            return;
        }
        self.game_mode = mode;
        let label = match mode {
            GameMode::PlayerVsPlayer => "player vs player",
            GameMode::PlayerVsBot => "player vs bot",
            GameMode::Unselected => "unselected",
        };
        self.logger.info(&format!(
            "Starting {} match: board {}x{}, win length {}",
            label,
            self.config.game.board_size,
            self.config.game.board_size,
            self.config.game.win_length
        ));
        self.screen = Screen::Game;
    }

    pub fn save_config(&self) {
        if let Err(e) = self.config_manager.store(&self.config) {
            self.logger.error(&format!("Failed to save config: {}", e));
        }
    }

    /// Milliseconds since app start, the clock behind animated themes.
    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Menu => ui::menu::show(self, ui),
            Screen::Options => ui::options::show(self, ui),
            Screen::Themes => ui::themes::show(self, ui, ctx),
            Screen::Game => ui::game::show(self, ui),
        });

        // Pace repaints to the configured frame rate; animated themes keep
        // advancing at this cadence.
        let fps = self.config.fps.max(1);
        ctx.request_repaint_after(Duration::from_secs_f32(1.0 / fps as f32));
    }
}

fn new_game(logger: &Logger, game_config: &GameConfig) -> GameState {
    GameState::new(game_config.board_size, Some(game_config.win_length)).unwrap_or_else(|e| {
        logger.error(&format!(
            "Rejected board settings ({}), falling back to defaults",
            e
        ));
        let defaults = GameConfig::default();
        match GameState::new(defaults.board_size, Some(defaults.win_length)) {
            Ok(game) => game,
            Err(_) => unreachable!("default board settings are valid"),
        }
    })
}

fn restore_theme(
    ctx: &egui::Context,
    logger: &Logger,
    entries: &[ThemeEntry],
    theme_id: &str,
) -> ActiveTheme {
    if let Some(entry) = entries.iter().find(|entry| entry.id == theme_id)
        && let Some(theme) =
            crate::themes::apply_theme(entry, &crate::themes::themes_dir(), ctx, logger)
    {
        return theme;
    }
    if entries.iter().all(|entry| entry.id != theme_id) {
        logger.error(&format!("Stored theme '{}' not found, using classic", theme_id));
    }
    ActiveTheme::classic()
}
