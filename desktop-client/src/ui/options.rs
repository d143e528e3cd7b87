use eframe::egui;

use crate::app::{Screen, TicTacToeApp};
use crate::config::{Config, FPS_STEP, MAX_BOARD_SIZE, MAX_FPS, MIN_BOARD_SIZE, MIN_FPS, MIN_WIN_LENGTH};

pub fn show(app: &mut TicTacToeApp, ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(30.0);
        ui.heading("Settings");
        ui.add_space(30.0);

        let board_text = format!(
            "Board size: {}x{}",
            app.config.game.board_size, app.config.game.board_size
        );
        let (minus, plus) = stepper_row(ui, &board_text);
        if minus {
            app.config.game.board_size -= 1;
        }
        if plus {
            app.config.game.board_size += 1;
        }
        if minus || plus {
            ensure_limits(&mut app.config);
            app.logger
                .debug(&format!("Options: board size -> {}", app.config.game.board_size));
        }
        ui.add_space(10.0);

        let win_text = format!("Win length: {}", app.config.game.win_length);
        let (minus, plus) = stepper_row(ui, &win_text);
        if minus {
            app.config.game.win_length = app.config.game.win_length.saturating_sub(1);
        }
        if plus {
            app.config.game.win_length += 1;
        }
        if minus || plus {
            ensure_limits(&mut app.config);
            app.logger
                .debug(&format!("Options: win length -> {}", app.config.game.win_length));
        }
        ui.add_space(10.0);

        let fps_text = format!("FPS: {}", app.config.fps);
        let (minus, plus) = stepper_row(ui, &fps_text);
        if minus {
            app.config.fps = app.config.fps.saturating_sub(FPS_STEP);
        }
        if plus {
            app.config.fps += FPS_STEP;
        }
        if minus || plus {
            ensure_limits(&mut app.config);
            app.logger.debug(&format!("Options: fps -> {}", app.config.fps));
        }

        ui.add_space(24.0);
        if ui
            .add_sized(egui::vec2(220.0, 40.0), egui::Button::new("Back"))
            .clicked()
        {
            app.save_config();
            app.switch_screen(Screen::Menu);
        }
    });
}

fn stepper_row(ui: &mut egui::Ui, text: &str) -> (bool, bool) {
    let mut minus = false;
    let mut plus = false;
    ui.horizontal(|ui| {
        // Center the row: minus button, fixed-width label, plus button.
        let row_width = 36.0 + 220.0 + 36.0 + 2.0 * ui.spacing().item_spacing.x;
        let indent = (ui.available_width() - row_width).max(0.0) / 2.0;
        ui.add_space(indent);

        minus = ui
            .add_sized(egui::vec2(36.0, 30.0), egui::Button::new("-"))
            .clicked();
        ui.scope(|ui| {
            ui.set_width(220.0);
            ui.centered_and_justified(|ui| ui.label(text));
        });
        plus = ui
            .add_sized(egui::vec2(36.0, 30.0), egui::Button::new("+"))
            .clicked();
    });
    (minus, plus)
}

/// Clamp the adjustable settings to their supported ranges. Clamping is a
/// UI concern; the game core accepts whatever it is handed.
pub fn ensure_limits(config: &mut Config) {
    config.game.board_size = config.game.board_size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
    config.game.win_length = config
        .game
        .win_length
        .clamp(MIN_WIN_LENGTH, config.game.board_size as u32);
    config.fps = config.fps.clamp(MIN_FPS, MAX_FPS);
}
