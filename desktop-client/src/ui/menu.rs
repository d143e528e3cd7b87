use eframe::egui;

use crate::app::{GameMode, Screen, TicTacToeApp};

const BUTTON_SIZE: egui::Vec2 = egui::vec2(220.0, 40.0);

pub fn show(app: &mut TicTacToeApp, ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading("Adaptive Tic-Tac-Toe");
        ui.add_space(30.0);

        if ui
            .add_sized(BUTTON_SIZE, egui::Button::new("Play vs Player"))
            .clicked()
        {
            app.start_game(GameMode::PlayerVsPlayer);
        }
        ui.add_space(12.0);

        if ui
            .add_sized(BUTTON_SIZE, egui::Button::new("Play vs Bot"))
            .clicked()
        {
            app.start_game(GameMode::PlayerVsBot);
        }
        ui.add_space(12.0);

        if ui
            .add_sized(BUTTON_SIZE, egui::Button::new("Options"))
            .clicked()
        {
            app.switch_screen(Screen::Options);
        }
        ui.add_space(12.0);

        if ui
            .add_sized(BUTTON_SIZE, egui::Button::new("Themes"))
            .clicked()
        {
            app.switch_screen(Screen::Themes);
        }

        ui.add_space(24.0);
        ui.separator();
        ui.label(format!(
            "Board: {}x{}",
            app.config.game.board_size, app.config.game.board_size
        ));
        ui.label(format!("Win length: {}", app.config.game.win_length));
        ui.label(format!("FPS: {}", app.config.fps));
        ui.label(format!("Theme: {}", app.active_theme.name));
    });
}
