use eframe::egui;

use crate::app::{Screen, TicTacToeApp};
use crate::themes::{apply_theme, themes_dir, ThemeKind};

pub fn show(app: &mut TicTacToeApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    ui.vertical_centered(|ui| {
        ui.add_space(30.0);
        ui.heading("Themes");
        ui.add_space(20.0);

        let mut selected = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, entry) in app.theme_entries.iter().enumerate() {
                let active = entry.id == app.active_theme.id;
                let suffix = match entry.kind {
                    ThemeKind::Builtin => "",
                    ThemeKind::Image => "  [image]",
                    ThemeKind::Animated => "  [animated]",
                };
                let label = if active {
                    format!("> {}{}", entry.name, suffix)
                } else {
                    format!("{}{}", entry.name, suffix)
                };
                if ui
                    .add_sized(egui::vec2(260.0, 36.0), egui::Button::new(label))
                    .clicked()
                {
                    selected = Some(index);
                }
                ui.add_space(8.0);
            }
        });

        if let Some(index) = selected {
            let entry = app.theme_entries[index].clone();
            match apply_theme(&entry, &themes_dir(), ctx, &app.logger) {
                Some(theme) => {
                    app.logger.info(&format!("Theme applied: {}", theme.id));
                    app.active_theme = theme;
                    app.config.theme_id = entry.id;
                    app.save_config();
                }
                None => {
                    // Load failure keeps the previous theme.
                    app.logger
                        .error(&format!("Theme '{}' not applied, keeping previous", entry.id));
                }
            }
        }

        ui.add_space(16.0);
        if ui
            .add_sized(egui::vec2(220.0, 40.0), egui::Button::new("Back"))
            .clicked()
        {
            app.switch_screen(Screen::Menu);
        }
    });
}
