use common::games::tictactoe::{check_win_with_line, random_move, GameStatus, Mark};
use eframe::egui;

use crate::app::{GameMode, Screen, TicTacToeApp};
use crate::themes::{frame_index, ThemeArt};

const BOARD_PADDING: f32 = 20.0;
const MIN_CELL_SIZE: f32 = 30.0;
const MAX_CELL_SIZE: f32 = 110.0;
const LINE_WIDTH: f32 = 2.0;
const MARK_STROKE: f32 = 4.0;

const BOARD_BG: egui::Color32 = egui::Color32::from_rgb(240, 240, 240);
const GRID_COLOR: egui::Color32 = egui::Color32::BLACK;
const X_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
const O_COLOR: egui::Color32 = egui::Color32::from_rgb(50, 50, 220);

pub fn show(app: &mut TicTacToeApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.heading(status_text(app));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Menu").clicked() {
                app.game_mode = GameMode::Unselected;
                app.switch_screen(Screen::Menu);
            }
        });
    });
    ui.separator();

    let size = app.game.board().size();
    if size == 0 {
        ui.label("The board has no cells.");
        return;
    }

    let cell_size = calculate_cell_size(ui.available_size(), size);
    let board_px = cell_size * size as f32;

    let mut clicked_cell = None;
    ui.vertical_centered(|ui| {
        ui.add_space(BOARD_PADDING);
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_px, board_px), egui::Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, BOARD_BG);

        for i in 0..=size {
            let x = rect.left() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                egui::Stroke::new(LINE_WIDTH, GRID_COLOR),
            );
            let y = rect.top() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(LINE_WIDTH, GRID_COLOR),
            );
        }

        let elapsed_ms = app.elapsed_ms();
        for (row, cells) in app.game.board().cells().iter().enumerate() {
            for (col, &mark) in cells.iter().enumerate() {
                if mark == Mark::Empty {
                    continue;
                }
                let cell_rect = cell_rect(rect, cell_size, row, col);
                draw_mark(painter, cell_rect, mark, &app.active_theme.art, elapsed_ms);
            }
        }

        if app.game.status() == GameStatus::InProgress
            && let Some(hover_pos) = response.hover_pos()
            && let Some((row, col)) = cell_at(rect, cell_size, size, hover_pos)
            && matches!(app.game.board().is_empty(row, col), Ok(true))
        {
            painter.rect_filled(
                cell_rect(rect, cell_size, row as usize, col as usize),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        if app.game.status().is_terminal()
            && let Some(line) =
                check_win_with_line(app.game.board().cells(), app.game.win_length())
        {
            let start = cell_rect(rect, cell_size, line.start.row, line.start.col).center();
            let end = cell_rect(rect, cell_size, line.end.row, line.end.col).center();
            painter.line_segment(
                [start, end],
                egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }

        if response.clicked()
            && let Some(pointer_pos) = response.interact_pointer_pos()
        {
            // Deliberately unclamped: the match absorbs out-of-range cells.
            let col = ((pointer_pos.x - rect.left()) / cell_size).floor() as i32;
            let row = ((pointer_pos.y - rect.top()) / cell_size).floor() as i32;
            clicked_cell = Some((row, col));
        }
    });

    if let Some((row, col)) = clicked_cell {
        handle_click(app, row, col);
    }
}

fn handle_click(app: &mut TicTacToeApp, row: i32, col: i32) {
    if app.game.status().is_terminal() {
        app.logger.debug("Click after match end, restarting");
        app.game.restart();
        return;
    }

    if !app.game.apply_move(row, col) {
        app.logger
            .debug(&format!("Move ignored at row={}, col={}", row, col));
        return;
    }

    if app.game_mode == GameMode::PlayerVsBot
        && app.game.status() == GameStatus::InProgress
        && app.game.current_mark() == Mark::O
        && let Some(pos) = random_move(app.game.board(), &mut app.rng)
    {
        app.game.apply_move(pos.row as i32, pos.col as i32);
    }
}

fn status_text(app: &TicTacToeApp) -> String {
    match app.game.status() {
        GameStatus::InProgress => match app.game.current_mark() {
            Mark::X => "X to move".to_string(),
            Mark::O => "O to move".to_string(),
            Mark::Empty => String::new(),
        },
        GameStatus::XWon => "X wins! Click the board to play again".to_string(),
        GameStatus::OWon => "O wins! Click the board to play again".to_string(),
        GameStatus::Draw => "Draw! Click the board to play again".to_string(),
    }
}

fn calculate_cell_size(available: egui::Vec2, board_cells: usize) -> f32 {
    let usable = (available.x.min(available.y) - 2.0 * BOARD_PADDING).max(0.0);
    (usable / board_cells as f32).clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}

fn cell_rect(board_rect: egui::Rect, cell_size: f32, row: usize, col: usize) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            board_rect.left() + col as f32 * cell_size,
            board_rect.top() + row as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

fn cell_at(
    board_rect: egui::Rect,
    cell_size: f32,
    board_cells: usize,
    pos: egui::Pos2,
) -> Option<(i32, i32)> {
    let col = ((pos.x - board_rect.left()) / cell_size).floor() as i32;
    let row = ((pos.y - board_rect.top()) / cell_size).floor() as i32;
    if row < 0 || col < 0 || row as usize >= board_cells || col as usize >= board_cells {
        return None;
    }
    Some((row, col))
}

fn draw_mark(
    painter: &egui::Painter,
    rect: egui::Rect,
    mark: Mark,
    art: &ThemeArt,
    elapsed_ms: u64,
) {
    match art {
        ThemeArt::Builtin => match mark {
            Mark::X => draw_x(painter, rect),
            Mark::O => draw_o(painter, rect),
            Mark::Empty => {}
        },
        ThemeArt::Static { x, o } => {
            let texture = match mark {
                Mark::X => x,
                Mark::O => o,
                Mark::Empty => return,
            };
            draw_texture(painter, rect, texture);
        }
        ThemeArt::Animated {
            x_frames,
            o_frames,
            frame_duration_ms,
        } => {
            let frames = match mark {
                Mark::X => x_frames,
                Mark::O => o_frames,
                Mark::Empty => return,
            };
            let index = frame_index(elapsed_ms, *frame_duration_ms, frames.len());
            if let Some(texture) = frames.get(index) {
                draw_texture(painter, rect, texture);
            }
        }
    }
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(MARK_STROKE, X_COLOR);

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let radius = (rect.width() / 2.0) - padding;
    painter.circle_stroke(
        rect.center(),
        radius,
        egui::Stroke::new(MARK_STROKE, O_COLOR),
    );
}

// Scale a texture into the cell, keeping its aspect ratio and a small
// margin from the grid lines.
fn draw_texture(painter: &egui::Painter, cell_rect: egui::Rect, texture: &egui::TextureHandle) {
    let inner = cell_rect.shrink(cell_rect.width() * 0.1 + LINE_WIDTH);
    let tex_size = texture.size_vec2();
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 {
        return;
    }

    let scale = (inner.width() / tex_size.x).min(inner.height() / tex_size.y);
    let draw_rect = egui::Rect::from_center_size(inner.center(), tex_size * scale);
    painter.image(
        texture.id(),
        draw_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}
