mod app;
mod config;
mod themes;
mod ui;

use clap::Parser;
use common::logger::{LogLevel, Logger};
use eframe::egui;

use app::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Settings file location; defaults to next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Also print debug diagnostics (ignored moves, screen switches).
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    let min_level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    let logger = Logger::new(prefix, min_level);

    let config_manager = match args.config.as_deref() {
        Some(path) => config::config_manager_at(path),
        None => config::get_config_manager(),
    };

    logger.info("Game started");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 700.0])
            .with_title("Adaptive Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Adaptive Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, logger, config_manager)))),
    )?;

    Ok(())
}
