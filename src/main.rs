//! Gomoku GUI
//!
//! Play five-in-a-row against the alpha-beta engine.

use clap::Parser;
use gomoku::ui::{GameState, GomokuApp};
use gomoku::{Difficulty, GameConfig, Heuristic};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "gomoku", about = "Five in a row against a minimax AI")]
struct Args {
    /// Board size in squares per side (5-20)
    #[arg(short, long, default_value_t = 15)]
    board_size: usize,

    /// AI strength: "easy", "medium" or "hard"
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Position evaluation: "weighted" or "simple"
    #[arg(long, default_value = "weighted")]
    heuristic: Heuristic,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = GameConfig {
        board_size: args.board_size,
        difficulty: args.difficulty,
        heuristic: args.heuristic,
    };
    let state = GameState::new(config)?;
    info!("starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI exited with an error: {e}"))
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
