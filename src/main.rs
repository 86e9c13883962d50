mod command;
mod config;
mod render;
mod session;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gameboard::board::Board;

use crate::config::AppConfig;
use crate::render::render_board;
use crate::session::Report;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("invalid move script: {0}")]
    Command(#[from] command::CommandError),
    #[error(transparent)]
    Session(#[from] session::SessionError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "critterboard", about = "Circuit-routing sliding puzzle: shift rows and columns until every critter is powered")]
struct Cli {
    /// JSON level file; the built-in level is used when absent.
    #[arg(long, env = "CRITTERBOARD_LEVEL")]
    level: Option<PathBuf>,

    /// error, warn, info, debug or trace. Logs go to stderr.
    #[arg(long, env = "CRITTERBOARD_LOG")]
    log_level: Option<String>,

    /// Draw pieces with plain ASCII.
    #[arg(long)]
    ascii: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Print the starting board.
    Show,
    /// Play interactively on stdin.
    Play,
    /// Apply a `;`-separated move script and print the result.
    Run {
        #[arg(long)]
        moves: String,
        /// Print a JSON snapshot instead of the board.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::from_args(cli.level, cli.log_level.as_deref(), cli.ascii)?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    let level = config.load_level()?;
    tracing::info!(size = level.size(), source = ?config.level, "level loaded");
    let mut board = Board::new(level);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.mode {
        Mode::Show => writeln!(out, "{}", render_board(&board, config.glyphs))?,
        Mode::Play => session::play(&mut board, io::stdin().lock(), &mut out, config.glyphs)?,
        Mode::Run { moves, json } => {
            let commands = command::parse_script(&moves)?;
            let report = if json { Report::Json } else { Report::Board };
            session::run(&mut board, &commands, &mut out, config.glyphs, report)?;
        }
    }
    Ok(())
}
