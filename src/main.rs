//! Terminal runner (default binary).
//!
//! The game loop runs on the main thread and paces gravity itself; a background
//! thread reads key events and only enqueues commands.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{info, Level};

use tui_blockfall::core::{
    CommandQueue, GameLoop, IntervalTicker, Outcome, RandomShapes, SessionSummary,
};
use tui_blockfall::input::InputController;
use tui_blockfall::term::{TerminalScreen, Viewport};
use tui_blockfall::types::Command;

#[derive(Debug, Parser)]
#[command(name = "tui-blockfall")]
#[command(about = "Falling-block puzzle game. Arrow keys move, q quits.")]
struct Cli {
    #[arg(long, help = "Seed for the shape randomizer (default: from the clock)")]
    seed: Option<u32>,

    #[arg(long, help = "Write logs to this file")]
    log_file: Option<PathBuf>,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)"
    )]
    verbose: u8,

    #[arg(long, help = "Print the session summary as JSON after exiting")]
    summary_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = cli.seed.unwrap_or_else(seed_from_clock);
    info!(seed, "starting");

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut screen = TerminalScreen::enter(Viewport::new(w, h))?;

    let result = run(&mut screen, seed);

    // Always try to restore terminal state.
    let _ = screen.exit();
    let summary = result?;

    info!(score = summary.score, outcome = ?summary.outcome, "finished");
    if cli.summary_json {
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}

fn run(screen: &mut TerminalScreen, seed: u32) -> Result<SessionSummary> {
    let queue = CommandQueue::new();
    let input = InputController::new(queue.clone())
        .spawn_event_thread()
        .context("spawn input thread")?;

    let mut game = GameLoop::new(RandomShapes::new(seed), IntervalTicker::default());
    let summary = game.run(screen, &queue);

    // Keep the final board and score on screen until the player leaves.
    if matches!(&summary, Ok(s) if s.outcome == Outcome::GameOver) {
        queue.close();
        queue.wait_until_quit();
    }
    queue.push(Command::Quit);

    let input_result = input
        .join()
        .map_err(|_| anyhow!("input thread panicked"))?;
    let summary = summary?;
    input_result.context("read terminal events")?;
    Ok(summary)
}

fn init_logging(cli: &Cli) -> Result<()> {
    // The terminal belongs to the game, so logs only ever go to a file.
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
