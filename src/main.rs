//! Terminal Pong entry point
//!
//! Parses the command line, sets up logging and the terminal, and runs the
//! game loop until the player quits.

use std::fs::File;
use std::io::{BufWriter, stdout};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use term_pong::consts::TICKS_PER_SECOND;
use term_pong::platform::{SystemClock, TerminalInput, TerminalSession};
use term_pong::renderer::TerminalRenderer;
use term_pong::sim::GameState;
use term_pong::{App, Settings};

#[derive(Parser, Debug)]
#[command(name = "term-pong", version, about = "Pong against a scripted opponent, in your terminal")]
struct Args {
    /// JSON settings file (colors, title, seed, demo)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for serve directions
    #[arg(long)]
    seed: Option<u64>,

    /// Let the AI play the bottom paddle too
    #[arg(long)]
    demo: bool,

    /// Write logs here; the game screen hides stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if log_file.is_some() { "info" } else { "error" }),
    );
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if args.demo {
        settings.demo = true;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;
    let settings = load_settings(&args)?;

    if args.print_config {
        println!("{}", settings.to_json()?);
        return Ok(());
    }

    let seed = settings.seed_or(rand::random());
    log::info!("Terminal Pong starting with seed {seed}");

    let session = TerminalSession::enter(&settings.title).context("failed to initialise terminal")?;
    let (cols, rows) = session.size().context("failed to read terminal size")?;

    let mut app = App::new(
        GameState::new(seed),
        TerminalRenderer::new(BufWriter::new(stdout()), cols, rows),
        TerminalInput::new(session.reports_release()),
        SystemClock::new(TICKS_PER_SECOND),
        &settings,
    );
    let result = app.run();
    drop(app);
    drop(session);

    let stats = result.context("game loop failed")?;
    println!(
        "Matches won: {}, lost: {} ({} goals in {} ticks)",
        stats.matches_won, stats.matches_lost, stats.goals, stats.ticks
    );
    Ok(())
}
