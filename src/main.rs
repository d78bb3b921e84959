use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use astar_snake::clock::TickClock;
use astar_snake::config::THEME_CLASSIC;
use astar_snake::error::AppError;
use astar_snake::game::{ControlMode, GameState, TickOutcome};
use astar_snake::input::{GameInput, InputHandler};
use astar_snake::renderer;
use astar_snake::settings::{PartialSettings, Settings, load_settings_file};
use astar_snake::terminal_runtime::TerminalSession;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "astar_snake=info";

#[derive(Debug, Parser)]
#[command(version, about = "Snake steered by A* pathfinding or the keyboard")]
struct Cli {
    /// Board width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Simulation ticks per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Control mode at start-up.
    #[arg(long, value_enum)]
    mode: Option<CliMode>,

    /// Seed for food placement and fallback moves.
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file (JSON). Defaults to the per-user config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Run this many AUTO ticks without a terminal and print a summary.
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliMode {
    Auto,
    Manual,
}

impl From<CliMode> for ControlMode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Auto => Self::Auto,
            CliMode::Manual => Self::Manual,
        }
    }
}

impl Cli {
    fn overrides(&self) -> PartialSettings {
        PartialSettings {
            grid_width: self.width,
            grid_height: self.height,
            ticks_per_second: self.fps,
            start_mode: self.mode.map(ControlMode::from),
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref(), cli.headless.is_some())?;

    let file_layer = load_settings_file(cli.config.as_deref())?;
    let settings = Settings::resolve(file_layer.merged_with(cli.overrides()))?;
    info!(
        width = settings.grid.width,
        height = settings.grid.height,
        rate = settings.ticks_per_second,
        mode = settings.start_mode.label(),
        "starting"
    );

    match cli.headless {
        Some(ticks) => {
            run_headless(settings, ticks);
            Ok(())
        }
        None => run_interactive(settings),
    }
}

fn new_state(settings: Settings, mode: ControlMode) -> GameState {
    match settings.seed {
        Some(seed) => GameState::new_with_seed(settings.grid, mode, seed),
        None => GameState::new(settings.grid, mode),
    }
}

fn run_interactive(settings: Settings) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut state = new_state(settings, settings.start_mode);
    let mut clock = TickClock::new(settings.ticks_per_second, Instant::now());

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &THEME_CLASSIC))?;

        let timeout = clock.time_until_tick(Instant::now());
        if let Some(game_input) = input.poll_input(timeout)? {
            if game_input == GameInput::Quit {
                break;
            }
            state.apply_input(game_input);
        }

        let now = Instant::now();
        if clock.is_due(now) {
            state.tick();
            clock.advance(now);
        }
    }

    info!(
        ticks = state.tick_count,
        best_score = state.best_score,
        resets = state.resets,
        "quit"
    );
    Ok(())
}

fn run_headless(settings: Settings, ticks: u64) {
    let mut state = new_state(settings, ControlMode::Auto);
    let mut meals = 0_u64;

    for _ in 0..ticks {
        if state.tick() == TickOutcome::Ate {
            meals += 1;
        }
    }

    println!(
        "ticks: {}  score: {}  best: {}  meals: {}  resets: {}  length: {}",
        state.tick_count,
        state.score,
        state.best_score,
        meals,
        state.resets,
        state.snake.len()
    );
}

/// Installs the tracing subscriber.
///
/// With a log file, logs go there without ANSI colours. Interactive runs
/// without a file stay silent so the alternate screen is not disturbed;
/// headless runs fall back to stderr.
fn init_logging(log_file: Option<&Path>, headless: bool) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let result = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if headless => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        None => return Ok(()),
    };

    result.map_err(|error| AppError::Logging(error.to_string()))
}
