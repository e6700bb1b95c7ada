use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fox_hounds::config::AppConfig;
use fox_hounds::game::{GameState, DEFAULT_DIM, MAX_DIM, MIN_DIM};
use fox_hounds::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

/// Play Fox and Hounds in the terminal.
#[derive(Parser)]
#[command(name = "fox_hounds", about = "Fox and Hounds board game")]
struct Cli {
    /// Board dimension (4-26); out-of-range values fall back to 8
    #[arg(long)]
    dimension: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config).context("loading configuration")?;

    let mut dimension = cli.dimension.unwrap_or(config.dimension);
    if !(MIN_DIM..=MAX_DIM).contains(&dimension) {
        eprintln!("Dimension {dimension} is invalid, using default: {DEFAULT_DIM}");
        dimension = DEFAULT_DIM;
    }

    let state = GameState::initial(dimension).context("setting up the board")?;
    let save_path = config.save_dir.join("game.txt");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(state, save_path);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running the UI")
}
