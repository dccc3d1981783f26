//! Quizflow TUI: a step-by-step quiz player in the terminal.
//!
//! The document is fetched on a loader thread while a loading screen is
//! shown; afterwards every key press becomes one engine event and the whole
//! screen is redrawn from the engine's view.

mod app;
mod host;
mod input;
mod loader;
mod theme;
mod ui;

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use quizflow_core::{DocumentSource, QuizConfig};

use crate::app::AppState;

#[derive(Debug, Parser)]
#[command(name = "quizflow-tui", version, about = "Play a quiz document in the terminal")]
struct Args {
    /// Quiz document: a file path or an http(s) URL.
    #[arg(default_value = "demos/quiz_data.json")]
    source: String,

    /// Config file (TOML). Defaults to the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => QuizConfig::load(path)?,
        None => {
            let default_path = dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("quizflow")
                .join("config.toml");
            QuizConfig::load_or_default(&default_path)?
        }
    };

    // The terminal is ours, so logs go to a file.
    init_tracing(&config)?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let source = DocumentSource::parse(&args.source);
    tracing::info!(%source, "starting quiz session");

    let (tx, rx) = mpsc::channel();
    let loader_handle =
        loader::spawn_loader(source.clone(), tx).context("failed to spawn loader thread")?;

    let mut app = AppState::new(config, source.to_string(), rx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // A slow remote fetch must not hold up quitting.
    if loader_handle.is_finished() {
        let _ = loader_handle.join();
    }

    tracing::info!("quiz session closed");
    result
}

fn init_tracing(config: &QuizConfig) -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let file = File::create(&config.log_file)
        .with_context(|| format!("cannot create log file {}", config.log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let tick = app.config.tick();
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Pick up the loaded document (non-blocking)
        app.poll_loader();

        // 3. Poll for input events
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Let pending widget resets expire
        app.tick();

        // 5. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
