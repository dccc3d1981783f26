//! Quizflow CLI: headless tooling over the quiz engine.
//!
//! Commands:
//! - `check`: load a document and report lint issues
//! - `outline`: list steps with their content and widget kinds
//! - `replay`: drive the engine from a scripted event file and print the result

mod script;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use quizflow_core::{load_document, DocumentSource, Engine, QuizConfig, QuizDocument, Severity};

#[derive(Parser)]
#[command(name = "quizflow", version, about = "Quizflow CLI: check, outline and replay quiz documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a document and report lint issues. Exits non-zero on errors.
    Check {
        /// File path or http(s) URL.
        source: String,

        /// Treat warnings as errors.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// List every step with its content and interactive widgets.
    Outline {
        /// File path or http(s) URL.
        source: String,
    },
    /// Replay a scripted event file and print the session as JSON.
    Replay {
        /// File path or http(s) URL.
        source: String,

        /// JSON array of events and `{"wait_ms": N}` pauses.
        #[arg(long)]
        script: PathBuf,

        /// Config file (TOML).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { source, strict } => cmd_check(&source, strict),
        Commands::Outline { source } => {
            cmd_outline(&load(&source)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Replay {
            source,
            script,
            config,
        } => cmd_replay(&source, &script, config),
    }
}

fn load(raw: &str) -> Result<QuizDocument> {
    let source = DocumentSource::parse(raw);
    load_document(&source).with_context(|| format!("failed to load {source}"))
}

fn cmd_check(raw: &str, strict: bool) -> Result<ExitCode> {
    let document = load(raw)?;
    let issues = document.lint();

    for issue in &issues {
        println!("{issue}");
    }

    let errors = issues
        .iter()
        .filter(|issue| issue.severity == Severity::Error)
        .count();
    let warnings = issues.len() - errors;
    println!(
        "{}: {} steps, {errors} errors, {warnings} warnings",
        document.title,
        document.step_count()
    );

    let failed = errors > 0 || (strict && warnings > 0);
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn cmd_outline(document: &QuizDocument) {
    println!("{}", document.title);
    for (index, step) in document.steps.iter().enumerate() {
        let content = &step.content;
        let mut parts: Vec<String> = Vec::new();

        if let Some(text) = &content.text {
            parts.push(format!("{} paragraphs", text.len()));
        }
        if content.image.is_some() {
            parts.push("image".into());
        }
        if let Some(buttons) = &content.buttons {
            parts.push(format!("{} buttons", buttons.len()));
        }
        for kind in content.interactive_widgets() {
            parts.push(kind.label().into());
        }
        if let Some(sections) = &content.sections {
            parts.push(format!("{} sections", sections.len()));
        }
        if content.star_icon || content.download_button.is_some() || content.small_text.is_some() {
            parts.push("completion".into());
        }

        let gate = if content.has_interaction() { "*" } else { " " };
        println!("{gate}{:>3}. {:<22} {}", index + 1, step.id, parts.join(", "));
    }
}

fn cmd_replay(raw: &str, script_path: &Path, config: Option<PathBuf>) -> Result<ExitCode> {
    let config = match config {
        Some(path) => QuizConfig::load(&path)?,
        None => QuizConfig::default(),
    };
    let document = load(raw)?;
    let steps = script::load_script(script_path)?;
    let mut engine = Engine::new(document, config)?;

    let report = script::replay(&mut engine, &steps);
    tracing::info!(
        final_step = %report.final_step,
        completed = report.completed,
        "replay finished"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(ExitCode::SUCCESS)
}
