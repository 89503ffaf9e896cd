//! CLI entry point for strand.

mod api;
mod cli;
mod commands;
mod handlers;
mod launcher;
mod output;
mod router;
mod selector;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use strand_config::STRAND_DIR;
use strand_core::{EnvSnapshot, ExecContext, Outcome};

use crate::cli::Cli;
use crate::handlers::App;

/// Load layered env files: `~/.strand/env` first, then the nearest project
/// `.env` walking up from the working directory.
fn load_env_files() {
    if let Some(home) = dirs::home_dir() {
        let env_path = home.join(STRAND_DIR).join("env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        for _ in 0..32 {
            let env_file = dir.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            match dir.parent() {
                Some(parent) => dir = parent.to_path_buf(),
                None => break,
            }
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("STRAND_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    load_env_files();
    init_tracing();

    let inv = Cli::parse().into_invocation(EnvSnapshot::from_process());
    let mut ctx = ExecContext::from_env(&inv.env);
    let app = App::from_env();

    let outcome = match router::route(&app, &inv, &mut ctx).await {
        Ok(outcome) => outcome,
        // A failure in the help/version/gerrit steps is a defect; show the
        // full error chain rather than a clean message.
        Err(err) => {
            output::error(&format!("{err:?}"));
            std::process::exit(1);
        }
    };

    match outcome {
        Outcome::Exit { code } => std::process::exit(code),
        Outcome::Wait | Outcome::Continue => {
            // The launched session owns the terminal; stay alive until
            // interrupted.
            let _ = tokio::signal::ctrl_c().await;
        }
        Outcome::Unhandled => {
            if let Err(err) = app.launcher().run_default(&inv).await {
                output::error(&format!("{err:#}"));
                std::process::exit(1);
            }
        }
    }
}
