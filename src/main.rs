//! Command-line entry point for cras.
//!
//! ```text
//! cras [-n [--due YYYY-MM-DD] | -a | -o | -t NUM | -T NUM | -e NUM TEXT | -d NUM | -i] [FILE]
//! ```
//!
//! Without a mode flag the list is printed in full. `FILE` defaults to
//! `$CRAS_FILE`.

use clap::Parser;
use cras::cli::{self, Cli, CliError};
use cras::config::{LOG_ENV, ProcessEnvironment, Settings};
use cras::render::Renderer;
use cras::tasklist::{adapters::FileTaskListRepository, services::TaskListService};
use mockable::DefaultClock;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    let args = Cli::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &CliError) {
    let mut stderr = io::stderr().lock();
    // A failed write to stderr has nowhere left to go.
    writeln!(stderr, "cras: {err}").ok();
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Cli) -> Result<(), CliError> {
    let settings = Settings::resolve(args.overrides(), &ProcessEnvironment)?;
    let mode = args.mode()?;
    colored::control::set_override(settings.color);

    let service = TaskListService::new(
        Arc::new(FileTaskListRepository::new(settings.file.clone())),
        Arc::new(DefaultClock),
    )
    .with_append_policy(settings.append_policy);

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    cli::run(mode, &service, Renderer::new(settings.color), stdin, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
