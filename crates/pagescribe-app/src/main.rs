// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pagescribe — turn photographed pages into named text documents
//
// Entry point. Initialises logging, loads settings and dispatches the
// command. Errors are shown to the user in plain language.

mod cli;
mod commands;
mod services;

use std::process::ExitCode;

use clap::Parser;

use pagescribe_core::human_errors::humanize_error;

use cli::{Cli, Command};
use services::app_services::AppServices;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!("Pagescribe starting");

    let outcome = match AppServices::init() {
        Ok(mut services) => match cli.command {
            Command::Process(args) => commands::process(&services, args).await,
            Command::Convert(args) => commands::convert(&services, args).await,
            Command::Config(command) => commands::config(&mut services, command),
        },
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            let human = humanize_error(&e);
            eprintln!("{}\n{}", human.message, human.suggestion);
            ExitCode::FAILURE
        }
    }
}
