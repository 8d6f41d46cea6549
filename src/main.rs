// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! wattscan - power and energy estimates from diagnostic reports
//!
//! Entry point for the wattscan CLI application.

use clap::Parser;

use wattscan::cli::{Cli, Commands};
use wattscan::commands;
use wattscan::config::Settings;
use wattscan::error::Result;
use wattscan::utils;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", utils::format_error(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` enables pipeline diagnostics without
    // requiring users to know target names up front. `RUST_LOG` still takes
    // precedence.
    if cli.verbose > 0 {
        if let Ok(parsed) = "wattscan=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load settings
    let settings = Settings::load()?;

    // Dispatch to the command; errors propagate to the process boundary
    match cli.command {
        Commands::Estimate(args) => commands::estimate::execute(&args, &settings, &cli.format)?,
        Commands::Upload => commands::upload::execute(&settings).await?,
        Commands::Settings(args) => commands::settings::execute(&args, settings, &cli.format)?,
    }

    Ok(())
}
