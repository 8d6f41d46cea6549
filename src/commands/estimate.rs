// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Energy report estimate command

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::cli::args::{EstimateArgs, OutputFormat};
use crate::config::{EstimatorDefaults, Settings};
use crate::error::Result;
use crate::report::{self, PowerCoefficients, PowerEstimate, SignalSet};
use crate::utils::{format_cpu_percent, format_energy};

/// JSON view of one estimate run
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateReport {
    source: String,
    signals: SignalSet,
    coefficients: PowerCoefficients,
    average_watts: f64,
    duration_seconds: f64,
    energy_kwh: f64,
    energy_wh: f64,
    energy_joules: f64,
}

/// Resolve coefficients and duration: CLI flags win over settings-file
/// defaults
pub fn resolve_inputs(
    args: &EstimateArgs,
    defaults: &EstimatorDefaults,
) -> (PowerCoefficients, f64) {
    let coefficients = PowerCoefficients {
        peak_watts: args.peak.unwrap_or(defaults.peak_watts),
        idle_watts: args.idle.unwrap_or(defaults.idle_watts),
        device_watts: args.device_w.unwrap_or(defaults.device_watts),
        display_watts: args.display_w.unwrap_or(defaults.display_watts),
        timer_watts: args.timer_w.unwrap_or(defaults.timer_watts),
    };
    let seconds = args.seconds.unwrap_or(defaults.seconds);
    (coefficients, seconds)
}

/// Run the full pipeline for one report file
pub fn analyze_report(
    path: &Path,
    coefficients: &PowerCoefficients,
    seconds: f64,
) -> Result<(SignalSet, PowerEstimate)> {
    // Reports in the wild carry stray bytes; replace rather than reject
    let raw = std::fs::read(path)?;
    let html = String::from_utf8_lossy(&raw);

    let text = report::extract_text(&html);
    debug!(chars = text.len(), "extracted report text");

    let signals = report::detect(&text);
    let estimate = report::estimate(&signals, coefficients, seconds);
    Ok((signals, estimate))
}

/// Execute the estimate command
pub fn execute(args: &EstimateArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let (coefficients, seconds) = resolve_inputs(args, &settings.estimator);
    let (signals, estimate) = analyze_report(&args.html, &coefficients, seconds)?;

    if matches!(format, OutputFormat::Json) {
        let view = EstimateReport {
            source: args.html.display().to_string(),
            signals,
            coefficients,
            average_watts: estimate.average_watts,
            duration_seconds: estimate.duration_seconds,
            energy_kwh: estimate.energy_kwh,
            energy_wh: estimate.energy_wh(),
            energy_joules: estimate.energy_joules(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print_summary(&args.html, &signals, &coefficients, &estimate);
    Ok(())
}

/// Print the fixed-format summary of one run
fn print_summary(
    source: &Path,
    signals: &SignalSet,
    coefficients: &PowerCoefficients,
    estimate: &PowerEstimate,
) {
    println!("=== Energy report estimate ===");
    println!("Source file: {}", source.display());
    println!(
        "Parsed CPU% (if any): {}",
        format_cpu_percent(signals.cpu_percent)
    );
    println!(
        "Devices preventing suspend (detected): {}",
        signals.suspend_blockers
    );
    println!("Display-on hint detected: {}", signals.display_on);
    println!(
        "High-resolution timer hint detected: {}",
        signals.high_res_timer
    );
    println!();
    println!("Assumptions / coefficients:");
    println!("  peak_watts = {} W", coefficients.peak_watts);
    println!("  idle_watts = {} W", coefficients.idle_watts);
    println!("  per-device = {} W", coefficients.device_watts);
    println!("  display extra = {} W", coefficients.display_watts);
    println!("  timer extra = {} W", coefficients.timer_watts);
    println!("Duration = {} seconds", estimate.duration_seconds);
    println!();
    println!("Estimated average power: {:.1} W", estimate.average_watts);
    println!("Estimated energy: {}", format_energy(estimate.energy_kwh));
    println!("==============================");
}
