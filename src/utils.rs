// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Utility functions for wattscan
//!
//! Pure formatting helpers kept out of the command modules for testability.

use crate::error::WattscanError;

/// Format an error for display to the user
pub fn format_error(error: &WattscanError) -> String {
    format!("Error: {}", error)
}

/// Render a detected CPU figure the way the summary prints it
pub fn format_cpu_percent(cpu_percent: Option<u8>) -> String {
    match cpu_percent {
        Some(pct) => pct.to_string(),
        None => "not found".to_string(),
    }
}

/// Render an energy figure with its derived units
pub fn format_energy(energy_kwh: f64) -> String {
    format!(
        "{:.3} kWh ({:.1} Wh, {:.0} J)",
        energy_kwh,
        energy_kwh * 1000.0,
        energy_kwh * 3.6e6
    )
}
