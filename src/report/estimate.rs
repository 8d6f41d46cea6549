// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Linear power model over detected report signals
//!
//! Combines a [`SignalSet`] with user-supplied coefficients into an average
//! power figure, then derives energy over a duration. An unknown CPU figure
//! contributes zero; it is never an error.

use serde::Serialize;

use crate::report::signals::SignalSet;

/// User-supplied coefficients weighting each signal's contribution
///
/// Supplied once at invocation and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerCoefficients {
    /// Assumed peak power draw of the host (Watts)
    pub peak_watts: f64,

    /// Assumed idle power draw (Watts)
    pub idle_watts: f64,

    /// Watts attributed to each device preventing suspend
    pub device_watts: f64,

    /// Extra watts when the display is on
    pub display_watts: f64,

    /// Extra watts when high-resolution timers are active
    pub timer_watts: f64,
}

impl Default for PowerCoefficients {
    fn default() -> Self {
        let defaults = crate::config::EstimatorDefaults::default();
        Self::from(&defaults)
    }
}

impl From<&crate::config::EstimatorDefaults> for PowerCoefficients {
    fn from(defaults: &crate::config::EstimatorDefaults) -> Self {
        Self {
            peak_watts: defaults.peak_watts,
            idle_watts: defaults.idle_watts,
            device_watts: defaults.device_watts,
            display_watts: defaults.display_watts,
            timer_watts: defaults.timer_watts,
        }
    }
}

/// Result of applying the power model to one report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerEstimate {
    /// Estimated average power over the duration (Watts)
    pub average_watts: f64,

    /// Duration the estimate covers (seconds)
    pub duration_seconds: f64,

    /// Estimated energy over the duration (kWh)
    pub energy_kwh: f64,
}

impl PowerEstimate {
    /// Energy in watt-hours
    pub fn energy_wh(&self) -> f64 {
        self.energy_kwh * 1000.0
    }

    /// Energy in joules
    pub fn energy_joules(&self) -> f64 {
        self.energy_kwh * 3.6e6
    }
}

/// Estimated average power for a signal set (Watts)
///
/// `idle + cpu + devices + display + timer`, where the CPU term scales the
/// idle-to-peak span by the detected utilization. The sum is reported as-is;
/// a total above `peak_watts` means the coefficients disagree with the
/// report, which is worth seeing rather than capping away.
pub fn average_power(signals: &SignalSet, coefficients: &PowerCoefficients) -> f64 {
    let cpu_component = match signals.cpu_percent {
        Some(pct) => {
            (f64::from(pct) / 100.0) * (coefficients.peak_watts - coefficients.idle_watts)
        }
        None => 0.0,
    };
    let devices_component = signals.suspend_blockers as f64 * coefficients.device_watts;
    let display_component = if signals.display_on {
        coefficients.display_watts
    } else {
        0.0
    };
    let timer_component = if signals.high_res_timer {
        coefficients.timer_watts
    } else {
        0.0
    };

    coefficients.idle_watts
        + cpu_component
        + devices_component
        + display_component
        + timer_component
}

/// Apply the power model and derive energy over `duration_seconds`
pub fn estimate(
    signals: &SignalSet,
    coefficients: &PowerCoefficients,
    duration_seconds: f64,
) -> PowerEstimate {
    let average_watts = average_power(signals, coefficients);
    let hours = duration_seconds / 3600.0;
    let energy_kwh = average_watts * hours / 1000.0;

    PowerEstimate {
        average_watts,
        duration_seconds,
        energy_kwh,
    }
}
