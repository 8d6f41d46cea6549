// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Heuristic signal detection over extracted report text
//!
//! Four independent detectors, each a case-insensitive pattern search. A
//! detector that finds nothing yields an absent or zero value; it never
//! blocks the others. The CPU detector is an ordered fallback chain: the
//! phrased "average cpu utilization" form wins, a looser "cpu ... N%" form
//! is tried only when the first finds nothing.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

/// Primary CPU pattern: an utilization phrase followed by a 1-3 digit figure
static CPU_PRIMARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:average\s+cpu\s+utilization|processor utilization).*?(\d{1,3})\s*%?")
        .unwrap()
});

/// Fallback CPU pattern: "cpu ... N%" or "N% cpu"
static CPU_FALLBACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)cpu[^\d]{0,8}(\d{1,3})\s*%|\b(\d{1,3})\s*%\s+cpu\b").unwrap()
});

/// Phrases indicating a device is holding off suspend
static SUSPEND_BLOCKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)not entering suspend|prevent.*sleep|usb suspend|preventing sleep|request.*prevent")
        .unwrap()
});

/// Phrases hinting the display was on
static DISPLAY_ON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)display timeout|monitor timeout|display is on|screen timeout").unwrap()
});

/// Phrases hinting at high-resolution timer requests
static TIMER_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)timer resolution|high resolution timer|high resolution").unwrap()
});

/// Signals detected from a single report
///
/// Each field is detected independently from the same text; none constrains
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SignalSet {
    /// Detected average CPU utilization, clamped to 0-100; `None` when no
    /// pattern matched
    pub cpu_percent: Option<u8>,

    /// Occurrences of suspend-blocking phrases (occurrence count, not
    /// deduplicated devices)
    pub suspend_blockers: usize,

    /// Whether any display-on phrase was present
    pub display_on: bool,

    /// Whether any high-resolution timer phrase was present
    pub high_res_timer: bool,
}

/// Run every detector over the extracted report text
pub fn detect(text: &str) -> SignalSet {
    let signals = SignalSet {
        cpu_percent: cpu_percent(text),
        suspend_blockers: suspend_blockers(text),
        display_on: display_on(text),
        high_res_timer: high_res_timer(text),
    };
    debug!(?signals, "report signals detected");
    signals
}

/// Detect the average CPU utilization figure, clamped to 0-100
pub fn cpu_percent(text: &str) -> Option<u8> {
    if let Some(caps) = CPU_PRIMARY.captures(text) {
        debug!("cpu heuristic matched utilization phrase");
        return parse_percent(&caps[1]);
    }

    if let Some(caps) = CPU_FALLBACK.captures(text) {
        debug!("cpu heuristic matched loose percent form");
        // Either side of the alternation may have captured
        for group in [caps.get(1), caps.get(2)].into_iter().flatten() {
            return parse_percent(group.as_str());
        }
    }

    None
}

fn parse_percent(digits: &str) -> Option<u8> {
    let value: u32 = digits.parse().ok()?;
    Some(value.min(100) as u8)
}

/// Count non-overlapping suspend-blocker phrase occurrences
pub fn suspend_blockers(text: &str) -> usize {
    SUSPEND_BLOCKER.find_iter(text).count()
}

/// Whether the report hints the display was on
pub fn display_on(text: &str) -> bool {
    DISPLAY_ON.is_match(text)
}

/// Whether the report hints at high-resolution timer requests
pub fn high_res_timer(text: &str) -> bool {
    TIMER_REQUEST.is_match(text)
}
