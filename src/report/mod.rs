// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Energy-report analysis: text extraction, signal detection, power model
//!
//! The pipeline is a single pass over one document:
//! text ([`text::extract_text`]) → signals ([`signals::detect`]) →
//! estimate ([`estimate::estimate`]). Every stage is a pure function; a
//! report with no recognizable hints flows through as zero contributions,
//! never as an error.

pub mod estimate;
pub mod signals;
pub mod text;

pub use estimate::{average_power, estimate, PowerCoefficients, PowerEstimate};
pub use signals::{detect, SignalSet};
pub use text::extract_text;
