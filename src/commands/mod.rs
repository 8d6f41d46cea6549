// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command implementations for the wattscan CLI

pub mod estimate;
pub mod settings;
pub mod upload;
