// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings command: show and edit persisted configuration

use crate::cli::args::{OutputFormat, SettingsArgs, SettingsCommands};
use crate::config::Settings;
use crate::error::{Result, WattscanError};

/// Execute the settings command
pub fn execute(args: &SettingsArgs, mut settings: Settings, format: &OutputFormat) -> Result<()> {
    match &args.command {
        SettingsCommands::Show => {
            if matches!(format, OutputFormat::Json) {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                for key in Settings::keys() {
                    // keys() only lists gettable keys
                    let value = settings.get(key).unwrap_or_default();
                    println!("{} = {}", key, value);
                }
            }
        }
        SettingsCommands::Get { key } => {
            let value = settings.get(key).ok_or_else(|| {
                WattscanError::InvalidInput(format!("Unknown settings key: {}", key))
            })?;
            println!("{}", value);
        }
        SettingsCommands::Set { key, value } => {
            settings.set(key, value)?;
            settings.save()?;
            println!("Updated {} = {}", key, value);
        }
        SettingsCommands::Reset => {
            Settings::default().save()?;
            println!("Settings reset to defaults.");
        }
    }

    Ok(())
}
