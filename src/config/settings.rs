// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for wattscan
//!
//! Handles loading and saving settings from ~/.wattscan/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, WattscanError};

/// Main settings structure, stored in ~/.wattscan/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Default coefficients and duration for the estimator
    #[serde(default)]
    pub estimator: EstimatorDefaults,

    /// Model repository upload target
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Default coefficients for the linear power model
///
/// Each value can be overridden per invocation with the matching CLI flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimatorDefaults {
    /// Duration to estimate, in seconds
    #[serde(default = "default_seconds")]
    pub seconds: f64,

    /// Assumed peak power draw of the host (Watts)
    #[serde(default = "default_peak_watts")]
    pub peak_watts: f64,

    /// Assumed idle power draw (Watts)
    #[serde(default = "default_idle_watts")]
    pub idle_watts: f64,

    /// Watts attributed to each device preventing suspend
    #[serde(default = "default_device_watts")]
    pub device_watts: f64,

    /// Extra watts when the display is on
    #[serde(default = "default_display_watts")]
    pub display_watts: f64,

    /// Extra watts when high-resolution timers are active
    #[serde(default = "default_timer_watts")]
    pub timer_watts: f64,
}

/// Upload target for the model repository
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Repository endpoint receiving the PUT
    #[serde(default = "default_upload_url")]
    pub url: String,

    /// Local archive to upload
    #[serde(default = "default_upload_archive")]
    pub archive: PathBuf,
}

fn default_seconds() -> f64 {
    60.0
}

fn default_peak_watts() -> f64 {
    400.0
}

fn default_idle_watts() -> f64 {
    120.0
}

fn default_device_watts() -> f64 {
    2.0
}

fn default_display_watts() -> f64 {
    6.0
}

fn default_timer_watts() -> f64 {
    4.0
}

fn default_upload_url() -> String {
    "http://localhost:9013/model/migration_predictor/v1".to_string()
}

fn default_upload_archive() -> PathBuf {
    PathBuf::from("./setup/model/migration_predictor_v1.zip")
}

impl Default for EstimatorDefaults {
    fn default() -> Self {
        Self {
            seconds: default_seconds(),
            peak_watts: default_peak_watts(),
            idle_watts: default_idle_watts(),
            device_watts: default_device_watts(),
            display_watts: default_display_watts(),
            timer_watts: default_timer_watts(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            url: default_upload_url(),
            archive: default_upload_archive(),
        }
    }
}

impl Settings {
    /// Directory holding wattscan configuration (~/.wattscan)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".wattscan")
    }

    /// Path to the settings file
    pub fn settings_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load settings from disk, falling back to defaults when the file
    /// does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path())
    }

    /// Load settings from an explicit path
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| WattscanError::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Save settings to disk, creating the config directory if needed
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path())
    }

    /// Save settings to an explicit path
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Look up a value by dotted key, rendered as a string
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "seconds" => Some(self.estimator.seconds.to_string()),
            "peak" => Some(self.estimator.peak_watts.to_string()),
            "idle" => Some(self.estimator.idle_watts.to_string()),
            "device-w" => Some(self.estimator.device_watts.to_string()),
            "display-w" => Some(self.estimator.display_watts.to_string()),
            "timer-w" => Some(self.estimator.timer_watts.to_string()),
            "upload.url" => Some(self.upload.url.clone()),
            "upload.archive" => Some(self.upload.archive.display().to_string()),
            _ => None,
        }
    }

    /// Set a value by dotted key from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parse_number = |v: &str| -> Result<f64> {
            v.parse::<f64>()
                .map_err(|_| WattscanError::InvalidInput(format!("'{}' is not a number", v)))
        };

        match key {
            "seconds" => self.estimator.seconds = parse_number(value)?,
            "peak" => self.estimator.peak_watts = parse_number(value)?,
            "idle" => self.estimator.idle_watts = parse_number(value)?,
            "device-w" => self.estimator.device_watts = parse_number(value)?,
            "display-w" => self.estimator.display_watts = parse_number(value)?,
            "timer-w" => self.estimator.timer_watts = parse_number(value)?,
            "upload.url" => self.upload.url = value.to_string(),
            "upload.archive" => self.upload.archive = PathBuf::from(value),
            _ => {
                return Err(WattscanError::InvalidInput(format!(
                    "Unknown settings key: {}",
                    key
                )))
            }
        }

        Ok(())
    }

    /// All keys accepted by [`Settings::get`] and [`Settings::set`]
    pub fn keys() -> &'static [&'static str] {
        &[
            "seconds",
            "peak",
            "idle",
            "device-w",
            "display-w",
            "timer-w",
            "upload.url",
            "upload.archive",
        ]
    }
}
