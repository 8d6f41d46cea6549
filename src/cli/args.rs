// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for wattscan.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// wattscan - power and energy estimates from diagnostic reports
#[derive(Parser, Debug)]
#[command(name = "wattscan")]
#[command(version, about = "Power and energy estimates from diagnostic reports")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate average power and energy from an energy report
    Estimate(EstimateArgs),

    /// Upload the model archive to the local repository
    Upload,

    /// Show or manage configuration
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the estimate subcommand
///
/// The watt flags default to the values in the settings file when omitted;
/// the settings themselves default to a 400 W peak / 120 W idle desktop
/// profile.
#[derive(clap::Args, Debug, Default)]
pub struct EstimateArgs {
    /// Path to the energy report (e.g. energy-report.html)
    pub html: PathBuf,

    /// Duration to estimate, in seconds
    #[arg(long)]
    pub seconds: Option<f64>,

    /// Assumed peak power draw of the host (Watts)
    #[arg(long)]
    pub peak: Option<f64>,

    /// Assumed idle power draw (Watts)
    #[arg(long)]
    pub idle: Option<f64>,

    /// Watts attributed to each device preventing suspend
    #[arg(long = "device-w")]
    pub device_w: Option<f64>,

    /// Extra watts when the display is on
    #[arg(long = "display-w")]
    pub display_w: Option<f64>,

    /// Extra watts when high-resolution timers are active
    #[arg(long = "timer-w")]
    pub timer_w: Option<f64>,
}

/// Arguments for settings/config
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get {
        /// Configuration key (e.g. "idle", "upload.url")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. "idle", "upload.url")
        key: String,

        /// Value to set
        value: String,
    },

    /// Reset configuration to defaults
    Reset,
}

/// Output format for command results
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // ==================== Global Arguments ====================

    #[test]
    fn test_cli_verbose_single() {
        let cli = Cli::parse_from(["wattscan", "-v", "estimate", "report.html"]);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_cli_verbose_multiple() {
        let cli = Cli::parse_from(["wattscan", "-vv", "upload"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_format_default_text() {
        let cli = Cli::parse_from(["wattscan", "upload"]);
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn test_cli_format_json() {
        let cli = Cli::parse_from(["wattscan", "--format", "json", "estimate", "report.html"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let result = Cli::try_parse_from(["wattscan"]);
        assert!(result.is_err());
    }

    // ==================== Estimate Command ====================

    #[test]
    fn test_estimate_positional_path() {
        let cli = Cli::parse_from(["wattscan", "estimate", "energy-report.html"]);
        if let Commands::Estimate(args) = cli.command {
            assert_eq!(args.html, PathBuf::from("energy-report.html"));
        } else {
            panic!("Expected Estimate command");
        }
    }

    #[test]
    fn test_estimate_requires_path() {
        let result = Cli::try_parse_from(["wattscan", "estimate"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_estimate_flags_default_to_none() {
        let cli = Cli::parse_from(["wattscan", "estimate", "r.html"]);
        if let Commands::Estimate(args) = cli.command {
            assert!(args.seconds.is_none());
            assert!(args.peak.is_none());
            assert!(args.idle.is_none());
            assert!(args.device_w.is_none());
            assert!(args.display_w.is_none());
            assert!(args.timer_w.is_none());
        } else {
            panic!("Expected Estimate command");
        }
    }

    #[test]
    fn test_estimate_all_flags() {
        let cli = Cli::parse_from([
            "wattscan",
            "estimate",
            "r.html",
            "--seconds",
            "3600",
            "--peak",
            "400",
            "--idle",
            "120",
            "--device-w",
            "2",
            "--display-w",
            "6",
            "--timer-w",
            "4",
        ]);
        if let Commands::Estimate(args) = cli.command {
            assert_eq!(args.seconds, Some(3600.0));
            assert_eq!(args.peak, Some(400.0));
            assert_eq!(args.idle, Some(120.0));
            assert_eq!(args.device_w, Some(2.0));
            assert_eq!(args.display_w, Some(6.0));
            assert_eq!(args.timer_w, Some(4.0));
        } else {
            panic!("Expected Estimate command");
        }
    }

    #[test]
    fn test_estimate_rejects_non_numeric_flag() {
        let result = Cli::try_parse_from(["wattscan", "estimate", "r.html", "--peak", "lots"]);
        assert!(result.is_err());
    }

    // ==================== Upload Command ====================

    #[test]
    fn test_upload_command() {
        let cli = Cli::parse_from(["wattscan", "upload"]);
        assert!(matches!(cli.command, Commands::Upload));
    }

    #[test]
    fn test_upload_takes_no_flags() {
        let result = Cli::try_parse_from(["wattscan", "upload", "--url", "http://x"]);
        assert!(result.is_err());
    }

    // ==================== Settings Commands ====================

    #[test]
    fn test_settings_show() {
        let cli = Cli::parse_from(["wattscan", "settings", "show"]);
        if let Commands::Settings(args) = cli.command {
            assert!(matches!(args.command, SettingsCommands::Show));
        } else {
            panic!("Expected Settings command");
        }
    }

    #[test]
    fn test_settings_get() {
        let cli = Cli::parse_from(["wattscan", "settings", "get", "idle"]);
        if let Commands::Settings(args) = cli.command {
            if let SettingsCommands::Get { key } = args.command {
                assert_eq!(key, "idle");
            } else {
                panic!("Expected Get subcommand");
            }
        } else {
            panic!("Expected Settings command");
        }
    }

    #[test]
    fn test_settings_set() {
        let cli = Cli::parse_from(["wattscan", "settings", "set", "peak", "250"]);
        if let Commands::Settings(args) = cli.command {
            if let SettingsCommands::Set { key, value } = args.command {
                assert_eq!(key, "peak");
                assert_eq!(value, "250");
            } else {
                panic!("Expected Set subcommand");
            }
        } else {
            panic!("Expected Settings command");
        }
    }

    #[test]
    fn test_settings_reset() {
        let cli = Cli::parse_from(["wattscan", "settings", "reset"]);
        if let Commands::Settings(args) = cli.command {
            assert!(matches!(args.command, SettingsCommands::Reset));
        } else {
            panic!("Expected Settings command");
        }
    }

    #[test]
    fn test_settings_config_alias() {
        let cli = Cli::parse_from(["wattscan", "config", "show"]);
        assert!(matches!(cli.command, Commands::Settings(_)));
    }

    // ==================== OutputFormat ====================

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
