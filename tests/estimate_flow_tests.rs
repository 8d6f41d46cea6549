// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! End-to-end estimation pipeline tests: report file on disk through text
//! extraction, signal detection and the power model.

use std::path::PathBuf;

use wattscan::commands::estimate::analyze_report;
use wattscan::report::{self, PowerCoefficients, SignalSet};

fn desktop_profile() -> PowerCoefficients {
    PowerCoefficients {
        peak_watts: 400.0,
        idle_watts: 120.0,
        device_watts: 2.0,
        display_watts: 6.0,
        timer_watts: 4.0,
    }
}

fn write_report(content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("energy-report.html");
    std::fs::write(&path, content).expect("write report");
    (dir, path)
}

#[test]
fn test_worked_example_through_file() {
    let (_dir, path) = write_report(
        "<html><head><title>Energy Report</title></head><body>\
         <h2>Analysis Results</h2>\
         <p>Average CPU utilization: 50%</p>\
         <p>USB Suspend disabled for Generic Hub</p>\
         <p>Display timeout is configured to 10 minutes</p>\
         </body></html>",
    );

    let (signals, estimate) = analyze_report(&path, &desktop_profile(), 3600.0).unwrap();

    assert_eq!(signals.cpu_percent, Some(50));
    assert_eq!(signals.suspend_blockers, 1);
    assert!(signals.display_on);
    assert!(!signals.high_res_timer);

    // 120 + 140 + 2 + 6 = 268 W, over one hour = 0.268 kWh
    assert_eq!(estimate.average_watts, 268.0);
    assert!((estimate.energy_kwh - 0.268).abs() < 1e-12);
}

#[test]
fn test_report_with_no_signals_is_exactly_idle() {
    let (_dir, path) = write_report(
        "<html><body><p>Nothing of interest happened during the trace.</p></body></html>",
    );

    let (signals, estimate) = analyze_report(&path, &desktop_profile(), 60.0).unwrap();
    assert_eq!(signals, SignalSet::default());
    assert_eq!(estimate.average_watts, 120.0);
}

#[test]
fn test_energy_linear_in_seconds() {
    let (_dir, path) = write_report("<p>average cpu utilization: 30%</p>");

    let coefficients = desktop_profile();
    let (_, one_minute) = analyze_report(&path, &coefficients, 60.0).unwrap();
    let (_, two_minutes) = analyze_report(&path, &coefficients, 120.0).unwrap();

    assert!((two_minutes.energy_kwh - 2.0 * one_minute.energy_kwh).abs() < 1e-12);
}

#[test]
fn test_out_of_range_cpu_clamped() {
    let (_dir, path) = write_report("<p>average cpu utilization: 999%</p>");

    let (signals, estimate) = analyze_report(&path, &desktop_profile(), 60.0).unwrap();
    assert_eq!(signals.cpu_percent, Some(100));
    assert_eq!(estimate.average_watts, 400.0);
}

#[test]
fn test_signals_inside_script_are_invisible() {
    let (_dir, path) = write_report(
        "<script>var hint = 'average cpu utilization: 90%';</script>\
         <p>trace complete</p>",
    );

    let (signals, _) = analyze_report(&path, &desktop_profile(), 60.0).unwrap();
    assert_eq!(signals.cpu_percent, None);
}

#[test]
fn test_device_count_is_occurrence_count() {
    let (_dir, path) = write_report(
        "<ul>\
         <li>USB Suspend: device one</li>\
         <li>USB Suspend: device two</li>\
         <li>The driver is not entering suspend</li>\
         </ul>",
    );

    let (signals, estimate) = analyze_report(&path, &desktop_profile(), 60.0).unwrap();
    assert_eq!(signals.suspend_blockers, 3);
    assert_eq!(estimate.average_watts, 120.0 + 3.0 * 2.0);
}

#[test]
fn test_entities_decoded_before_matching() {
    // The phrase only appears once entities collapse into plain text
    let (_dir, path) = write_report("<p>display&nbsp;timeout reached</p>");

    let (signals, _) = analyze_report(&path, &desktop_profile(), 60.0).unwrap();
    assert!(signals.display_on);
}

#[test]
fn test_pipeline_matches_direct_calls() {
    let html = "<p>Timer Resolution requested by media.exe</p>";
    let (_dir, path) = write_report(html);

    let text = report::extract_text(html);
    let direct = report::detect(&text);
    let (via_file, _) = analyze_report(&path, &desktop_profile(), 60.0).unwrap();

    assert_eq!(direct, via_file);
    assert!(via_file.high_res_timer);
}
