//! Plain-text rendering of a finished run
//!
//! The report is built as a string first so the exact terminal output can be
//! checked without capturing stdout.

use crate::pipeline::RunReport;
use crate::types::GlobalAverage;
use std::fmt::Write;
use std::path::Path;

pub fn print_global_average(global_average: GlobalAverage) {
    println!("Global Average Intensity: {global_average}");
}

pub fn print_report(report: &RunReport, output_dir: &Path) {
    print!("{}", render_report(report, output_dir));
}

/// Validation lines followed by a short summary block
#[must_use]
pub fn render_report(report: &RunReport, output_dir: &Path) -> String {
    let mut out = String::from("Validation Report:\n");
    for line in report.lines() {
        let _ = writeln!(out, "{line}");
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "{:20}: {}/{}",
        "Within Tolerance",
        report.passed_count(),
        report.entries.len()
    );
    let _ = writeln!(out, "{:20}: {}", "Output Directory", output_dir.display());
    out
}
