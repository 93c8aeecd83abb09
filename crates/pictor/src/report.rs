// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pictor report` command implementation.
//!
//! Aggregates evaluation scores over the gallery and prints the overall
//! average, a by-style breakdown, and record counts.

use std::io::IsTerminal;

use pictor_core::{PictorError, Style};
use pictor_report::{build_report, EvaluationReport};
use pictor_storage::RecordStore;

/// Display order for the by-style breakdown. Styles with no evaluated
/// records are skipped, not shown as zero.
const STYLE_ORDER: [Style; 3] = [Style::Realistic, Style::Cyberpunk, Style::Cartoon];

/// Run the `pictor report` command.
pub async fn run_report(store: &RecordStore, plain: bool) -> Result<(), PictorError> {
    let records = store.list_all().await?;
    let report = build_report(&records);

    let use_color = !plain && std::io::stdout().is_terminal();
    print_report(&report, use_color);
    Ok(())
}

fn print_report(report: &EvaluationReport, use_color: bool) {
    println!();
    println!("  pictor report");
    println!("  {}", "-".repeat(40));
    println!(
        "    Records:    {} total, {} evaluated",
        report.total, report.evaluated
    );

    match report.overall {
        Some(overall) if use_color => {
            use colored::Colorize;
            println!("    Overall:    {}", format_average(overall).green());
        }
        Some(overall) => println!("    Overall:    {}", format_average(overall)),
        None => println!("    Overall:    no evaluations yet"),
    }

    for style in STYLE_ORDER {
        if let Some(average) = report.by_style.get(&style) {
            println!("    {:<10}  {}", format!("{style}:"), format_average(*average));
        }
    }
    println!();
}

/// Render an average to one decimal place, e.g. `7.5/10`.
fn format_average(average: f64) -> String {
    format!("{average:.1}/10")
}
