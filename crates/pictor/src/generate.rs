// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pictor generate` command implementation.
//!
//! Submits a prompt through the full pipeline (validation, rate limiting,
//! generation, storage) and prints the stored record.

use std::io::IsTerminal;

use pictor_core::{GenerationRecord, PictorError, Style};
use pictor_engine::GenerationPipeline;

/// Run the `pictor generate` command.
///
/// Failures surface as-is: an empty or oversized prompt, a denied
/// rate-limit slot, or a generation error all leave the gallery untouched.
pub async fn run_generate(
    pipeline: &GenerationPipeline,
    prompt: &str,
    style: Style,
    plain: bool,
) -> Result<(), PictorError> {
    let record = pipeline.submit(prompt, style).await?;

    let use_color = !plain && std::io::stdout().is_terminal();
    print_created(&record, use_color);
    Ok(())
}

/// Print the freshly created record.
fn print_created(record: &GenerationRecord, use_color: bool) {
    println!();
    if use_color {
        use colored::Colorize;
        println!("  {} record #{} stored", "✓".green(), record.id);
    } else {
        println!("  [OK] record #{} stored", record.id);
    }
    println!("    Prompt:   {}", record.prompt);
    println!("    Style:    {}", record.style);
    println!("    Image:    {}", record.filename);
    println!("    Created:  {}", record.created_at);
    println!();
}
