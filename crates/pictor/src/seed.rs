// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pictor seed` command implementation.
//!
//! Populates an empty gallery with sample generations through the normal
//! submission pipeline, then rates them.

use std::io::IsTerminal;

use pictor_core::PictorError;
use pictor_engine::GenerationPipeline;
use pictor_storage::RecordStore;

/// Run the `pictor seed` command.
pub async fn run_seed(
    pipeline: &GenerationPipeline,
    store: &RecordStore,
    plain: bool,
) -> Result<(), PictorError> {
    let seeded = pictor_engine::seed_samples(pipeline, store).await?;

    let use_color = !plain && std::io::stdout().is_terminal();
    if seeded == 0 {
        println!("  Gallery already has records; nothing to seed.");
    } else if use_color {
        use colored::Colorize;
        println!("  {} {seeded} sample records created", "✓".green());
    } else {
        println!("  [OK] {seeded} sample records created");
    }
    Ok(())
}
