// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pictor show` command implementation.
//!
//! Prints one record in full: metadata, evaluation, and the stored image's
//! path and pixel dimensions read back through the blob store.

use std::io::IsTerminal;
use std::path::Path;

use pictor_core::{GeneratedImage, GenerationRecord, PictorError};
use pictor_storage::RecordStore;

/// Run the `pictor show` command.
///
/// A missing id is an error, unlike the bare `get` it wraps.
pub async fn run_show(store: &RecordStore, id: i64, plain: bool) -> Result<(), PictorError> {
    let record = store
        .get(id)
        .await?
        .ok_or(PictorError::RecordNotFound { id })?;

    let bytes = store.read_blob(&record).await?;
    let image = GeneratedImage::from_bytes(&bytes).map_err(|e| PictorError::Storage {
        source: Box::new(e),
    })?;
    let path = store.blobs().resolve(&record.filename).await?;

    let use_color = !plain && std::io::stdout().is_terminal();
    print_record(&record, &path, image.dimensions(), use_color);
    Ok(())
}

fn print_record(
    record: &GenerationRecord,
    path: &Path,
    dimensions: (u32, u32),
    use_color: bool,
) {
    let (width, height) = dimensions;

    println!();
    println!("  pictor show #{}", record.id);
    println!("  {}", "-".repeat(50));
    println!("    Prompt:   {}", record.prompt);
    println!("    Style:    {}", record.style);
    println!("    Created:  {}", record.created_at);
    println!("    Image:    {} ({width}x{height})", path.display());

    if use_color {
        use colored::Colorize;
        match record.score {
            Some(score) => println!("    Score:    {}", format!("{score}/10").green()),
            None => println!("    Score:    {}", "not rated yet".dimmed()),
        }
    } else {
        match record.score {
            Some(score) => println!("    Score:    {score}/10"),
            None => println!("    Score:    not rated yet"),
        }
    }

    if let Some(feedback) = &record.feedback {
        println!("    Feedback: {feedback}");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use pictor_core::{GeneratedImage, Style};
    use pictor_test_utils::TestHarness;

    use super::*;

    #[tokio::test]
    async fn show_prints_an_existing_record() {
        let harness = TestHarness::builder().build().await.unwrap();
        let image = GeneratedImage::solid(16, 9, [73, 109, 137]);
        let record = harness
            .store
            .create("a quiet harbor", Style::Realistic, &image)
            .await
            .unwrap();

        run_show(&harness.store, record.id, true).await.unwrap();
    }

    #[tokio::test]
    async fn show_of_a_missing_id_fails() {
        let harness = TestHarness::builder().build().await.unwrap();

        let err = run_show(&harness.store, 42, true).await.unwrap_err();
        assert!(matches!(err, PictorError::RecordNotFound { id: 42 }));
    }

    #[tokio::test]
    async fn show_surfaces_a_missing_blob_as_a_storage_error() {
        let harness = TestHarness::builder().build().await.unwrap();
        let image = GeneratedImage::solid(8, 8, [0, 0, 0]);
        let record = harness
            .store
            .create("a prompt", Style::Cartoon, &image)
            .await
            .unwrap();

        // Delete the file behind the store's back.
        let path = harness.store.blobs().resolve(&record.filename).await.unwrap();
        tokio::fs::remove_file(path).await.unwrap();

        let err = run_show(&harness.store, record.id, true).await.unwrap_err();
        assert!(matches!(err, PictorError::Storage { .. }));
    }
}
