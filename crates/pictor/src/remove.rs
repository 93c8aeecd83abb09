// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pictor remove` command implementation.
//!
//! Deletes a record and its stored image.

use std::io::IsTerminal;

use pictor_core::PictorError;
use pictor_storage::RecordStore;

/// Run the `pictor remove` command.
pub async fn run_remove(store: &RecordStore, id: i64, plain: bool) -> Result<(), PictorError> {
    store.delete(id).await?;

    let use_color = !plain && std::io::stdout().is_terminal();
    if use_color {
        use colored::Colorize;
        println!("  {} record #{id} removed", "✓".green());
    } else {
        println!("  [OK] record #{id} removed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pictor_core::{GeneratedImage, Style};
    use pictor_test_utils::TestHarness;

    use super::*;

    #[tokio::test]
    async fn remove_deletes_the_record_and_its_blob() {
        let harness = TestHarness::builder().build().await.unwrap();
        let image = GeneratedImage::solid(8, 8, [1, 2, 3]);
        let record = harness
            .store
            .create("a prompt", Style::Cyberpunk, &image)
            .await
            .unwrap();

        run_remove(&harness.store, record.id, true).await.unwrap();

        assert!(harness.store.get(record.id).await.unwrap().is_none());
        assert!(harness.store.read_blob(&record).await.is_err());
    }

    #[tokio::test]
    async fn removing_a_missing_record_fails() {
        let harness = TestHarness::builder().build().await.unwrap();

        let err = run_remove(&harness.store, 7, true).await.unwrap_err();
        assert!(matches!(err, PictorError::RecordNotFound { id: 7 }));
    }
}
