// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pictor rate` command implementation.
//!
//! Records a 1-10 score and optional feedback on a stored generation.
//! Re-rating overwrites the previous evaluation.

use std::io::IsTerminal;

use pictor_core::PictorError;
use pictor_storage::RecordStore;

/// Run the `pictor rate` command.
pub async fn run_rate(
    store: &RecordStore,
    id: i64,
    score: i64,
    feedback: Option<&str>,
    plain: bool,
) -> Result<(), PictorError> {
    store.update_evaluation(id, score, feedback).await?;

    let use_color = !plain && std::io::stdout().is_terminal();
    if use_color {
        use colored::Colorize;
        println!("  {} record #{id} rated {score}/10", "✓".green());
    } else {
        println!("  [OK] record #{id} rated {score}/10");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pictor_core::{GeneratedImage, Style};
    use pictor_test_utils::TestHarness;

    use super::*;

    #[tokio::test]
    async fn rate_records_score_and_feedback() {
        let harness = TestHarness::builder().build().await.unwrap();
        let image = GeneratedImage::solid(8, 8, [1, 2, 3]);
        let record = harness
            .store
            .create("a prompt", Style::Realistic, &image)
            .await
            .unwrap();

        run_rate(&harness.store, record.id, 7, Some("good composition"), true)
            .await
            .unwrap();

        let fetched = harness.store.get(record.id).await.unwrap().unwrap();
        assert_eq!(fetched.score, Some(7));
        assert_eq!(fetched.feedback.as_deref(), Some("good composition"));
    }

    #[tokio::test]
    async fn rating_a_missing_record_fails() {
        let harness = TestHarness::builder().build().await.unwrap();

        let err = run_rate(&harness.store, 9, 5, None, true).await.unwrap_err();
        assert!(matches!(err, PictorError::RecordNotFound { id: 9 }));
    }

    #[tokio::test]
    async fn an_out_of_range_score_is_rejected() {
        let harness = TestHarness::builder().build().await.unwrap();
        let image = GeneratedImage::solid(8, 8, [1, 2, 3]);
        let record = harness
            .store
            .create("a prompt", Style::Realistic, &image)
            .await
            .unwrap();

        let err = run_rate(&harness.store, record.id, 11, None, true)
            .await
            .unwrap_err();
        assert!(matches!(err, PictorError::InvalidScore { score: 11 }));

        // The record is left unevaluated.
        let fetched = harness.store.get(record.id).await.unwrap().unwrap();
        assert_eq!(fetched.score, None);
    }
}
