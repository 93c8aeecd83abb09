// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pictor gallery` command implementation.
//!
//! Lists all stored generations newest-first, one summary line per record,
//! with a footer of gallery counts.

use std::io::IsTerminal;

use pictor_core::{GenerationRecord, PictorError};
use pictor_storage::RecordStore;

/// Widest prompt slice shown in a listing line.
const PROMPT_WIDTH: usize = 48;

/// Run the `pictor gallery` command.
pub async fn run_gallery(store: &RecordStore, plain: bool) -> Result<(), PictorError> {
    let records = store.list_all().await?;

    let use_color = !plain && std::io::stdout().is_terminal();
    print_listing(&records, use_color);
    Ok(())
}

fn print_listing(records: &[GenerationRecord], use_color: bool) {
    println!();
    println!("  pictor gallery");
    println!("  {}", "-".repeat(72));

    if records.is_empty() {
        println!("    No records yet. Try `pictor generate \"a prompt\"` or `pictor seed`.");
        println!();
        return;
    }

    for record in records {
        println!("    {}", format_record_line(record, use_color));
    }

    let evaluated = records.iter().filter(|r| r.is_evaluated()).count();
    println!();
    println!("    {} records, {} evaluated", records.len(), evaluated);
    println!();
}

/// One gallery line: id, creation time, style, score, truncated prompt.
fn format_record_line(record: &GenerationRecord, use_color: bool) -> String {
    // Pad before coloring so ANSI escapes don't break the columns.
    let style_cell = format!("{:<9}", record.style.to_string());
    let score_cell = format!("{:>5}", format_score(record.score));
    let prompt = truncate_prompt(&record.prompt, PROMPT_WIDTH);

    if use_color {
        use colored::Colorize;
        let score_cell = if record.is_evaluated() {
            score_cell.green().to_string()
        } else {
            score_cell.dimmed().to_string()
        };
        format!(
            "#{:<4} {} {} {}  {}",
            record.id,
            record.created_at.dimmed(),
            style_cell.cyan(),
            score_cell,
            prompt
        )
    } else {
        format!(
            "#{:<4} {} {} {}  {}",
            record.id, record.created_at, style_cell, score_cell, prompt
        )
    }
}

/// `8/10` when evaluated, `--` otherwise.
fn format_score(score: Option<i64>) -> String {
    match score {
        Some(score) => format!("{score}/10"),
        None => "--".to_string(),
    }
}

/// Truncate to `width` characters, appending `...` when shortened.
fn truncate_prompt(prompt: &str, width: usize) -> String {
    if prompt.chars().count() <= width {
        return prompt.to_string();
    }
    let cut: String = prompt.chars().take(width.saturating_sub(3)).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use pictor_core::{GeneratedImage, Style};
    use pictor_test_utils::TestHarness;

    use super::*;

    #[test]
    fn score_formats_both_states() {
        assert_eq!(format_score(Some(8)), "8/10");
        assert_eq!(format_score(None), "--");
    }

    #[test]
    fn short_prompts_pass_through_untruncated() {
        assert_eq!(truncate_prompt("a quiet harbor", 48), "a quiet harbor");
    }

    #[test]
    fn long_prompts_are_cut_with_an_ellipsis() {
        let long = "x".repeat(60);
        let cut = truncate_prompt(&long, 48);
        assert_eq!(cut.chars().count(), 48);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "é".repeat(60);
        let cut = truncate_prompt(&long, 48);
        assert_eq!(cut.chars().count(), 48);
    }

    #[test]
    fn record_line_carries_the_key_fields() {
        let record = GenerationRecord {
            id: 3,
            prompt: "a panda riding a bicycle in space".to_string(),
            style: Style::Cartoon,
            filename: "image_x.png".to_string(),
            created_at: "2026-02-01T10:00:00.000Z".to_string(),
            score: Some(8),
            feedback: None,
        };
        let line = format_record_line(&record, false);
        assert!(line.starts_with("#3"));
        assert!(line.contains("cartoon"));
        assert!(line.contains("8/10"));
        assert!(line.contains("a panda riding a bicycle in space"));
    }

    #[tokio::test]
    async fn gallery_runs_over_a_populated_store() {
        let harness = TestHarness::builder().build().await.unwrap();
        let image = GeneratedImage::solid(8, 8, [1, 2, 3]);
        harness
            .store
            .create("first", Style::Realistic, &image)
            .await
            .unwrap();
        harness
            .store
            .create("second", Style::Cyberpunk, &image)
            .await
            .unwrap();

        run_gallery(&harness.store, true).await.unwrap();
    }
}
