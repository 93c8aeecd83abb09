// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt validation and normalization.

use pictor_core::{MAX_PROMPT_CHARS, PictorError};

/// Validates a raw prompt and returns its normalized form.
///
/// The length ceiling applies to the raw input, before normalization,
/// counted in Unicode scalar values. Normalization trims the ends and
/// collapses internal whitespace runs to single spaces; the function is
/// idempotent on accepted input. Pure, no I/O.
pub fn validate_prompt(raw: &str) -> Result<String, PictorError> {
    if raw.trim().is_empty() {
        return Err(PictorError::EmptyPrompt);
    }
    let length = raw.chars().count();
    if length > MAX_PROMPT_CHARS {
        return Err(PictorError::PromptTooLong { length });
    }
    Ok(raw.split_whitespace().collect::<Vec<_>>().join(" "))
}
