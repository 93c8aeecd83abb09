// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unified error enum shared by all Pictor crates.
//!
//! Domain failures (validation, rate limiting, generation, storage limits)
//! get their own variants so callers can match on them; infrastructure
//! failures are wrapped with their source preserved. Nothing here is fatal
//! to the process.

use thiserror::Error;

/// All failure modes of the Pictor pipeline.
#[derive(Debug, Error)]
pub enum PictorError {
    /// The prompt was empty (or whitespace-only) after trimming.
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// The raw prompt exceeded the length ceiling, measured before
    /// normalization.
    #[error("prompt is too long: {length} characters (limit 500)")]
    PromptTooLong { length: usize },

    /// The per-window request ceiling was hit. Recoverable: the caller
    /// should wait for the current window to pass. No work was performed.
    #[error("rate limit exceeded: wait for the current window to pass")]
    RateLimitExceeded,

    /// The remote backend failed after the retry policy was exhausted,
    /// or returned a body that could not be decoded as an image.
    #[error("generation failed (status {status}): {message}")]
    Generation { status: u16, message: String },

    /// An image dimension exceeded the per-side pixel ceiling. Checked
    /// before any write happens.
    #[error("image is {width}x{height}, the limit is 4096 per side")]
    ImageTooLarge { width: u32, height: u32 },

    /// Evaluation or deletion addressed a record id that does not exist.
    #[error("record not found: {id}")]
    RecordNotFound { id: i64 },

    /// An evaluation score outside the 1..=10 scale.
    #[error("score {score} is out of range (1-10)")]
    InvalidScore { score: i64 },

    /// Database or blob store failure.
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal invariant violation.
    #[error("internal error: {0}")]
    Internal(String),
}
