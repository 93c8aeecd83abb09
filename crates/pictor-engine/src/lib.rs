// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Pictor submission engine.
//!
//! Ties the pieces of one generation request together: prompt
//! validation, fixed-window rate limiting, the generation backend, and
//! the record store, in that order. Also ships the demo-data seeder.

pub mod limiter;
pub mod pipeline;
pub mod samples;
pub mod validate;

pub use limiter::RateLimiter;
pub use pipeline::GenerationPipeline;
pub use samples::{SAMPLE_PROMPTS, seed_samples};
pub use validate::validate_prompt;
