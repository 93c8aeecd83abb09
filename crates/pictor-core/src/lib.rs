// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core error type, domain types, and the generator trait for Pictor.
//!
//! Every other crate in the workspace depends on this one: it defines the
//! shared [`PictorError`] enum, the [`GenerationRecord`] domain model, and
//! the [`ImageGenerator`] seam between the pipeline and its backends.

pub mod error;
pub mod traits;
pub mod types;

pub use error::PictorError;
pub use traits::ImageGenerator;
pub use types::{GeneratedImage, GenerationRecord, Style, MAX_IMAGE_DIM, MAX_PROMPT_CHARS};
