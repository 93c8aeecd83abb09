// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The generator seam between the pipeline and its image backends.

use async_trait::async_trait;

use crate::error::PictorError;
use crate::types::{GeneratedImage, Style};

/// An image generation backend.
///
/// The live HTTP client and the local placeholder fallback both implement
/// this trait; which one a pipeline holds is decided once at construction
/// time and is invisible to callers.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Short backend name for logs ("huggingface", "placeholder", ...).
    fn name(&self) -> &str;

    /// Produce an image for a normalized prompt in the given style.
    async fn generate(&self, prompt: &str, style: Style)
        -> Result<GeneratedImage, PictorError>;
}
