// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic placeholder generation for offline use.

use std::time::Duration;

use async_trait::async_trait;
use pictor_core::{GeneratedImage, ImageGenerator, PictorError, Style};
use tracing::debug;

/// Placeholder edge length in pixels.
const PLACEHOLDER_SIZE: u32 = 512;

/// Steel-blue fill of every placeholder image.
const PLACEHOLDER_COLOR: [u8; 3] = [73, 109, 137];

/// Generator that returns a solid-color placeholder after a fixed delay.
///
/// Selected when no API token is available. The delay simulates
/// generation latency so the calling experience matches live mode;
/// no network I/O happens at all.
#[derive(Debug, Clone)]
pub struct PlaceholderGenerator {
    delay: Duration,
}

impl PlaceholderGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ImageGenerator for PlaceholderGenerator {
    fn name(&self) -> &str {
        "placeholder"
    }

    async fn generate(&self, prompt: &str, style: Style) -> Result<GeneratedImage, PictorError> {
        debug!(prompt, style = %style, "generating placeholder");
        tokio::time::sleep(self.delay).await;
        Ok(GeneratedImage::solid(
            PLACEHOLDER_SIZE,
            PLACEHOLDER_SIZE,
            PLACEHOLDER_COLOR,
        ))
    }
}
