// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The submission pipeline: validate, rate-limit, generate, persist.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use pictor_core::{GenerationRecord, ImageGenerator, PictorError, Style};
use pictor_storage::RecordStore;

use crate::limiter::RateLimiter;
use crate::validate::validate_prompt;

/// Orchestrates one generation request end to end.
///
/// The stages run in a fixed order and any failure short-circuits the
/// rest, so a rejected request performs no generation work and a failed
/// generation persists nothing.
pub struct GenerationPipeline {
    store: Arc<RecordStore>,
    generator: Arc<dyn ImageGenerator>,
    limiter: Mutex<RateLimiter>,
}

impl GenerationPipeline {
    pub fn new(
        store: Arc<RecordStore>,
        generator: Arc<dyn ImageGenerator>,
        limiter: RateLimiter,
    ) -> Self {
        Self {
            store,
            generator,
            limiter: Mutex::new(limiter),
        }
    }

    /// Runs one submission: validate the prompt, charge the rate
    /// limiter, generate the image, persist it.
    pub async fn submit(
        &self,
        raw_prompt: &str,
        style: Style,
    ) -> Result<GenerationRecord, PictorError> {
        let prompt = validate_prompt(raw_prompt)?;
        debug!(prompt, style = %style, "submission accepted");

        let allowed = self.limiter.lock().await.try_acquire(Instant::now());
        if !allowed {
            warn!("submission denied by the rate limiter");
            return Err(PictorError::RateLimitExceeded);
        }

        let image = self.generator.generate(&prompt, style).await?;
        let record = self.store.create(&prompt, style, &image).await?;
        info!(id = record.id, backend = self.generator.name(), "generation stored");
        Ok(record)
    }
}
