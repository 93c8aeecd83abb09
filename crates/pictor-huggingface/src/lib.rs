// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image generation backends for Pictor.
//!
//! [`resolve_generator`] picks the backend once, at construction time:
//! live Hugging Face inference when an API token is available, the
//! deterministic placeholder otherwise. Callers receive a trait object
//! and cannot tell the two modes apart.

pub mod client;
pub mod fallback;
pub mod routing;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pictor_config::HuggingFaceConfig;
use pictor_core::{GeneratedImage, ImageGenerator, PictorError, Style};
use tracing::info;

pub use client::HuggingFaceClient;
pub use fallback::PlaceholderGenerator;
pub use routing::model_for_style;

/// Environment variable consulted when the configuration carries no token.
pub const TOKEN_ENV_VAR: &str = "HF_API_TOKEN";

/// Live generator: routes each style to its model and calls the API.
pub struct HuggingFaceGenerator {
    client: HuggingFaceClient,
}

impl HuggingFaceGenerator {
    pub fn new(client: HuggingFaceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageGenerator for HuggingFaceGenerator {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn generate(&self, prompt: &str, style: Style) -> Result<GeneratedImage, PictorError> {
        let model_id = routing::model_for_style(style);
        self.client.generate(model_id, prompt).await
    }
}

/// Picks the generation backend for this process.
///
/// Live mode needs an API token and no `force_fallback` override;
/// anything else selects the placeholder. The choice is made here,
/// once, not per call.
pub fn resolve_generator(
    config: &HuggingFaceConfig,
) -> Result<Arc<dyn ImageGenerator>, PictorError> {
    let delay = Duration::from_millis(config.fallback_delay_ms);
    if config.force_fallback {
        info!("generation forced into fallback mode");
        return Ok(Arc::new(PlaceholderGenerator::new(delay)));
    }
    match resolve_api_token(config) {
        Some(token) => {
            let client = HuggingFaceClient::new(&token, config.endpoint.clone())?;
            info!(endpoint = %config.endpoint, "generation in live mode");
            Ok(Arc::new(HuggingFaceGenerator::new(client)))
        }
        None => {
            info!("no API token configured, generation in fallback mode");
            Ok(Arc::new(PlaceholderGenerator::new(delay)))
        }
    }
}

/// Token from the configuration, else from `HF_API_TOKEN`. Blank values
/// count as absent.
fn resolve_api_token(config: &HuggingFaceConfig) -> Option<String> {
    if let Some(token) = &config.api_token
        && !token.trim().is_empty()
    {
        return Some(token.clone());
    }
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR)
        && !token.trim().is_empty()
    {
        return Some(token);
    }
    None
}
