// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted image generator for deterministic testing.
//!
//! `MockGenerator` implements `ImageGenerator` with pre-configured
//! results, enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use pictor_core::{GeneratedImage, ImageGenerator, PictorError, Style};

/// A scripted generator that returns pre-configured results.
///
/// Results are popped from a FIFO queue. When the queue is empty, a
/// default 64x64 gray image is returned. Every call is recorded so
/// tests can assert exactly what reached the generator.
pub struct MockGenerator {
    results: Arc<Mutex<VecDeque<Result<GeneratedImage, PictorError>>>>,
    calls: Arc<Mutex<Vec<(String, Style)>>>,
}

impl MockGenerator {
    /// Create a new mock generator with an empty result queue.
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock generator pre-loaded with the given results.
    pub fn with_results(results: Vec<Result<GeneratedImage, PictorError>>) -> Self {
        Self {
            results: Arc::new(Mutex::new(VecDeque::from(results))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a result to the end of the queue.
    pub async fn push_result(&self, result: Result<GeneratedImage, PictorError>) {
        self.results.lock().await.push_back(result);
    }

    /// Prompt/style pairs seen so far, in call order.
    pub async fn calls(&self) -> Vec<(String, Style)> {
        self.calls.lock().await.clone()
    }

    /// Number of generation calls received.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// Pop the next result, or return the default image.
    async fn next_result(&self) -> Result<GeneratedImage, PictorError> {
        self.results
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(GeneratedImage::solid(64, 64, [128, 128, 128])))
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str, style: Style) -> Result<GeneratedImage, PictorError> {
        self.calls.lock().await.push((prompt.to_string(), style));
        self.next_result().await
    }
}
