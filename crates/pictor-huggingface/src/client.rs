// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Hugging Face inference API.
//!
//! Provides [`HuggingFaceClient`] which handles request construction,
//! bearer-token authentication, and retry with exponential backoff when
//! the API rate-limits a request.

use std::time::Duration;

use pictor_core::{GeneratedImage, PictorError};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::types::{ApiErrorResponse, GenerationRequest};

/// Retries after the initial attempt (three attempts in total).
const MAX_RETRIES: u32 = 2;

/// HTTP client for Hugging Face inference requests.
///
/// Requests go to `<endpoint>/<model_id>`; the endpoint comes from
/// configuration so tests can point the client at a local server.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: reqwest::Client,
    endpoint: String,
    max_retries: u32,
}

impl HuggingFaceClient {
    /// Creates a new inference client holding `api_token` as a default
    /// `Authorization: Bearer` header.
    pub fn new(api_token: &str, endpoint: String) -> Result<Self, PictorError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_token}"))
            .map_err(|e| PictorError::Config(format!("invalid API token header value: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| PictorError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            max_retries: MAX_RETRIES,
        })
    }

    /// Requests one image from `model_id` for `prompt`.
    ///
    /// A 429 answer is retried with exponential backoff (1 s, then 2 s);
    /// any other non-200 fails immediately. Transport failures carry
    /// status 0, meaning no response was received at all.
    pub async fn generate(
        &self,
        model_id: &str,
        prompt: &str,
    ) -> Result<GeneratedImage, PictorError> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), model_id);
        let request = GenerationRequest { inputs: prompt };

        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_secs(1 << (attempt - 1));
                warn!(
                    attempt,
                    delay_secs = delay.as_secs(),
                    "retrying generation after rate limit"
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|e| PictorError::Generation {
                    status: 0,
                    message: format!("HTTP request failed: {e}"),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, model_id, "generation response received");

            if status.is_success() {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| PictorError::Generation {
                        status: status.as_u16(),
                        message: format!("failed to read response body: {e}"),
                    })?;
                return GeneratedImage::from_bytes(&bytes).map_err(|e| {
                    PictorError::Generation {
                        status: status.as_u16(),
                        message: format!("response was not a decodable image: {e}"),
                    }
                });
            }

            if is_transient_error(status) && attempt < self.max_retries {
                warn!(status = %status, attempt, "rate limited, will retry");
                last_error = Some(PictorError::Generation {
                    status: status.as_u16(),
                    message: "rate limited".to_string(),
                });
                continue;
            }

            // Non-transient status or exhausted retries.
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => api_err.error,
                Err(_) => format!("API returned {status}: {body}"),
            };
            return Err(PictorError::Generation {
                status: status.as_u16(),
                message,
            });
        }

        Err(last_error.unwrap_or_else(|| PictorError::Generation {
            status: 0,
            message: "generation failed after retries".to_string(),
        }))
    }
}

/// Only rate limiting is worth retrying; every other failure is terminal.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    status == reqwest::StatusCode::TOO_MANY_REQUESTS
}
