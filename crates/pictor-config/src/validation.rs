// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation.
//!
//! Semantic constraints serde cannot express: URL schemes, non-empty paths,
//! limiter bounds. All failures are collected; nothing fails fast.

use crate::diagnostic::ConfigError;
use crate::model::PictorConfig;

/// Validate a deserialized configuration.
///
/// Returns all collected validation errors rather than stopping at the
/// first one.
pub fn validate_config(config: &PictorConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let endpoint = config.huggingface.endpoint.trim();
    if endpoint.is_empty() {
        errors.push(ConfigError::Validation {
            message: "huggingface.endpoint must not be empty".to_string(),
        });
    } else if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("huggingface.endpoint `{endpoint}` must be an http(s) URL"),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.storage.image_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.image_dir must not be empty".to_string(),
        });
    }

    if config.limits.max_requests < 1 {
        errors.push(ConfigError::Validation {
            message: "limits.max_requests must be at least 1".to_string(),
        });
    }

    if config.limits.window_secs < 1 {
        errors.push(ConfigError::Validation {
            message: "limits.window_secs must be at least 1".to_string(),
        });
    }

    // A multi-minute artificial delay would look like a hang.
    if config.huggingface.fallback_delay_ms > 60_000 {
        errors.push(ConfigError::Validation {
            message: format!(
                "huggingface.fallback_delay_ms must be at most 60000, got {}",
                config.huggingface.fallback_delay_ms
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
