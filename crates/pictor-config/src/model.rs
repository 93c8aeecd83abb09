// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration model.
//!
//! Every section rejects unknown keys (`deny_unknown_fields`) so typos fail
//! loudly, and every field has a serde default so an empty file is a valid
//! configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for Pictor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PictorConfig {
    #[serde(default)]
    pub huggingface: HuggingFaceConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Hugging Face inference backend settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HuggingFaceConfig {
    /// API token. When absent here and in the `HF_API_TOKEN` environment
    /// variable, generation runs in fallback mode.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Inference endpoint base URL. Model ids are appended as one extra
    /// path segment.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Force fallback mode even when a token is available.
    #[serde(default)]
    pub force_fallback: bool,

    /// Artificial latency of the fallback generator, in milliseconds.
    #[serde(default = "default_fallback_delay_ms")]
    pub fallback_delay_ms: u64,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            endpoint: default_endpoint(),
            force_fallback: false,
            fallback_delay_ms: default_fallback_delay_ms(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_fallback_delay_ms() -> u64 {
    3_000
}

/// Locations of the metadata database and the image blob directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// SQLite database file path.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Directory holding one image file per record.
    #[serde(default = "default_image_dir")]
    pub image_dir: String,

    /// Enable WAL journal mode on open.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            image_dir: default_image_dir(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|d| d.join("pictor/pictor.db").display().to_string())
        .unwrap_or_else(|| "pictor.db".to_string())
}

fn default_image_dir() -> String {
    dirs::data_dir()
        .map(|d| d.join("pictor/images").display().to_string())
        .unwrap_or_else(|| "generated_images".to_string())
}

fn default_wal_mode() -> bool {
    true
}

/// Request-rate ceiling for the submission pipeline.
///
/// The ceiling is process-wide: one window, one counter, no per-user
/// bookkeeping.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Fixed window length in seconds.
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Requests allowed per window.
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            max_requests: default_max_requests(),
        }
    }
}

fn default_window_secs() -> u64 {
    60
}

fn default_max_requests() -> u32 {
    5
}
