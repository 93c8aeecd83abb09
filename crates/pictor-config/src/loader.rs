// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading via Figment.
//!
//! Merge hierarchy: `./pictor.toml` > `~/.config/pictor/pictor.toml` >
//! `/etc/pictor/pictor.toml`, with `PICTOR_*` environment variables on top.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PictorConfig;

/// Load configuration from the standard XDG hierarchy with env overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/pictor/pictor.toml` (system-wide)
/// 3. `~/.config/pictor/pictor.toml` (user XDG config)
/// 4. `./pictor.toml` (local directory)
/// 5. `PICTOR_*` environment variables
pub fn load_config() -> Result<PictorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PictorConfig::default()))
        .merge(Toml::file("/etc/pictor/pictor.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("pictor/pictor.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("pictor.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
///
/// Used by tests and by embedded callers with explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PictorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PictorConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file path with env overrides.
pub fn load_config_from_path(path: &Path) -> Result<PictorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PictorConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment variable provider with explicit section mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names
/// themselves contain underscores: `PICTOR_HUGGINGFACE_API_TOKEN` must map
/// to `huggingface.api_token`, not `huggingface.api.token`.
fn env_provider() -> Env {
    Env::prefixed("PICTOR_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("huggingface_", "huggingface.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("limits_", "limits.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn inline_toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
[huggingface]
api_token = "hf_test"
force_fallback = true

[limits]
max_requests = 3
"#,
        )
        .unwrap();
        assert_eq!(config.huggingface.api_token.as_deref(), Some("hf_test"));
        assert!(config.huggingface.force_fallback);
        assert_eq!(config.limits.max_requests, 3);
        // Untouched sections keep their defaults.
        assert_eq!(config.limits.window_secs, 60);
    }

    #[test]
    fn unknown_key_surfaces_figment_error() {
        let result = load_config_from_str(
            r#"
[storage]
databse_path = "/tmp/x.db"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn explicit_path_loads_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pictor.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[limits]\nwindow_secs = 120").unwrap();

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.limits.window_secs, 120);
    }
}
