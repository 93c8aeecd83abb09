// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end pipeline testing.
//!
//! `TestHarness` assembles a record store on temporary disk together
//! with a scripted generator, so tests can drive the full
//! validate/limit/generate/persist path without external services.

use std::sync::Arc;

use pictor_config::StorageConfig;
use pictor_core::{GeneratedImage, PictorError};
use pictor_storage::RecordStore;

use crate::mock_generator::MockGenerator;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    results: Vec<Result<GeneratedImage, PictorError>>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Pre-load the scripted generator with results.
    pub fn with_results(mut self, results: Vec<Result<GeneratedImage, PictorError>>) -> Self {
        self.results = results;
        self
    }

    /// Build the harness, creating the temp-disk store.
    pub async fn build(self) -> Result<TestHarness, PictorError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| PictorError::Storage { source: e.into() })?;
        let config = StorageConfig {
            database_path: temp_dir.path().join("test.db").to_string_lossy().to_string(),
            image_dir: temp_dir.path().join("images").to_string_lossy().to_string(),
            wal_mode: true,
        };
        let store = Arc::new(RecordStore::open(&config).await?);
        let generator = Arc::new(MockGenerator::with_results(self.results));

        Ok(TestHarness {
            store,
            generator,
            _temp_dir: temp_dir,
        })
    }
}

/// A storage-plus-generator stack living on temporary disk.
///
/// The temp directory is removed when the harness is dropped.
pub struct TestHarness {
    pub store: Arc<RecordStore>,
    pub generator: Arc<MockGenerator>,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }
}
