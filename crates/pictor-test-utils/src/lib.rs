// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Pictor integration tests.
//!
//! Provides a scripted generator and harness infrastructure for fast,
//! deterministic, CI-runnable tests without external services.
//!
//! # Components
//!
//! - [`MockGenerator`] - scripted image generator with pre-configured results
//! - [`TestHarness`] - temp-disk store plus scripted generator, assembled

pub mod harness;
pub mod mock_generator;

pub use harness::TestHarness;
pub use mock_generator::MockGenerator;
