// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite metadata store and image blob store for Pictor.
//!
//! Provides WAL-mode SQLite with embedded migrations behind tokio-rusqlite's
//! single-writer model, a directory-backed blob store with path traversal
//! protection, and the [`RecordStore`] facade that combines the two with the
//! blob-before-row write discipline.

pub mod blobs;
pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;
pub mod store;

pub use blobs::BlobStore;
pub use database::Database;
pub use models::*;
pub use store::RecordStore;
