// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Row model re-exports.
//!
//! The record type lives in `pictor-core` so every crate shares one
//! definition; storage re-exports it next to the queries that map it.

pub use pictor_core::types::{GenerationRecord, Style};
