// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Pictor crates.

use std::io::Cursor;

use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Raw prompt length ceiling, in Unicode scalar values. Measured against
/// the caller's input before normalization.
pub const MAX_PROMPT_CHARS: usize = 500;

/// Per-side pixel ceiling for images accepted into the store.
pub const MAX_IMAGE_DIM: u32 = 4096;

/// Visual style requested for a generation.
///
/// Persisted in the metadata row as its lowercase string form; parseable
/// back from that form for CLI arguments and row mapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Realistic,
    Cyberpunk,
    Cartoon,
}

/// One stored generation: prompt, style, blob reference, and evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Store-assigned id. Monotonically increasing, never reused.
    pub id: i64,
    /// Normalized prompt text, 1..=500 characters.
    pub prompt: String,
    /// Style the caller asked for.
    pub style: Style,
    /// Blob reference: file name relative to the blob root, set once.
    pub filename: String,
    /// Store-assigned UTC timestamp, `%Y-%m-%dT%H:%M:%S%.3fZ`.
    pub created_at: String,
    /// Evaluation score in 1..=10. `None` until evaluated.
    pub score: Option<i64>,
    /// Free-form evaluation feedback.
    pub feedback: Option<String>,
}

impl GenerationRecord {
    /// A record is evaluated once a score has been recorded. Re-evaluation
    /// overwrites; there is no way back to not-evaluated.
    pub fn is_evaluated(&self) -> bool {
        self.score.is_some()
    }
}

/// A decoded image moving through the pipeline.
///
/// Thin wrapper over [`image::DynamicImage`] so the pipeline and storage
/// crates never name the codec crate directly. Constructors return the
/// codec error unmapped; each call site wraps it into the [`PictorError`]
/// variant appropriate for its stage.
///
/// [`PictorError`]: crate::PictorError
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    inner: DynamicImage,
}

impl GeneratedImage {
    /// Decode an image from raw encoded bytes (PNG or JPEG).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        Ok(Self {
            inner: image::load_from_memory(bytes)?,
        })
    }

    /// A solid-color RGB canvas. Deterministic for fixed inputs.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self {
            inner: DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb))),
        }
    }

    /// PNG-encode the image for blob storage.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut buf = Cursor::new(Vec::new());
        self.inner.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.inner.dimensions()
    }

    /// Borrow the underlying dynamic image (pixel access for display and
    /// tests).
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.inner
    }
}
