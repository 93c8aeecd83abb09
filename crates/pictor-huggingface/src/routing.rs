// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Style-to-model routing table.

use pictor_core::Style;

/// FLUX.1 dev checkpoint, used for the stylized looks.
pub const FLUX_DEV: &str = "black-forest-labs/FLUX.1-dev";

/// Stable Diffusion XL base, used for photorealistic output.
pub const SDXL_BASE: &str = "stabilityai/stable-diffusion-xl-base-1.0";

/// Returns the model checkpoint that renders `style`.
///
/// Cyberpunk and cartoon share a backend on purpose.
pub fn model_for_style(style: Style) -> &'static str {
    match style {
        Style::Realistic => SDXL_BASE,
        Style::Cyberpunk | Style::Cartoon => FLUX_DEV,
    }
}
