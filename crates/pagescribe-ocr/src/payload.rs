// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Upload payload preparation.
//
// Captured pages arrive in whatever format the camera or photo library
// produced (HEIC is converted by the platform layer; PNG, JPEG, TIFF, WebP
// reach us directly). The service is sent a JPEG at a fixed quality.

use image::codecs::jpeg::JpegEncoder;
use pagescribe_core::error::{PagescribeError, Result};
use tracing::{debug, instrument};

/// JPEG quality used for uploads.
pub const JPEG_QUALITY: u8 = 80;

/// Decode `bytes` and re-encode them as a JPEG at [`JPEG_QUALITY`].
///
/// # Errors
///
/// Returns [`PagescribeError::Input`] if the bytes are empty, cannot be
/// decoded as an image, or cannot be re-encoded.
#[instrument(skip_all, fields(input_len = bytes.len()))]
pub fn prepare_jpeg(bytes: &[u8]) -> Result<Vec<u8>> {
    if bytes.is_empty() {
        return Err(PagescribeError::Input("image is empty".into()));
    }

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| PagescribeError::Input(format!("could not decode image: {e}")))?;

    // JPEG has no alpha channel.
    let rgb = decoded.to_rgb8();
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| PagescribeError::Input(format!("could not encode JPEG: {e}")))?;

    debug!(
        width = rgb.width(),
        height = rgb.height(),
        output_len = jpeg.len(),
        "payload prepared"
    );
    Ok(jpeg)
}
