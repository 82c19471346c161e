// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.
//
// The pipeline and export code never reach for a global clipboard, camera
// or share sheet; they are handed one of these.

use std::path::PathBuf;

use pagescribe_core::error::Result;

/// Unified bridge that groups all native capabilities.
///
/// Platforms that lack a capability return
/// `PagescribeError::PlatformUnavailable` for it.
pub trait PlatformBridge: NativeCamera + NativePhotoLibrary + NativeClipboard + NativeShare {
    /// Human-readable platform name (e.g. "iOS 17", "Desktop").
    fn platform_name(&self) -> &str;
}

/// Capture page images from the device camera.
pub trait NativeCamera {
    /// Launch the system camera and return the captured image bytes.
    /// Returns Ok(None) if the user cancelled.
    fn capture_image(&self) -> Result<Option<Vec<u8>>>;
}

/// Pick existing photos.
pub trait NativePhotoLibrary {
    /// Show the photo picker and return the chosen images in selection
    /// order. An empty list means the user cancelled.
    fn pick_images(&self) -> Result<Vec<Vec<u8>>>;
}

/// Write to the system clipboard.
pub trait NativeClipboard {
    /// Replace the clipboard contents with `text`.
    fn set_text(&self, text: &str) -> Result<()>;
}

/// Hand files to other apps via the OS share sheet.
pub trait NativeShare {
    /// Share the given files, all of the same MIME type.
    fn share_files(&self, paths: &[PathBuf], mime_type: &str) -> Result<()>;
}
