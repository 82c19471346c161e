// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge.
//
// The clipboard is real here (via `arboard`). Desktop users feed images in
// as files, so camera and photo picker report `PlatformUnavailable`. There
// is no share sheet: sharing logs the exported paths and leaves the files
// where they are for the user to pick up.
//
// On Linux the clipboard is served by the process that set it, so `set_text`
// keeps serving it until another owner takes over or `CLIPBOARD_HOLD`
// passes, whichever comes first.

use std::path::PathBuf;
#[cfg(target_os = "linux")]
use std::time::{Duration, Instant};

use pagescribe_core::error::{PagescribeError, Result};

use crate::traits::*;

/// Bridge for Linux, macOS and Windows desktops.
#[derive(Debug, Default)]
pub struct DesktopBridge;

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop"
    }
}

impl NativeCamera for DesktopBridge {
    fn capture_image(&self) -> Result<Option<Vec<u8>>> {
        tracing::warn!("NativeCamera::capture_image called on desktop bridge");
        Err(PagescribeError::PlatformUnavailable)
    }
}

impl NativePhotoLibrary for DesktopBridge {
    fn pick_images(&self) -> Result<Vec<Vec<u8>>> {
        tracing::warn!("NativePhotoLibrary::pick_images called on desktop bridge");
        Err(PagescribeError::PlatformUnavailable)
    }
}

/// Longest time `set_text` keeps serving the clipboard on Linux.
#[cfg(target_os = "linux")]
pub const CLIPBOARD_HOLD: Duration = Duration::from_secs(10);

/// Point after which a clipboard set at `now` is no longer served.
#[cfg(target_os = "linux")]
fn hold_deadline(now: Instant) -> Instant {
    now + CLIPBOARD_HOLD
}

impl NativeClipboard for DesktopBridge {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| PagescribeError::Bridge(e.to_string()))?;
        write_text(&mut clipboard, text).map_err(|e| PagescribeError::Bridge(e.to_string()))?;
        tracing::info!(chars = text.chars().count(), "copied to clipboard");
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard
        .set()
        .wait_until(hold_deadline(Instant::now()))
        .text(text)
}

#[cfg(not(target_os = "linux"))]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text)
}

impl NativeShare for DesktopBridge {
    fn share_files(&self, paths: &[PathBuf], mime_type: &str) -> Result<()> {
        for path in paths {
            tracing::info!(path = %path.display(), mime_type, "left for sharing");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_reports_success_and_keeps_files() {
        let dir = std::env::temp_dir().join(format!("pagescribe-desktop-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("Notes.md");
        std::fs::write(&file, "# Notes").unwrap();

        DesktopBridge
            .share_files(std::slice::from_ref(&file), "text/markdown")
            .unwrap();
        assert!(file.exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn camera_and_library_are_unavailable() {
        assert!(matches!(
            DesktopBridge.capture_image(),
            Err(PagescribeError::PlatformUnavailable)
        ));
        assert!(matches!(
            DesktopBridge.pick_images(),
            Err(PagescribeError::PlatformUnavailable)
        ));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn clipboard_is_held_for_a_bounded_time() {
        let now = Instant::now();
        let deadline = hold_deadline(now);
        assert!(deadline > now);
        assert_eq!(deadline - now, CLIPBOARD_HOLD);
    }
}
