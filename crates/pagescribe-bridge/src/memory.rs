// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory bridge for tests and headless runs.
//
// Clipboard writes and shares are recorded instead of reaching the OS;
// camera and photo-library results are queued up front.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

use pagescribe_core::error::{PagescribeError, Result};

use crate::traits::*;

/// One recorded call to [`NativeShare::share_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFiles {
    pub paths: Vec<PathBuf>,
    pub mime_type: String,
}

/// Bridge that keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemoryBridge {
    clipboard: Mutex<Option<String>>,
    shares: Mutex<Vec<SharedFiles>>,
    camera: Mutex<VecDeque<Vec<u8>>>,
    library: Mutex<Vec<Vec<u8>>>,
}

fn poisoned<T>(_: T) -> PagescribeError {
    PagescribeError::Bridge("memory bridge lock poisoned".into())
}

impl MemoryBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an image for the next [`NativeCamera::capture_image`] call.
    pub fn queue_capture(&self, bytes: Vec<u8>) {
        if let Ok(mut camera) = self.camera.lock() {
            camera.push_back(bytes);
        }
    }

    /// Set what the photo picker returns.
    pub fn set_library(&self, images: Vec<Vec<u8>>) {
        if let Ok(mut library) = self.library.lock() {
            *library = images;
        }
    }

    /// Last text written to the clipboard.
    pub fn clipboard_text(&self) -> Option<String> {
        self.clipboard.lock().ok().and_then(|c| c.clone())
    }

    /// Every share recorded so far, oldest first.
    pub fn shares(&self) -> Vec<SharedFiles> {
        self.shares.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl PlatformBridge for MemoryBridge {
    fn platform_name(&self) -> &str {
        "In-memory"
    }
}

impl NativeCamera for MemoryBridge {
    /// Pops the next queued image; an empty queue behaves like a cancel.
    fn capture_image(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.camera.lock().map_err(poisoned)?.pop_front())
    }
}

impl NativePhotoLibrary for MemoryBridge {
    fn pick_images(&self) -> Result<Vec<Vec<u8>>> {
        Ok(self.library.lock().map_err(poisoned)?.clone())
    }
}

impl NativeClipboard for MemoryBridge {
    fn set_text(&self, text: &str) -> Result<()> {
        *self.clipboard.lock().map_err(poisoned)? = Some(text.to_owned());
        Ok(())
    }
}

impl NativeShare for MemoryBridge {
    fn share_files(&self, paths: &[PathBuf], mime_type: &str) -> Result<()> {
        self.shares.lock().map_err(poisoned)?.push(SharedFiles {
            paths: paths.to_vec(),
            mime_type: mime_type.to_owned(),
        });
        Ok(())
    }
}
