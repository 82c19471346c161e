// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capture-to-export session.
//
// Owns the captured images, the page store and the orchestrator, and is the
// only place the pipeline stage changes. Every operation checks the stage
// first and fails with `InvalidTransition` without side effects when the
// move is not allowed.
//
//   idle -> capturing -> ready -> processing -> reviewing <-> exported
//                ^-----------'         |
//                          ready <-----'  (strict failure)
//
// `reset` returns to idle from anywhere and clears images and pages together.

use std::fs;
use std::path::{Path, PathBuf};

use tokio::sync::watch;
use tracing::{info, instrument, warn};

use pagescribe_bridge::{NativeCamera, NativeClipboard, NativePhotoLibrary, NativeShare};
use pagescribe_core::error::{PagescribeError, Result};
use pagescribe_core::types::{
    CapturedImage, ExportFormat, ImageId, Page, PageId, PipelineProgress, PipelineStage,
    ProcessingMode,
};
use pagescribe_export::{FolderExporter, combined_content, page_content};
use pagescribe_ocr::OcrClient;

use crate::orchestrator::Pipeline;
use crate::store::{CaptureStore, PageStore};

pub struct Session<C> {
    pipeline: Pipeline<C>,
    images: CaptureStore,
    pages: PageStore,
    format: ExportFormat,
    failed: usize,
}

impl<C: OcrClient> Session<C> {
    pub fn new(client: C) -> Self {
        Self {
            pipeline: Pipeline::new(client),
            images: CaptureStore::new(),
            pages: PageStore::new(),
            format: ExportFormat::default(),
            failed: 0,
        }
    }

    // -- Observation ---------------------------------------------------------

    pub fn stage(&self) -> PipelineStage {
        self.pipeline.progress().stage
    }

    pub fn progress(&self) -> PipelineProgress {
        self.pipeline.progress()
    }

    /// Watch stage and progress changes.
    pub fn subscribe(&self) -> watch::Receiver<PipelineProgress> {
        self.pipeline.subscribe()
    }

    pub fn images(&self) -> &[CapturedImage] {
        self.images.as_slice()
    }

    pub fn pages(&self) -> &[Page] {
        self.pages.as_slice()
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(id)
    }

    /// Images the last run could not read. Their pages are empty
    /// placeholders.
    pub fn failed_pages(&self) -> usize {
        self.failed
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn set_format(&mut self, format: ExportFormat) {
        self.format = format;
    }

    // -- Capture -------------------------------------------------------------

    pub fn add_image(&mut self, bytes: Vec<u8>) -> Result<ImageId> {
        self.check(PipelineStage::Capturing)?;
        let id = self.images.add(bytes);
        self.enter(PipelineStage::Capturing);
        Ok(id)
    }

    pub fn remove_image(&mut self, id: ImageId) -> Result<CapturedImage> {
        self.check(PipelineStage::Capturing)?;
        let image = self.images.remove(id)?;
        self.enter(PipelineStage::Capturing);
        Ok(image)
    }

    /// Take one photo. `Ok(None)` if the user cancelled.
    pub fn capture_from(&mut self, camera: &dyn NativeCamera) -> Result<Option<ImageId>> {
        self.check(PipelineStage::Capturing)?;
        match camera.capture_image()? {
            Some(bytes) => self.add_image(bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Add every image picked from the photo library, in selection order.
    pub fn import_from(&mut self, library: &dyn NativePhotoLibrary) -> Result<Vec<ImageId>> {
        self.check(PipelineStage::Capturing)?;
        let picked = library.pick_images()?;
        picked.into_iter().map(|bytes| self.add_image(bytes)).collect()
    }

    /// Finish capturing. Requires at least one image.
    pub fn mark_ready(&mut self) -> Result<()> {
        self.check(PipelineStage::ReadyToProcess)?;
        if self.images.is_empty() {
            return Err(PagescribeError::NothingToProcess);
        }
        self.enter(PipelineStage::ReadyToProcess);
        Ok(())
    }

    // -- Processing ----------------------------------------------------------

    /// Run OCR over the captured images.
    ///
    /// On success the page store is replaced with the new pages and the
    /// session moves to reviewing. A strict-mode failure returns to ready
    /// with the page store untouched.
    #[instrument(skip_all, fields(images = self.images.len(), mode = ?mode))]
    pub async fn process(&mut self, mode: ProcessingMode) -> Result<usize> {
        self.check(PipelineStage::Processing)?;
        if self.images.is_empty() {
            return Err(PagescribeError::NothingToProcess);
        }
        self.enter(PipelineStage::Processing);

        match self.pipeline.run(self.images.as_slice(), mode).await {
            Ok(outcome) => {
                let count = outcome.pages.len();
                self.pages.replace(outcome.pages);
                self.failed = outcome.failed;
                self.enter(PipelineStage::Reviewing);
                info!(pages = count, failed = self.failed, "ready for review");
                Ok(count)
            }
            Err(e) => {
                self.enter(PipelineStage::ReadyToProcess);
                Err(e)
            }
        }
    }

    // -- Review --------------------------------------------------------------

    pub fn update_page(&mut self, id: PageId, filename: String, text: String) -> Result<()> {
        self.check_pages(PipelineStage::Reviewing)?;
        self.pages.update(id, filename, text)?;
        self.enter(PipelineStage::Reviewing);
        Ok(())
    }

    pub fn delete_page(&mut self, id: PageId) -> Result<Page> {
        self.check_pages(PipelineStage::Reviewing)?;
        let page = self.pages.remove(id)?;
        self.enter(PipelineStage::Reviewing);
        Ok(page)
    }

    // -- Export --------------------------------------------------------------

    /// Write every page into `dir`. Returns the written paths in page order.
    pub fn export_to_folder(&mut self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.check_pages(PipelineStage::Exported)?;
        let paths = FolderExporter::new(dir).export(self.pages.as_slice(), self.format)?;
        self.enter(PipelineStage::Exported);
        Ok(paths)
    }

    /// Put every page on the clipboard, separated by a rule.
    pub fn copy_all(&mut self, clipboard: &dyn NativeClipboard) -> Result<()> {
        self.check_pages(PipelineStage::Exported)?;
        clipboard.set_text(&combined_content(self.pages.as_slice(), self.format))?;
        self.enter(PipelineStage::Exported);
        Ok(())
    }

    pub fn copy_page(&mut self, id: PageId, clipboard: &dyn NativeClipboard) -> Result<()> {
        self.check_pages(PipelineStage::Exported)?;
        let page = self.pages.get(id).ok_or(PagescribeError::PageNotFound(id))?;
        clipboard.set_text(&page_content(page, self.format))?;
        self.enter(PipelineStage::Exported);
        Ok(())
    }

    /// Export into a fresh temporary directory and hand the files to the
    /// share target.
    ///
    /// If the export or the share fails the temporary directory is removed
    /// before the error is returned.
    pub fn share(&mut self, target: &dyn NativeShare) -> Result<Vec<PathBuf>> {
        self.check_pages(PipelineStage::Exported)?;
        let exporter = FolderExporter::temporary()?;
        let shared = exporter
            .export(self.pages.as_slice(), self.format)
            .and_then(|paths| {
                target.share_files(&paths, self.format.mime_type())?;
                Ok(paths)
            });
        let paths = match shared {
            Ok(paths) => paths,
            Err(e) => {
                if let Err(cleanup) = fs::remove_dir_all(exporter.dir()) {
                    warn!(
                        path = %exporter.dir().display(),
                        error = %cleanup,
                        "share folder left behind"
                    );
                }
                return Err(e);
            }
        };
        self.enter(PipelineStage::Exported);
        Ok(paths)
    }

    // -- Reset ---------------------------------------------------------------

    /// Clear images and pages and return to idle.
    pub fn reset(&mut self) {
        self.images.clear();
        self.pages.clear();
        self.failed = 0;
        self.pipeline.reset();
        info!("session reset");
    }

    fn check(&self, to: PipelineStage) -> Result<()> {
        let from = self.stage();
        if from.can_transition_to(to) {
            Ok(())
        } else {
            Err(PagescribeError::InvalidTransition { from, to })
        }
    }

    /// Like `check`, but also requires a stage that holds pages.
    fn check_pages(&self, to: PipelineStage) -> Result<()> {
        let from = self.stage();
        if from.has_pages() {
            self.check(to)
        } else {
            Err(PagescribeError::InvalidTransition { from, to })
        }
    }

    fn enter(&self, stage: PipelineStage) {
        self.pipeline.set_stage(stage);
    }
}
