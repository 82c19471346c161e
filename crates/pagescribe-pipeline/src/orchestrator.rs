// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch OCR orchestrator.
//
// Submits images to the OCR client one at a time, in order, names each
// result with the filename heuristic and publishes progress on a watch
// channel after every item. There is no retry and no cancellation: each
// image is attempted exactly once per run.

use tokio::sync::watch;
use tracing::{info, instrument, warn};

use pagescribe_core::error::Result;
use pagescribe_core::types::{CapturedImage, Page, PipelineProgress, PipelineStage, ProcessingMode};
use pagescribe_ocr::OcrClient;

use crate::naming::suggest_name;

/// Pages from one run, plus how many images could not be read.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub pages: Vec<Page>,
    /// Images whose OCR call failed. Always zero for strict runs.
    pub failed: usize,
}

/// Drives one OCR client over a batch of captured images.
pub struct Pipeline<C> {
    client: C,
    progress: watch::Sender<PipelineProgress>,
}

impl<C: OcrClient> Pipeline<C> {
    pub fn new(client: C) -> Self {
        let (progress, _) = watch::channel(PipelineProgress::default());
        Self { client, progress }
    }

    /// Build a pipeline that publishes on an existing progress channel.
    pub fn with_reporter(client: C, progress: watch::Sender<PipelineProgress>) -> Self {
        Self { client, progress }
    }

    /// A receiver that observes every progress update from now on.
    pub fn subscribe(&self) -> watch::Receiver<PipelineProgress> {
        self.progress.subscribe()
    }

    /// The most recently published progress.
    pub fn progress(&self) -> PipelineProgress {
        *self.progress.borrow()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Publish a stage change, keeping the current fraction.
    pub fn set_stage(&self, stage: PipelineStage) {
        self.progress.send_modify(|p| p.stage = stage);
    }

    /// Back to idle with zero progress.
    pub fn reset(&self) {
        self.progress.send_replace(PipelineProgress::default());
    }

    /// Recognise every image in `images`, in order.
    ///
    /// Strict mode returns the first OCR failure and no pages. Best-effort
    /// mode always returns one page per image, substituting an empty
    /// `"Untitled {n}"` page for each failure and counting it in `failed`.
    #[instrument(skip_all, fields(images = images.len(), mode = ?mode))]
    pub async fn run(
        &mut self,
        images: &[CapturedImage],
        mode: ProcessingMode,
    ) -> Result<RunOutcome> {
        match mode {
            ProcessingMode::Strict => {
                let pages = self.run_strict(images).await?;
                Ok(RunOutcome { pages, failed: 0 })
            }
            ProcessingMode::BestEffort => Ok(self.run_best_effort(images).await),
        }
    }

    async fn run_strict(&mut self, images: &[CapturedImage]) -> Result<Vec<Page>> {
        self.begin();
        let total = images.len();
        let mut pages = Vec::with_capacity(total);

        for (index, image) in images.iter().enumerate() {
            let output = match self.client.extract_text(image.bytes()).await {
                Ok(output) => output,
                Err(e) => {
                    warn!(position = index + 1, error = %e, "OCR failed, aborting run");
                    return Err(e);
                }
            };
            let name = suggest_name(&output.text);
            pages.push(Page::new(image.id(), name, output.text));
            self.advance(index + 1, total);
        }

        info!(pages = pages.len(), "strict run complete");
        Ok(pages)
    }

    async fn run_best_effort(&mut self, images: &[CapturedImage]) -> RunOutcome {
        self.begin();
        let total = images.len();
        let mut pages = Vec::with_capacity(total);
        let mut failed = 0usize;

        for (index, image) in images.iter().enumerate() {
            let page = match self.client.extract_text(image.bytes()).await {
                Ok(output) => {
                    let name = suggest_name(&output.text);
                    Page::new(image.id(), name, output.text)
                }
                Err(e) => {
                    warn!(position = index + 1, error = %e, "OCR failed, using placeholder");
                    failed += 1;
                    Page::new(image.id(), format!("Untitled {}", index + 1), String::new())
                }
            };
            pages.push(page);
            self.advance(index + 1, total);
        }

        info!(pages = pages.len(), failed, "best-effort run complete");
        RunOutcome { pages, failed }
    }

    fn begin(&self) {
        self.progress
            .send_replace(PipelineProgress::new(PipelineStage::Processing, 0.0));
    }

    fn advance(&self, done: usize, total: usize) {
        let fraction = done as f64 / total as f64;
        self.progress
            .send_replace(PipelineProgress::new(PipelineStage::Processing, fraction));
    }
}
