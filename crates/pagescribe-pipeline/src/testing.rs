// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scripted OCR client shared by the pipeline tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::watch;

use pagescribe_core::error::{PagescribeError, Result};
use pagescribe_core::types::PipelineProgress;
use pagescribe_ocr::{OcrClient, OcrOutput};

/// Replies to each call with the next scripted result, in order.
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String>>>,
    calls: Mutex<usize>,
    progress: Option<watch::Receiver<PipelineProgress>>,
    observed: Mutex<Vec<f64>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Result<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(0),
            progress: None,
            observed: Mutex::new(Vec::new()),
        }
    }

    pub fn all_ok(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    /// Record the published progress fraction at the start of every call.
    pub fn observing(mut self, progress: watch::Receiver<PipelineProgress>) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    pub fn observed(&self) -> Vec<f64> {
        self.observed.lock().unwrap().clone()
    }
}

#[async_trait]
impl OcrClient for ScriptedClient {
    async fn extract_text(&self, _image: &[u8]) -> Result<OcrOutput> {
        *self.calls.lock().unwrap() += 1;
        if let Some(rx) = &self.progress {
            self.observed.lock().unwrap().push(rx.borrow().fraction);
        }
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PagescribeError::Processing("script exhausted".into())));
        reply.map(OcrOutput::new)
    }
}
