// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The OCR client contract consumed by the pipeline.

use std::sync::Arc;

use async_trait::async_trait;
use pagescribe_core::error::Result;

/// Text recognised from one image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OcrOutput {
    /// Recognised text, lines separated by `\n`. Empty when nothing was read.
    pub text: String,
    /// Mean recognition confidence in `[0, 1]`, when the engine reports one.
    pub confidence: Option<f64>,
}

impl OcrOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
        }
    }
}

/// Interface to an OCR engine.
///
/// The pipeline calls [`extract_text`](Self::extract_text) exactly once per
/// image and never has more than one call outstanding. Failures must be
/// reported through the typed `PagescribeError` kinds (`Configuration`,
/// `Input`, `Transport`, `Response`, `Processing`) so the caller can choose
/// between aborting and substituting a placeholder.
#[async_trait]
pub trait OcrClient: Send + Sync {
    /// Recognise the text in one encoded image.
    async fn extract_text(&self, image: &[u8]) -> Result<OcrOutput>;
}

#[async_trait]
impl<T: OcrClient + ?Sized> OcrClient for Arc<T> {
    async fn extract_text(&self, image: &[u8]) -> Result<OcrOutput> {
        (**self).extract_text(image).await
    }
}

#[async_trait]
impl<T: OcrClient + ?Sized> OcrClient for Box<T> {
    async fn extract_text(&self, image: &[u8]) -> Result<OcrOutput> {
        (**self).extract_text(image).await
    }
}
