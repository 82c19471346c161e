// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Pagescribe.

use thiserror::Error;

use crate::types::{ImageId, PageId, PipelineStage};

/// Boxed cause carried by transport failures.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Pagescribe operations.
#[derive(Debug, Error)]
pub enum PagescribeError {
    // -- OCR client errors --
    #[error("OCR service is not configured: {0}")]
    Configuration(String),

    #[error("invalid image payload: {0}")]
    Input(String),

    #[error("network error: {0}")]
    Transport(#[source] BoxedCause),

    #[error("invalid response from OCR service: {0}")]
    Response(String),

    #[error("OCR processing failed: {0}")]
    Processing(String),

    // -- Page and image collections --
    #[error("no page with id {0}")]
    PageNotFound(PageId),

    #[error("page {0} is already in the store")]
    DuplicatePage(PageId),

    #[error("no captured image with id {0}")]
    ImageNotFound(ImageId),

    // -- Session state machine --
    #[error("cannot move from {from} to {to}")]
    InvalidTransition {
        from: PipelineStage,
        to: PipelineStage,
    },

    #[error("no images have been captured")]
    NothingToProcess,

    // -- Export / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

impl PagescribeError {
    /// Wrap any error as a transport failure, keeping it as the source.
    pub fn transport(cause: impl Into<BoxedCause>) -> Self {
        Self::Transport(cause.into())
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PagescribeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn transport_keeps_its_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline elapsed");
        let err = PagescribeError::transport(io);
        assert_eq!(err.to_string(), "network error: deadline elapsed");
        let source = err.source().expect("transport error has a source");
        assert_eq!(source.to_string(), "deadline elapsed");
    }

    #[test]
    fn transition_error_names_both_stages() {
        let err = PagescribeError::InvalidTransition {
            from: PipelineStage::Idle,
            to: PipelineStage::Exported,
        };
        assert_eq!(err.to_string(), "cannot move from idle to exported");
    }
}
