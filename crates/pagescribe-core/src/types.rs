// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Pagescribe capture-to-text pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a captured image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(pub Uuid);

impl ImageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a processed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(pub Uuid);

impl PageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A page image as it came off the camera or out of the photo library.
///
/// Immutable once created. The capture session owns it until the pipeline
/// has consumed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedImage {
    id: ImageId,
    bytes: Vec<u8>,
    captured_at: DateTime<Utc>,
}

impl CapturedImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            id: ImageId::new(),
            bytes,
            captured_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

/// A page of recognised text produced by one pipeline run.
///
/// `id` and `source_image` are fixed at construction; only the filename,
/// text and edited flag change afterwards, and only through the page store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    id: PageId,
    source_image: ImageId,
    pub suggested_filename: String,
    pub text: String,
    /// Set on the first user edit and never cleared.
    pub edited: bool,
}

impl Page {
    pub fn new(source_image: ImageId, suggested_filename: String, text: String) -> Self {
        Self {
            id: PageId::new(),
            source_image,
            suggested_filename,
            text,
            edited: false,
        }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    /// The captured image this page was recognised from.
    pub fn source_image(&self) -> ImageId {
        self.source_image
    }
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    #[default]
    Markdown,
    PlainText,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [Self::Markdown, Self::PlainText];

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::PlainText => "txt",
        }
    }

    /// Name shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Markdown => "Markdown",
            Self::PlainText => "Plain Text",
        }
    }

    /// MIME type handed to the share sheet.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Markdown => "text/markdown",
            Self::PlainText => "text/plain",
        }
    }

    /// Parse a user-supplied format name or extension.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Some(Self::Markdown),
            "plain-text" | "plaintext" | "plain" | "text" | "txt" => Some(Self::PlainText),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Phases of the capture-to-export workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipelineStage {
    #[default]
    Idle,
    Capturing,
    ReadyToProcess,
    Processing,
    Reviewing,
    Exported,
}

impl PipelineStage {
    /// Whether the workflow may move from `self` to `next`.
    ///
    /// `Idle` is reachable from everywhere (reset). Staying in the same
    /// stage is allowed for the stages that accept repeated actions.
    pub fn can_transition_to(self, next: PipelineStage) -> bool {
        use PipelineStage::*;
        matches!(
            (self, next),
            (_, Idle)
                | (Idle, Capturing)
                | (Capturing, Capturing)
                | (Capturing, ReadyToProcess)
                | (ReadyToProcess, Capturing)
                | (ReadyToProcess, Processing)
                | (Processing, Reviewing)
                | (Processing, ReadyToProcess)
                | (Reviewing, Reviewing)
                | (Reviewing, Exported)
                | (Exported, Exported)
                | (Exported, Reviewing)
        )
    }

    /// Stages in which pages exist and may be edited or exported.
    pub fn has_pages(self) -> bool {
        matches!(self, Self::Reviewing | Self::Exported)
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Idle => "idle",
            Self::Capturing => "capturing",
            Self::ReadyToProcess => "ready",
            Self::Processing => "processing",
            Self::Reviewing => "reviewing",
            Self::Exported => "exported",
        };
        f.write_str(tag)
    }
}

/// Progress of the current processing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineProgress {
    pub stage: PipelineStage,
    /// Fraction of the batch recognised so far, in `[0, 1]`.
    pub fraction: f64,
}

impl PipelineProgress {
    pub fn new(stage: PipelineStage, fraction: f64) -> Self {
        Self {
            stage,
            fraction: fraction.clamp(0.0, 1.0),
        }
    }

    /// Whole-number percentage for display.
    pub fn percent(&self) -> u8 {
        (self.fraction * 100.0).round() as u8
    }
}

/// How a batch run reacts to a failed OCR call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessingMode {
    /// Abort the run on the first failure; nothing is kept.
    #[default]
    Strict,
    /// Substitute an empty "Untitled {n}" page for a failure and carry on.
    BestEffort,
}
