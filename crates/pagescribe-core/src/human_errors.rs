// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The user-facing surface only ever shows this pair; the variant itself is
// not exposed.

use crate::error::PagescribeError;

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
}

impl HumanError {
    fn new(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.message, self.suggestion)
    }
}

/// Convert a `PagescribeError` into a `HumanError`.
pub fn humanize_error(err: &PagescribeError) -> HumanError {
    match err {
        // -- OCR client --
        PagescribeError::Configuration(detail) => HumanError::new(
            "Text recognition isn't set up yet.",
            format!("Add your OCR API key and model id in the settings, then try again. ({detail})"),
        ),

        PagescribeError::Input(_) => HumanError::new(
            "One of the pictures couldn't be read.",
            "The image may be damaged or in an unusual format. Try taking the photo again.",
        ),

        PagescribeError::Transport(_) => HumanError::new(
            "We couldn't reach the text recognition service.",
            "Check your internet connection, then try again.",
        ),

        PagescribeError::Response(_) => HumanError::new(
            "The text recognition service sent back something unexpected.",
            "Check that your API key and model id are correct, then try again.",
        ),

        PagescribeError::Processing(detail) => HumanError::new(
            "The text recognition service couldn't read this page.",
            format!("Try again with a clearer, well-lit photo. ({detail})"),
        ),

        // -- Pages --
        PagescribeError::PageNotFound(_) | PagescribeError::ImageNotFound(_) => HumanError::new(
            "That item no longer exists.",
            "It may already have been deleted. Refresh the list and try again.",
        ),

        PagescribeError::DuplicatePage(_) => HumanError::new(
            "That page is already in the list.",
            "Try again. If this keeps happening, please report it.",
        ),

        PagescribeError::InvalidTransition { from, to } => HumanError::new(
            "That action isn't available right now.",
            format!("Finish the current step first (currently {from}, tried {to})."),
        ),

        PagescribeError::NothingToProcess => HumanError::new(
            "There are no pictures to process.",
            "Capture or choose at least one page first.",
        ),

        // -- Export --
        PagescribeError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => HumanError::new(
                "The folder couldn't be found.",
                "It may have been moved or deleted. Try choosing the folder again.",
            ),
            std::io::ErrorKind::PermissionDenied => HumanError::new(
                "The app doesn't have permission to write there.",
                "Choose a different folder, or check its permissions.",
            ),
            _ => HumanError::new(
                "There was a problem saving the files.",
                "Files saved before the problem are still there. Try again; if this keeps happening, your storage may be full.",
            ),
        },

        PagescribeError::Serialization(_) => HumanError::new(
            "The settings file couldn't be read.",
            "Try saving your settings again. If this keeps happening, please report it.",
        ),

        // -- Platform --
        PagescribeError::Bridge(_) => HumanError::new(
            "A device-specific feature didn't work.",
            "Try again. Some features may not be available on all devices.",
        ),

        PagescribeError::PlatformUnavailable => HumanError::new(
            "This feature isn't available on your device.",
            "Save the pages to a folder instead.",
        ),
    }
}
