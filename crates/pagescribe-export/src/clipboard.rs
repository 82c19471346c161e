// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Clipboard text assembly.

use pagescribe_core::types::{ExportFormat, Page};

use crate::format::page_content;

/// Separator placed between pages when all of them are copied at once.
pub const CLIPBOARD_SEPARATOR: &str = "\n\n---\n\n";

/// Every page rendered for `format`, in order, joined by
/// [`CLIPBOARD_SEPARATOR`].
pub fn combined_content(pages: &[Page], format: ExportFormat) -> String {
    pages
        .iter()
        .map(|page| page_content(page, format))
        .collect::<Vec<_>>()
        .join(CLIPBOARD_SEPARATOR)
}
