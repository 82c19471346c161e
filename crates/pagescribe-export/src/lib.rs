// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pagescribe-export — Serialising pages for export.
//
// Renders page text as Markdown or plain text, derives output file names,
// writes one file per page into a folder (or a fresh temporary folder for
// sharing) without overwriting anything, and assembles clipboard text.

pub mod clipboard;
pub mod format;
pub mod naming;
pub mod writer;

pub use clipboard::{CLIPBOARD_SEPARATOR, combined_content};
pub use format::{page_content, render};
pub use naming::target_name;
pub use writer::FolderExporter;
