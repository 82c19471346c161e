// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pagescribe-ocr — Text recognition for Pagescribe.
//
// Defines the `OcrClient` contract the pipeline consumes, and the Nanonets
// HTTP client that implements it: payload preparation (re-encode to JPEG),
// multipart upload with basic auth, and response interpretation.

pub mod client;
pub mod nanonets;
pub mod payload;
pub mod response;

// Re-export the primary types so callers can use `pagescribe_ocr::OcrClient` etc.
pub use client::{OcrClient, OcrOutput};
pub use nanonets::{NanonetsClient, NanonetsConfig};
