// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pagescribe — Capture-to-text pipeline.
//
// Names recognised pages, keeps the captured images and processed pages in
// order, drives the OCR client over a batch and ties it all together in a
// stage-checked session.

pub mod naming;
pub mod orchestrator;
pub mod session;
pub mod store;

#[cfg(test)]
mod testing;

pub use naming::{sanitize, suggest_name, suggest_name_on};
pub use orchestrator::{Pipeline, RunOutcome};
pub use session::Session;
pub use store::{CaptureStore, PageStore};
