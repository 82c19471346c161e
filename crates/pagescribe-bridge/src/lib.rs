// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pagescribe — Native platform bridge abstractions.
//
// Defines the collaborator traits the core calls out to (camera, photo
// library, clipboard, share sheet) and the implementations available in
// this build: the desktop bridge and an in-memory bridge for tests and
// headless use.

pub mod desktop;
pub mod memory;
pub mod traits;

pub use desktop::DesktopBridge;
pub use memory::MemoryBridge;
pub use traits::*;

/// The bridge implementation for the running platform.
pub fn platform_bridge() -> impl PlatformBridge + Send + Sync {
    DesktopBridge
}
