// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::PathBuf;

use pagescribe_core::error::Result;

const APP_DIR: &str = "pagescribe";

/// Return the application data directory, creating it if needed.
pub fn data_dir() -> Result<PathBuf> {
    let dir = resolve(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    );
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// `$XDG_DATA_HOME/pagescribe`, else `~/.local/share/pagescribe`.
fn resolve(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    let base = match (xdg_data_home, home) {
        (Some(xdg), _) if !xdg.as_os_str().is_empty() => xdg,
        (_, Some(home)) => home.join(".local").join("share"),
        // Last resort
        _ => std::env::temp_dir(),
    };
    base.join(APP_DIR)
}
