// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer. Loads settings and builds the backend objects the
// commands need.
//
// Two views of the config are kept: what is on disk, and what is in effect
// once environment overrides are applied. Only the former is ever written
// back, so a key supplied through the environment never lands in the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pagescribe_core::AppConfig;
use pagescribe_core::config::{API_KEY_ENV, MODEL_ID_ENV};
use pagescribe_core::error::{PagescribeError, Result};
use pagescribe_ocr::{NanonetsClient, NanonetsConfig};
use tracing::{debug, info, warn};

use super::data_dir;

const CONFIG_FILE: &str = "config.json";

pub struct AppServices {
    data_dir: PathBuf,
    stored: AppConfig,
    overrides: HashMap<&'static str, String>,
    effective: AppConfig,
}

impl AppServices {
    /// Load settings from the platform data directory.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir()?;
        Self::open(dir, |name| std::env::var(name).ok())
    }

    /// Load settings from `dir`, applying overrides from `env`.
    pub fn open(dir: PathBuf, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        info!(path = %dir.display(), "loading settings");
        let stored = load_config(&dir)?.unwrap_or_default();
        let overrides: HashMap<&'static str, String> = [API_KEY_ENV, MODEL_ID_ENV]
            .into_iter()
            .filter_map(|name| env(name).map(|value| (name, value)))
            .collect();
        let effective = apply(&stored, &overrides);
        Ok(Self {
            data_dir: dir,
            stored,
            overrides,
            effective,
        })
    }

    /// Settings in effect for this run.
    pub fn config(&self) -> &AppConfig {
        &self.effective
    }

    /// Apply `edit` to the persisted settings and write them out.
    pub fn update_config(&mut self, edit: impl FnOnce(&mut AppConfig)) -> Result<()> {
        edit(&mut self.stored);
        self.effective = apply(&self.stored, &self.overrides);
        persist_config(&self.data_dir, &self.stored)
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    /// Build the OCR client from the effective settings.
    pub fn ocr_client(&self) -> Result<NanonetsClient> {
        let config = NanonetsConfig::from_app_config(&self.effective);
        if let Err(e) = config.validate() {
            warn!(error = %e, "OCR service not fully configured");
        }
        NanonetsClient::new(config)
    }
}

fn apply(stored: &AppConfig, overrides: &HashMap<&'static str, String>) -> AppConfig {
    stored
        .clone()
        .with_env_overrides(|name| overrides.get(name).cloned())
}

/// Read image files in the order given.
pub fn read_images(paths: &[PathBuf]) -> Result<Vec<Vec<u8>>> {
    paths
        .iter()
        .map(|path| {
            debug!(path = %path.display(), "reading image");
            std::fs::read(path)
                .map_err(|e| PagescribeError::Input(format!("{}: {e}", path.display())))
        })
        .collect()
}

// -- Config persistence (JSON file in data dir) --

fn load_config(data_dir: &Path) -> Result<Option<AppConfig>> {
    let path = data_dir.join(CONFIG_FILE);
    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&data)?))
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    info!(path = %path.display(), "settings saved");
    Ok(())
}
