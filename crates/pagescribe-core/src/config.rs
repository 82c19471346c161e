// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

use crate::ExportFormat;

/// Default base URL of the Nanonets OCR service.
pub const DEFAULT_SERVICE_URL: &str = "https://app.nanonets.com";

/// Environment variable that overrides the persisted API key.
pub const API_KEY_ENV: &str = "PAGESCRIBE_API_KEY";

/// Environment variable that overrides the persisted model id.
pub const MODEL_ID_ENV: &str = "PAGESCRIBE_MODEL_ID";

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// OCR service API key, sent as the basic-auth user name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// OCR model the images are submitted to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    /// Base URL of the OCR service.
    pub service_url: String,
    /// Per-request transport timeout.
    pub request_timeout_secs: u64,
    /// Format used by exports unless overridden on the command line.
    pub export_format: ExportFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model_id: None,
            service_url: DEFAULT_SERVICE_URL.into(),
            request_timeout_secs: 30,
            export_format: ExportFormat::Markdown,
        }
    }
}

impl AppConfig {
    /// Apply overrides from an environment lookup.
    ///
    /// Blank values are ignored so an exported-but-empty variable does not
    /// wipe a persisted key.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup(MODEL_ID_ENV).filter(|v| !v.trim().is_empty()) {
            self.model_id = Some(model);
        }
        self
    }

    /// Whether an API key is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}
