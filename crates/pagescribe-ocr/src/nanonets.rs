// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Nanonets OCR client.
//
// Each image is uploaded as a multipart `file` field to
//
//     {service_url}/api/v2/OCR/Model/{model_id}/LabelFile/
//
// with HTTP basic auth (API key as the user name, empty password). The JSON
// response is interpreted by `crate::response`.
//
// There is no retry and no timeout wrapper here: the reqwest client's own
// request timeout applies, and a timed-out request surfaces as a
// `Transport` error like any other network failure.

use std::time::Duration;

use async_trait::async_trait;
use pagescribe_core::AppConfig;
use pagescribe_core::config::DEFAULT_SERVICE_URL;
use pagescribe_core::error::{PagescribeError, Result};
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, instrument, warn};

use crate::client::{OcrClient, OcrOutput};
use crate::{payload, response};

/// Multipart field the image is sent in.
const FILE_FIELD: &str = "file";
/// File name attached to the uploaded part.
const UPLOAD_FILENAME: &str = "image.jpg";
/// Longest slice of an error body quoted back in a `Response` error.
const ERROR_BODY_PREVIEW: usize = 200;

/// Configuration for constructing a [`NanonetsClient`].
#[derive(Debug, Clone)]
pub struct NanonetsConfig {
    /// Base URL of the service, without a trailing slash.
    pub service_url: String,
    /// Model the images are submitted to.
    pub model_id: Option<String>,
    /// API key used for basic auth.
    pub api_key: Option<String>,
    /// Transport timeout per request.
    pub timeout: Duration,
}

impl Default for NanonetsConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.into(),
            model_id: None,
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl NanonetsConfig {
    /// Build the client configuration from the application settings.
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            service_url: config.service_url.trim_end_matches('/').to_owned(),
            model_id: config.model_id.clone(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs.max(1)),
        }
    }

    /// The configured API key.
    ///
    /// # Errors
    ///
    /// Returns [`PagescribeError::Configuration`] if the key is absent or blank.
    pub fn api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(PagescribeError::Configuration(
                "API key is missing; set it with `pagescribe config set-key`".into(),
            )),
        }
    }

    /// Full upload URL for the configured model.
    ///
    /// # Errors
    ///
    /// Returns [`PagescribeError::Configuration`] if no model id is set.
    pub fn endpoint(&self) -> Result<String> {
        let model_id = match self.model_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(PagescribeError::Configuration(
                    "model id is missing; set it with `pagescribe config set-model`".into(),
                ));
            }
        };
        Ok(format!(
            "{}/api/v2/OCR/Model/{}/LabelFile/",
            self.service_url.trim_end_matches('/'),
            model_id
        ))
    }

    /// Check that both the API key and the model id are present.
    pub fn validate(&self) -> Result<()> {
        self.api_key()?;
        self.endpoint()?;
        Ok(())
    }
}

/// OCR client backed by the Nanonets HTTP API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NanonetsClient {
    http: reqwest::Client,
    config: NanonetsConfig,
}

impl NanonetsClient {
    /// Create a client. Credentials are not checked until the first call,
    /// so a best-effort batch still completes when they are missing.
    ///
    /// # Errors
    ///
    /// Returns [`PagescribeError::Configuration`] if the HTTP client cannot
    /// be built (for example when no TLS backend is available).
    pub fn new(config: NanonetsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PagescribeError::Configuration(format!("HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &NanonetsConfig {
        &self.config
    }
}

#[async_trait]
impl OcrClient for NanonetsClient {
    #[instrument(skip_all, fields(image_len = image.len()))]
    async fn extract_text(&self, image: &[u8]) -> Result<OcrOutput> {
        let api_key = self.config.api_key()?;
        let url = self.config.endpoint()?;
        let jpeg = payload::prepare_jpeg(image)?;

        let part = Part::bytes(jpeg)
            .file_name(UPLOAD_FILENAME)
            .mime_str("image/jpeg")
            .map_err(|e| PagescribeError::Input(format!("multipart part: {e}")))?;
        let form = Form::new().part(FILE_FIELD, part);

        debug!(%url, "submitting image for OCR");
        let resp = self
            .http
            .post(&url)
            .basic_auth(api_key, None::<&str>)
            .multipart(form)
            .send()
            .await
            .map_err(PagescribeError::transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            warn!(%status, "OCR service rejected the request");
            return Err(PagescribeError::Response(format!("HTTP {status}: {preview}")));
        }

        let body = resp.bytes().await.map_err(PagescribeError::transport)?;
        let output = response::interpret(&body)?;

        info!(
            chars = output.text.chars().count(),
            lines = output.text.lines().count(),
            confidence = ?output.confidence,
            "OCR complete"
        );
        Ok(output)
    }
}
