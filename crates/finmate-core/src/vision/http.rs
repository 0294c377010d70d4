//! HTTP vision backend implementation
//!
//! Client for a Donut-style inference server. The image travels base64
//! encoded; the server answers with the raw tagged sequence the extraction
//! pipeline consumes.

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

use super::VisionBackend;

const DEFAULT_MODEL: &str = "donut-cord-v2";

/// HTTP client for a hosted vision inference server
pub struct HttpVisionBackend {
    http_client: Client,
    base_url: String,
    model: String,
}

impl Clone for HttpVisionBackend {
    fn clone(&self) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
        }
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    model: &'a str,
    /// Base64-encoded image bytes
    image: String,
}

#[derive(Deserialize)]
struct InferenceResponse {
    /// Raw tagged sequence from the model
    sequence: String,
}

impl HttpVisionBackend {
    /// Create a new HTTP vision backend
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("VISION_HOST").ok()?;
        let model = std::env::var("VISION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Some(Self::new(&host, &model))
    }

    /// Get the host URL (for logging)
    pub fn host(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl VisionBackend for HttpVisionBackend {
    async fn read_receipt(&self, image: &[u8]) -> Result<String> {
        let url = format!("{}/api/inference", self.base_url);
        let request = InferenceRequest {
            model: &self.model,
            image: base64::engine::general_purpose::STANDARD.encode(image),
        };

        debug!(url = %url, model = %self.model, bytes = image.len(), "vision inference request");

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Vision(format!(
                "Inference server returned {}: {}",
                status, body
            )));
        }

        let body: InferenceResponse = response.json().await?;
        debug!(len = body.sequence.len(), "vision inference response");
        Ok(body.sequence)
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);
        match self.http_client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}
