//! Pluggable vision backend abstraction
//!
//! The receipt model (a Donut-style vision-to-text model) runs outside this
//! process. This module defines the capability the extractor is handed
//! instead of touching any process-wide model state:
//!
//! - `VisionBackend` trait: one inference operation plus health metadata
//! - `VisionClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Backend implementations: `HttpVisionBackend`, `MockVisionBackend`
//!
//! # Configuration
//!
//! Environment variables:
//! - `VISION_BACKEND`: Backend to use (http, mock). Default: http
//! - `VISION_HOST`: Inference server URL (required for http backend)
//! - `VISION_MODEL`: Model name (default: donut-cord-v2)

mod http;
mod mock;

pub use http::HttpVisionBackend;
pub use mock::MockVisionBackend;

use async_trait::async_trait;

use crate::error::Result;

/// Trait defining the interface for vision backends
///
/// Backends must be Send + Sync to allow use across async tasks.
#[async_trait]
pub trait VisionBackend: Send + Sync {
    /// Run inference on a receipt image, returning the raw tagged sequence
    async fn read_receipt(&self, image: &[u8]) -> Result<String>;

    /// Check if the backend is available
    async fn health_check(&self) -> bool;

    /// Get the model name (for logging)
    fn model(&self) -> &str;
}

/// Concrete vision client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum VisionClient {
    /// HTTP inference server backend
    Http(HttpVisionBackend),
    /// Mock backend for testing
    Mock(MockVisionBackend),
}

impl VisionClient {
    /// Create a vision client from environment variables
    ///
    /// Checks `VISION_BACKEND` to determine which backend to use:
    /// - `http` (default): Uses VISION_HOST and VISION_MODEL
    /// - `mock`: Creates a mock backend for testing
    ///
    /// Returns None if the required environment variables are not set.
    pub fn from_env() -> Option<Self> {
        let backend = std::env::var("VISION_BACKEND").unwrap_or_else(|_| "http".to_string());

        match backend.to_lowercase().as_str() {
            "http" => HttpVisionBackend::from_env().map(VisionClient::Http),
            "mock" => Some(VisionClient::Mock(MockVisionBackend::new())),
            _ => {
                tracing::warn!(backend = %backend, "Unknown VISION_BACKEND, falling back to http");
                HttpVisionBackend::from_env().map(VisionClient::Http)
            }
        }
    }

    /// Create an HTTP backend directly
    pub fn http(host: &str, model: &str) -> Self {
        VisionClient::Http(HttpVisionBackend::new(host, model))
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        VisionClient::Mock(MockVisionBackend::new())
    }
}

#[async_trait]
impl VisionBackend for VisionClient {
    async fn read_receipt(&self, image: &[u8]) -> Result<String> {
        match self {
            VisionClient::Http(b) => b.read_receipt(image).await,
            VisionClient::Mock(b) => b.read_receipt(image).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            VisionClient::Http(b) => b.health_check().await,
            VisionClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            VisionClient::Http(b) => b.model(),
            VisionClient::Mock(b) => b.model(),
        }
    }
}
