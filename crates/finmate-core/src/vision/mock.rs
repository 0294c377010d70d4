//! Mock vision backend for testing
//!
//! Returns a canned sequence (or a canned failure) without a running
//! inference server.

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::VisionBackend;

const DEFAULT_SEQUENCE: &str = "<s_store_name> INDOMARET<s_menu><s_nm>AQUA 600ML<s_cnt>2<s_price>6.000<sep/><s_nm>ROTI TAWAR<s_price>14.500</s_menu><s_total><s_total_price>20.500</s_total>";

/// Mock vision backend
///
/// Healthy by default; configure with a canned sequence or an error message
/// for failure-path tests.
#[derive(Clone)]
pub struct MockVisionBackend {
    sequence: String,
    failure: Option<String>,
    healthy: bool,
}

impl Default for MockVisionBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockVisionBackend {
    /// Create a healthy mock returning a fixed grocery receipt sequence
    pub fn new() -> Self {
        Self {
            sequence: DEFAULT_SEQUENCE.to_string(),
            failure: None,
            healthy: true,
        }
    }

    /// Create a mock returning the given sequence
    pub fn with_sequence(sequence: &str) -> Self {
        Self {
            sequence: sequence.to_string(),
            failure: None,
            healthy: true,
        }
    }

    /// Create a mock whose inference always fails with the given message
    pub fn failing(message: &str) -> Self {
        Self {
            sequence: String::new(),
            failure: Some(message.to_string()),
            healthy: false,
        }
    }
}

#[async_trait]
impl VisionBackend for MockVisionBackend {
    async fn read_receipt(&self, _image: &[u8]) -> Result<String> {
        match &self.failure {
            Some(msg) => Err(Error::Vision(msg.clone())),
            None => Ok(self.sequence.clone()),
        }
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }
}
