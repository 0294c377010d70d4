//! Receipt field extraction orchestrator
//!
//! Composes the tagged-sequence parser, the numeric normalizer, and the
//! category classifier into the one operation callers see. This is also the
//! single boundary where failures become a well-formed degraded result:
//! callers always receive an `ExtractedResult`, never an `Err`.

use tracing::{debug, error, warn};

use crate::models::ExtractedResult;
use crate::vision::{VisionBackend, VisionClient};

use super::category::classify;
use super::numeric::resolve_total;
use super::parser::parse_sequence;

/// Store-name fallback in the note template
const UNKNOWN_STORE: &str = "Toko tidak diketahui";

/// Receipt extractor with an optionally configured vision backend
///
/// The vision model is injected rather than loaded as process-wide state, so
/// the pure pipeline stays testable without inference infrastructure.
pub struct ReceiptExtractor {
    vision: Option<VisionClient>,
}

impl ReceiptExtractor {
    /// Create an extractor with the given vision backend (None disables
    /// image extraction; sequence extraction still works)
    pub fn new(vision: Option<VisionClient>) -> Self {
        Self { vision }
    }

    /// Create from environment variables (see [`VisionClient::from_env`])
    pub fn from_env() -> Self {
        Self::new(VisionClient::from_env())
    }

    /// Whether a vision backend is configured
    pub fn has_vision(&self) -> bool {
        self.vision.is_some()
    }

    /// Run the pure extraction pipeline over a raw tagged sequence.
    ///
    /// Total function: partial or garbage model output degrades field by
    /// field (empty items, 0.0 total, `lainnya`), it does not fail.
    pub fn extract_sequence(&self, raw: &str) -> ExtractedResult {
        let parsed = parse_sequence(raw);
        let total = resolve_total(&parsed);
        let category = classify(&parsed);

        if total <= 0.0 {
            warn!(store = %parsed.store_name, "extracted total is zero");
        }

        let store = if parsed.store_name.is_empty() {
            UNKNOWN_STORE
        } else {
            parsed.store_name.as_str()
        };

        debug!(%store, total, category = %category, "receipt extracted");

        ExtractedResult {
            error: None,
            total,
            category,
            date: parsed.date.clone(),
            note: format!("OCR dari struk - {}", store),
            items: parsed.items.clone(),
            raw_ocr: raw.to_string(),
            parsed_data: Some(parsed),
        }
    }

    /// Run vision inference on a receipt image, then the extraction pipeline.
    ///
    /// Failures never propagate: a missing backend or a failed inference
    /// both come back as the degraded result shape with `error` populated.
    pub async fn extract_image(&self, image: &[u8]) -> ExtractedResult {
        let Some(vision) = &self.vision else {
            warn!("no vision backend configured, returning degraded result");
            return ExtractedResult::degraded("Model not available", "OCR model tidak tersedia");
        };

        match vision.read_receipt(image).await {
            Ok(sequence) => self.extract_sequence(&sequence),
            Err(e) => {
                error!(model = %vision.model(), error = %e, "vision inference failed");
                ExtractedResult::degraded(e.to_string(), format!("Gagal memproses struk: {}", e))
            }
        }
    }
}
