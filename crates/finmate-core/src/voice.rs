//! Voice-entry transaction parsing
//!
//! The voice flow is: audio -> external transcription -> external LLM prompt
//! -> free-text reply containing a JSON object. Only the last hop lives
//! here: pulling the JSON out of the reply (models routinely wrap it in
//! prose) and validating the parsed transaction.

use crate::error::{Error, Result};
use crate::models::SpokenTransaction;

/// Byte budget for raw model text echoed into error messages
const RAW_TEXT_LIMIT: usize = 200;

/// Truncate raw model text for an error message.
///
/// The cut must land on a char boundary: replies are routinely Indonesian
/// text or emoji, and a fixed byte index would panic mid-character.
fn truncate_raw(text: &str) -> String {
    if text.len() <= RAW_TEXT_LIMIT {
        return text.to_string();
    }
    let mut end = RAW_TEXT_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// Parse an LLM reply into a spoken transaction.
///
/// Finds the first `{` .. last `}` span and deserializes it. Rejects replies
/// with no JSON object and transactions whose amount is not positive, since
/// a zero-amount voice entry means the model failed to hear a number.
pub fn parse_spoken_transaction(response: &str) -> Result<SpokenTransaction> {
    let response = response.trim();
    let start = response.find('{');
    let end = response.rfind('}');

    let parsed: SpokenTransaction = match (start, end) {
        (Some(s), Some(e)) if s < e => {
            let json_str = &response[s..=e];
            serde_json::from_str(json_str).map_err(|e| {
                Error::InvalidData(format!(
                    "Invalid JSON from LLM: {} | Raw: {}",
                    e,
                    truncate_raw(json_str)
                ))
            })?
        }
        _ => {
            return Err(Error::InvalidData(format!(
                "No JSON found in LLM response | Raw: {}",
                truncate_raw(response)
            )))
        }
    };

    if parsed.amount <= 0.0 {
        return Err(Error::InvalidData(format!(
            "Amount not found or not positive: {}",
            parsed.amount
        )));
    }

    Ok(parsed)
}
