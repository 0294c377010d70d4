//! Domain models for FinMate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Spending categories recognized by the classifier
///
/// Category names follow the mobile app's Indonesian vocabulary and are
/// serialized as the lowercase word the datastore expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Shopping (groceries, supermarkets, minimarts)
    Belanja,
    /// Food and drink
    Makanan,
    /// Transport (fuel stations)
    Transportasi,
    /// Health (pharmacies, hospitals)
    Kesehatan,
    /// Everything else
    #[default]
    Lainnya,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Belanja => "belanja",
            Self::Makanan => "makanan",
            Self::Transportasi => "transportasi",
            Self::Kesehatan => "kesehatan",
            Self::Lainnya => "lainnya",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "belanja" => Ok(Self::Belanja),
            "makanan" => Ok(Self::Makanan),
            "transportasi" => Ok(Self::Transportasi),
            "kesehatan" => Ok(Self::Kesehatan),
            "lainnya" => Ok(Self::Lainnya),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A line item captured from a receipt's menu region
///
/// Price fields stay raw substrings here; normalization is locale-sensitive
/// and deferred to a single place (`receipt::numeric`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    #[serde(default)]
    pub unit_price: Option<String>,
    /// Raw count substring, `"1"` when the receipt omits it
    #[serde(default = "default_count")]
    pub count: String,
    #[serde(default)]
    pub price: Option<String>,
}

fn default_count() -> String {
    "1".to_string()
}

impl LineItem {
    /// Build an item from captured substrings.
    ///
    /// Returns `None` when the name capture is empty: items without a name
    /// are dropped at construction, not by a later filter pass.
    pub fn from_captures(
        name: Option<String>,
        unit_price: Option<String>,
        count: Option<String>,
        price: Option<String>,
    ) -> Option<Self> {
        let name = name.filter(|n| !n.is_empty())?;
        Some(Self {
            name,
            unit_price,
            count: count.unwrap_or_else(default_count),
            price,
        })
    }
}

/// Intermediate record produced by the tagged-sequence parser
///
/// Monetary fields are kept as the raw extracted substrings until the
/// normalizer resolves them into a single total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedReceipt {
    /// Store name, empty when the marker is missing
    pub store_name: String,
    pub items: Vec<LineItem>,
    pub subtotal: Option<String>,
    pub tax: Option<String>,
    pub service_charge: Option<String>,
    pub discount: Option<String>,
    pub total: Option<String>,
    /// First date-pattern match anywhere in the sequence
    pub date: Option<String>,
    /// The full model output, kept verbatim for downstream scanning
    pub raw_sequence: String,
}

/// Final extraction output handed to the transaction-persistence collaborator
///
/// Always well-formed: a failed extraction is signaled by a non-empty
/// `error`, never by a missing or malformed record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedResult {
    /// Populated only for degraded results (model unavailable, pipeline failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub total: f64,
    pub category: Category,
    pub date: Option<String>,
    pub note: String,
    pub items: Vec<LineItem>,
    pub raw_ocr: String,
    /// Absent in the degraded shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_data: Option<ParsedReceipt>,
}

impl ExtractedResult {
    /// Degraded result shape: extraction could not run or blew up.
    ///
    /// `total` is 0.0 and `category` is `lainnya` so callers can persist the
    /// record unchanged and let the user correct it.
    pub fn degraded(error: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            total: 0.0,
            category: Category::Lainnya,
            date: None,
            note: note.into(),
            items: Vec::new(),
            raw_ocr: String::new(),
            parsed_data: None,
        }
    }

    /// Whether this result carries a degradation marker
    pub fn is_degraded(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }
}

/// A transaction parsed from a spoken sentence by the LLM
///
/// The LLM is prompted for exactly these fields; defaults cover the cases
/// where it omits one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpokenTransaction {
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub note: Option<String>,
}

fn default_type() -> String {
    "expense".to_string()
}

fn default_category() -> String {
    "lainnya".to_string()
}

/// The wire shape the persistence collaborator accepts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    /// Entry method: "ocr" for receipt scans, "voice" for spoken entries
    pub method: String,
    pub note: String,
    /// ISO date string; falls back to `today` when the source had none
    pub transaction_date: String,
}

impl NewTransaction {
    /// Map a receipt extraction to a transaction draft.
    ///
    /// Receipt scans are always expenses. The receipt date is used verbatim
    /// when present (it is pattern-matched, not calendar-validated).
    pub fn from_receipt(result: &ExtractedResult, today: NaiveDate) -> Self {
        Self {
            amount: result.total,
            kind: "expense".to_string(),
            category: result.category.to_string(),
            method: "ocr".to_string(),
            note: result.note.clone(),
            transaction_date: result
                .date
                .clone()
                .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
        }
    }

    /// Map a spoken-entry parse to a transaction draft.
    ///
    /// Voice entries always date to today; the note falls back to the raw
    /// transcript when the LLM returned none.
    pub fn from_spoken(parsed: &SpokenTransaction, transcript: &str, today: NaiveDate) -> Self {
        Self {
            amount: parsed.amount,
            kind: parsed.kind.clone(),
            category: parsed.category.clone(),
            method: "voice".to_string(),
            note: parsed
                .note
                .clone()
                .unwrap_or_else(|| transcript.to_string()),
            transaction_date: today.format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for cat in [
            Category::Belanja,
            Category::Makanan,
            Category::Transportasi,
            Category::Kesehatan,
            Category::Lainnya,
        ] {
            let parsed: Category = cat.as_str().parse().unwrap();
            assert_eq!(parsed, cat);
        }
        assert!("groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Makanan).unwrap();
        assert_eq!(json, "\"makanan\"");
    }

    #[test]
    fn test_line_item_requires_name() {
        assert!(LineItem::from_captures(None, None, None, None).is_none());
        assert!(LineItem::from_captures(Some(String::new()), None, None, None).is_none());

        let item = LineItem::from_captures(
            Some("Nasi Goreng".to_string()),
            None,
            None,
            Some("25.000".to_string()),
        )
        .unwrap();
        assert_eq!(item.count, "1");
        assert_eq!(item.price.as_deref(), Some("25.000"));
    }

    #[test]
    fn test_from_receipt_falls_back_to_today() {
        let result = ExtractedResult {
            error: None,
            total: 42000.0,
            category: Category::Makanan,
            date: None,
            note: "OCR dari struk - Warung Tegal".to_string(),
            items: Vec::new(),
            raw_ocr: String::new(),
            parsed_data: None,
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let tx = NewTransaction::from_receipt(&result, today);
        assert_eq!(tx.transaction_date, "2024-03-15");
        assert_eq!(tx.kind, "expense");
        assert_eq!(tx.method, "ocr");
        assert_eq!(tx.category, "makanan");
    }

    #[test]
    fn test_from_receipt_keeps_receipt_date() {
        let result = ExtractedResult {
            error: None,
            total: 10.0,
            category: Category::Lainnya,
            date: Some("12.03.2024".to_string()),
            note: String::new(),
            items: Vec::new(),
            raw_ocr: String::new(),
            parsed_data: None,
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let tx = NewTransaction::from_receipt(&result, today);
        assert_eq!(tx.transaction_date, "12.03.2024");
    }

    #[test]
    fn test_from_spoken_note_falls_back_to_transcript() {
        let parsed = SpokenTransaction {
            kind: "expense".to_string(),
            category: "makan".to_string(),
            amount: 12000.0,
            note: None,
        };
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let tx = NewTransaction::from_spoken(&parsed, "makan siang ayam geprek", today);
        assert_eq!(tx.note, "makan siang ayam geprek");
        assert_eq!(tx.method, "voice");
        assert_eq!(tx.transaction_date, "2024-01-02");
    }

    #[test]
    fn test_degraded_shape() {
        let result = ExtractedResult::degraded("Model not available", "OCR model tidak tersedia");
        assert!(result.is_degraded());
        assert_eq!(result.total, 0.0);
        assert_eq!(result.category, Category::Lainnya);
        assert!(result.date.is_none());
        assert!(result.parsed_data.is_none());
    }
}
