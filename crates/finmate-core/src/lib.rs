//! FinMate Core Library
//!
//! Shared functionality for the FinMate personal finance backend:
//! - Receipt-field extraction from vision model output (parser, numeric
//!   normalizer, category classifier, orchestrator)
//! - Voice-entry transaction parsing from LLM replies
//! - Pluggable vision backends (HTTP inference server, mock)
//! - Wire mapping into the transaction-persistence collaborator's shape

pub mod error;
pub mod models;
pub mod receipt;
pub mod vision;
pub mod voice;

pub use error::{Error, Result};
pub use models::{
    Category, ExtractedResult, LineItem, NewTransaction, ParsedReceipt, SpokenTransaction,
};
pub use receipt::{classify, normalize_amount, parse_sequence, resolve_total, ReceiptExtractor};
pub use vision::{HttpVisionBackend, MockVisionBackend, VisionBackend, VisionClient};
pub use voice::parse_spoken_transaction;
