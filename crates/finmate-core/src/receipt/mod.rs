//! Receipt-field extraction pipeline
//!
//! Raw tagged model output flows through three stateless stages:
//!
//! ```text
//! raw sequence -> parser -> ParsedReceipt -> {numeric, category, date} -> ExtractedResult
//! ```
//!
//! Each stage is a pure function over an immutable string; the orchestrator
//! in [`extract`] composes them and owns the degraded-result boundary.

pub mod category;
pub mod extract;
pub mod numeric;
pub mod parser;

pub use category::classify;
pub use extract::ReceiptExtractor;
pub use numeric::{normalize_amount, resolve_total};
pub use parser::parse_sequence;
