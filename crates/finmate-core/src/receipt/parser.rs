//! Tagged-sequence parser for vision model output
//!
//! The receipt vision model emits a flat string with embedded CORD-style
//! markers:
//!
//! ```text
//! <s_store_name> INDOMARET<s_menu><s_nm>AQUA 600ML<s_cnt>2<s_price>6.000
//! <sep/><s_nm>ROTI TAWAR<s_price>14.500</s_menu>
//! <s_sub_total><s_subtotal_price>20.500<s_tax_price>2.050</s_sub_total>
//! <s_total><s_total_price>22.550</s_total>
//! ```
//!
//! The model is a learned component, so the vocabulary is best-effort: any
//! marker can be missing, duplicated, or truncated. Every extraction step
//! degrades to the field default on no-match; parsing never fails.

use regex::Regex;

use crate::models::{LineItem, ParsedReceipt};

const STORE_NAME: &str = "<s_store_name>";
const MENU_OPEN: &str = "<s_menu>";
const MENU_CLOSE: &str = "</s_menu>";
const ITEM_SEP: &str = "<sep/>";
const ITEM_NAME: &str = "<s_nm>";
const ITEM_UNIT_PRICE: &str = "<s_unitprice>";
const ITEM_COUNT: &str = "<s_cnt>";
const ITEM_PRICE: &str = "<s_price>";
const SUBTOTAL_OPEN: &str = "<s_sub_total>";
const SUBTOTAL_CLOSE: &str = "</s_sub_total>";
const SUBTOTAL_PRICE: &str = "<s_subtotal_price>";
const DISCOUNT_PRICE: &str = "<s_discount_price>";
const SERVICE_PRICE: &str = "<s_service_price>";
const TAX_PRICE: &str = "<s_tax_price>";
const TOTAL_OPEN: &str = "<s_total>";
const TOTAL_CLOSE: &str = "</s_total>";
const TOTAL_PRICE: &str = "<s_total_price>";

/// Date patterns tried in fixed priority order; the first pattern that finds
/// any match anywhere in the sequence wins, even if a lower-priority pattern
/// matches earlier in the string. Matches are not validated as calendar
/// dates; the persistence layer owns that.
const DATE_PATTERNS: [&str; 3] = [
    r"\d{2}\.\d{2}\.\d{4}",
    r"\d{1,2}/\d{1,2}/\d{4}",
    r"\d{4}-\d{2}-\d{2}",
];

/// Parse a raw tagged sequence into the intermediate receipt record.
///
/// Total function: missing markers leave fields at their defaults. Monetary
/// substrings are kept raw; `receipt::numeric` resolves them later.
pub fn parse_sequence(raw: &str) -> ParsedReceipt {
    let mut receipt = ParsedReceipt {
        raw_sequence: raw.to_string(),
        ..ParsedReceipt::default()
    };

    if let Some(name) = capture_after(raw, STORE_NAME) {
        receipt.store_name = name.to_string();
    }

    if let Some(region) = capture_region(raw, MENU_OPEN, MENU_CLOSE) {
        receipt.items = parse_menu_region(region);
    }

    if let Some(region) = capture_region(raw, SUBTOTAL_OPEN, SUBTOTAL_CLOSE) {
        receipt.subtotal = capture_field(region, SUBTOTAL_PRICE);
        receipt.discount = capture_field(region, DISCOUNT_PRICE);
        receipt.service_charge = capture_field(region, SERVICE_PRICE);
        receipt.tax = capture_field(region, TAX_PRICE);
    }

    if let Some(region) = capture_region(raw, TOTAL_OPEN, TOTAL_CLOSE) {
        receipt.total = capture_field(region, TOTAL_PRICE);
    }

    receipt.date = scan_date(raw);

    receipt
}

/// Capture text following `marker` up to the next marker or end of string.
///
/// Markers all start with `<`, so "up to the next marker" is a scan for the
/// next `<`. Returns the trimmed capture, or `None` when the marker is
/// absent.
fn capture_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let start = text.find(marker)? + marker.len();
    let rest = &text[start..];
    let end = rest.find('<').unwrap_or(rest.len());
    Some(rest[..end].trim())
}

/// Like [`capture_after`], but treats an empty capture as absent.
fn capture_field(text: &str, marker: &str) -> Option<String> {
    capture_after(text, marker)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Capture the content between an open/close marker pair.
///
/// Both markers must be present, close after open; anything else is treated
/// as "region absent" rather than an error.
fn capture_region<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = text.find(open)? + open.len();
    let end = text[start..].find(close)? + start;
    Some(&text[start..end])
}

/// Split a menu region on the item separator and parse each block.
///
/// Sub-markers are searched independently per block; a block with no name
/// capture is discarded, everything else survives with missing fields left
/// absent (count defaults to "1").
fn parse_menu_region(region: &str) -> Vec<LineItem> {
    region
        .split(ITEM_SEP)
        .filter_map(|block| {
            LineItem::from_captures(
                capture_field(block, ITEM_NAME),
                capture_field(block, ITEM_UNIT_PRICE),
                capture_field(block, ITEM_COUNT),
                capture_field(block, ITEM_PRICE),
            )
        })
        .collect()
}

/// Scan the entire sequence for the first date-like substring.
fn scan_date(raw: &str) -> Option<String> {
    for pattern in DATE_PATTERNS {
        let re = Regex::new(pattern).expect("valid regex");
        if let Some(m) = re.find(raw) {
            return Some(m.as_str().to_string());
        }
    }
    None
}
