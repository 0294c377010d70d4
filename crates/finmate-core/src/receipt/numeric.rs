//! Currency amount normalization
//!
//! Receipt amounts arrive as locale-formatted substrings ("12.345,67",
//! "Rp 20.500", "$3.50"). Normalization happens in exactly one place so the
//! comma/period disambiguation rules stay consistent across every field.

use tracing::debug;

use crate::models::ParsedReceipt;

/// Normalize a raw currency substring into a non-negative amount.
///
/// All characters except digits, commas, and periods are stripped, then:
/// - both separators present: the one appearing last is the decimal point,
///   the other is a thousands separator and is removed. This handles
///   Indonesian "12.345,67" and US "12,345.67" alike, both reading 12345.67;
/// - comma only: commas are thousands separators and are removed;
/// - period only: the period is the decimal point.
///
/// Known limitation: comma-decimal locales with no thousands separator are
/// lossy. "12,50" meaning 12.50 is read as 1250. This mirrors the upstream
/// behavior and is deliberate; do not "fix" it here.
///
/// Returns `None` when nothing numeric survives the cleanup.
pub fn normalize_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let last_comma = cleaned.rfind(',');
    let last_period = cleaned.rfind('.');

    let canonical = match (last_comma, last_period) {
        (Some(c), Some(p)) if c > p => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) => cleaned.replace(',', ""),
        _ => cleaned,
    };

    canonical.parse::<f64>().ok().filter(|v| *v >= 0.0)
}

/// Resolve the receipt's total via the fixed priority chain.
///
/// 1. the total block's raw substring;
/// 2. the subtotal block's raw substring;
/// 3. the sum of normalizable item prices; an unparsable price contributes
///    0.0, it never aborts the sum.
///
/// Defaults to 0.0 when every source is absent or unparsable.
pub fn resolve_total(receipt: &ParsedReceipt) -> f64 {
    if let Some(total) = receipt.total.as_deref().and_then(normalize_amount) {
        return total;
    }
    if let Some(subtotal) = receipt.subtotal.as_deref().and_then(normalize_amount) {
        debug!("total marker missing, using subtotal");
        return subtotal;
    }
    receipt
        .items
        .iter()
        .map(|item| {
            item.price
                .as_deref()
                .and_then(normalize_amount)
                .unwrap_or(0.0)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;

    fn item(name: &str, price: Option<&str>) -> LineItem {
        LineItem {
            name: name.to_string(),
            unit_price: None,
            count: "1".to_string(),
            price: price.map(str::to_string),
        }
    }

    #[test]
    fn test_both_separators() {
        assert_eq!(normalize_amount("12.345,67"), Some(12345.67));
        assert_eq!(normalize_amount("1.234.567,89"), Some(1234567.89));
        // US ordering resolves the same way
        assert_eq!(normalize_amount("12,345.67"), Some(12345.67));
    }

    #[test]
    fn test_comma_only_is_thousands() {
        assert_eq!(normalize_amount("12,345"), Some(12345.0));
        // Lossy for comma-decimal locales, by design.
        assert_eq!(normalize_amount("12,50"), Some(1250.0));
    }

    #[test]
    fn test_period_only_is_decimal() {
        assert_eq!(normalize_amount("3.50"), Some(3.5));
    }

    #[test]
    fn test_currency_symbols_stripped() {
        assert_eq!(normalize_amount("Rp 20.500,00"), Some(20500.0));
        assert_eq!(normalize_amount("$1,299"), Some(1299.0));
    }

    #[test]
    fn test_unparsable() {
        assert_eq!(normalize_amount(""), None);
        assert_eq!(normalize_amount("gratis"), None);
        assert_eq!(normalize_amount("..,,"), None);
    }

    #[test]
    fn test_total_takes_priority() {
        let receipt = ParsedReceipt {
            total: Some("21.550".to_string()),
            subtotal: Some("99.999".to_string()),
            items: vec![item("AQUA", Some("6.000"))],
            ..ParsedReceipt::default()
        };
        assert_eq!(resolve_total(&receipt), 21.55);
    }

    #[test]
    fn test_subtotal_fallback() {
        let receipt = ParsedReceipt {
            total: None,
            subtotal: Some("20.500,00".to_string()),
            items: vec![item("AQUA", Some("6.000"))],
            ..ParsedReceipt::default()
        };
        assert_eq!(resolve_total(&receipt), 20500.0);
    }

    #[test]
    fn test_unparsable_total_falls_through() {
        let receipt = ParsedReceipt {
            total: Some("---".to_string()),
            subtotal: Some("15,000".to_string()),
            ..ParsedReceipt::default()
        };
        assert_eq!(resolve_total(&receipt), 15000.0);
    }

    #[test]
    fn test_item_sum_fallback() {
        let receipt = ParsedReceipt {
            items: vec![
                item("AQUA", Some("6,000")),
                item("MYSTERY", Some("???")),
                item("ROTI", Some("14,500")),
                item("BONUS", None),
            ],
            ..ParsedReceipt::default()
        };
        // Unparsable and missing prices contribute 0, never abort.
        assert_eq!(resolve_total(&receipt), 20500.0);
    }

    #[test]
    fn test_everything_absent() {
        assert_eq!(resolve_total(&ParsedReceipt::default()), 0.0);
    }
}
