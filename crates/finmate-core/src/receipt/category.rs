//! Keyword-based spending category classification
//!
//! Classification is an ordered rule table, first match wins, so the
//! priority contract stays explicit: a store named "Supermarket Food Court"
//! is `belanja` because the grocery rule is checked before the food rule.

use crate::models::{Category, ParsedReceipt};

/// Store-name rules, evaluated in order against the lowercased store name.
const STORE_RULES: &[(&[&str], Category)] = &[
    (
        &[
            "market",
            "grocery",
            "supermarket",
            "minimarket",
            "swalayan",
            "toserba",
            "indomaret",
            "alfamart",
        ],
        Category::Belanja,
    ),
    (
        &[
            "restaurant",
            "resto",
            "cafe",
            "kafe",
            "food",
            "warung",
            "hotel",
            "bakery",
            "coffee",
        ],
        Category::Makanan,
    ),
    (
        &["gas", "fuel", "petrol", "spbu", "pertamina"],
        Category::Transportasi,
    ),
    (
        &[
            "pharmacy",
            "medical",
            "hospital",
            "apotek",
            "apotik",
            "klinik",
            "rumah sakit",
        ],
        Category::Kesehatan,
    ),
];

/// Food and drink words checked against item names when the store name gave
/// no signal. Any hit classifies the receipt as `makanan`.
const FOOD_ITEM_KEYWORDS: &[&str] = &[
    "nasi", "ayam", "mie", "bakso", "sate", "soto", "roti", "kopi", "teh", "jus", "susu", "es",
    "goreng", "burger", "pizza",
];

/// Classify a parsed receipt into exactly one category.
///
/// Total function: checks the store name against [`STORE_RULES`] first, then
/// falls back to scanning item names for food keywords, then `lainnya`.
pub fn classify(receipt: &ParsedReceipt) -> Category {
    let store = receipt.store_name.to_lowercase();
    if !store.is_empty() {
        for (keywords, category) in STORE_RULES {
            if keywords.iter().any(|k| store.contains(k)) {
                return *category;
            }
        }
    }

    for item in &receipt.items {
        let name = item.name.to_lowercase();
        if FOOD_ITEM_KEYWORDS.iter().any(|k| name.contains(k)) {
            return Category::Makanan;
        }
    }

    Category::Lainnya
}
