//! Reply generation for webhook responses.
//!
//! Converts search results into the text spoken or shown back to the user
//! by the conversational platform.

use catalogbot_model::Product;
use serde::{Deserialize, Serialize};

pub const NO_MATCH_TEXT: &str =
    "Sorry, I couldn't find any matching products. Try changing brand, category, or price range.";

pub const FALLBACK_TEXT: &str = "I'm not sure how to help with that.";

pub const RESULTS_PREFIX: &str = "Here are some products you may like: ";

/// Reply formatting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyConfig {
    /// Printed directly before each price
    pub currency_symbol: String,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
        }
    }
}

/// Response body returned to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fulfillment {
    pub fulfillment_text: String,
}

impl Fulfillment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            fulfillment_text: text.into(),
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_TEXT)
    }
}

/// Format one product as `Name (₹price)`.
pub fn describe_product(product: &Product, config: &ReplyConfig) -> String {
    format!("{} ({}{})", product.name, config.currency_symbol, product.price)
}

/// Reply text for a search result set, in the given order.
pub fn search_reply(results: &[&Product], config: &ReplyConfig) -> String {
    if results.is_empty() {
        return NO_MATCH_TEXT.to_string();
    }

    let listing = results
        .iter()
        .map(|p| describe_product(p, config))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{RESULTS_PREFIX}{listing}")
}
