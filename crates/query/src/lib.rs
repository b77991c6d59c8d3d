//! Translation of raw webhook parameters into filter criteria.
//!
//! Every platform parameter goes through the same total pipeline:
//! unwrap a single-or-list value, then normalize or parse it, falling back
//! to "filter not active" instead of failing.

use catalogbot_model::{Category, ParamValue, SearchParameters};
use catalogbot_normalize::{normalize_brand, normalize_category, normalize_feature};
use serde::Serialize;

/// Normalized, active predicates of a product search.
///
/// `None` means the predicate is skipped entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub brand: Option<String>,
    /// Inclusive upper bound
    pub max_price: Option<i64>,
    pub feature: Option<String>,
}

impl FilterCriteria {
    /// Build criteria from the platform parameter map.
    pub fn from_parameters(params: &SearchParameters) -> Self {
        Self {
            category: unwrap_text(params.category.as_ref(), normalize_category),
            brand: unwrap_text(params.brand.as_ref(), normalize_brand),
            max_price: params.price.as_ref().and_then(parse_max_price),
            feature: unwrap_text(params.features.as_ref(), normalize_feature),
        }
    }

    pub fn with_category(mut self, raw: &str) -> Self {
        self.category = non_empty(normalize_category(raw));
        self
    }

    pub fn with_brand(mut self, raw: &str) -> Self {
        self.brand = non_empty(normalize_brand(raw));
        self
    }

    pub fn with_max_price(mut self, max_price: i64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_feature(mut self, raw: &str) -> Self {
        self.feature = non_empty(normalize_feature(raw));
        self
    }

    /// True when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.brand.is_none()
            && self.max_price.is_none()
            && self.feature.is_none()
    }

    /// The category filter when it is not a canonical category.
    ///
    /// Such a category still filters literally and usually matches nothing.
    pub fn unknown_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| Category::parse(c).is_none())
    }
}

/// Unwrap a parameter, normalize it, and treat empty results as absent.
pub fn unwrap_text(value: Option<&ParamValue>, normalize: fn(&str) -> String) -> Option<String> {
    value.and_then(|v| non_empty(normalize(&v.as_text())))
}

/// Parse a maximum price with leading-integer semantics.
///
/// Text is trimmed and its leading optional sign and decimal digits are read
/// (`"499.99"` is 499). Numbers are truncated toward zero. Empty text,
/// non-numeric text and non-scalar values all mean "no price filter".
pub fn parse_max_price(value: &ParamValue) -> Option<i64> {
    match value.first()? {
        ParamValue::Text(s) => parse_leading_int(s),
        ParamValue::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        _ => None,
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (negative, rest) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    // Saturate rather than reject absurdly long digit runs
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
