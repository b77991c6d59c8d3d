//! Core domain model for the catalogbot webhook.
//!
//! This crate defines the types shared by every other crate:
//! - `Product`: an immutable catalog record
//! - `Category`: the canonical product categories
//! - `ParamValue`: a platform parameter that may arrive as a scalar or a list
//! - `SearchParameters`: the parameter map of a `search_product` invocation
//! - `Intent`: the dispatched intent of a webhook call

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mobile,
    Laptop,
    Tablet,
    Headphones,
    Smartwatch,
    Speakers,
    Camera,
}

impl Category {
    /// All canonical categories, in display order.
    pub const ALL: [Category; 7] = [
        Self::Mobile,
        Self::Laptop,
        Self::Tablet,
        Self::Headphones,
        Self::Smartwatch,
        Self::Speakers,
        Self::Camera,
    ];

    /// The lowercase key stored on products and produced by normalization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Laptop => "laptop",
            Self::Tablet => "tablet",
            Self::Headphones => "headphones",
            Self::Smartwatch => "smartwatch",
            Self::Speakers => "speakers",
            Self::Camera => "camera",
        }
    }

    /// Exact lookup of a canonical key (case-insensitive).
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(key.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A catalog product.
///
/// Products are seeded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name
    pub name: String,

    /// Brand, compared case-insensitively
    pub brand: String,

    /// Lowercase category key, normally one of `Category::ALL`
    pub category: String,

    /// Whole-number price
    pub price: u32,

    /// Free-text capabilities; membership matters, order does not
    #[serde(default)]
    pub features: Vec<String>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        category: Category,
        price: u32,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            category: category.as_str().to_string(),
            price,
            features: Vec::new(),
        }
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// The canonical category, if the stored key is one.
    pub fn canonical_category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    /// Case-insensitive feature membership; `feature` must already be lowercase.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f.to_lowercase() == feature)
    }
}

/// A parameter value as sent by the conversational platform.
///
/// Platforms often wrap scalars in one-element lists, so every field may be
/// either shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    List(Vec<ParamValue>),
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl ParamValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Unwrap to a scalar: the first element of a list wins, the rest is
    /// discarded. Empty lists yield `None`.
    pub fn first(&self) -> Option<&ParamValue> {
        match self {
            Self::List(items) => items.first().and_then(ParamValue::first),
            scalar => Some(scalar),
        }
    }

    /// Textual form of the unwrapped scalar; empty for anything that is
    /// neither text nor a number.
    pub fn as_text(&self) -> String {
        match self.first() {
            Some(Self::Text(s)) => s.clone(),
            Some(Self::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

/// Parameters of a `search_product` invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<ParamValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ParamValue>,

    /// Inclusive maximum price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<ParamValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<ParamValue>,
}

impl SearchParameters {
    pub fn with_brand(mut self, brand: impl Into<ParamValue>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<ParamValue>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<ParamValue>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_features(mut self, features: impl Into<ParamValue>) -> Self {
        self.features = Some(features.into());
        self
    }
}

/// The intent a webhook call was raised for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SearchProduct,
    Other(String),
}

impl Intent {
    pub const SEARCH_PRODUCT: &'static str = "search_product";
}

impl From<&str> for Intent {
    fn from(s: &str) -> Self {
        if s == Self::SEARCH_PRODUCT {
            Self::SearchProduct
        } else {
            Self::Other(s.to_string())
        }
    }
}
