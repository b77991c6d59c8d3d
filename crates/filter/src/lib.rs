//! Product filtering.
//!
//! Applies the active predicates of a `FilterCriteria` to an injected
//! catalog. Predicates form a plain conjunction: no ranking, no pagination,
//! and the catalog's relative order is preserved.

use catalogbot_model::Product;
use catalogbot_query::FilterCriteria;

/// A single test over one product field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate<'a> {
    /// Category key equals (case-insensitive)
    Category(&'a str),
    /// Brand equals (case-insensitive)
    Brand(&'a str),
    /// Price is at most this value
    MaxPrice(i64),
    /// Feature list contains (case-insensitive)
    Feature(&'a str),
}

impl Predicate<'_> {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::Category(category) => product.category.to_lowercase() == *category,
            Self::Brand(brand) => product.brand.to_lowercase() == *brand,
            Self::MaxPrice(max) => i64::from(product.price) <= *max,
            Self::Feature(feature) => product.has_feature(feature),
        }
    }
}

/// The active predicates of `criteria`; inactive fields contribute none.
pub fn predicates(criteria: &FilterCriteria) -> Vec<Predicate<'_>> {
    let mut active = Vec::with_capacity(4);

    if let Some(category) = criteria.category.as_deref() {
        active.push(Predicate::Category(category));
    }
    if let Some(brand) = criteria.brand.as_deref() {
        active.push(Predicate::Brand(brand));
    }
    if let Some(max) = criteria.max_price {
        active.push(Predicate::MaxPrice(max));
    }
    if let Some(feature) = criteria.feature.as_deref() {
        active.push(Predicate::Feature(feature));
    }

    active
}

/// Products satisfying every predicate, in catalog order.
pub fn apply<'c>(catalog: &'c [Product], predicates: &[Predicate<'_>]) -> Vec<&'c Product> {
    catalog
        .iter()
        .filter(|product| predicates.iter().all(|p| p.matches(product)))
        .collect()
}

/// Filter `catalog` by the active predicates of `criteria`.
pub fn filter_products<'c>(catalog: &'c [Product], criteria: &FilterCriteria) -> Vec<&'c Product> {
    apply(catalog, &predicates(criteria))
}
