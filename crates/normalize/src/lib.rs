//! Normalization of user-supplied filter values.
//!
//! Pure functions mapping raw strings to the lowercase forms compared
//! against the catalog:
//! - Category synonyms and plurals to canonical keys
//! - Brand and feature names to trimmed lowercase

use catalogbot_model::Category;

/// Surface forms accepted for each canonical category.
pub const CATEGORY_SYNONYMS: &[(&str, Category)] = &[
    ("phone", Category::Mobile),
    ("phones", Category::Mobile),
    ("mobile", Category::Mobile),
    ("mobiles", Category::Mobile),
    ("smartphone", Category::Mobile),
    ("smartphones", Category::Mobile),
    ("laptop", Category::Laptop),
    ("laptops", Category::Laptop),
    ("pc", Category::Laptop),
    ("pcs", Category::Laptop),
    ("notebook", Category::Laptop),
    ("notebooks", Category::Laptop),
    ("headphones", Category::Headphones),
    ("headphone", Category::Headphones),
    ("earphones", Category::Headphones),
    ("earphone", Category::Headphones),
    ("headset", Category::Headphones),
    ("headsets", Category::Headphones),
    ("earbud", Category::Headphones),
    ("earbuds", Category::Headphones),
    ("airpod", Category::Headphones),
    ("airpods", Category::Headphones),
    ("smartwatch", Category::Smartwatch),
    ("smartwatches", Category::Smartwatch),
    ("watch", Category::Smartwatch),
    ("watches", Category::Smartwatch),
    ("smartband", Category::Smartwatch),
    ("smartbands", Category::Smartwatch),
    ("speaker", Category::Speakers),
    ("speakers", Category::Speakers),
    ("sound system", Category::Speakers),
    ("tablet", Category::Tablet),
    ("tablets", Category::Tablet),
    ("tab", Category::Tablet),
    ("tabs", Category::Tablet),
    ("camera", Category::Camera),
    ("cameras", Category::Camera),
    ("dslr", Category::Camera),
    ("dslrs", Category::Camera),
    ("cam", Category::Camera),
    ("cams", Category::Camera),
];

/// Exact synonym lookup on an already lowercased, trimmed key.
pub fn lookup_category(key: &str) -> Option<Category> {
    CATEGORY_SYNONYMS
        .iter()
        .find(|(surface, _)| *surface == key)
        .map(|(_, category)| *category)
}

/// Normalize a raw category to its canonical key.
///
/// Empty input means "no category filter" and yields an empty string.
/// Unmatched input ending in `s` is retried once without it; anything still
/// unmatched is returned trimmed and lowercased, so categories missing from
/// the synonym table still filter literally.
pub fn normalize_category(raw: &str) -> String {
    let key = normalize_text(raw);
    if key.is_empty() {
        return key;
    }

    if let Some(category) = lookup_category(&key) {
        return category.as_str().to_string();
    }

    if let Some(singular) = key.strip_suffix('s') {
        if let Some(category) = lookup_category(singular) {
            return category.as_str().to_string();
        }
    }

    key
}

/// Normalize a brand name for case-insensitive comparison.
pub fn normalize_brand(raw: &str) -> String {
    normalize_text(raw)
}

/// Normalize a feature name for case-insensitive comparison.
pub fn normalize_feature(raw: &str) -> String {
    normalize_text(raw)
}

fn normalize_text(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_synonym_maps_to_its_category() {
        for (surface, category) in CATEGORY_SYNONYMS {
            assert_eq!(normalize_category(surface), category.as_str(), "{surface}");
            assert_eq!(
                normalize_category(&format!("  {}  ", surface.to_uppercase())),
                category.as_str(),
                "{surface}"
            );
        }
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(normalize_category("  Phones "), "mobile");
        assert_eq!(normalize_category("EarBuds"), "headphones");
        assert_eq!(normalize_category("Sound System"), "speakers");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_category(""), "");
        assert_eq!(normalize_category("   "), "");
        assert_eq!(normalize_brand(""), "");
        assert_eq!(normalize_feature("  "), "");
    }

    #[test]
    fn test_plural_fallback_strips_one_character() {
        // "sound systems" is not in the table, "sound system" is
        assert_eq!(normalize_category("sound systems"), "speakers");
        // only one retry: "phoness" -> "phones" is in the table
        assert_eq!(normalize_category("phoness"), "mobile");
        assert_eq!(normalize_category("phonesss"), "phonesss");
    }

    #[test]
    fn test_unknown_category_passes_through() {
        assert_eq!(normalize_category("Spaceship"), "spaceship");
        assert_eq!(normalize_category("spaceships"), "spaceships");
    }

    #[test]
    fn test_canonical_keys_are_fixed_points() {
        for category in Category::ALL {
            let once = normalize_category(category.as_str());
            assert_eq!(once, category.as_str());
            assert_eq!(normalize_category(&once), once);
        }
    }

    #[test]
    fn test_brand_and_feature() {
        assert_eq!(normalize_brand("  Samsung "), "samsung");
        assert_eq!(normalize_feature("Noise Cancelling"), "noise cancelling");
    }
}
