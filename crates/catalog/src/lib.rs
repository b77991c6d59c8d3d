//! Catalog sources.
//!
//! Provides the `CatalogSource` trait and its implementations. The filter
//! engine only ever sees a slice of products, so the seed data can be swapped
//! for a file (or any other source) without touching filter logic.

use catalogbot_model::{Category, Product};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Product at index {0} has an empty name")]
    EmptyName(usize),
}

/// Trait for catalog sources (built-in seed, JSON file, etc.)
pub trait CatalogSource {
    /// Load every product, in catalog order.
    fn load(&self) -> Result<Vec<Product>, CatalogError>;

    /// Source name for logging.
    fn name(&self) -> &'static str;
}

/// The built-in product set.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedCatalog;

impl CatalogSource for SeedCatalog {
    fn load(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(seed_products())
    }

    fn name(&self) -> &'static str {
        "seed"
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        Product::new("Samsung Galaxy S21", "Samsung", Category::Mobile, 45000)
            .with_features(["AMOLED", "5G"]),
        Product::new("iPhone 13", "Apple", Category::Mobile, 60000).with_features(["OLED"]),
        Product::new("Samsung A52", "Samsung", Category::Mobile, 26000)
            .with_features(["AMOLED", "64MP camera"]),
        Product::new("HP Pavilion 15", "HP", Category::Laptop, 52000).with_features(["SSD"]),
        Product::new("Dell Inspiron 3501", "Dell", Category::Laptop, 47000)
            .with_features(["SSD"]),
        Product::new("Boat Airdopes 141", "Boat", Category::Headphones, 999)
            .with_features(["Bluetooth"]),
        Product::new("Sony WH-1000XM4", "Sony", Category::Headphones, 24000)
            .with_features(["Bluetooth", "noise cancelling"]),
        Product::new("Boat Xtend Smartwatch", "Boat", Category::Smartwatch, 2999)
            .with_features(["heart rate monitor", "SpO2"]),
        Product::new("Apple Watch SE", "Apple", Category::Smartwatch, 29900)
            .with_features(["heart rate monitor", "GPS"]),
        Product::new("Samsung Galaxy Tab A8", "Samsung", Category::Tablet, 17999)
            .with_features(["Wi-Fi"]),
        Product::new("JBL Flip 5", "JBL", Category::Speakers, 7999)
            .with_features(["Bluetooth", "waterproof"]),
        Product::new("Canon EOS 1500D", "Canon", Category::Camera, 32000)
            .with_features(["24MP", "Wi-Fi"]),
    ]
}

/// A catalog read from a JSON array of products.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Vec<Product>, CatalogError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut products: Vec<Product> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: self.path.clone(),
                source,
            })?;

        for (index, product) in products.iter_mut().enumerate() {
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(index));
            }

            product.category = product.category.trim().to_lowercase();
            if product.canonical_category().is_none() {
                tracing::warn!(
                    product = %product.name,
                    category = %product.category,
                    "Product has a non-canonical category"
                );
            }
        }

        Ok(products)
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

/// The read-only product set shared by every request.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog from `source`.
    pub fn load(source: &impl CatalogSource) -> Result<Self, CatalogError> {
        let products = source.load()?;
        tracing::info!(source = source.name(), products = products.len(), "Catalog loaded");
        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_seed_covers_every_category() {
        let products = SeedCatalog.load().unwrap();
        for category in Category::ALL {
            assert!(
                products.iter().any(|p| p.canonical_category() == Some(category)),
                "no product in {category}"
            );
        }
    }

    #[test]
    fn test_json_file_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "Pixel 8", "brand": "Google", "category": " Mobile ", "price": 59999, "features": ["OLED"]}},
                {{"name": "Kindle", "brand": "Amazon", "category": "ereader", "price": 9999}}
            ]"#
        )
        .unwrap();

        let catalog = Catalog::load(&JsonFileCatalog::new(file.path())).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].category, "mobile");
        assert_eq!(catalog.products()[1].category, "ereader");
        assert!(catalog.products()[1].features.is_empty());
    }

    #[test]
    fn test_json_file_rejects_empty_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": " ", "brand": "X", "category": "tablet", "price": 1}}]"#).unwrap();

        let err = JsonFileCatalog::new(file.path()).load().unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName(0)));
    }

    #[test]
    fn test_json_file_errors() {
        let missing = JsonFileCatalog::new("/nonexistent/catalog.json");
        assert!(matches!(missing.load(), Err(CatalogError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Bad", "price": -3}}]"#).unwrap();
        assert!(matches!(
            JsonFileCatalog::new(file.path()).load(),
            Err(CatalogError::Parse { .. })
        ));
    }
}
