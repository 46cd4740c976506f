//! Product catalog loading and access.
//!
//! The catalog is a JSON array of products read once at startup from a
//! relative path. It is owned by the caller and read-only afterwards:
//! the matcher receives it by reference, nothing mutates it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{error, info};

use crate::error::{Result, SkinTuiError};
use crate::types::RoutineStep;

/// A single catalog entry.
///
/// `skin_types`, `age_ranges` and `concerns` default to empty when absent,
/// so a product missing those fields simply never matches any profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub step: RoutineStep,
    #[serde(default)]
    pub skin_types: Vec<String>,
    #[serde(default)]
    pub age_ranges: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// The product catalog: an ordered, read-only sequence of products.
///
/// Catalog order matters. The matcher picks the first satisfying product
/// per step, so earlier entries win ties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an already-loaded product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog from a JSON file containing an array of products.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SkinTuiError::catalog(format!("failed to read {}: {}", path.display(), e))
        })?;

        let products: Vec<Product> = serde_json::from_str(&content).map_err(|e| {
            SkinTuiError::catalog(format!("failed to parse {}: {}", path.display(), e))
        })?;

        Ok(Self::new(products))
    }

    /// Startup initializer: load the catalog, degrading to an empty one
    /// on any failure. The failure is logged; the UI then renders the
    /// no-routine message instead of failing hard. Called once, no retry.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(&path) {
            Ok(catalog) => {
                info!(
                    "loaded {} products from {}",
                    catalog.len(),
                    path.as_ref().display()
                );
                catalog
            }
            Err(e) => {
                error!("failed to load product catalog: {}", e);
                Self::default()
            }
        }
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Products as a slice, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        match self.len() {
            0 => "No products loaded".to_string(),
            1 => "1 product loaded".to_string(),
            n => format!("{} products loaded", n),
        }
    }
}
