//! # Domain Types
//!
//! Products and the catalog offered at the counter.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────────────┐                │
//! │  │    Product      │ ◄───── │        Catalog          │                │
//! │  │  ─────────────  │  0..n  │  ─────────────────────  │                │
//! │  │  name           │        │  insertion-ordered      │                │
//! │  │  unit_price     │        │  fixed after startup    │                │
//! │  └─────────────────┘        └─────────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Product names are the business key: a ticket holds at most one line
//! per name.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_catalog;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display name shown on the menu and on the receipt.
    pub name: String,

    /// Price of one unit, in cents.
    #[serde(rename = "unitPriceCents")]
    pub unit_price: Money,
}

impl Product {
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        Product {
            name: name.into(),
            unit_price,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The fixed, insertion-ordered list of products.
///
/// There is no way to add or remove products after construction; the
/// counter hands out `&Product` references and indices into this list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty names, negative prices and
    /// duplicate names.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        validate_catalog(&products)?;
        Ok(Catalog { products })
    }

    /// Parses a catalog from a JSON array of
    /// `{"name": ..., "unitPriceCents": ...}` objects.
    ///
    /// ```rust
    /// use panaderia_core::Catalog;
    ///
    /// let catalog = Catalog::from_json(r#"[{"name": "Pistola", "unitPriceCents": 45}]"#).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogParseError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Catalog::new(products)?)
    }

    /// Returns the product at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// First product, the default selection.
    #[inline]
    pub fn first(&self) -> Option<&Product> {
        self.products.first()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

/// The bakery's standard menu.
impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            products: vec![
                Product::new("Chapata", Money::from_cents(65)),
                Product::new("Baguette", Money::from_cents(55)),
                Product::new("Pistola", Money::from_cents(45)),
                Product::new("Pan de Molde", Money::from_cents(120)),
                Product::new("Croissant", Money::from_cents(80)),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// Failure to read a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogParseError {
    #[error("Malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] crate::error::CoreError),
}

// =============================================================================
// Unit Tests
// =============================================================================
