//! # Validation Module
//!
//! Input validation for the counter.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Startup: catalog                                                       │
//! │  ├── validate_product_name, validate_price                              │
//! │  └── validate_catalog (unique names)                                    │
//! │                                                                         │
//! │  add_line: pending quantity                                             │
//! │  └── validate_quantity (set_quantity itself never validates)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use panaderia_core::validation::validate_quantity;
//!
//! assert_eq!(validate_quantity(Some(3)).unwrap(), 3);
//! assert!(validate_quantity(Some(0)).is_err());
//! assert!(validate_quantity(None).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name accepted in a catalog.
pub const MAX_PRODUCT_NAME_LEN: usize = 100;

// =============================================================================
// Quantity
// =============================================================================

/// Validates a pending quantity and returns it as a plain integer.
///
/// ## Rules
/// - Must be present (`None` covers empty and non-integer input)
/// - Must be at least 1
///
/// There is no upper bound; overflow of the resulting subtotal is caught
/// where the subtotal is computed.
pub fn validate_quantity(qty: Option<i64>) -> ValidationResult<i64> {
    let qty = qty.ok_or_else(|| ValidationError::Required {
        field: "quantity".to_string(),
    })?;

    if qty < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(qty)
}

// =============================================================================
// Catalog
// =============================================================================

/// Validates a product name: non-blank, at most `MAX_PRODUCT_NAME_LEN` chars.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "unit_price".to_string(),
        });
    }

    Ok(())
}

/// Validates every product and checks that names are unique, since the
/// ticket keys its lines by product name.
pub fn validate_catalog(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        validate_product_name(&product.name)?;
        validate_price(product.unit_price)?;

        if !seen.insert(product.name.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "name".to_string(),
                value: product.name.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
