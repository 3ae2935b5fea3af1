//! # Error Types
//!
//! Domain-specific error types for panaderia-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  panaderia-core errors (this file)                                      │
//! │  ├── CoreError        - Ticket operation failures                       │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  counter app errors (separate crate)                                    │
//! │  └── AppError         - What the cashier sees                           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Terminal                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. The two cashier-facing signals (`InvalidSelection`, `EmptyTicket`)
//!    carry the exact message shown to the user

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Ticket operation errors.
///
/// Every variant is recoverable: the operation that produced it left the
/// ticket and selection untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// `add_line` was called without a selected product or with a missing,
    /// zero or negative quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Quantity field: 0
    ///      │
    ///      ▼
    /// add_line() ──► InvalidSelection
    ///      │
    ///      ▼
    /// Notice: "Please select a product and a valid quantity."
    /// ```
    #[error("Please select a product and a valid quantity.")]
    InvalidSelection(#[source] ValidationError),

    /// `render_receipt` was called on a ticket with no lines.
    #[error("The ticket is empty.")]
    EmptyTicket,

    /// `select_product` received an index outside the catalog.
    #[error("Product index {index} is out of range (catalog has {len} products)")]
    ProductIndexOutOfRange { index: usize, len: usize },

    /// A subtotal or total does not fit in i64 cents.
    #[error("Amount overflow for {product} x {quantity}")]
    AmountOverflow { product: String, quantity: i64 },

    /// Validation error outside the add-line path (catalog loading etc).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Duplicate value (e.g., two catalog products with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_signal_messages() {
        let err = CoreError::InvalidSelection(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
        assert_eq!(err.to_string(), "Please select a product and a valid quantity.");
        assert_eq!(CoreError::EmptyTicket.to_string(), "The ticket is empty.");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = CoreError::ProductIndexOutOfRange { index: 7, len: 5 };
        assert_eq!(
            err.to_string(),
            "Product index 7 is out of range (catalog has 5 products)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "name".to_string(),
            value: "Baguette".to_string(),
        };
        assert_eq!(err.to_string(), "name 'Baguette' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "unit_price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
