//! # panaderia-core: Pure Ticket Logic for the Bakery Counter
//!
//! This crate contains all ticket logic as pure functions and plain values,
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Panadería POS Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/counter (terminal front-end)               │   │
//! │  │   stdin commands ──► TicketManager ──► stdout / notices         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ panaderia-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │  money  │ │ ticket  │ │ manager │ │ receipt │  │   │
//! │  │   │ Product │ │  Money  │ │ Ticket  │ │ Ticket  │ │ Receipt │  │   │
//! │  │   │ Catalog │ │         │ │  Line   │ │ Manager │ │ Config  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and Catalog
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ticket`] - Ticket lines and the value-typed Ticket
//! - [`manager`] - Selection, pending quantity and the cashier's operations
//! - [`receipt`] - Plain-text receipt rendering
//! - [`validation`] - Quantity and catalog rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use panaderia_core::{Catalog, TicketManager};
//!
//! let mut counter = TicketManager::new(Catalog::default());
//!
//! counter.select_product(1).unwrap(); // Baguette
//! counter.set_quantity(Some(2));
//! counter.add_line().unwrap();
//!
//! assert_eq!(counter.total_amount().to_string(), "1.10");
//! assert!(counter.render_receipt().unwrap().contains("TOTAL: 1.10 €"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod manager;
pub mod money;
pub mod receipt;
pub mod ticket;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use manager::{TicketManager, TicketSnapshot, DEFAULT_QUANTITY};
pub use money::Money;
pub use receipt::{render_receipt, Receipt, ReceiptConfig};
pub use ticket::{Ticket, TicketLine, TicketSummary};
pub use types::*;
