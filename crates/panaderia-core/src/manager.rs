//! # Ticket Manager
//!
//! Holds the complete counter state and exposes the cashier's operations.
//!
//! ## State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      TicketManager                                      │
//! │                                                                         │
//! │  catalog ─────────── fixed at construction                              │
//! │  selected ────────── index into catalog (default 0)                     │
//! │  pending_quantity ── raw input, validated only by add_line (default 1)  │
//! │  ticket ──────────── replaced by a new snapshot on every change         │
//! │                                                                         │
//! │  Cashier Action           Operation             State Change            │
//! │  ──────────────           ─────────             ────────────            │
//! │  Pick product ──────────► select_product(i) ──► selected = i           │
//! │  Type quantity ─────────► set_quantity(n) ────► pending = n            │
//! │  Click Add ─────────────► add_line() ─────────► ticket', pending = 1   │
//! │  Click Remove ──────────► remove_line(i) ─────► ticket'                │
//! │  Click Print ───────────► render_receipt() ───► (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Derived amounts (`current_line_total`, `total_amount`) are computed on
//! demand from the current state and never cached.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::receipt::{render_receipt, ReceiptConfig};
use crate::ticket::{Ticket, TicketLine, TicketSummary};
use crate::types::{Catalog, Product};
use crate::validation::validate_quantity;

/// Pending quantity after construction and after every successful add.
pub const DEFAULT_QUANTITY: i64 = 1;

// =============================================================================
// Ticket Manager
// =============================================================================

#[derive(Debug, Clone)]
pub struct TicketManager {
    catalog: Catalog,
    receipt: ReceiptConfig,
    selected: Option<usize>,
    pending_quantity: Option<i64>,
    ticket: Ticket,
    opened_at: DateTime<Utc>,
}

impl TicketManager {
    /// Creates a manager with the first catalog product selected, quantity 1
    /// and an empty ticket.
    pub fn new(catalog: Catalog) -> Self {
        let selected = if catalog.is_empty() { None } else { Some(0) };

        TicketManager {
            catalog,
            receipt: ReceiptConfig::default(),
            selected,
            pending_quantity: Some(DEFAULT_QUANTITY),
            ticket: Ticket::new(),
            opened_at: Utc::now(),
        }
    }

    /// Replaces the texts printed on receipts.
    pub fn with_receipt_config(mut self, receipt: ReceiptConfig) -> Self {
        self.receipt = receipt;
        self
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Selects `catalog[index]`.
    ///
    /// Out-of-range indices fail with `ProductIndexOutOfRange` and keep the
    /// previous selection.
    pub fn select_product(&mut self, index: usize) -> CoreResult<&Product> {
        let product = self
            .catalog
            .get(index)
            .ok_or(CoreError::ProductIndexOutOfRange {
                index,
                len: self.catalog.len(),
            })?;

        debug!(index, product = %product.name, "select_product");
        self.selected = Some(index);
        Ok(product)
    }

    /// Stores the pending quantity as given. `None` stands for missing or
    /// non-numeric input; validation happens in [`add_line`](Self::add_line).
    pub fn set_quantity(&mut self, quantity: Option<i64>) {
        debug!(?quantity, "set_quantity");
        self.pending_quantity = quantity;
    }

    /// Adds the selected product with the pending quantity.
    ///
    /// ## Behavior
    /// - No selection or invalid quantity: `InvalidSelection`, nothing changes
    /// - Product already on the ticket: its line grows and is repriced
    /// - Otherwise: a new line at the end
    /// - On success the pending quantity goes back to 1
    pub fn add_line(&mut self) -> CoreResult<&TicketLine> {
        let (product, quantity) = match self.validated_input() {
            Ok(input) => input,
            Err(err) => {
                warn!(error = %err, "add_line rejected");
                return Err(CoreError::InvalidSelection(err));
            }
        };

        let index = self
            .ticket
            .position(&product.name)
            .unwrap_or(self.ticket.line_count());
        let ticket = self.ticket.with_line_added(product, quantity)?;
        debug!(product = %product.name, quantity, lines = ticket.line_count(), "add_line");

        self.ticket = ticket;
        self.pending_quantity = Some(DEFAULT_QUANTITY);
        Ok(&self.ticket.lines()[index])
    }

    /// Removes the line at `index`. Out-of-range indices change nothing.
    ///
    /// Returns whether a line was removed.
    pub fn remove_line(&mut self, index: usize) -> bool {
        let ticket = self.ticket.without_line(index);
        let removed = ticket.line_count() < self.ticket.line_count();

        debug!(index, removed, "remove_line");
        self.ticket = ticket;
        removed
    }

    /// Renders the receipt for the current ticket without changing it.
    pub fn render_receipt(&self) -> CoreResult<String> {
        let text = render_receipt(&self.ticket, &self.receipt).inspect_err(|err| {
            warn!(error = %err, "render_receipt rejected");
        })?;

        debug!(lines = self.ticket.line_count(), "render_receipt");
        Ok(text)
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// `unit_price * pending_quantity` for the current selection.
    ///
    /// Zero when nothing is selected or the quantity is missing; saturates
    /// instead of overflowing.
    pub fn current_line_total(&self) -> Money {
        match (self.selected_product(), self.pending_quantity) {
            (Some(product), Some(quantity)) => product.unit_price.saturating_mul_quantity(quantity),
            _ => Money::zero(),
        }
    }

    /// Sum of all line subtotals.
    pub fn total_amount(&self) -> Money {
        self.ticket.total_amount()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn receipt_config(&self) -> &ReceiptConfig {
        &self.receipt
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.and_then(|i| self.catalog.get(i))
    }

    pub fn pending_quantity(&self) -> Option<i64> {
        self.pending_quantity
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Serializable view of the whole state.
    pub fn snapshot(&self) -> TicketSnapshot<'_> {
        TicketSnapshot {
            opened_at: self.opened_at,
            selected: self.selected_product(),
            pending_quantity: self.pending_quantity,
            current_line_total: self.current_line_total(),
            lines: self.ticket.lines(),
            summary: TicketSummary::from(&self.ticket),
        }
    }

    fn validated_input(&self) -> Result<(&Product, i64), ValidationError> {
        let product = self.selected_product().ok_or_else(|| ValidationError::Required {
            field: "product".to_string(),
        })?;
        let quantity = validate_quantity(self.pending_quantity)?;
        Ok((product, quantity))
    }
}

impl Default for TicketManager {
    fn default() -> Self {
        TicketManager::new(Catalog::default())
    }
}

/// Borrowed view of the counter state for JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSnapshot<'a> {
    pub opened_at: DateTime<Utc>,
    pub selected: Option<&'a Product>,
    pub pending_quantity: Option<i64>,
    pub current_line_total: Money,
    pub lines: &'a [TicketLine],
    pub summary: TicketSummary,
}

// =============================================================================
// Unit Tests
// =============================================================================
