//! # Ticket
//!
//! The in-progress list of purchased lines.
//!
//! ## Value Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Ticket Operations                                   │
//! │                                                                         │
//! │  ticket ──► with_line_added(product, qty) ──► new ticket               │
//! │                 │                                                       │
//! │                 ├── same name present? → quantity += qty,               │
//! │                 │                        subtotal recomputed            │
//! │                 └── otherwise          → line appended at the end       │
//! │                                                                         │
//! │  ticket ──► without_line(index) ─────────────► new ticket               │
//! │                 └── index out of range → identical copy                 │
//! │                                                                         │
//! │  A Ticket is never edited in place; the manager swaps snapshots.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product name
//! - `quantity >= 1` on every line
//! - `subtotal == unit_price * quantity` on every line
//! - The total of all subtotals fits in `Money`
//! - The total quantity fits in `i64`

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Ticket Line
// =============================================================================

/// One line of the ticket. Fields are private so the subtotal can only be
/// produced by multiplying the price by the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketLine {
    product: Product,
    quantity: i64,
    subtotal: Money,
}

impl TicketLine {
    /// Builds a line priced at `unit_price * quantity`.
    fn priced(product: Product, unit_price: Money, quantity: i64) -> CoreResult<Self> {
        let subtotal = unit_price
            .checked_mul_quantity(quantity)
            .ok_or_else(|| CoreError::AmountOverflow {
                product: product.name.clone(),
                quantity,
            })?;

        Ok(TicketLine {
            product,
            quantity,
            subtotal,
        })
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.product.name
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }
}

// =============================================================================
// Ticket
// =============================================================================

/// Ordered ticket lines, keyed implicitly by product name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ticket {
    lines: Vec<TicketLine>,
}

impl Ticket {
    /// Creates an empty ticket.
    pub fn new() -> Self {
        Ticket::default()
    }

    /// Returns a ticket with `quantity` units of `product` added.
    ///
    /// ## Behavior
    /// - Line with the same product name present: its quantity grows by
    ///   `quantity` and its subtotal is recomputed from `product.unit_price`,
    ///   the price of the product being added now
    /// - Otherwise: a new line is appended
    ///
    /// `quantity` must already be validated (>= 1). Fails only with
    /// `AmountOverflow`, in which case `self` is the unchanged state.
    pub fn with_line_added(&self, product: &Product, quantity: i64) -> CoreResult<Ticket> {
        let overflow = || CoreError::AmountOverflow {
            product: product.name.clone(),
            quantity,
        };

        let mut lines = self.lines.clone();

        match lines.iter_mut().find(|l| l.product.name == product.name) {
            Some(line) => {
                let new_quantity = line.quantity.checked_add(quantity).ok_or_else(overflow)?;
                *line = TicketLine::priced(line.product.clone(), product.unit_price, new_quantity)?;
            }
            None => lines.push(TicketLine::priced(product.clone(), product.unit_price, quantity)?),
        }

        let ticket = Ticket { lines };
        ticket.checked_total().ok_or_else(overflow)?;
        ticket.checked_total_quantity().ok_or_else(overflow)?;
        Ok(ticket)
    }

    /// Returns a ticket without the line at `index`.
    ///
    /// An out-of-range index removes nothing. Surviving lines keep their
    /// relative order.
    pub fn without_line(&self, index: usize) -> Ticket {
        let lines = self
            .lines
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, line)| line.clone())
            .collect();

        Ticket { lines }
    }

    /// Sum of all subtotals; zero for an empty ticket.
    pub fn total_amount(&self) -> Money {
        self.lines.iter().map(TicketLine::subtotal).sum()
    }

    fn checked_total(&self) -> Option<Money> {
        self.lines
            .iter()
            .try_fold(Money::zero(), |acc, line| acc.checked_add(line.subtotal))
    }

    fn checked_total_quantity(&self) -> Option<i64> {
        self.lines
            .iter()
            .try_fold(0i64, |acc, line| acc.checked_add(line.quantity))
    }

    #[inline]
    pub fn lines(&self) -> &[TicketLine] {
        &self.lines
    }

    #[inline]
    pub fn line(&self, index: usize) -> Option<&TicketLine> {
        self.lines.get(index)
    }

    /// Looks up the line for a product name.
    pub fn find(&self, name: &str) -> Option<&TicketLine> {
        self.lines.iter().find(|l| l.product.name == name)
    }

    /// Index of the line for a product name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.product.name == name)
    }

    /// Number of distinct lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Ticket totals for machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub line_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&Ticket> for TicketSummary {
    fn from(ticket: &Ticket) -> Self {
        TicketSummary {
            line_count: ticket.line_count(),
            total_quantity: ticket.total_quantity(),
            total_cents: ticket.total_amount().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
