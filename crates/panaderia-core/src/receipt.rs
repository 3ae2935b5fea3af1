//! # Receipt Rendering
//!
//! Plain-text receipt for a non-empty ticket.
//!
//! ## Layout
//! ```text
//! ****** PURCHASE TICKET ******
//! Panaderia Sánchez S.A
//! --------------------------------
//!
//! Product	Qty	Subtotal
//! --------------------------------
//! Chapata	5	3.25 €
//! Baguette	1	0.55 €
//!
//! --------------------------------
//! TOTAL: 3.80 €
//! --------------------------------
//! Thank you for your purchase!
//! ```
//!
//! Columns are tab-separated. Rendering is deterministic: the same ticket
//! and config always produce the same text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::ticket::Ticket;

const RULE: &str = "--------------------------------";

// =============================================================================
// Receipt Config
// =============================================================================

/// Fixed texts printed on every receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptConfig {
    pub title: String,
    pub vendor_name: String,
    pub currency_symbol: String,
    pub closing_message: String,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        ReceiptConfig {
            title: "****** PURCHASE TICKET ******".to_string(),
            vendor_name: "Panaderia Sánchez S.A".to_string(),
            currency_symbol: "€".to_string(),
            closing_message: "Thank you for your purchase!".to_string(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A renderable receipt. Only constructible for a non-empty ticket.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    ticket: &'a Ticket,
    config: &'a ReceiptConfig,
}

impl<'a> Receipt<'a> {
    /// Fails with `EmptyTicket` when there is nothing to print.
    pub fn new(ticket: &'a Ticket, config: &'a ReceiptConfig) -> CoreResult<Self> {
        if ticket.is_empty() {
            return Err(CoreError::EmptyTicket);
        }

        Ok(Receipt { ticket, config })
    }
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = &self.config.currency_symbol;

        writeln!(f, "{}", self.config.title)?;
        writeln!(f, "{}", self.config.vendor_name)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f)?;
        writeln!(f, "Product\tQty\tSubtotal")?;
        writeln!(f, "{}", RULE)?;

        for line in self.ticket.lines() {
            writeln!(
                f,
                "{}\t{}\t{}",
                line.name(),
                line.quantity(),
                line.subtotal().with_symbol(symbol)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "TOTAL: {}", self.ticket.total_amount().with_symbol(symbol))?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "{}", self.config.closing_message)
    }
}

/// Renders the receipt text for `ticket`.
pub fn render_receipt(ticket: &Ticket, config: &ReceiptConfig) -> CoreResult<String> {
    Ok(Receipt::new(ticket, config)?.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Product;

    fn sample_ticket() -> Ticket {
        Ticket::new()
            .with_line_added(&Product::new("Chapata", Money::from_cents(65)), 5)
            .unwrap()
            .with_line_added(&Product::new("Baguette", Money::from_cents(55)), 1)
            .unwrap()
    }

    #[test]
    fn test_empty_ticket_is_rejected() {
        let result = render_receipt(&Ticket::new(), &ReceiptConfig::default());
        assert_eq!(result, Err(CoreError::EmptyTicket));
    }

    #[test]
    fn test_full_layout() {
        let text = render_receipt(&sample_ticket(), &ReceiptConfig::default()).unwrap();

        let expected = "\
****** PURCHASE TICKET ******
Panaderia Sánchez S.A
--------------------------------

Product\tQty\tSubtotal
--------------------------------
Chapata\t5\t3.25 €
Baguette\t1\t0.55 €

--------------------------------
TOTAL: 3.80 €
--------------------------------
Thank you for your purchase!
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_custom_vendor_and_symbol() {
        let config = ReceiptConfig {
            vendor_name: "Horno San Onofre".to_string(),
            currency_symbol: "EUR".to_string(),
            ..ReceiptConfig::default()
        };
        let text = render_receipt(&sample_ticket(), &config).unwrap();

        assert!(text.lines().any(|l| l == "Horno San Onofre"));
        assert!(text.contains("Baguette\t1\t0.55 EUR\n"));
        assert!(text.contains("TOTAL: 3.80 EUR\n"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let ticket = sample_ticket();
        let config = ReceiptConfig::default();
        assert_eq!(
            render_receipt(&ticket, &config).unwrap(),
            render_receipt(&ticket, &config).unwrap()
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ReceiptConfig = serde_json::from_str(r#"{"vendorName": "Obrador"}"#).unwrap();
        assert_eq!(config.vendor_name, "Obrador");
        assert_eq!(config.currency_symbol, "€");
    }
}
