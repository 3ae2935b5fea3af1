//! # Ticket Commands
//!
//! Commands that read or change the selection and the ticket.
//!
//! ## Ticket Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  select 1 ──► qty 2 ──► add ──► ... ──► print                          │
//! │                          │                 │                            │
//! │                          │                 └── empty? "The ticket is    │
//! │                          │                     empty." notice           │
//! │                          └── bad qty? "Please select a product and a    │
//! │                              valid quantity." notice                    │
//! │                                                                         │
//! │  remove <i> takes lines off one at a time; there is no "clear all".    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use panaderia_core::TicketManager;

use crate::error::AppError;

/// Selects a catalog product by index.
pub fn select_product(manager: &mut TicketManager, index: usize) -> Result<String, AppError> {
    debug!(index, "select command");

    let product = manager.select_product(index)?;
    let text = format!("Selected {}", product.name);

    Ok(format!("{} ({})", text, current_line(manager)))
}

/// Stores the pending quantity; never fails.
pub fn set_quantity(manager: &mut TicketManager, quantity: Option<i64>) -> String {
    debug!(?quantity, "qty command");

    manager.set_quantity(quantity);
    match quantity {
        Some(q) => format!("Quantity {} ({})", q, current_line(manager)),
        None => "Quantity cleared".to_string(),
    }
}

/// Adds the selected product with the pending quantity.
pub fn add_line(manager: &mut TicketManager) -> Result<String, AppError> {
    debug!("add command");

    let symbol = manager.receipt_config().currency_symbol.clone();
    let line = manager.add_line()?;

    Ok(format!(
        "{} x{} = {}",
        line.name(),
        line.quantity(),
        line.subtotal().with_symbol(&symbol)
    ))
}

/// Removes a ticket line; an index past the end removes nothing.
pub fn remove_line(manager: &mut TicketManager, index: usize) -> String {
    debug!(index, "remove command");

    if manager.remove_line(index) {
        format!("Removed line {}", index)
    } else {
        format!("No line {}; ticket unchanged", index)
    }
}

/// Lists the ticket lines with the running totals.
pub fn show_ticket(manager: &TicketManager) -> String {
    debug!("ticket command");

    let symbol = &manager.receipt_config().currency_symbol;
    let mut rows = vec![format!("Adding: {}", current_line(manager))];

    if manager.ticket().is_empty() {
        rows.push("(ticket is empty)".to_string());
    }

    for (i, line) in manager.ticket().lines().iter().enumerate() {
        rows.push(format!(
            "[{}] {}\t{}\t{}",
            i,
            line.name(),
            line.quantity(),
            line.subtotal().with_symbol(symbol)
        ));
    }

    rows.push(format!("Total: {}", manager.total_amount().with_symbol(symbol)));
    rows.join("\n")
}

/// The full counter state as pretty JSON.
pub fn snapshot_json(manager: &TicketManager) -> Result<String, AppError> {
    debug!("json command");

    serde_json::to_string_pretty(&manager.snapshot())
        .map_err(|e| AppError::internal(e.to_string()))
}

/// Renders the receipt.
pub fn print_receipt(manager: &TicketManager) -> Result<String, AppError> {
    debug!("print command");

    let receipt = manager.render_receipt()?;
    Ok(receipt.trim_end().to_string())
}

/// "Baguette 0.55 € x 2 = 1.10 €", or a hint when nothing can be added.
fn current_line(manager: &TicketManager) -> String {
    let symbol = &manager.receipt_config().currency_symbol;

    match (manager.selected_product(), manager.pending_quantity()) {
        (Some(product), Some(quantity)) => format!(
            "{} {} x {} = {}",
            product.name,
            product.unit_price.with_symbol(symbol),
            quantity,
            manager.current_line_total().with_symbol(symbol)
        ),
        (Some(product), None) => format!("{} (no quantity)", product.name),
        (None, _) => "no product selected".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use panaderia_core::{Catalog, Money, Product};

    fn manager() -> TicketManager {
        TicketManager::new(
            Catalog::new(vec![
                Product::new("Chapata", Money::from_cents(65)),
                Product::new("Baguette", Money::from_cents(55)),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_select_reports_line_total() {
        let mut m = manager();
        m.set_quantity(Some(2));
        assert_eq!(
            select_product(&mut m, 1).unwrap(),
            "Selected Baguette (Baguette 0.55 € x 2 = 1.10 €)"
        );
        assert_eq!(select_product(&mut m, 2).unwrap_err().code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_and_show() {
        let mut m = manager();
        set_quantity(&mut m, Some(2));
        assert_eq!(add_line(&mut m).unwrap(), "Chapata x2 = 1.30 €");
        set_quantity(&mut m, Some(3));
        assert_eq!(add_line(&mut m).unwrap(), "Chapata x5 = 3.25 €");

        let shown = show_ticket(&m);
        assert!(shown.contains("[0] Chapata\t5\t3.25 €"));
        assert!(shown.ends_with("Total: 3.25 €"));
        assert!(shown.starts_with("Adding: Chapata 0.65 € x 1 = 0.65 €"));
    }

    #[test]
    fn test_add_rejects_bad_quantity() {
        let mut m = manager();
        set_quantity(&mut m, None);

        let err = add_line(&mut m).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Please select a product and a valid quantity.");
        assert!(m.ticket().is_empty());
    }

    #[test]
    fn test_remove_messages() {
        let mut m = manager();
        add_line(&mut m).unwrap();
        assert_eq!(remove_line(&mut m, 3), "No line 3; ticket unchanged");
        assert_eq!(remove_line(&mut m, 0), "Removed line 0");
        assert!(show_ticket(&m).contains("(ticket is empty)"));
    }

    #[test]
    fn test_print_empty_ticket() {
        let err = print_receipt(&manager()).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyTicket);
        assert_eq!(err.message, "The ticket is empty.");
    }

    #[test]
    fn test_snapshot_json_is_valid() {
        let mut m = manager();
        add_line(&mut m).unwrap();
        let json: serde_json::Value = serde_json::from_str(&snapshot_json(&m).unwrap()).unwrap();
        assert_eq!(json["summary"]["lineCount"], 1);
    }
}
