//! # Catalog Commands
//!
//! Read-only view of the products on sale.

use tracing::debug;

use panaderia_core::TicketManager;

/// Lists every product with its index and price, marking the selection.
///
/// ```text
///   [0] Chapata       0.65 €
/// * [1] Baguette      0.55 €
/// ```
pub fn list_catalog(manager: &TicketManager) -> String {
    debug!("catalog command");

    if manager.catalog().is_empty() {
        return "(catalog is empty)".to_string();
    }

    let symbol = &manager.receipt_config().currency_symbol;
    let width = manager
        .catalog()
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);

    manager
        .catalog()
        .iter()
        .enumerate()
        .map(|(i, product)| {
            let marker = if manager.selected_index() == Some(i) { '*' } else { ' ' };
            format!(
                "{} [{}] {:<width$}  {}",
                marker,
                i,
                product.name,
                product.unit_price.with_symbol(symbol),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use panaderia_core::Catalog;

    #[test]
    fn test_lists_default_menu() {
        let mut manager = TicketManager::default();
        manager.select_product(3).unwrap();

        let listing = list_catalog(&manager);
        let rows: Vec<&str> = listing.lines().collect();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], "  [0] Chapata       0.65 €");
        assert_eq!(rows[3], "* [3] Pan de Molde  1.20 €");
    }

    #[test]
    fn test_empty_catalog() {
        let manager = TicketManager::new(Catalog::new(Vec::new()).unwrap());
        assert_eq!(list_catalog(&manager), "(catalog is empty)");
    }
}
