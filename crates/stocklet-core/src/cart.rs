use crate::error::{Error, Result};
use crate::item::InventoryItem;

/// One line of the active checkout session.
///
/// The entry holds its own copy of the item as it looked when added;
/// the subtotal is fixed at add time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub item: InventoryItem,
    pub quantity: i64,
    pub subtotal: f64,
}

/// In-memory accumulation of checkout lines. Never persisted; cleared
/// on commit or process exit.
#[derive(Debug, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line for `requested` units of `item`.
    ///
    /// Validated against the item's stock at add time only; the commit
    /// path re-checks aggregates. A failed add leaves the cart
    /// untouched. Entries are intentionally not deduplicated: adding
    /// the same item twice produces two independent lines.
    pub fn add_entry(&mut self, item: &InventoryItem, requested: i64) -> Result<()> {
        if requested > item.quantity {
            return Err(Error::InsufficientStock);
        }
        self.entries.push(CartEntry {
            item: item.clone(),
            quantity: requested,
            subtotal: item.price * requested as f64,
        });
        Ok(())
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all line subtotals; 0 for an empty cart
    pub fn total(&self) -> f64 {
        // Fold from +0.0 explicitly: the stdlib's float `Sum` identity is
        // -0.0, which would make an empty cart format as "-0.000".
        self.entries
            .iter()
            .map(|entry| entry.subtotal)
            .fold(0.0, |acc, subtotal| acc + subtotal)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Per-item stock deductions this cart would apply on commit,
    /// aggregated across duplicate lines, in first-appearance order.
    pub fn deductions(&self) -> Vec<(i64, i64)> {
        let mut totals: Vec<(i64, i64)> = Vec::new();
        for entry in &self.entries {
            match totals.iter_mut().find(|(id, _)| *id == entry.item.id) {
                Some((_, amount)) => *amount += entry.quantity,
                None => totals.push((entry.item.id, entry.quantity)),
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> InventoryItem {
        InventoryItem {
            id: 1,
            name: "Apple".to_string(),
            quantity: 10,
            price: 0.5,
        }
    }

    fn banana() -> InventoryItem {
        InventoryItem {
            id: 2,
            name: "Banana".to_string(),
            quantity: 5,
            price: 10.0,
        }
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_total_is_sum_of_subtotals_regardless_of_order() {
        let mut forward = Cart::new();
        forward.add_entry(&apple(), 3).unwrap();
        forward.add_entry(&banana(), 2).unwrap();

        let mut reverse = Cart::new();
        reverse.add_entry(&banana(), 2).unwrap();
        reverse.add_entry(&apple(), 3).unwrap();

        assert_eq!(forward.total(), 0.5 * 3.0 + 10.0 * 2.0);
        assert_eq!(forward.total(), reverse.total());
    }

    #[test]
    fn test_add_beyond_stock_never_mutates() {
        let mut cart = Cart::new();
        cart.add_entry(&apple(), 3).unwrap();

        let err = cart.add_entry(&banana(), 6).unwrap_err();
        assert!(matches!(err, Error::InsufficientStock));
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.total(), 1.5);
    }

    #[test]
    fn test_duplicate_entries_are_independent_lines() {
        let mut cart = Cart::new();
        cart.add_entry(&apple(), 3).unwrap();
        cart.add_entry(&apple(), 2).unwrap();

        assert_eq!(cart.entries().len(), 2);
        assert_eq!(cart.total(), 2.5);
    }

    #[test]
    fn test_deductions_aggregate_duplicate_lines() {
        let mut cart = Cart::new();
        cart.add_entry(&apple(), 3).unwrap();
        cart.add_entry(&banana(), 1).unwrap();
        cart.add_entry(&apple(), 2).unwrap();

        assert_eq!(cart.deductions(), vec![(1, 5), (2, 1)]);
    }

    #[test]
    fn test_zero_quantity_entry_is_allowed() {
        let mut cart = Cart::new();
        cart.add_entry(&apple(), 0).unwrap();
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_clear_empties_entries() {
        let mut cart = Cart::new();
        cart.add_entry(&apple(), 1).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.deductions(), Vec::new());
    }
}
