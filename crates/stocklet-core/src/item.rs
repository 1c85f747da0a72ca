use serde::{Deserialize, Serialize};

/// A single inventory row. Owned by the store; the controller keeps a
/// read-only snapshot refreshed after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl InventoryItem {
    /// Row label used by the checkout and manage lists
    pub fn label(&self) -> String {
        format!("{} (Qty: {})", self.name, self.quantity)
    }
}
