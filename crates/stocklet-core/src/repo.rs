use crate::error::Result;
use crate::item::InventoryItem;

/// Persistent item store consumed by the controller.
///
/// Implementations must use parameterized queries exclusively; user
/// input never reaches the storage layer as query text.
pub trait Repository {
    /// All items in id order
    fn list_items(&self) -> Result<Vec<InventoryItem>>;

    /// Insert a new item and return its assigned id
    fn insert_item(&mut self, name: &str, quantity: i64, price: f64) -> Result<i64>;

    /// Update every field of an existing item (`Error::NotFound` if absent)
    fn update_item(&mut self, id: i64, name: &str, quantity: i64, price: f64) -> Result<()>;

    /// Remove an item by id (`Error::NotFound` if absent)
    fn delete_item(&mut self, id: i64) -> Result<()>;

    /// Apply all stock deductions as one transaction.
    ///
    /// Either every `(id, amount)` pair is applied or none is: the
    /// whole call fails with `Error::NotFound` or
    /// `Error::WouldGoNegative` if any row is missing or would drop
    /// below zero.
    fn decrement_quantities(&mut self, deductions: &[(i64, i64)]) -> Result<()>;
}
