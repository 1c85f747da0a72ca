use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

use stocklet_core::{Error, InventoryItem, Repository, Result};

use crate::schema;

/// Seed rows inserted on first run into an empty table
const EXAMPLE_ITEMS: [(&str, i64, f64); 3] = [
    ("Apple", 10, 0.5),
    ("Banana", 5, 10.0),
    ("Orange", 8, 1.0),
];

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path).map_err(|err| {
            Error::Storage(format!(
                "failed to open database {}: {}",
                db_path.display(),
                err
            ))
        })?;

        let store = Self { conn };
        schema::init_schema(&store.conn)?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(storage)?;
        let store = Self { conn };
        schema::init_schema(&store.conn)?;
        Ok(store)
    }

    /// Insert the example rows if the table is empty. Safe to call on
    /// every startup.
    pub fn seed_example_items(&mut self) -> Result<()> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM inventory", [], |row| row.get(0))
            .map_err(storage)?;
        if count > 0 {
            return Ok(());
        }

        for (name, quantity, price) in EXAMPLE_ITEMS {
            self.conn
                .execute(
                    "INSERT INTO inventory (name, quantity, price) VALUES (?1, ?2, ?3)",
                    params![name, quantity, price],
                )
                .map_err(storage)?;
        }
        Ok(())
    }
}

impl Repository for Store {
    fn list_items(&self) -> Result<Vec<InventoryItem>> {
        let mut stmt = self
            .conn
            .prepare(
                r#"
                SELECT id, name, quantity, price
                FROM inventory
                ORDER BY id
                "#,
            )
            .map_err(storage)?;

        let items = stmt
            .query_map([], |row| {
                Ok(InventoryItem {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    quantity: row.get(2)?,
                    price: row.get(3)?,
                })
            })
            .map_err(storage)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(storage)?;

        Ok(items)
    }

    fn insert_item(&mut self, name: &str, quantity: i64, price: f64) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO inventory (name, quantity, price) VALUES (?1, ?2, ?3)",
                params![name, quantity, price],
            )
            .map_err(storage)?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_item(&mut self, id: i64, name: &str, quantity: i64, price: f64) -> Result<()> {
        let changed = self
            .conn
            .execute(
                r#"
                UPDATE inventory
                SET name = ?1, quantity = ?2, price = ?3
                WHERE id = ?4
                "#,
                params![name, quantity, price, id],
            )
            .map_err(storage)?;

        if changed == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }

    fn delete_item(&mut self, id: i64) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM inventory WHERE id = ?1", params![id])
            .map_err(storage)?;

        if changed == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }

    fn decrement_quantities(&mut self, deductions: &[(i64, i64)]) -> Result<()> {
        let tx = self.conn.transaction().map_err(storage)?;

        for &(id, amount) in deductions {
            let available: i64 = tx
                .query_row(
                    "SELECT quantity FROM inventory WHERE id = ?1",
                    params![id],
                    |row| row.get(0),
                )
                .optional()
                .map_err(storage)?
                .ok_or(Error::NotFound(id))?;

            if amount > available {
                // Dropping the transaction rolls back anything applied
                return Err(Error::WouldGoNegative {
                    id,
                    available,
                    requested: amount,
                });
            }

            tx.execute(
                "UPDATE inventory SET quantity = quantity - ?1 WHERE id = ?2",
                params![amount, id],
            )
            .map_err(storage)?;
        }

        tx.commit().map_err(storage)?;
        Ok(())
    }
}

pub(crate) fn storage(err: rusqlite::Error) -> Error {
    Error::Storage(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Store {
        let mut store = Store::open_in_memory().unwrap();
        store.seed_example_items().unwrap();
        store
    }

    #[test]
    fn test_schema_initialization() {
        let store = Store::open_in_memory().unwrap();
        let items = store.list_items().unwrap();
        assert_eq!(items.len(), 0);
    }

    #[test]
    fn test_seeding_inserts_examples_once() {
        let mut store = seeded();

        let items = store.list_items().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Apple");
        assert_eq!(items[0].quantity, 10);
        assert_eq!(items[0].price, 0.5);
        assert_eq!(items[1].name, "Banana");
        assert_eq!(items[2].name, "Orange");

        // Second call is a no-op
        store.seed_example_items().unwrap();
        assert_eq!(store.list_items().unwrap().len(), 3);
    }

    #[test]
    fn test_insert_and_list_in_id_order() {
        let mut store = Store::open_in_memory().unwrap();

        let first = store.insert_item("Pear", 7, 0.8).unwrap();
        let second = store.insert_item("Plum", 2, 0.3).unwrap();
        assert!(second > first);

        let items = store.list_items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, first);
        assert_eq!(items[0].name, "Pear");
        assert_eq!(items[1].id, second);
    }

    #[test]
    fn test_insert_with_hostile_name_is_parameterized() {
        let mut store = Store::open_in_memory().unwrap();

        let name = "Robert'); DROP TABLE inventory;--";
        let id = store.insert_item(name, 1, 1.0).unwrap();

        let items = store.list_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].name, name);
    }

    #[test]
    fn test_update_roundtrip_and_not_found() {
        let mut store = seeded();

        store.update_item(2, "Banana", 6, 9.5).unwrap();
        let items = store.list_items().unwrap();
        assert_eq!(items[1].quantity, 6);
        assert_eq!(items[1].price, 9.5);

        let err = store.update_item(99, "Ghost", 1, 1.0).unwrap_err();
        assert!(matches!(err, Error::NotFound(99)));
    }

    #[test]
    fn test_delete_removes_row_and_not_found() {
        let mut store = seeded();

        store.delete_item(2).unwrap();
        let items = store.list_items().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.id != 2));

        let err = store.delete_item(2).unwrap_err();
        assert!(matches!(err, Error::NotFound(2)));
    }

    #[test]
    fn test_decrement_applies_all_rows() {
        let mut store = seeded();

        store.decrement_quantities(&[(1, 3), (3, 8)]).unwrap();

        let items = store.list_items().unwrap();
        assert_eq!(items[0].quantity, 7);
        assert_eq!(items[2].quantity, 0);
    }

    #[test]
    fn test_decrement_is_atomic_on_overdraw() {
        let mut store = seeded();

        // Second pair overdraws Banana (stock 5); the first must not
        // be left applied
        let err = store.decrement_quantities(&[(1, 3), (2, 6)]).unwrap_err();
        assert!(matches!(
            err,
            Error::WouldGoNegative {
                id: 2,
                available: 5,
                requested: 6,
            }
        ));

        let items = store.list_items().unwrap();
        assert_eq!(items[0].quantity, 10);
        assert_eq!(items[1].quantity, 5);
    }

    #[test]
    fn test_decrement_unknown_id_is_not_found() {
        let mut store = seeded();

        let err = store.decrement_quantities(&[(99, 1)]).unwrap_err();
        assert!(matches!(err, Error::NotFound(99)));
    }

    #[test]
    fn test_reopen_persists_rows() {
        let dir = tempfile::TempDir::new().unwrap();
        let db_path = dir.path().join("inventory.db");

        {
            let mut store = Store::open(&db_path).unwrap();
            store.seed_example_items().unwrap();
            store.decrement_quantities(&[(1, 4)]).unwrap();
        }

        let store = Store::open(&db_path).unwrap();
        let items = store.list_items().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].quantity, 6);
    }
}
