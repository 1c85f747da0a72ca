// SQLite inventory store
// Parameterized statements only; user input never becomes query text

mod db;
mod schema;

// Public API
pub use db::Store;
