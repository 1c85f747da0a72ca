// Domain core for the stocklet inventory manager.
// Holds no I/O: the terminal renderer and the SQLite store plug in
// through the `Screen` view models and the `Repository` trait.

mod action;
mod cart;
mod controller;
mod item;
mod view;

pub mod error;
pub mod repo;
pub mod screen;

pub use action::Action;
pub use cart::{Cart, CartEntry};
pub use controller::App;
pub use error::{Error, Field, Result};
pub use item::InventoryItem;
pub use repo::Repository;
pub use screen::Screen;
pub use view::{EditField, EditFields, ViewState};
