//! Renderer-agnostic screen descriptions.
//!
//! `build` is a pure function of controller state: re-rendering the
//! same state yields an identical `Screen`, which is what the terminal
//! layer draws from. All user-facing text lives here.

use crate::cart::Cart;
use crate::item::InventoryItem;
use crate::view::{EditField, ViewState};

pub const HEADER: &str = "Inventory Manager";
pub const HOME_GREETING: &str = "Welcome to the Inventory Manager!";
pub const MENU_CHECKOUT: &str = "Check out";
pub const MENU_MANAGE: &str = "Manage inventory";
pub const MENU_QUIT: &str = "Quit";
pub const NO_ITEMS: &str = "No items available";
pub const NO_CART_ITEMS: &str = "No items selected";
pub const SELECT_AN_ITEM: &str = "Select an item";
pub const MANAGE_INSTRUCTIONS: &str = "Select an item to edit or delete, or add a new one";
pub const EDIT_PROMPT: &str = "Enter the name and quantity of the new item:";

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home(HomeScreen),
    Checkout(CheckoutScreen),
    Manage(ManageScreen),
    Edit(EditScreen),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeScreen {
    pub header: String,
    pub greeting: String,
    pub menu: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutScreen {
    pub header: String,
    /// One line per cart entry: "($1.500) - 3: Apple"
    pub cart_lines: Vec<String>,
    /// One row per inventory item: "Apple (Qty: 10)"
    pub item_rows: Vec<String>,
    /// Index of the item a quantity is being entered for
    pub selected: Option<usize>,
    /// "Enter Apple quantity: " when selected, "Select an item" otherwise
    pub quantity_prompt: String,
    /// Live quantity buffer; `None` while no item is selected
    pub quantity_input: Option<String>,
    pub total_line: String,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManageScreen {
    pub header: String,
    pub instructions: String,
    pub item_rows: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditScreen {
    pub header: String,
    pub prompt: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub focus: EditField,
    /// Edit mode exposes a delete control; Add mode does not
    pub can_delete: bool,
    pub warning: Option<String>,
}

pub(crate) fn build(
    items: &[InventoryItem],
    cart: &Cart,
    view: &ViewState,
    currency: &str,
) -> Screen {
    match view {
        ViewState::Home => Screen::Home(HomeScreen {
            header: HEADER.to_string(),
            greeting: HOME_GREETING.to_string(),
            menu: vec![
                MENU_CHECKOUT.to_string(),
                MENU_MANAGE.to_string(),
                MENU_QUIT.to_string(),
            ],
        }),
        ViewState::Checkout {
            selected,
            quantity_input,
            warning,
        } => {
            let cart_lines = cart
                .entries()
                .iter()
                .map(|entry| {
                    format!(
                        "({}) - {}: {}",
                        money(currency, entry.subtotal),
                        entry.quantity,
                        entry.item.name
                    )
                })
                .collect();

            let (quantity_prompt, quantity_input) = match selected.and_then(|i| items.get(i)) {
                Some(item) => (
                    format!("Enter {} quantity: ", item.name),
                    Some(quantity_input.clone()),
                ),
                None => (SELECT_AN_ITEM.to_string(), None),
            };

            Screen::Checkout(CheckoutScreen {
                header: HEADER.to_string(),
                cart_lines,
                item_rows: item_rows(items),
                selected: *selected,
                quantity_prompt,
                quantity_input,
                total_line: format!("Total: {}", money(currency, cart.total())),
                warning: warning.clone(),
            })
        }
        ViewState::Manage => Screen::Manage(ManageScreen {
            header: HEADER.to_string(),
            instructions: MANAGE_INSTRUCTIONS.to_string(),
            item_rows: item_rows(items),
        }),
        ViewState::EditDialog {
            target,
            fields,
            focus,
            warning,
        } => Screen::Edit(EditScreen {
            header: HEADER.to_string(),
            prompt: EDIT_PROMPT.to_string(),
            name: fields.name.clone(),
            quantity: fields.quantity.clone(),
            price: fields.price.clone(),
            focus: *focus,
            can_delete: target.is_some(),
            warning: warning.clone(),
        }),
    }
}

fn item_rows(items: &[InventoryItem]) -> Vec<String> {
    items.iter().map(InventoryItem::label).collect()
}

fn money(currency: &str, value: f64) -> String {
    format!("{}{:.3}", currency, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::EditFields;

    fn items() -> Vec<InventoryItem> {
        vec![
            InventoryItem {
                id: 1,
                name: "Apple".to_string(),
                quantity: 10,
                price: 0.5,
            },
            InventoryItem {
                id: 2,
                name: "Banana".to_string(),
                quantity: 5,
                price: 10.0,
            },
        ]
    }

    #[test]
    fn test_checkout_lines_use_three_decimal_money() {
        let items = items();
        let mut cart = Cart::new();
        cart.add_entry(&items[0], 3).unwrap();

        let screen = build(&items, &cart, &ViewState::checkout(), "$");
        let Screen::Checkout(checkout) = screen else {
            panic!("expected checkout screen");
        };

        assert_eq!(checkout.cart_lines, vec!["($1.500) - 3: Apple"]);
        assert_eq!(checkout.total_line, "Total: $1.500");
        assert_eq!(checkout.item_rows[0], "Apple (Qty: 10)");
    }

    #[test]
    fn test_checkout_prompt_follows_selection() {
        let items = items();
        let cart = Cart::new();

        let unselected = build(&items, &cart, &ViewState::checkout(), "$");
        let Screen::Checkout(unselected) = unselected else {
            panic!("expected checkout screen");
        };
        assert_eq!(unselected.quantity_prompt, SELECT_AN_ITEM);
        assert_eq!(unselected.quantity_input, None);

        let view = ViewState::Checkout {
            selected: Some(1),
            quantity_input: "4".to_string(),
            warning: None,
        };
        let selected = build(&items, &cart, &view, "$");
        let Screen::Checkout(selected) = selected else {
            panic!("expected checkout screen");
        };
        assert_eq!(selected.quantity_prompt, "Enter Banana quantity: ");
        assert_eq!(selected.quantity_input, Some("4".to_string()));
    }

    #[test]
    fn test_edit_screen_only_offers_delete_in_edit_mode() {
        let items = items();
        let cart = Cart::new();

        let add = build(&items, &cart, &ViewState::add_dialog(), "$");
        let Screen::Edit(add) = add else {
            panic!("expected edit screen");
        };
        assert!(!add.can_delete);

        let edit = build(
            &items,
            &cart,
            &ViewState::edit_dialog(1, EditFields::default()),
            "$",
        );
        let Screen::Edit(edit) = edit else {
            panic!("expected edit screen");
        };
        assert!(edit.can_delete);
    }

    #[test]
    fn test_custom_currency_symbol() {
        let items = items();
        let cart = Cart::new();
        let screen = build(&items, &cart, &ViewState::checkout(), "€");
        let Screen::Checkout(checkout) = screen else {
            panic!("expected checkout screen");
        };
        assert_eq!(checkout.total_line, "Total: €0.000");
    }
}
