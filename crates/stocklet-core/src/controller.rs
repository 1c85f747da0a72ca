//! Application controller.
//!
//! Owns the item snapshot, the cart, and the view state; the renderer
//! only ever calls `render` and `dispatch`. One action is fully
//! processed (state mutated, repository calls completed) before the
//! next is accepted, so no locking exists anywhere.

use crate::action::Action;
use crate::cart::Cart;
use crate::error::{Error, Field, Result};
use crate::item::InventoryItem;
use crate::repo::Repository;
use crate::screen::{self, Screen};
use crate::view::{EditFields, ViewState};

pub struct App<R: Repository> {
    repo: R,
    items: Vec<InventoryItem>,
    cart: Cart,
    view: ViewState,
    currency: String,
    running: bool,
}

impl<R: Repository> App<R> {
    /// Load the initial snapshot. A storage failure here is the one
    /// fatal error class; everything later is recovered into warnings.
    pub fn new(repo: R) -> Result<Self> {
        let items = repo.list_items()?;
        Ok(Self {
            repo,
            items,
            cart: Cart::new(),
            view: ViewState::Home,
            currency: "$".to_string(),
            running: true,
        })
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Pure render of the current state
    pub fn render(&self) -> Screen {
        screen::build(&self.items, &self.cart, &self.view, &self.currency)
    }

    /// Single entry point for user intents. Domain errors never leave
    /// the controller: they become the active screen's warning.
    pub fn dispatch(&mut self, action: Action) {
        if let Err(err) = self.apply(action) {
            self.set_warning(err.to_string());
        }
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => {
                if matches!(self.view, ViewState::Home) {
                    self.running = false;
                }
                Ok(())
            }
            Action::GoCheckout => {
                if matches!(self.view, ViewState::Home) {
                    self.view = ViewState::checkout();
                }
                Ok(())
            }
            Action::GoManage => {
                if matches!(self.view, ViewState::Home | ViewState::EditDialog { .. }) {
                    self.view = ViewState::Manage;
                }
                Ok(())
            }
            Action::GoHome => {
                if matches!(self.view, ViewState::Manage | ViewState::Checkout { .. }) {
                    self.view = ViewState::Home;
                }
                Ok(())
            }
            Action::SelectCheckoutItem(index) => {
                if index < self.items.len()
                    && let ViewState::Checkout {
                        selected,
                        quantity_input,
                        warning,
                    } = &mut self.view
                {
                    *selected = Some(index);
                    quantity_input.clear();
                    *warning = None;
                }
                Ok(())
            }
            Action::SubmitCheckoutQuantity => self.submit_checkout_quantity(),
            Action::CompleteCheckout => self.complete_checkout(),
            Action::OpenAdd => {
                if matches!(self.view, ViewState::Manage) {
                    self.view = ViewState::add_dialog();
                }
                Ok(())
            }
            Action::OpenEdit(index) => {
                if matches!(self.view, ViewState::Manage)
                    && let Some(item) = self.items.get(index)
                {
                    let fields = EditFields {
                        name: item.name.clone(),
                        quantity: item.quantity.to_string(),
                        price: item.price.to_string(),
                    };
                    self.view = ViewState::edit_dialog(item.id, fields);
                }
                Ok(())
            }
            Action::SaveItem => self.save_item(),
            Action::DeleteItem => self.delete_item(),
            Action::FocusNextField => {
                if let ViewState::EditDialog { focus, .. } = &mut self.view {
                    *focus = focus.next();
                }
                Ok(())
            }
            Action::Input(c) => {
                if let Some(buffer) = self.active_buffer() {
                    buffer.push(c);
                }
                Ok(())
            }
            Action::Backspace => {
                if let Some(buffer) = self.active_buffer() {
                    buffer.pop();
                }
                Ok(())
            }
        }
    }

    /// The text buffer key input currently lands in, if any
    fn active_buffer(&mut self) -> Option<&mut String> {
        match &mut self.view {
            ViewState::Checkout {
                selected: Some(_),
                quantity_input,
                ..
            } => Some(quantity_input),
            ViewState::EditDialog { fields, focus, .. } => Some(match focus {
                crate::view::EditField::Name => &mut fields.name,
                crate::view::EditField::Quantity => &mut fields.quantity,
                crate::view::EditField::Price => &mut fields.price,
            }),
            _ => None,
        }
    }

    fn submit_checkout_quantity(&mut self) -> Result<()> {
        let ViewState::Checkout {
            selected,
            quantity_input,
            ..
        } = &self.view
        else {
            return Ok(());
        };

        let index = selected.ok_or(Error::NoItemSelected)?;
        let quantity = parse_quantity(quantity_input)?;
        let item = self.items.get(index).ok_or(Error::NoItemSelected)?;
        self.cart.add_entry(item, quantity)?;

        // Success clears selection, input, and warning; on any failure
        // above the selection is retained so the user can retry.
        self.view = ViewState::checkout();
        Ok(())
    }

    fn complete_checkout(&mut self) -> Result<()> {
        if !matches!(self.view, ViewState::Checkout { .. }) {
            return Ok(());
        }

        // Commit-time integrity check: aggregate duplicate lines and
        // re-validate against the live snapshot before anything is
        // applied. Stock may have changed since add time through the
        // manage screen.
        let deductions = self.cart.deductions();
        for &(id, requested) in &deductions {
            let item = self
                .items
                .iter()
                .find(|item| item.id == id)
                .ok_or(Error::NotFound(id))?;
            if requested > item.quantity {
                return Err(Error::WouldGoNegative {
                    id,
                    available: item.quantity,
                    requested,
                });
            }
        }

        if !deductions.is_empty() {
            self.repo.decrement_quantities(&deductions)?;
            self.refresh_snapshot()?;
        }

        self.cart.clear();
        self.view = ViewState::Home;
        Ok(())
    }

    fn save_item(&mut self) -> Result<()> {
        let ViewState::EditDialog { target, fields, .. } = &self.view else {
            return Ok(());
        };

        let name = fields.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidField(Field::Name));
        }
        let quantity = fields
            .quantity
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|quantity| *quantity >= 0)
            .ok_or(Error::InvalidField(Field::Quantity))?;
        let price = fields
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or(Error::InvalidField(Field::Price))?;

        let name = name.to_string();
        match *target {
            None => {
                self.repo.insert_item(&name, quantity, price)?;
            }
            Some(id) => {
                self.repo.update_item(id, &name, quantity, price)?;
            }
        }

        self.refresh_snapshot()?;
        self.view = ViewState::Manage;
        Ok(())
    }

    fn delete_item(&mut self) -> Result<()> {
        let id = match &self.view {
            ViewState::EditDialog {
                target: Some(id), ..
            } => *id,
            _ => return Ok(()),
        };

        self.repo.delete_item(id)?;
        self.refresh_snapshot()?;
        self.view = ViewState::Manage;
        Ok(())
    }

    fn refresh_snapshot(&mut self) -> Result<()> {
        self.items = self.repo.list_items()?;
        Ok(())
    }

    fn set_warning(&mut self, message: String) {
        match &mut self.view {
            ViewState::Checkout { warning, .. } => *warning = Some(message),
            ViewState::EditDialog { warning, .. } => *warning = Some(message),
            // Home and Manage carry no warning slot; their actions
            // cannot fail in a recoverable way.
            _ => {}
        }
    }
}

fn parse_quantity(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .ok()
        .filter(|quantity| *quantity >= 0)
        .ok_or(Error::InvalidQuantity)
}
