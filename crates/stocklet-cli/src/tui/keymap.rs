//! Key → action mapping.
//!
//! Raw key events become tagged `Action` values here; the controller
//! never sees crossterm types, and no per-item callbacks exist. List
//! movement stays local to the renderer and returns `None`.

use crossterm::event::{KeyCode, KeyEvent};

use stocklet_core::screen::{CheckoutScreen, EditScreen, HomeScreen, ManageScreen};
use stocklet_core::{Action, Screen};

use super::Cursor;

/// Length of the navigable list on each screen
pub(crate) fn list_len(screen: &Screen) -> usize {
    match screen {
        Screen::Home(home) => home.menu.len(),
        Screen::Checkout(checkout) => checkout.item_rows.len(),
        Screen::Manage(manage) => manage.item_rows.len(),
        Screen::Edit(_) => 0,
    }
}

pub(crate) fn handle_key(screen: &Screen, cursor: &mut Cursor, key: KeyEvent) -> Option<Action> {
    match screen {
        Screen::Home(home) => handle_home(home, cursor, key),
        Screen::Checkout(checkout) => handle_checkout(checkout, cursor, key),
        Screen::Manage(manage) => handle_manage(manage, cursor, key),
        Screen::Edit(edit) => handle_edit(edit, key),
    }
}

fn handle_home(home: &HomeScreen, cursor: &mut Cursor, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            step_down(cursor, home.menu.len());
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            step_up(cursor);
            None
        }
        // Menu order: Check out, Manage inventory, Quit
        KeyCode::Enter => match cursor.index {
            0 => Some(Action::GoCheckout),
            1 => Some(Action::GoManage),
            _ => Some(Action::Quit),
        },
        KeyCode::Char('c') => Some(Action::GoCheckout),
        KeyCode::Char('m') => Some(Action::GoManage),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn handle_checkout(checkout: &CheckoutScreen, cursor: &mut Cursor, key: KeyEvent) -> Option<Action> {
    // The quantity field is live whenever an item is selected
    let typing = checkout.quantity_input.is_some();

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            step_down(cursor, checkout.item_rows.len());
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            step_up(cursor);
            None
        }
        KeyCode::Enter if typing => Some(Action::SubmitCheckoutQuantity),
        KeyCode::Enter | KeyCode::Char(' ') => {
            (!checkout.item_rows.is_empty()).then(|| Action::SelectCheckoutItem(cursor.index))
        }
        KeyCode::Char(c) if typing && c.is_ascii_digit() => Some(Action::Input(c)),
        KeyCode::Backspace if typing => Some(Action::Backspace),
        KeyCode::Char('x') => Some(Action::CompleteCheckout),
        KeyCode::Esc => Some(Action::GoHome),
        _ => None,
    }
}

fn handle_manage(manage: &ManageScreen, cursor: &mut Cursor, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            step_down(cursor, manage.item_rows.len());
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            step_up(cursor);
            None
        }
        KeyCode::Enter => {
            (!manage.item_rows.is_empty()).then(|| Action::OpenEdit(cursor.index))
        }
        KeyCode::Char('a') => Some(Action::OpenAdd),
        KeyCode::Esc | KeyCode::Char('h') => Some(Action::GoHome),
        _ => None,
    }
}

fn handle_edit(edit: &EditScreen, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Tab => Some(Action::FocusNextField),
        KeyCode::Enter => Some(Action::SaveItem),
        KeyCode::Delete if edit.can_delete => Some(Action::DeleteItem),
        KeyCode::Esc => Some(Action::GoManage),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

fn step_down(cursor: &mut Cursor, len: usize) {
    if len > 0 && cursor.index + 1 < len {
        cursor.index += 1;
    }
}

fn step_up(cursor: &mut Cursor) {
    cursor.index = cursor.index.saturating_sub(1);
}
