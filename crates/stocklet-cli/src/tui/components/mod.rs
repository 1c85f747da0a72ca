mod checkout;
mod edit;
mod home;
mod manage;

pub(crate) use checkout::CheckoutView;
pub(crate) use edit::EditView;
pub(crate) use home::HomeView;
pub(crate) use manage::ManageView;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Build list rows with the browse cursor highlighted
pub(super) fn list_lines<'a>(rows: &'a [String], cursor: usize) -> Vec<Line<'a>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            if index == cursor {
                Line::from(Span::styled(
                    format!("> {}", row),
                    Style::default().add_modifier(Modifier::REVERSED),
                ))
            } else {
                Line::from(format!("  {}", row))
            }
        })
        .collect()
}
