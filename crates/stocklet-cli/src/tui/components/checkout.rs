//! Checkout screen: status lines on top, then the cart and the item
//! list side by side, mirroring the two-column layout of the original
//! screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use stocklet_core::screen::{self, CheckoutScreen};

use super::list_lines;
use crate::tui::Cursor;

pub(crate) struct CheckoutView<'a> {
    model: &'a CheckoutScreen,
    cursor: &'a Cursor,
}

impl<'a> CheckoutView<'a> {
    pub fn new(model: &'a CheckoutScreen, cursor: &'a Cursor) -> Self {
        Self { model, cursor }
    }
}

impl Widget for CheckoutView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);

        self.render_status(chunks[0], buf);

        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[1]);
        self.render_cart(columns[0], buf);
        self.render_items(columns[1], buf);
    }
}

impl CheckoutView<'_> {
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(
            self.model.total_line.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        match &self.model.quantity_input {
            Some(input) => lines.push(Line::from(vec![
                Span::raw(self.model.quantity_prompt.clone()),
                Span::styled(
                    input.clone(),
                    Style::default().add_modifier(Modifier::REVERSED),
                ),
            ])),
            None => lines.push(Line::from(Span::styled(
                self.model.quantity_prompt.clone(),
                Style::default().add_modifier(Modifier::DIM),
            ))),
        }

        if let Some(warning) = &self.model.warning {
            lines.push(Line::from(Span::styled(
                warning.clone(),
                Style::default().fg(Color::Red),
            )));
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn render_cart(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Cart").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = if self.model.cart_lines.is_empty() {
            vec![Line::from(Span::styled(
                screen::NO_CART_ITEMS,
                Style::default().add_modifier(Modifier::DIM),
            ))]
        } else {
            self.model
                .cart_lines
                .iter()
                .map(|line| Line::from(line.clone()))
                .collect()
        };

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_items(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Items").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.model.item_rows.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                screen::NO_ITEMS,
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(inner, buf);
            return;
        }

        Paragraph::new(list_lines(&self.model.item_rows, self.cursor.index)).render(inner, buf);
    }
}
