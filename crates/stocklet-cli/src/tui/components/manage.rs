use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use stocklet_core::screen::{self, ManageScreen};

use super::list_lines;
use crate::tui::Cursor;

pub(crate) struct ManageView<'a> {
    model: &'a ManageScreen,
    cursor: &'a Cursor,
}

impl<'a> ManageView<'a> {
    pub fn new(model: &'a ManageScreen, cursor: &'a Cursor) -> Self {
        Self { model, cursor }
    }
}

impl Widget for ManageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);

        Paragraph::new(Line::from(self.model.instructions.clone())).render(chunks[0], buf);

        let block = Block::default().title("Items").borders(Borders::ALL);
        let inner = block.inner(chunks[1]);
        block.render(chunks[1], buf);

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
