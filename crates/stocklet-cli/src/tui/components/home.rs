use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use stocklet_core::screen::HomeScreen;

use super::list_lines;
use crate::tui::Cursor;

pub(crate) struct HomeView<'a> {
    model: &'a HomeScreen,
    cursor: &'a Cursor,
}

impl<'a> HomeView<'a> {
    pub fn new(model: &'a HomeScreen, cursor: &'a Cursor) -> Self {
        Self { model, cursor }
    }
}

impl Widget for HomeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(self.model.greeting.clone()), Line::from("")];
        lines.extend(list_lines(&self.model.menu, self.cursor.index));
        Paragraph::new(lines).render(area, buf);
    }
}
