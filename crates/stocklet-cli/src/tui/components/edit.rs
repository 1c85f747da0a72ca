use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use stocklet_core::screen::EditScreen;
use stocklet_core::EditField;

pub(crate) struct EditView<'a> {
    model: &'a EditScreen,
}

impl<'a> EditView<'a> {
    pub fn new(model: &'a EditScreen) -> Self {
        Self { model }
    }
}

impl Widget for EditView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(self.model.prompt.clone()), Line::from("")];

        lines.push(field_line(
            "Name",
            &self.model.name,
            self.model.focus == EditField::Name,
        ));
        lines.push(field_line(
            "Quantity",
            &self.model.quantity,
            self.model.focus == EditField::Quantity,
        ));
        lines.push(field_line(
            "Price",
            &self.model.price,
            self.model.focus == EditField::Price,
        ));

        if let Some(warning) = &self.model.warning {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                warning.clone(),
                Style::default().fg(Color::Red),
            )));
        }

        Paragraph::new(lines).render(area, buf);
    }
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let text = format!("{}: {}", label, value);
    if focused {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::REVERSED),
        ))
    } else {
        Line::from(text)
    }
}
