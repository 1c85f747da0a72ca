use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use stocklet_core::Screen;

use super::Cursor;
use super::components::{CheckoutView, EditView, HomeView, ManageView};

pub(crate) fn draw(f: &mut Frame, screen: &Screen, cursor: &Cursor) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Screen body
            Constraint::Length(1), // Footer (Help)
        ])
        .split(f.area());

    render_header(f, chunks[0], screen);

    match screen {
        Screen::Home(home) => f.render_widget(HomeView::new(home, cursor), chunks[1]),
        Screen::Checkout(checkout) => {
            f.render_widget(CheckoutView::new(checkout, cursor), chunks[1])
        }
        Screen::Manage(manage) => f.render_widget(ManageView::new(manage, cursor), chunks[1]),
        Screen::Edit(edit) => f.render_widget(EditView::new(edit), chunks[1]),
    }

    render_footer(f, chunks[2], screen);
}

fn render_header(f: &mut Frame, area: Rect, screen: &Screen) {
    let header = match screen {
        Screen::Home(home) => &home.header,
        Screen::Checkout(checkout) => &checkout.header,
        Screen::Manage(manage) => &manage.header,
        Screen::Edit(edit) => &edit.header,
    };

    let line = Line::from(Span::styled(
        header.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(line), area);
}

fn render_footer(f: &mut Frame, area: Rect, screen: &Screen) {
    let hints: &[(&str, &str)] = match screen {
        Screen::Home(_) => &[("[↑/↓]", "move "), ("[enter]", "open "), ("[q]", "uit")],
        Screen::Checkout(_) => &[
            ("[↑/↓]", "move "),
            ("[enter]", "select/confirm "),
            ("[x]", " complete "),
            ("[esc]", " home"),
        ],
        Screen::Manage(_) => &[
            ("[↑/↓]", "move "),
            ("[enter]", "edit "),
            ("[a]", "dd "),
            ("[esc]", " home"),
        ],
        Screen::Edit(edit) if edit.can_delete => &[
            ("[tab]", " next field "),
            ("[enter]", " save "),
            ("[del]", " delete "),
            ("[esc]", " cancel"),
        ],
        Screen::Edit(_) => &[
            ("[tab]", " next field "),
            ("[enter]", " save "),
            ("[esc]", " cancel"),
        ],
    };

    let mut spans = Vec::new();
    for (keys, label) in hints {
        spans.push(Span::styled(*keys, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(*label));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
