//! Header bar and menu dropdown.
//!
//! The header is one line: brand on the left, top-level menu items to
//! the right, current page title at the far right. When the menu has
//! focus an item highlights, and an expanded item draws its dropdown
//! panel over the content below.

use crate::state::{menu_items, MenuState};
use crate::view::styles::Palette;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Render the one-line header into `area`.
pub fn render_header(frame: &mut Frame, area: Rect, menu: &MenuState, title: &str, palette: &Palette) {
    let mut spans = vec![
        Span::styled(" INNOVANT", palette.accent),
        Span::styled("ACADEMY ", palette.strong),
        Span::raw("  "),
    ];
    for (i, item) in menu_items().iter().enumerate() {
        let style = if menu.highlighted() == Some(i) {
            palette.selected
        } else {
            palette.text
        };
        let marker = if item.dropdown.is_empty() { "" } else { " v" };
        spans.push(Span::styled(format!(" {}{} ", item.label, marker), style));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(title.to_string(), palette.dim));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the expanded dropdown panel, if any, below the header.
pub fn render_dropdown(frame: &mut Frame, area: Rect, menu: &MenuState, palette: &Palette) {
    let Some((item, row)) = menu.expanded() else {
        return;
    };
    let entries = menu_items()[item].dropdown;
    if entries.is_empty() {
        return;
    }

    // Two lines per row plus the border.
    let height = (entries.len() as u16) * 2 + 2;
    let panel = Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width.saturating_sub(4).min(56),
        height: height.min(area.height),
    };
    frame.render_widget(Clear, panel);

    let mut lines = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let style = if i == row { palette.selected } else { palette.strong };
        let mut header = vec![Span::styled(entry.label, style)];
        if !entry.detail.is_empty() {
            header.push(Span::styled(format!("  ({})", entry.detail), palette.dim));
        }
        lines.push(Line::from(header));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.description),
            palette.dim,
        )));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", menu_items()[item].label))
            .borders(Borders::ALL)
            .border_style(palette.accent),
    );
    frame.render_widget(widget, panel);
}
