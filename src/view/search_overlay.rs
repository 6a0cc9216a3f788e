//! Search overlay widget.
//!
//! A centered modal over the current page: query line on top, filtered
//! catalog results underneath, badge per record kind. An empty query
//! shows a prompt; a query with no matches says so explicitly instead of
//! leaving a blank box.

use crate::state::SearchOverlayState;
use crate::view::styles::Palette;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Render the overlay centered on `area`.
pub fn render_search_overlay(
    frame: &mut Frame,
    area: Rect,
    search: &SearchOverlayState,
    palette: &Palette,
) {
    let popup = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Search: ", palette.strong),
            Span::styled(search.query().to_string(), palette.text),
            Span::styled("_", palette.accent),
        ]),
        Line::default(),
    ];

    let results = search.results();
    if search.query().trim().is_empty() {
        lines.push(Line::from(Span::styled(
            "Search courses, pages, and more...",
            palette.dim,
        )));
    } else if results.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No results found for \"{}\"", search.query()),
            palette.dim,
        )));
    } else {
        for (i, record) in results.iter().enumerate() {
            let style = if i == search.selected() {
                palette.selected
            } else {
                palette.text
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<6} ", record.kind.badge()), palette.dim),
                Span::styled(record.title, style),
            ]));
        }
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(palette.accent),
    );
    frame.render_widget(widget, popup);
}

/// A rect covering `percent_x` by `percent_y` of `area`, centered.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
