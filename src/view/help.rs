//! Key-hints overlay.
//!
//! Centered modal listing the keyboard surface, grouped by area.
//! Toggled with '?', dismissed with Esc or '?'.

use crate::view::styles::Palette;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const GROUPS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("m", "focus the menu"),
            ("Left/Right", "move across menu items"),
            ("Down/Up", "open and walk a dropdown"),
            ("Enter", "follow the highlighted item"),
            ("Backspace", "back to the previous page"),
        ],
    ),
    (
        "Page",
        &[
            ("Up/Down, PgUp/PgDn", "scroll"),
            ("Tab", "cycle in-page links"),
            ("Enter", "follow the highlighted link"),
            ("[ / ]", "switch portfolio category or FAQ row"),
            ("Space", "toggle the highlighted FAQ answer"),
            ("r", "retry a failed page load"),
        ],
    ),
    (
        "Application",
        &[
            ("/", "search"),
            ("?", "this overlay"),
            ("q", "quit"),
        ],
    ),
];

/// Render the overlay centered on `area`.
pub fn render_help_overlay(frame: &mut Frame, area: Rect, palette: &Palette) {
    let mut lines = Vec::new();
    for (group, keys) in GROUPS {
        lines.push(Line::from(Span::styled(*group, palette.accent)));
        for (key, what) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<18}"), palette.strong),
                Span::styled(*what, palette.text),
            ]));
        }
        lines.push(Line::default());
    }

    let height = (lines.len() as u16 + 2).min(area.height);
    let width = 52.min(area.width);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_style(palette.accent),
        ),
        popup,
    );
}
