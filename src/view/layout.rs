//! Shell layout: header, content area, status bar.
//!
//! The shell is persistent - every resolved unit renders inside it. Only
//! the startup splash takes the whole frame.

use crate::router::Resolved;
use crate::state::AppState;
use crate::view::page::{render_page, RenderedPage};
use crate::view::styles::Palette;
use crate::view::{help, navbar, search_overlay, splash};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Split the frame into header, content, and status bar.
pub fn shell_areas(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header bar
            Constraint::Min(0),    // content
            Constraint::Length(1), // status bar
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Render one full frame.
pub fn render_shell(frame: &mut Frame, state: &AppState, now: u64, palette: &Palette) {
    let area = frame.area();

    // The splash owns the whole frame until the gate opens.
    if !state.splash.is_ready() {
        splash::render_splash(frame, area, &state.splash, now, palette);
        return;
    }

    let (header_area, content_area, status_area) = shell_areas(area);
    let resolved = state.resolve_current();

    let title = match &resolved {
        Resolved::Ready(unit) | Resolved::NotFound(unit) => unit.title().to_string(),
        Resolved::Pending => "Loading".to_string(),
        Resolved::Failed(_) => "Error".to_string(),
    };
    navbar::render_header(frame, header_area, &state.menu, &title, palette);

    match resolved {
        Resolved::Ready(unit) | Resolved::NotFound(unit) => {
            if let Some(view) = state.current_view() {
                let rendered = render_page(unit, view, content_area.width, palette);
                render_content(frame, content_area, &rendered, view.scroll);
            }
        }
        Resolved::Pending => render_placeholder(frame, content_area, now, palette),
        Resolved::Failed(failure) => {
            render_failure(frame, content_area, &failure.to_string(), palette)
        }
    }

    render_status_bar(frame, status_area, state, palette);

    // Overlays, topmost last.
    navbar::render_dropdown(frame, content_area, &state.menu, palette);
    if state.search.is_open() {
        search_overlay::render_search_overlay(frame, area, &state.search, palette);
    }
    if state.help_visible {
        help::render_help_overlay(frame, area, palette);
    }
}

fn render_content(frame: &mut Frame, area: Rect, rendered: &RenderedPage, scroll: usize) {
    let visible: Vec<Line<'static>> = rendered
        .lines
        .iter()
        .skip(scroll)
        .take(usize::from(area.height))
        .cloned()
        .collect();
    frame.render_widget(Paragraph::new(visible), area);
}

/// The shared placeholder shown while a deferred production is pending.
/// Same visual language as the splash, with an indeterminate sweep.
fn render_placeholder(frame: &mut Frame, area: Rect, now: u64, palette: &Palette) {
    const BAR: usize = 24;
    let at = (now as usize) % BAR;
    let mut bar: Vec<char> = "-".repeat(BAR).chars().collect();
    bar[at] = '#';
    let bar: String = bar.into_iter().collect();

    let lines = vec![
        Line::default(),
        Line::from(Span::styled("Loading engineering excellence...", palette.dim)),
        Line::default(),
        Line::from(Span::styled(bar, palette.accent)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

/// Visible fallback for a failed deferred load. Never a blank area.
fn render_failure(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("This page could not be loaded.", palette.error)),
        Line::from(Span::styled(message.to_string(), palette.dim)),
        Line::default(),
        Line::from(Span::styled("Press r to retry.", palette.text)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut spans = vec![
        Span::styled(format!(" {} ", state.nav.current_path()), palette.accent),
        Span::raw(" "),
    ];
    if let Some(view) = state.current_view() {
        let total = match state.resolve_current() {
            Resolved::Ready(unit) | Resolved::NotFound(unit) => unit
                .sections()
                .iter()
                .filter(|s| s.revealed_on_view())
                .count(),
            _ => 0,
        };
        if total > 0 {
            spans.push(Span::styled(
                format!("viewed {}/{} ", view.reveal.revealed_count().min(total), total),
                palette.dim,
            ));
        }
    }
    spans.push(Span::styled(
        "m menu | / search | ? keys | q quit",
        palette.dim,
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
