//! Startup splash screen.
//!
//! Shown for a fixed interval at mount, progress bar driven by elapsed
//! time rather than by any actual readiness signal.

use crate::state::SplashState;
use crate::view::styles::Palette;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const BAR_WIDTH: usize = 30;

/// Render the splash centered in `area`.
pub fn render_splash(frame: &mut Frame, area: Rect, splash: &SplashState, now: u64, palette: &Palette) {
    let filled = (splash.progress(now) * BAR_WIDTH as f64) as usize;
    let bar = format!(
        "{}{}",
        "#".repeat(filled.min(BAR_WIDTH)),
        "-".repeat(BAR_WIDTH.saturating_sub(filled))
    );

    let lines = vec![
        Line::from(Span::styled("/\\ Innovant", palette.accent)),
        Line::default(),
        Line::from(Span::styled(bar, palette.accent)),
        Line::default(),
        Line::from(Span::styled(
            "Loading engineering excellence...",
            palette.dim,
        )),
    ];

    // Vertical centering: pad the paragraph down to the middle.
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: area.height.saturating_sub(top),
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}
