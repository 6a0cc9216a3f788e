//! Terminal rendering and the event loop (impure shell).

pub mod help;
mod layout;
mod navbar;
mod page;
mod scene;
mod search_overlay;
mod splash;
mod styles;

pub use layout::{render_shell, shell_areas};
pub use page::{render_page, wrap_text, PageLink, RenderedPage};
pub use styles::{AccentTheme, ColorConfig, Palette};

use crate::model::{AppError, ContentBlock, PageUnit};
use crate::router::Resolved;
use crate::state::AppState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Event-loop tick interval. Drives the splash timer, deferred
/// production settles, and the placeholder sweep.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error.
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// The running application: terminal plus state plus frame-to-frame
/// bookkeeping (tick counter, cached link list).
///
/// Generic over backend to support testing with `TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    palette: Palette,
    now: u64,
    /// In-page links of the current page, as of the last prepare pass.
    links: Vec<PageLink>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Set up the terminal (raw mode, alternate screen) and wrap the
    /// assembled state.
    pub fn new(state: AppState, palette: Palette) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            state,
            palette,
            now: 0,
            links: Vec::new(),
        })
    }

    /// Undo the terminal setup. Safe to call after a failed run.
    pub fn restore(&mut self) -> Result<(), TuiError> {
        disable_raw_mode()?;
        io::stdout().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the main event loop until the user quits.
    ///
    /// Event-driven: redraws on input events and on ticks that changed
    /// something visible (gate opened, current page settled, a section
    /// revealed). An idle frame costs one poll timeout.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.prepare();
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.prepare();
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.prepare();
                        self.draw()?;
                    }
                    _ => {}
                }
            } else {
                self.now += 1;
                let dirty = self.state.tick(self.now);
                let revealed = self.prepare();
                let placeholder_sweep = self.state.splash.is_ready()
                    && self.state.resolve_current().placeholder_active();
                if dirty || revealed || placeholder_sweep || !self.state.splash.is_ready() {
                    self.draw()?;
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Pre-draw pass: clamp scroll, feed the reveal observer, refresh
    /// the link cache. Returns true when a section revealed (the frame
    /// about to draw differs from the last one).
    fn prepare(&mut self) -> bool {
        if !self.state.splash.is_ready() {
            return false;
        }
        let Ok(size) = self.terminal.size() else {
            return false;
        };
        let frame = Rect::new(0, 0, size.width.max(1), size.height.max(3));
        let (_, content, _) = layout::shell_areas(frame);
        let height = usize::from(content.height);

        let rendered = match self.state.resolve_current() {
            Resolved::Ready(unit) | Resolved::NotFound(unit) => {
                let view = self.state.current_view();
                match view {
                    Some(view) => render_page(unit, view, content.width, &self.palette),
                    None => return false,
                }
            }
            _ => {
                self.links.clear();
                return false;
            }
        };

        let max = rendered.max_scroll(height);
        let view = self.state.current_view_mut();
        view.scroll = view.scroll.min(max);
        for region in &rendered.regions {
            view.reveal.observe(*region);
        }
        let fired = view.reveal.intersect(view.scroll, height);
        for id in &fired {
            debug!(section = id.as_str(), "section revealed");
        }

        if fired.is_empty() {
            self.links = rendered.links;
            false
        } else {
            // A reveal unfolded content: re-render so the link cache
            // matches what the next draw shows.
            let refreshed = match self.state.resolve_current() {
                Resolved::Ready(unit) | Resolved::NotFound(unit) => self
                    .state
                    .current_view()
                    .map(|view| render_page(unit, view, content.width, &self.palette)),
                _ => None,
            };
            if let Some(rendered) = refreshed {
                self.links = rendered.links;
            }
            true
        }
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        let now = self.now;
        let palette = &self.palette;
        self.terminal
            .draw(|frame| layout::render_shell(frame, state, now, palette))?;
        Ok(())
    }

    /// Handle one key press. Returns true when the user quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c {
            return true;
        }

        // The splash swallows everything except quit.
        if !self.state.splash.is_ready() {
            return key.code == KeyCode::Char('q');
        }

        if self.state.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.state.help_visible = false;
            }
            return false;
        }

        if self.state.search.is_open() {
            self.handle_search_key(key);
            return false;
        }

        if self.state.menu.is_open() {
            self.handle_menu_key(key);
            return false;
        }

        self.handle_page_key(key)
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.search.close(),
            KeyCode::Enter => {
                if let Some(path) = self.state.search.chosen_path() {
                    self.state.search.close();
                    self.state.navigate(path, self.now);
                }
            }
            KeyCode::Up => self.state.search.select_prev(),
            KeyCode::Down => self.state.search.select_next(),
            KeyCode::Backspace => self.state.search.backspace(),
            KeyCode::Char(c) => self.state.search.push_char(c),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.state.menu.close(),
            KeyCode::Left => self.state.menu.left(),
            KeyCode::Right => self.state.menu.right(),
            KeyCode::Down => self.state.menu.down(),
            KeyCode::Up => self.state.menu.up(),
            KeyCode::Enter => {
                if let Some(path) = self.state.menu.activate() {
                    self.state.navigate(path, self.now);
                }
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) -> bool {
        let page_height = self
            .terminal
            .size()
            .map(|s| usize::from(s.height.saturating_sub(2)))
            .unwrap_or(20);

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('/') => self.state.search.open(),
            KeyCode::Char('m') => self.state.menu.open(),
            KeyCode::Char('?') => self.state.help_visible = true,
            KeyCode::Backspace => self.state.navigate_back(self.now),
            KeyCode::Up => self.state.current_view_mut().scroll_up(2),
            KeyCode::Down => {
                // Clamped against the real page height in prepare().
                self.state.current_view_mut().scroll_down(2, usize::MAX);
            }
            KeyCode::PageUp => self.state.current_view_mut().scroll_up(page_height),
            KeyCode::PageDown => {
                self.state
                    .current_view_mut()
                    .scroll_down(page_height, usize::MAX);
            }
            KeyCode::Home => self.state.current_view_mut().scroll = 0,
            KeyCode::Tab => {
                let count = self.links.len();
                self.state.current_view_mut().link_next(count);
            }
            KeyCode::Enter => {
                if let Some(i) = {
                    let count = self.links.len();
                    self.state.current_view_mut().link_selected(count)
                } {
                    let target = self.links[i].target.clone();
                    self.state.navigate(&target, self.now);
                }
            }
            KeyCode::Char('[') => match self.current_faq_len() {
                Some(_) => self.state.current_view_mut().faq_prev(),
                None => self.state.current_view_mut().category_prev(),
            },
            KeyCode::Char(']') => match self.current_faq_len() {
                Some(len) => self.state.current_view_mut().faq_next(len),
                None => self.state.current_view_mut().category_next(),
            },
            KeyCode::Char(' ') => {
                if self.current_faq_len().is_some() {
                    self.state.current_view_mut().faq_toggle();
                }
            }
            KeyCode::Char('r') => {
                // Re-activation is the retry trigger for a failed load.
                let path = self.state.nav.current_path().to_string();
                self.state.navigate(&path, self.now);
            }
            _ => {}
        }
        false
    }

    /// Accordion length on the current page, if it has one.
    fn current_faq_len(&self) -> Option<usize> {
        let unit: &PageUnit = match self.state.resolve_current() {
            Resolved::Ready(unit) | Resolved::NotFound(unit) => unit,
            _ => return None,
        };
        unit.sections()
            .iter()
            .flat_map(|s| s.blocks())
            .find_map(|block| match block {
                ContentBlock::Faq(items) => Some(items.len()),
                _ => None,
            })
    }
}

/// Run the application to completion, restoring the terminal on the way
/// out even when the loop errors.
pub fn run_app(state: AppState, palette: Palette) -> Result<(), TuiError> {
    let mut app = TuiApp::new(state, palette)?;
    let result = app.run();
    let restore_result = app.restore();
    result.and(restore_result)
}
