//! Shell rendering smoke tests against a test backend.
//!
//! Assert on rendered buffer text, not exact cell styling: content and
//! placement are the contract, colors are presentation.

use innovant::content::site_routes;
use innovant::router::PageResolver;
use innovant::state::AppState;
use innovant::view::{render_shell, AccentTheme, ColorConfig, Palette};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn palette() -> Palette {
    Palette::new(AccentTheme::Orange, ColorConfig::from_env_and_args(true))
}

fn app(splash_ticks: u64, defer: u64) -> AppState {
    let table = site_routes().expect("site routes build");
    let resolver = PageResolver::new(table, defer).expect("eager pages produce");
    AppState::new(resolver, splash_ticks, "/")
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    let mut text = String::new();
    for (i, cell) in buffer.content.iter().enumerate() {
        text.push_str(cell.symbol());
        if (i + 1) % width == 0 {
            text.push('\n');
        }
    }
    text
}

fn draw(state: &AppState, now: u64) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    let palette = palette();
    terminal
        .draw(|frame| render_shell(frame, state, now, &palette))
        .expect("draw succeeds");
    buffer_text(&terminal)
}

#[test]
fn splash_shows_brand_and_tagline_before_the_gate_opens() {
    let state = app(10, 0);
    let text = draw(&state, 0);
    assert!(text.contains("Innovant"));
    assert!(text.contains("Loading engineering excellence..."));
    // The shell is not up yet.
    assert!(!text.contains("INNOVANT"));
}

#[test]
fn shell_renders_header_menu_and_status_bar() {
    let state = app(0, 0);
    let text = draw(&state, 1);
    assert!(text.contains("INNOVANTACADEMY"));
    assert!(text.contains("Home"));
    assert!(text.contains("Courses"));
    assert!(text.contains("Contact"));
    assert!(text.contains("/ search"));
    assert!(text.contains("q quit"));
}

#[test]
fn home_page_hero_renders_inside_the_shell() {
    let state = app(0, 0);
    let text = draw(&state, 1);
    assert!(text.contains("Transform Your Engineering Career"));
    assert!(text.contains("[ Explore Courses ]"));
}

#[test]
fn pending_deferred_page_renders_the_shared_placeholder() {
    let mut state = app(0, 10);
    state.navigate("/courses/CATIA", 1);
    let text = draw(&state, 2);
    assert!(text.contains("Loading engineering excellence..."));
}

#[test]
fn settled_deferred_page_renders_its_content() {
    let mut state = app(0, 0);
    state.navigate("/courses/CATIA", 1);
    state.tick(2);
    let text = draw(&state, 3);
    assert!(text.contains("CATIA"));
    assert!(text.contains("[ Enroll Now ]"));
}

#[test]
fn unmatched_route_renders_the_not_found_page() {
    let mut state = app(0, 0);
    state.navigate("/nope", 1);
    let text = draw(&state, 2);
    assert!(text.contains("Page not found"));
    assert!(text.contains("[ Back to home ]"));
}

#[test]
fn search_overlay_draws_over_the_page() {
    let mut state = app(0, 0);
    state.search.open();
    for c in "catia".chars() {
        state.search.push_char(c);
    }
    let text = draw(&state, 1);
    assert!(text.contains("Search:"));
    assert!(text.contains("CATIA"));
}

#[test]
fn unrevealed_home_sections_render_folded() {
    let state = app(0, 0);
    let text = draw(&state, 1);
    // Below-the-fold sections show heading plus fold hint only.
    assert!(text.contains(". . ."));
}
