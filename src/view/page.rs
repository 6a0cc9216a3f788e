//! Page rendering.
//!
//! Turns a [`PageUnit`] plus its [`PageViewState`] into styled terminal
//! lines. The same pass yields the section line ranges that feed the
//! reveal observer and the in-page link list that Tab/Enter operate on,
//! so view and state can never disagree about where a section starts or
//! which link is third.
//!
//! Sections that reveal on view render folded (heading plus a hint line)
//! until their first qualifying viewport intersection; links inside a
//! folded section are not reachable until it reveals.

use crate::model::{ContentBlock, PageUnit, ProjectCategory, Section};
use crate::state::{PageViewState, SectionRegion};
use crate::view::scene::scene_art;
use crate::view::styles::Palette;
use ratatui::text::{Line, Span};

/// One followable in-page link, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Link label, for the status bar.
    pub label: String,
    /// Target route path.
    pub target: String,
}

/// A page rendered to lines, with its section ranges and links.
#[derive(Debug)]
pub struct RenderedPage {
    /// Styled content lines, unscrolled.
    pub lines: Vec<Line<'static>>,
    /// Line range per section, in page-content coordinates.
    pub regions: Vec<SectionRegion>,
    /// Followable links, in render order.
    pub links: Vec<PageLink>,
}

impl RenderedPage {
    /// Highest valid scroll offset for a viewport of `height` lines.
    pub fn max_scroll(&self, height: usize) -> usize {
        self.lines.len().saturating_sub(height)
    }
}

/// Whether a section currently renders folded.
fn folded(section: &Section, view: &PageViewState) -> bool {
    section.revealed_on_view() && !view.reveal.has_revealed(section.id())
}

/// Links a section contributes when rendered unfolded.
fn section_links(section: &Section, links: &mut Vec<PageLink>) {
    for block in section.blocks() {
        match block {
            ContentBlock::Cta { label, target } => links.push(PageLink {
                label: label.clone(),
                target: target.clone(),
            }),
            ContentBlock::Courses(cards) => {
                for card in cards {
                    if let Some(path) = &card.path {
                        links.push(PageLink {
                            label: card.title.clone(),
                            target: path.clone(),
                        });
                    }
                }
            }
            _ => {}
        }
    }
}

/// Render `page` at `width` columns.
pub fn render_page(
    page: &PageUnit,
    view: &PageViewState,
    width: u16,
    palette: &Palette,
) -> RenderedPage {
    let width = usize::from(width.max(10));

    // Pass one: the link list, so the highlight index is known before
    // any link renders.
    let mut links = Vec::new();
    for section in page.sections() {
        if !folded(section, view) {
            section_links(section, &mut links);
        }
    }
    let selected_link = view.link_selected(links.len());

    // Pass two: lines and regions.
    let mut r = Renderer {
        lines: Vec::new(),
        regions: Vec::new(),
        link_at: 0,
        selected_link,
        width,
        palette,
        view,
    };
    for section in page.sections() {
        let start = r.lines.len();
        r.section(section);
        r.regions.push(SectionRegion {
            id: section.id(),
            start,
            end: r.lines.len(),
        });
        r.blank();
    }

    RenderedPage {
        lines: r.lines,
        regions: r.regions,
        links,
    }
}

struct Renderer<'a> {
    lines: Vec<Line<'static>>,
    regions: Vec<SectionRegion>,
    link_at: usize,
    selected_link: Option<usize>,
    width: usize,
    palette: &'a Palette,
    view: &'a PageViewState,
}

impl Renderer<'_> {
    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn push(&mut self, text: String, style: ratatui::style::Style) {
        self.lines.push(Line::from(Span::styled(text, style)));
    }

    fn wrapped(&mut self, text: &str, indent: usize, style: ratatui::style::Style) {
        let pad = " ".repeat(indent);
        for line in wrap_text(text, self.width.saturating_sub(indent)) {
            self.push(format!("{pad}{line}"), style);
        }
    }

    fn section(&mut self, section: &Section) {
        if let Some(heading) = section.heading() {
            self.push(heading.to_string(), self.palette.accent);
        }
        if folded(section, self.view) {
            self.push("  . . .".to_string(), self.palette.dim);
            return;
        }
        for block in section.blocks() {
            self.block(block);
        }
    }

    fn block(&mut self, block: &ContentBlock) {
        match block {
            ContentBlock::Paragraph(text) => {
                self.wrapped(text, 0, self.palette.text);
                self.blank();
            }
            ContentBlock::Bullets(items) => {
                for item in items {
                    let wrapped = wrap_text(item, self.width.saturating_sub(4));
                    for (i, line) in wrapped.into_iter().enumerate() {
                        let prefix = if i == 0 { "  * " } else { "    " };
                        self.push(format!("{prefix}{line}"), self.palette.text);
                    }
                }
                self.blank();
            }
            ContentBlock::Facts(rows) => {
                for (key, value) in rows {
                    self.push(format!("{key}:"), self.palette.strong);
                    self.wrapped(value, 4, self.palette.text);
                }
                self.blank();
            }
            ContentBlock::Cta { label, .. } => {
                let style = if self.selected_link == Some(self.link_at) {
                    self.palette.selected
                } else {
                    self.palette.accent
                };
                self.push(format!("  [ {label} ]"), style);
                self.link_at += 1;
            }
            ContentBlock::Scene(kind) => {
                for art in scene_art(*kind) {
                    self.push(format!("  {art}"), self.palette.dim);
                }
                self.push(format!("  ~ {}", kind.caption()), self.palette.dim);
                self.blank();
            }
            ContentBlock::Projects(projects) => {
                self.tab_bar();
                let category = self.view.category;
                for project in projects.iter().filter(|p| category.admits(p)) {
                    self.push(format!("  {}", project.title), self.palette.strong);
                    self.push(
                        format!("    [{}]", project.category.label()),
                        self.palette.dim,
                    );
                    self.wrapped(&project.description, 4, self.palette.text);
                }
                self.blank();
            }
            ContentBlock::Courses(cards) => {
                for card in cards {
                    let style = if card.path.is_some() && self.selected_link == Some(self.link_at) {
                        self.palette.selected
                    } else {
                        self.palette.strong
                    };
                    self.push(format!("  {}", card.title), style);
                    self.push(
                        format!("    {} | {}", card.duration, card.level),
                        self.palette.dim,
                    );
                    if card.path.is_some() {
                        self.link_at += 1;
                    }
                }
                self.blank();
            }
            ContentBlock::Faq(items) => {
                for (i, item) in items.iter().enumerate() {
                    let open = self.view.faq_open == Some(i);
                    let marker = if open { "v" } else { ">" };
                    let style = if self.view.faq_selected == i {
                        self.palette.selected
                    } else {
                        self.palette.strong
                    };
                    self.push(format!("  {marker} {}", item.question), style);
                    if open {
                        self.wrapped(&item.answer, 6, self.palette.text);
                    }
                }
                self.blank();
            }
            ContentBlock::Posts(posts) => {
                for post in posts {
                    self.push(
                        format!("  {}  {}", post.date.format("%Y-%m-%d"), post.title),
                        self.palette.strong,
                    );
                    self.wrapped(&post.summary, 4, self.palette.dim);
                    self.blank();
                }
            }
        }
    }

    fn tab_bar(&mut self) {
        let mut spans = Vec::new();
        for category in ProjectCategory::ALL {
            let style = if category == self.view.category {
                self.palette.selected
            } else {
                self.palette.dim
            };
            spans.push(Span::styled(format!(" {} ", category.label()), style));
            spans.push(Span::raw(" "));
        }
        self.lines.push(Line::from(spans));
        self.blank();
    }
}

/// Greedy word wrap by display width. Words wider than the viewport get
/// a line of their own; ratatui truncates the overflow.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    use unicode_width::UnicodeWidthStr;

    if width == 0 {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageUnit, Section, SectionId};
    use crate::view::styles::{AccentTheme, ColorConfig, Palette};

    fn palette() -> Palette {
        Palette::new(AccentTheme::Orange, ColorConfig::from_env_and_args(true))
    }

    fn page_with_two_sections() -> PageUnit {
        PageUnit::new("Test")
            .with_section(
                Section::immediate(SectionId::new("top"), Some("Top".to_string()))
                    .with_block(ContentBlock::Paragraph("hello world".to_string()))
                    .with_block(ContentBlock::Cta {
                        label: "Go".to_string(),
                        target: "/about".to_string(),
                    }),
            )
            .with_section(
                Section::revealing(SectionId::new("below"), "Below").with_block(
                    ContentBlock::Paragraph("a paragraph that only shows after reveal".to_string()),
                ),
            )
    }

    #[test]
    fn regions_cover_sections_in_order_without_overlap() {
        let page = page_with_two_sections();
        let view = PageViewState::new();
        let rendered = render_page(&page, &view, 40, &palette());

        assert_eq!(rendered.regions.len(), 2);
        assert_eq!(rendered.regions[0].start, 0);
        assert!(rendered.regions[0].end <= rendered.regions[1].start);
        assert!(rendered.regions[1].end <= rendered.lines.len());
    }

    #[test]
    fn unrevealed_section_renders_folded() {
        let page = page_with_two_sections();
        let view = PageViewState::new();
        let rendered = render_page(&page, &view, 40, &palette());
        let below = rendered.regions[1];

        // Folded: heading plus the fold hint.
        assert_eq!(below.end - below.start, 2);
    }

    #[test]
    fn revealed_section_renders_its_body() {
        let page = page_with_two_sections();
        let mut view = PageViewState::new();
        view.reveal.observe(SectionRegion {
            id: SectionId::new("below"),
            start: 0,
            end: 2,
        });
        view.reveal.intersect(0, 10);

        let rendered = render_page(&page, &view, 40, &palette());
        let below = rendered.regions[1];
        assert!(below.end - below.start > 2, "body lines appear after reveal");
    }

    #[test]
    fn links_exclude_folded_sections() {
        let page = PageUnit::new("Links")
            .with_section(
                Section::immediate(SectionId::new("a"), None).with_block(ContentBlock::Cta {
                    label: "Visible".to_string(),
                    target: "/".to_string(),
                }),
            )
            .with_section(
                Section::revealing(SectionId::new("b"), "Hidden").with_block(ContentBlock::Cta {
                    label: "Hidden".to_string(),
                    target: "/about".to_string(),
                }),
            );
        let view = PageViewState::new();
        let rendered = render_page(&page, &view, 40, &palette());
        assert_eq!(rendered.links.len(), 1);
        assert_eq!(rendered.links[0].label, "Visible");
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_text("one two three four five six seven", 10);
        assert!(lines.iter().all(|l| l.len() <= 10));
        assert_eq!(lines.join(" "), "one two three four five six seven");
    }

    #[test]
    fn wrap_zero_width_passes_text_through() {
        assert_eq!(wrap_text("abc", 0), vec!["abc".to_string()]);
    }

    #[test]
    fn max_scroll_saturates_for_short_pages() {
        let page = page_with_two_sections();
        let view = PageViewState::new();
        let rendered = render_page(&page, &view, 40, &palette());
        assert_eq!(rendered.max_scroll(10_000), 0);
    }
}
