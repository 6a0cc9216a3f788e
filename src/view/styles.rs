//! Color configuration and the accent palette.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether color output is enabled.
///
/// Priority (first match wins):
/// 1. `--no-color` CLI flag (disables colors)
/// 2. `NO_COLOR` env var (any value disables colors)
/// 3. Default: colors enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Resolve from the CLI flag and environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== AccentTheme =====

/// Named accent themes. The site's own scheme is orange; the alternates
/// exist for terminals where orange renders poorly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccentTheme {
    /// The original site accent.
    #[default]
    Orange,
    /// Blue accent.
    Blue,
    /// Teal accent.
    Teal,
}

impl AccentTheme {
    /// Parse a theme name; unknown names fall back to the default.
    pub fn from_name(name: &str) -> Self {
        match name {
            "blue" => AccentTheme::Blue,
            "teal" => AccentTheme::Teal,
            _ => AccentTheme::Orange,
        }
    }

    fn accent_color(self) -> Color {
        match self {
            AccentTheme::Orange => Color::Rgb(234, 88, 12),
            AccentTheme::Blue => Color::Rgb(62, 146, 204),
            AccentTheme::Teal => Color::Rgb(13, 148, 136),
        }
    }
}

// ===== Palette =====

/// Resolved styles for every visual role.
///
/// With colors disabled, every style is the terminal default so output
/// degrades to plain text.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Brand and headings.
    pub accent: Style,
    /// Emphasis inside body text.
    pub strong: Style,
    /// Body text.
    pub text: Style,
    /// De-emphasized text (captions, folded sections, hints).
    pub dim: Style,
    /// Selected rows and active tabs.
    pub selected: Style,
    /// Failure notices.
    pub error: Style,
}

impl Palette {
    /// Build the palette for a theme under a color configuration.
    pub fn new(theme: AccentTheme, config: ColorConfig) -> Self {
        if !config.colors_enabled() {
            return Self {
                accent: Style::default(),
                strong: Style::default(),
                text: Style::default(),
                dim: Style::default(),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                error: Style::default(),
            };
        }
        let accent = theme.accent_color();
        Self {
            accent: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            strong: Style::default().add_modifier(Modifier::BOLD),
            text: Style::default(),
            dim: Style::default().fg(Color::DarkGray),
            selected: Style::default().fg(accent).add_modifier(Modifier::REVERSED),
            error: Style::default().fg(Color::Red),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_name_falls_back_to_orange() {
        assert_eq!(AccentTheme::from_name("mauve"), AccentTheme::Orange);
        assert_eq!(AccentTheme::from_name("blue"), AccentTheme::Blue);
    }

    #[test]
    fn disabled_colors_produce_plain_styles() {
        let palette = Palette::new(AccentTheme::Orange, ColorConfig { enabled: false });
        assert_eq!(palette.accent, Style::default());
        assert_eq!(palette.text, Style::default());
    }
}
