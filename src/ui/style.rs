//! Colors and text styles.
//!
//! A [`Theme`] is built once and handed to the renderer; nothing in here is
//! global, so two UIs (or two tests) can use different themes side by side.

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(0x87, 0x4B, 0xFD);

/// Immutable style values used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Title badge in the header.
    pub title: Style,
    /// "Page X of Y" badge in the footer.
    pub page_info: Style,
    /// Horizontal rule next to the title and page badge.
    pub separator: Style,
    /// Rounded border around each joke.
    pub block_border: Style,
    pub joke_text: Style,
    pub help_key: Style,
    pub help_description: Style,
    pub toast_warning: Style,
    pub toast_error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
            page_info: Style::default().fg(Color::White).bg(ACCENT),
            separator: Style::default().fg(ACCENT),
            block_border: Style::default().fg(ACCENT),
            joke_text: Style::default(),
            help_key: Style::default().fg(Color::Indexed(245)),
            help_description: Style::default().fg(Color::Indexed(240)),
            toast_warning: Style::default().bg(Color::Yellow).fg(Color::Black),
            toast_error: Style::default().bg(Color::Red).fg(Color::White),
        }
    }
}

impl Theme {
    /// A theme with no colors at all, for terminals that can't show them.
    pub fn plain() -> Self {
        Self {
            title: Style::default().add_modifier(Modifier::BOLD),
            page_info: Style::default(),
            separator: Style::default(),
            block_border: Style::default(),
            joke_text: Style::default(),
            help_key: Style::default(),
            help_description: Style::default().add_modifier(Modifier::DIM),
            toast_warning: Style::default().add_modifier(Modifier::REVERSED),
            toast_error: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        }
    }
}
