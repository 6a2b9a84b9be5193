//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position and body geometry
//! - [`style`]: Theming and colors
//! - the frame renderer (header, body, footer, help line)

pub mod style;
pub mod viewport;

mod render;
mod status;

pub use render::{INITIALIZING, render};
pub use status::{FULL_HELP, SHORT_HELP};

/// Glyph repeated to fill the header and footer rules.
pub const SEPARATOR: &str = "─";

pub const HEADER_HEIGHT: u16 = 1;
pub const FOOTER_HEIGHT: u16 = 1;

/// Rows taken by the help line(s).
pub fn help_height(expanded: bool) -> u16 {
    if expanded {
        let rows = FULL_HELP.iter().map(|column| column.len()).max().unwrap_or(1);
        u16::try_from(rows).unwrap_or(u16::MAX)
    } else {
        1
    }
}

/// Height left for the scrollable body once the header, footer and help
/// line are placed.
pub fn body_height(terminal_height: u16, help_expanded: bool) -> u16 {
    terminal_height
        .saturating_sub(HEADER_HEIGHT)
        .saturating_sub(FOOTER_HEIGHT)
        .saturating_sub(help_height(help_expanded))
}

#[cfg(test)]
mod tests;
