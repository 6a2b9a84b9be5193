use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::format::{BORDER_BOTTOM_LEFT, BORDER_TOP_LEFT, BORDER_VERTICAL};

use super::style::Theme;
use super::viewport::Viewport;
use super::{FOOTER_HEIGHT, HEADER_HEIGHT, help_height, status};

/// Shown until the first resize gives us real geometry.
pub const INITIALIZING: &str = "\n  Initializing...";

/// Render the complete UI.
pub fn render(model: &Model, theme: &Theme, frame: &mut Frame) {
    let area = frame.area();

    let Some(viewport) = model.viewport.as_ref() else {
        frame.render_widget(Paragraph::new(INITIALIZING), area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
        Constraint::Length(help_height(model.help_expanded)),
    ])
    .split(area);

    status::render_header(theme, frame, chunks[0]);
    render_body(model, viewport, theme, frame, chunks[1]);
    status::render_footer(model, theme, frame, chunks[2]);
    if model.active_toast().is_some() {
        status::render_toast_bar(model, theme, frame, chunks[3]);
    } else {
        status::render_help(model, theme, frame, chunks[3]);
    }
}

fn render_body(model: &Model, viewport: &Viewport, theme: &Theme, frame: &mut Frame, area: Rect) {
    let range = viewport.visible_range();
    let lines: Vec<Line> = model
        .content
        .lines()
        .skip(range.start)
        .take(range.len())
        .map(|line| block_line(line, theme))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Color the border glyphs of one formatted block line.
fn block_line<'a>(line: &'a str, theme: &Theme) -> Line<'a> {
    if line.starts_with(BORDER_TOP_LEFT) || line.starts_with(BORDER_BOTTOM_LEFT) {
        return Line::styled(line, theme.block_border);
    }

    let edge = BORDER_VERTICAL.len_utf8();
    if line.len() >= edge * 2
        && line.starts_with(BORDER_VERTICAL)
        && line.ends_with(BORDER_VERTICAL)
    {
        let (left, rest) = line.split_at(edge);
        let (inner, right) = rest.split_at(rest.len() - edge);
        return Line::from(vec![
            Span::styled(left, theme.block_border),
            Span::styled(inner, theme.joke_text),
            Span::styled(right, theme.block_border),
        ]);
    }

    Line::styled(line, theme.joke_text)
}
