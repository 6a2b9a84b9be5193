use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::{Model, ToastLevel};

use super::SEPARATOR;
use super::style::Theme;

const TITLE: &str = " Dad Jokes ";
const HELP_SEPARATOR: &str = " • ";
const HELP_COLUMN_GAP: &str = "    ";

/// Bindings shown on the collapsed help line.
pub const SHORT_HELP: &[(&str, &str)] = &[("?", "toggle help"), ("q", "quit")];

/// Bindings shown when help is expanded, one slice per column.
pub const FULL_HELP: &[&[(&str, &str)]] = &[
    &[
        ("←/h", "previous page"),
        ("→/l", "next page"),
        ("g/home", "go to top"),
        ("G/end", "go to bottom"),
        ("?", "toggle help"),
        ("q/esc", "quit"),
    ],
    &[
        ("↑/k", "scroll up"),
        ("↓/j", "scroll down"),
        ("b/pgup", "page up"),
        ("f/pgdn", "page down"),
        ("u/ctrl+u", "half page up"),
        ("d/ctrl+d", "half page down"),
    ],
];

fn rule(width: u16, used: usize) -> String {
    SEPARATOR.repeat((width as usize).saturating_sub(used))
}

pub fn render_header(theme: &Theme, frame: &mut Frame, area: Rect) {
    let fill = rule(area.width, UnicodeWidthStr::width(TITLE));
    let line = Line::from(vec![
        Span::styled(TITLE, theme.title),
        Span::styled(fill, theme.separator),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_footer(model: &Model, theme: &Theme, frame: &mut Frame, area: Rect) {
    let info = format!(
        " Page {} of {} ",
        model.page.current_page(),
        model.page.total_pages()
    );
    let fill = rule(area.width, UnicodeWidthStr::width(info.as_str()));
    let line = Line::from(vec![
        Span::styled(fill, theme.separator),
        Span::styled(info, theme.page_info),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_help(model: &Model, theme: &Theme, frame: &mut Frame, area: Rect) {
    let lines = if model.help_expanded {
        full_help_lines(theme)
    } else {
        vec![short_help_line(theme)]
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn short_help_line(theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, (key, desc)) in SHORT_HELP.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(HELP_SEPARATOR, theme.help_description));
        }
        spans.push(Span::styled(*key, theme.help_key));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, theme.help_description));
    }
    Line::from(spans)
}

fn full_help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let rows = FULL_HELP.iter().map(|column| column.len()).max().unwrap_or(0);
    let widths: Vec<usize> = FULL_HELP
        .iter()
        .map(|column| {
            column
                .iter()
                .map(|(key, desc)| key.width() + 1 + desc.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    (0..rows)
        .map(|row| {
            let mut spans = Vec::new();
            for (col, column) in FULL_HELP.iter().enumerate() {
                if col > 0 {
                    spans.push(Span::raw(HELP_COLUMN_GAP));
                }
                let used = column.get(row).map_or(0, |(key, desc)| {
                    spans.push(Span::styled(*key, theme.help_key));
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(*desc, theme.help_description));
                    key.width() + 1 + desc.width()
                });
                spans.push(Span::raw(" ".repeat(widths[col].saturating_sub(used))));
            }
            Line::from(spans)
        })
        .collect()
}

pub fn render_toast_bar(model: &Model, theme: &Theme, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Warning => ("[warn]", theme.toast_warning),
        ToastLevel::Error => ("[error]", theme.toast_error),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
