//! Turning a page of jokes into the text shown in the viewport.
//!
//! Every joke becomes one bordered block: the text is word-wrapped to
//! [`JOKE_WIDTH`] columns, each line is centered, and the whole thing is
//! framed by a rounded border with one blank row above and below the text.
//! Blocks are emitted in input order, each followed by a newline.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::client::Joke;

/// Width of the wrapped joke text inside a block.
pub const JOKE_WIDTH: usize = 50;

/// Total width of a rendered block, borders included.
pub const BLOCK_WIDTH: usize = JOKE_WIDTH + 2;

pub const BORDER_TOP_LEFT: char = '╭';
pub const BORDER_TOP_RIGHT: char = '╮';
pub const BORDER_BOTTOM_LEFT: char = '╰';
pub const BORDER_BOTTOM_RIGHT: char = '╯';
pub const BORDER_HORIZONTAL: char = '─';
pub const BORDER_VERTICAL: char = '│';

/// Render `jokes` into a single display buffer.
///
/// Pure and deterministic. An empty slice yields an empty string.
pub fn format_jokes(jokes: &[Joke]) -> String {
    let mut out = String::new();
    for joke in jokes {
        out.push_str(&render_block(&joke.text));
        out.push('\n');
    }
    out
}

fn render_block(text: &str) -> String {
    let horizontal = BORDER_HORIZONTAL.to_string().repeat(JOKE_WIDTH);
    let blank = " ".repeat(JOKE_WIDTH);

    let mut lines = Vec::new();
    lines.push(format!("{BORDER_TOP_LEFT}{horizontal}{BORDER_TOP_RIGHT}"));
    lines.push(format!("{BORDER_VERTICAL}{blank}{BORDER_VERTICAL}"));
    for line in wrap_text(text, JOKE_WIDTH) {
        lines.push(format!(
            "{BORDER_VERTICAL}{}{BORDER_VERTICAL}",
            center(&line, JOKE_WIDTH)
        ));
    }
    lines.push(format!("{BORDER_VERTICAL}{blank}{BORDER_VERTICAL}"));
    lines.push(format!(
        "{BORDER_BOTTOM_LEFT}{horizontal}{BORDER_BOTTOM_RIGHT}"
    ));
    lines.join("\n")
}

/// Greedy word wrap by display width.
///
/// Explicit line breaks in `text` are kept. Words wider than `width` are
/// split across lines. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);

            if word_width > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width + ch_width > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
                continue;
            }

            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };
            if needed > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn center(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    let left = padding / 2;
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
