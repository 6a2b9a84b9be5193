use std::num::NonZeroU32;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;
use crate::app::{Message, Model, update};
use crate::client::{FetchError, Joke};
use crate::paging::{PageState, SearchQuery};
use crate::ui::style::Theme;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

fn create_test_model() -> Model {
    let query = SearchQuery::new("chicken", NonZeroU32::new(5).unwrap());
    let jokes = vec![
        Joke::new("a", "Why did the chicken cross the road?"),
        Joke::new("b", "To get to the other side."),
    ];
    Model::new(query, PageState::new(2, 3), jokes)
}

fn ready_model(width: u16, height: u16) -> Model {
    let (model, _) = update(create_test_model(), Message::Resize(width, height));
    model
}

fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn draw(model: &Model, width: u16, height: u16) -> Vec<String> {
    let mut terminal = create_test_terminal(width, height);
    terminal
        .draw(|frame| render(model, &Theme::default(), frame))
        .unwrap();
    screen_rows(&terminal)
}

#[test]
fn test_shows_placeholder_before_first_resize() {
    let rows = draw(&create_test_model(), 60, 10);
    assert!(rows[1].starts_with("  Initializing..."));
    assert!(!rows.iter().any(|row| row.contains("chicken")));
}

#[test]
fn test_frame_has_header_body_footer_and_help() {
    let rows = draw(&ready_model(80, 24), 80, 24);

    assert!(rows[0].starts_with(" Dad Jokes "));
    assert!(rows[0].trim_end().ends_with(SEPARATOR));
    assert!(rows.iter().any(|row| row.contains("Why did the chicken cross the road?")));
    assert!(rows[22].trim_end().ends_with("Page 2 of 3"));
    assert!(rows[22].starts_with(SEPARATOR));
    assert!(rows[23].contains("toggle help"));
    assert!(rows[23].contains("quit"));
}

#[test]
fn test_rules_fill_terminal_width() {
    let rows = draw(&ready_model(70, 20), 70, 20);
    let header_rule = rows[0].matches(SEPARATOR).count();
    assert_eq!(header_rule, 70 - " Dad Jokes ".len());
    let footer_rule = rows[18].matches(SEPARATOR).count();
    assert_eq!(footer_rule, 70 - " Page 2 of 3 ".len());
}

#[test]
fn test_expanded_help_lists_every_binding_in_two_columns() {
    let (model, _) = update(ready_model(80, 24), Message::ToggleHelp);
    let rows = draw(&model, 80, 24);

    assert_eq!(FULL_HELP.len(), 2);
    let help_top = 24 - usize::from(help_height(true));
    assert!(rows[help_top - 1].contains("Page 2 of 3"));
    let help = rows[help_top..].join("\n");
    for (key, desc) in FULL_HELP.iter().flat_map(|column| column.iter()) {
        assert!(help.contains(key), "missing key {key}");
        assert!(help.contains(desc), "missing description {desc}");
    }
    // Both columns share a row.
    assert!(rows[help_top].contains("previous page"));
    assert!(rows[help_top].contains("scroll up"));
}

#[test]
fn test_error_toast_replaces_help_line() {
    let mut model = ready_model(80, 24);
    model.pending_page = Some(3);
    let (model, _) = update(
        model,
        Message::PageLoaded {
            page: 3,
            result: Err(FetchError::Transport("connection refused".to_string())),
        },
    );
    let rows = draw(&model, 80, 24);

    assert!(rows[23].starts_with("[error] Could not load page 3"));
    assert!(rows[22].contains("Page 2 of 3"));
    assert!(rows.iter().any(|row| row.contains("To get to the other side.")));
}

#[test]
fn test_body_follows_scroll_offset() {
    let (model, _) = update(ready_model(80, 8), Message::ScrollDown(5));
    let rows = draw(&model, 80, 8);

    // Lines 5.. are the second block; its top border is now the first body row.
    assert!(rows[1].starts_with('╭'));
    assert!(rows.iter().any(|row| row.contains("To get to the other side.")));
    assert!(!rows.iter().any(|row| row.contains("Why did the chicken")));
}

#[test]
fn test_empty_page_renders_blank_body() {
    let query = SearchQuery::new("zzzznomatch", NonZeroU32::new(5).unwrap());
    let model = Model::new(query, PageState::new(1, 0), Vec::new());
    let (model, _) = update(model, Message::Resize(60, 10));
    let rows = draw(&model, 60, 10);

    assert!(rows[1..8].iter().all(|row| row.trim().is_empty()));
    assert!(rows[8].contains("Page 1 of 1"));
}

#[test]
fn test_plain_theme_renders_same_text() {
    let model = ready_model(80, 24);
    let mut terminal = create_test_terminal(80, 24);
    terminal
        .draw(|frame| render(&model, &Theme::plain(), frame))
        .unwrap();
    assert_eq!(screen_rows(&terminal), draw(&model, 80, 24));
}

#[test]
fn test_body_height_accounts_for_chrome() {
    assert_eq!(body_height(24, false), 21);
    assert_eq!(body_height(24, true), 24 - 2 - help_height(true));
    assert_eq!(body_height(1, true), 0);
}
