use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Message, Model};

/// Translate a terminal event into a message, if it means anything to us.
pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(*key, model),
        Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
        _ => None,
    }
}

pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            KeyCode::Char('d') => Some(Message::ScrollHalfPageDown),
            KeyCode::Char('u') => Some(Message::ScrollHalfPageUp),
            _ => None,
        };
    }

    match key.code {
        // Result pages
        KeyCode::Left | KeyCode::Char('h') => Some(Message::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => Some(Message::NextPage),

        // Body scrolling; nothing to scroll until the viewport exists
        KeyCode::Char('j') | KeyCode::Down if model.is_ready() => Some(Message::ScrollDown(1)),
        KeyCode::Char('k') | KeyCode::Up if model.is_ready() => Some(Message::ScrollUp(1)),
        KeyCode::PageDown | KeyCode::Char(' ' | 'f') if model.is_ready() => {
            Some(Message::ScrollPageDown)
        }
        KeyCode::PageUp | KeyCode::Char('b') if model.is_ready() => Some(Message::ScrollPageUp),
        KeyCode::Char('d') if model.is_ready() => Some(Message::ScrollHalfPageDown),
        KeyCode::Char('u') if model.is_ready() => Some(Message::ScrollHalfPageUp),
        KeyCode::Home | KeyCode::Char('g') if model.is_ready() => Some(Message::GoToTop),
        KeyCode::End | KeyCode::Char('G') if model.is_ready() => Some(Message::GoToBottom),

        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        _ => None,
    }
}
