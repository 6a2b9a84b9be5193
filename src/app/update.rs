use crate::app::{Model, ToastLevel};
use crate::client::{FetchError, SearchPage};
use crate::paging::PageState;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and results of commands
/// handed back by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Body scrolling
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    /// Scroll the body up one screen
    ScrollPageUp,
    /// Scroll the body down one screen
    ScrollPageDown,
    /// Scroll the body up half a screen
    ScrollHalfPageUp,
    /// Scroll the body down half a screen
    ScrollHalfPageDown,
    /// Jump to the first line of the page
    GoToTop,
    /// Jump to the last line of the page
    GoToBottom,

    // Result pages
    /// Load the previous page of results
    PrevPage,
    /// Load the next page of results
    NextPage,
    /// A page fetch finished
    PageLoaded {
        page: u32,
        result: Result<SearchPage, FetchError>,
    },

    /// Toggle the expanded key help
    ToggleHelp,
    /// Terminal resized
    Resize(u16, u16),
    /// Quit the application
    Quit,
}

/// Side effects requested by [`update`], carried out by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fetch this page and report back with [`Message::PageLoaded`]
    FetchPage(u32),
    /// Stop the event loop
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// No I/O happens here: anything that needs the outside world is returned
/// as a [`Command`].
pub fn update(mut model: Model, msg: Message) -> (Model, Vec<Command>) {
    let mut commands = Vec::new();

    match msg {
        Message::ScrollUp(n) => {
            if let Some(vp) = model.viewport.as_mut() {
                vp.scroll_up(n);
            }
        }
        Message::ScrollDown(n) => {
            if let Some(vp) = model.viewport.as_mut() {
                vp.scroll_down(n);
            }
        }
        Message::ScrollPageUp => {
            if let Some(vp) = model.viewport.as_mut() {
                vp.page_up();
            }
        }
        Message::ScrollPageDown => {
            if let Some(vp) = model.viewport.as_mut() {
                vp.page_down();
            }
        }
        Message::ScrollHalfPageUp => {
            if let Some(vp) = model.viewport.as_mut() {
                vp.half_page_up();
            }
        }
        Message::ScrollHalfPageDown => {
            if let Some(vp) = model.viewport.as_mut() {
                vp.half_page_down();
            }
        }
        Message::GoToTop => {
            if let Some(vp) = model.viewport.as_mut() {
                vp.go_to_top();
            }
        }
        Message::GoToBottom => {
            if let Some(vp) = model.viewport.as_mut() {
                vp.go_to_bottom();
            }
        }

        Message::PrevPage => {
            if let Some(page) = navigation_target(&model, model.page.previous_page()) {
                model.pending_page = Some(page);
                commands.push(Command::FetchPage(page));
            }
        }
        Message::NextPage => {
            if let Some(page) = navigation_target(&model, model.page.next_page()) {
                model.pending_page = Some(page);
                commands.push(Command::FetchPage(page));
            }
        }
        Message::PageLoaded { page, result } => {
            if model.pending_page != Some(page) {
                tracing::debug!(page, pending = ?model.pending_page, "ignoring stale page");
                return (model, commands);
            }
            model.pending_page = None;
            apply_loaded_page(&mut model, page, result);
        }

        Message::ToggleHelp => {
            model.help_expanded = !model.help_expanded;
            model.relayout();
        }
        Message::Resize(width, height) => {
            model.resize(width, height);
        }
        Message::Quit => {
            commands.push(Command::Quit);
        }
    }

    (model, commands)
}

/// Decide whether a navigation request should start a fetch.
fn navigation_target(model: &Model, target: Option<u32>) -> Option<u32> {
    if let Some(pending) = model.pending_page {
        tracing::debug!(pending, "navigation ignored while a page is loading");
        return None;
    }
    if target.is_none() {
        tracing::debug!(
            page = model.page.current_page(),
            total = model.page.total_pages(),
            "already at boundary"
        );
    }
    target
}

fn apply_loaded_page(model: &mut Model, page: u32, result: Result<SearchPage, FetchError>) {
    match result {
        Ok(loaded) => {
            tracing::debug!(page, items = loaded.items.len(), "page loaded");
            if loaded.items.is_empty() && loaded.total_items > 0 {
                model.show_toast(ToastLevel::Warning, format!("Page {page} came back empty"));
            }
            model.show_page(PageState::new(page, loaded.total_pages), loaded.items);
        }
        Err(err) => {
            tracing::warn!(page, error = %err, "page fetch failed");
            model.show_toast(
                ToastLevel::Error,
                format!("Could not load page {page}: {err}"),
            );
        }
    }
}
