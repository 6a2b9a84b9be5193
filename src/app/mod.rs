//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and command results
//! - [`update`]: Pure function for state transitions, returning [`Command`]s
//! - [`App::run`]: Main event loop; the only place commands are executed

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, ToastLevel};
pub use update::{Command, Message, update};

use crate::client::JokeSource;
use crate::paging::SearchQuery;
use crate::ui::style::Theme;

/// Owns the joke source and the fixed configuration for one run.
pub struct App<S> {
    source: S,
    query: SearchQuery,
    theme: Theme,
}

impl<S: JokeSource> App<S> {
    /// Create an application that searches `source` for `query`.
    pub fn new(source: S, query: SearchQuery) -> Self {
        Self {
            source,
            query,
            theme: Theme::default(),
        }
    }

    /// Use a different color theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
