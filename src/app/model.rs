use std::time::{Duration, Instant};

use crate::client::Joke;
use crate::format::format_jokes;
use crate::paging::{PageState, SearchQuery};
use crate::ui::viewport::Viewport;

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Search term and page size for this run
    pub query: SearchQuery,
    /// Which page is on screen
    pub page: PageState,
    /// Jokes on the current page
    pub jokes: Vec<Joke>,
    /// Formatted text for the body, regenerated whenever `jokes` changes
    pub content: String,
    /// Body geometry; `None` until the first resize arrives
    pub viewport: Option<Viewport>,
    /// Last terminal size seen, used to re-layout when the help line grows
    pub terminal_size: (u16, u16),
    /// Whether the full key help is shown
    pub help_expanded: bool,
    /// Page whose fetch has been requested but not yet applied
    pub pending_page: Option<u32>,
    toast: Option<Toast>,
}

impl Model {
    /// Create a model showing `jokes` as page `page`.
    pub fn new(query: SearchQuery, page: PageState, jokes: Vec<Joke>) -> Self {
        let content = format_jokes(&jokes);
        Self {
            query,
            page,
            jokes,
            content,
            viewport: None,
            terminal_size: (0, 0),
            help_expanded: false,
            pending_page: None,
            toast: None,
        }
    }

    /// Whether the first resize has been processed.
    pub const fn is_ready(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn content_line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Replace the displayed page wholesale.
    pub(super) fn show_page(&mut self, page: PageState, jokes: Vec<Joke>) {
        self.page = page;
        self.jokes = jokes;
        self.content = format_jokes(&self.jokes);
        let lines = self.content_line_count();
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.replace_content(lines);
        }
    }

    /// Apply a terminal size. The first call builds the viewport; later
    /// calls only change its geometry.
    pub(super) fn resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        let body_height = crate::ui::body_height(height, self.help_expanded);
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.resize(width, body_height);
        } else {
            tracing::debug!(width, height, body_height, "viewport ready");
            self.viewport = Some(Viewport::new(
                width,
                body_height,
                self.content_line_count(),
            ));
        }
    }

    /// Recompute the body height after the chrome changed size.
    pub(super) fn relayout(&mut self) {
        let (width, height) = self.terminal_size;
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.resize(width, crate::ui::body_height(height, self.help_expanded));
        }
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(SearchQuery::default(), PageState::default(), Vec::new())
    }
}
