//! Page bookkeeping for a search session.
//!
//! [`PageState`] is the only place page numbers are computed. Pages are
//! 1-based, matching the remote API. A search with no results is a valid
//! state: page 1 of 1 with nothing in it.

use std::num::NonZeroU32;

use thiserror::Error;

use crate::client::{FetchError, Joke, JokeSource};

/// Default number of jokes per page.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = NonZeroU32::new(5).unwrap();

/// What the user asked for. Fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub page_size: NonZeroU32,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>, page_size: NonZeroU32) -> Self {
        Self {
            term: term.into(),
            page_size,
        }
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_PAGE_SIZE)
    }
}

/// Current position within the result pages.
///
/// Invariant: `1 <= current_page <= total_pages` and `total_pages >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: u32,
    total_pages: u32,
}

impl PageState {
    /// Build a state, clamping into the valid range.
    ///
    /// A reported total of zero pages is stored as one (empty) page.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
        }
    }

    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub const fn is_first(&self) -> bool {
        self.current_page == 1
    }

    pub const fn is_last(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Page to fetch for "previous", or `None` on the first page.
    pub const fn previous_page(&self) -> Option<u32> {
        if self.is_first() {
            None
        } else {
            Some(self.current_page - 1)
        }
    }

    /// Page to fetch for "next", or `None` on the last page.
    pub const fn next_page(&self) -> Option<u32> {
        if self.is_last() {
            None
        } else {
            Some(self.current_page + 1)
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// The first fetch failed, so there is nothing to show.
///
/// The reason is part of the message and is not exposed as a `source()`,
/// so error reports print it once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not load jokes for {term:?}: {reason}")]
pub struct StartupError {
    pub term: String,
    pub reason: FetchError,
}

/// Fetch page 1 for `query`.
///
/// Zero matching jokes is not an error: the result is page 1 of 1 with no
/// items.
///
/// # Errors
///
/// Returns [`StartupError`] when the remote call fails.
pub fn initialize(
    source: &dyn JokeSource,
    query: &SearchQuery,
) -> Result<(PageState, Vec<Joke>), StartupError> {
    let page = source
        .search(&query.term, 1, query.page_size.get())
        .map_err(|reason| StartupError {
            term: query.term.clone(),
            reason,
        })?;

    if page.total_items == 0 {
        tracing::info!(term = %query.term, "search returned no jokes");
        return Ok((PageState::default(), Vec::new()));
    }

    tracing::info!(
        term = %query.term,
        total_items = page.total_items,
        total_pages = page.total_pages,
        "loaded first page"
    );
    Ok((PageState::new(1, page.total_pages), page.items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SearchPage;

    struct FixedSource(Result<SearchPage, FetchError>);

    impl JokeSource for FixedSource {
        fn search(&self, _term: &str, _page: u32, _limit: u32) -> Result<SearchPage, FetchError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_zero_total_pages_is_one_page() {
        let state = PageState::new(1, 0);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.previous_page(), None);
        assert_eq!(state.next_page(), None);
    }

    #[test]
    fn test_new_clamps_current_page() {
        assert_eq!(PageState::new(0, 3).current_page(), 1);
        assert_eq!(PageState::new(9, 3).current_page(), 3);
    }

    #[test]
    fn test_boundaries() {
        let first = PageState::new(1, 3);
        assert_eq!(first.previous_page(), None);
        assert_eq!(first.next_page(), Some(2));

        let last = PageState::new(3, 3);
        assert_eq!(last.previous_page(), Some(2));
        assert_eq!(last.next_page(), None);
    }

    #[test]
    fn test_initialize_empty_result_is_valid_state() {
        let source = FixedSource(Ok(SearchPage::default()));
        let query = SearchQuery::new("zzzznomatch", DEFAULT_PAGE_SIZE);

        let (state, jokes) = initialize(&source, &query).unwrap();
        assert_eq!(state, PageState::new(1, 1));
        assert!(jokes.is_empty());
    }

    #[test]
    fn test_initialize_failure_is_startup_error() {
        let source = FixedSource(Err(FetchError::Status(503)));
        let query = SearchQuery::new("chicken", DEFAULT_PAGE_SIZE);

        let err = initialize(&source, &query).unwrap_err();
        assert_eq!(err.reason, FetchError::Status(503));
        assert!(err.to_string().contains("chicken"));
    }

    #[test]
    fn test_startup_error_report_names_reason_once() {
        let source = FixedSource(Err(FetchError::Status(503)));
        let query = SearchQuery::new("chicken", DEFAULT_PAGE_SIZE);

        let err: anyhow::Error = initialize(&source, &query).unwrap_err().into();
        let report = format!("Error: {err:?}");
        assert!(report.starts_with(
            "Error: could not load jokes for \"chicken\": server responded with status 503"
        ));
        assert_eq!(report.matches("status 503").count(), 1);
        assert!(!report.contains("Caused by"));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn page_state_invariant_holds(current in 0..1000u32, total in 0..1000u32) {
                let state = PageState::new(current, total);
                prop_assert!(state.total_pages() >= 1);
                prop_assert!(state.current_page() >= 1);
                prop_assert!(state.current_page() <= state.total_pages());
            }

            #[test]
            fn previous_then_next_returns_home(current in 2..500u32, extra in 0..500u32) {
                let total = current + extra;
                let state = PageState::new(current, total);
                let prev = PageState::new(state.previous_page().unwrap(), total);
                let back = PageState::new(prev.next_page().unwrap(), total);
                prop_assert_eq!(back, state);
            }
        }
    }
}
