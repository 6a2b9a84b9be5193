//! Remote joke search.
//!
//! The rest of the crate only sees [`JokeSource`]: give it a term, a
//! 1-based page number and a page size, get back one [`SearchPage`].
//! [`HttpJokeClient`] is the production implementation.

mod http;

pub use http::{DEFAULT_BASE_URL, HttpJokeClient};

use thiserror::Error;

/// A single fetched joke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub id: String,
    pub text: String,
}

impl Joke {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// One page of search results plus the totals reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub items: Vec<Joke>,
    pub total_items: u32,
    pub total_pages: u32,
}

/// Why a search request failed.
///
/// The variants carry rendered reasons rather than the underlying error
/// values so that results can travel through [`crate::app::Message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Status(status.as_u16());
        }
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Anything that can answer a paged joke search.
pub trait JokeSource {
    /// Fetch page `page` (1-based) of results for `term`, `limit` items per page.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the request cannot be completed or the
    /// response cannot be understood.
    fn search(&self, term: &str, page: u32, limit: u32) -> Result<SearchPage, FetchError>;
}

impl<T: JokeSource + ?Sized> JokeSource for &T {
    fn search(&self, term: &str, page: u32, limit: u32) -> Result<SearchPage, FetchError> {
        (**self).search(term, page, limit)
    }
}
