use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use super::{FetchError, Joke, JokeSource, SearchPage};

/// Public icanhazdadjoke endpoint.
pub const DEFAULT_BASE_URL: &str = "https://icanhazdadjoke.com";

const USER_AGENT: &str = concat!(
    "dadjoke-tui/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/jvanderberg/dadjoke-tui)"
);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the `/search` endpoint.
#[derive(Debug, Clone)]
pub struct HttpJokeClient {
    client: Client,
    base_url: String,
}

impl HttpJokeClient {
    /// Build a client for `base_url` (e.g. [`DEFAULT_BASE_URL`]).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

impl JokeSource for HttpJokeClient {
    fn search(&self, term: &str, page: u32, limit: u32) -> Result<SearchPage, FetchError> {
        tracing::debug!(term, page, limit, "searching jokes");
        let response = self
            .client
            .get(self.search_url())
            .header(ACCEPT, "application/json")
            .query(&[("term", term)])
            .query(&[("page", page), ("limit", limit)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.text()?;
        let page = parse_search_response(&body)?;
        tracing::debug!(
            items = page.items.len(),
            total_items = page.total_items,
            total_pages = page.total_pages,
            "search complete"
        );
        Ok(page)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<JokeRecord>,
    #[serde(default)]
    total_jokes: u32,
    #[serde(default)]
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct JokeRecord {
    id: String,
    joke: String,
}

fn parse_search_response(body: &str) -> Result<SearchPage, FetchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(SearchPage {
        items: response
            .results
            .into_iter()
            .map(|record| Joke::new(record.id, record.joke))
            .collect(),
        total_items: response.total_jokes,
        total_pages: response.total_pages,
    })
}
