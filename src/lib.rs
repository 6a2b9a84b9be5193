#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. client::HttpJokeClient)
    clippy::module_name_repetitions
)]

//! # dadjoke-tui
//!
//! Browse dad jokes from the icanhazdadjoke search API in the terminal,
//! one page at a time.
//!
//! ## Architecture
//!
//! dadjoke-tui uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state (current page, jokes, viewport)
//! - **Message**: Key presses, resizes and fetch results
//! - **Update**: Pure state transitions that return commands
//! - **View**: Render to terminal
//!
//! The event loop is the only place commands run. Fetches are synchronous,
//! so at most one is in flight and they complete in the order requested.
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`client`]: Remote joke search
//! - [`format`]: Turning jokes into bordered text blocks
//! - [`paging`]: Page bookkeeping and the first fetch
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved default flags

pub mod app;
pub mod client;
pub mod config;
pub mod format;
pub mod paging;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::client::{HttpJokeClient, Joke, JokeSource};
    pub use crate::paging::{PageState, SearchQuery};
    pub use crate::ui::viewport::Viewport;
}
