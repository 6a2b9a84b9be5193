use std::collections::VecDeque;

use crate::app::{App, Command, Message, Model, update};
use crate::client::JokeSource;
use crate::paging::SearchQuery;

/// Whether the event loop should keep going after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Quit,
}

impl<S: JokeSource> App<S> {
    /// Feed `msg` through [`update`] and carry out every command it
    /// produces, including the messages those commands report back.
    ///
    /// Fetches run to completion before this returns, so a later
    /// navigation event always sees the result of an earlier one.
    pub(super) fn dispatch(&self, model: &mut Model, msg: Message) -> Flow {
        let mut flow = Flow::Continue;
        let mut queue = VecDeque::from([msg]);

        while let Some(msg) = queue.pop_front() {
            let (next, commands) = update(std::mem::take(model), msg);
            *model = next;

            for command in commands {
                match command {
                    Command::FetchPage(page) => {
                        queue.push_back(self.fetch_page(&model.query, page));
                    }
                    Command::Quit => flow = Flow::Quit,
                }
            }
        }

        flow
    }

    fn fetch_page(&self, query: &SearchQuery, page: u32) -> Message {
        tracing::debug!(term = %query.term, page, "fetching page");
        let result = self
            .source
            .search(&query.term, page, query.page_size.get());
        Message::PageLoaded { page, result }
    }
}
