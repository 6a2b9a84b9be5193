use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model};
use crate::client::JokeSource;
use crate::paging;

use super::effects::Flow;
use super::input;

const IDLE_POLL: Duration = Duration::from_millis(250);

impl<S: JokeSource> App<S> {
    /// Fetch the first page, then run the UI until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the first page cannot be fetched (before the
    /// terminal is touched), or if terminal I/O fails during the session.
    pub fn run(&self) -> Result<()> {
        let (page, jokes) = paging::initialize(&self.source, &self.query)?;
        let mut model = Model::new(self.query.clone(), page, jokes);

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal — dadjoke-tui requires an interactive terminal")?;

        let result = self.event_loop(&mut terminal, &mut model);

        ratatui::restore();
        result
    }

    fn event_loop(&self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        // crossterm does not report the starting size as an event.
        let size = terminal.size()?;
        self.dispatch(model, Message::Resize(size.width, size.height));

        let mut needs_render = true;
        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, &self.theme, frame))?;
                needs_render = false;
            }

            if !event::poll(IDLE_POLL)? {
                continue;
            }
            let Some(msg) = input::handle_event(&event::read()?, model) else {
                continue;
            };
            tracing::debug!(?msg, "event");
            if self.dispatch(model, msg) == Flow::Quit {
                break;
            }
            needs_render = true;
        }
        Ok(())
    }
}
