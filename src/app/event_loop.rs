use chrono::{Local, Utc};
use tracing::{debug, warn};

use crate::layout::Layout;
use crate::model::Effect;

use super::App;

impl App {
    /// Dispatch the initial list fetch.
    pub fn start(&mut self) {
        let effect = self.browser.start();
        self.run_effects(vec![effect]);
    }

    /// Apply finished fetches in arrival order. Returns true if any landed.
    pub fn poll_fetches(&mut self) -> bool {
        let outcomes = self.fetcher.poll();
        if outcomes.is_empty() {
            return false;
        }
        for outcome in outcomes {
            debug!(kind = outcome.kind(), "fetch completed");
            self.browser.complete(outcome, Utc::now());
        }
        true
    }

    /// True once per wall-clock second so the footer clock stays current.
    pub fn tick_clock(&mut self) -> bool {
        let second = Local::now().timestamp();
        if second == self.last_clock_second {
            return false;
        }
        self.last_clock_second = second;
        true
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.layout = Layout::new(cols, rows);
        self.browser.resize(self.layout.page_size());
    }

    /// Execute engine effects. Returns true if the app should exit.
    pub fn run_effects(&mut self, effects: Vec<Effect>) -> bool {
        let mut quit = false;
        for effect in effects {
            match effect {
                Effect::Fetch(request) => self.fetcher.dispatch(request),
                Effect::OpenUrl(url) => {
                    if let Err(err) = self.opener.open(&url) {
                        warn!(%url, error = %err, "failed to open url");
                        self.browser.status_message = Some(format!("could not open {url}: {err}"));
                    }
                }
                Effect::Quit => quit = true,
            }
        }
        quit
    }
}
