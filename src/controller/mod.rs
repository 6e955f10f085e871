//! Navigation and view-state engine.
//!
//! [`Browser`] owns the raw collection, the derived filtered list and both
//! scroll controllers. It never performs I/O: actions and fetch completions
//! go in, [`Effect`]s come out for the app layer to execute.

mod detail;
mod filter;
mod store;
mod window;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::model::{
    Action, Effect, Event, FetchOutcome, FetchRequest, InputFocus, SearchMode, SearchState,
    ViewState,
};

pub use detail::{DETAIL_HEADER_LINES, DetailScroll, detail_line_count};
pub use filter::filter_and_sort;
pub use store::EventStore;
pub use window::ListWindow;

/// What just happened, for [`Browser::on_state_changed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    /// The raw collection was replaced by a fetch.
    StoreReplaced { now: DateTime<Utc> },
    /// The live filter term was edited.
    TermChanged,
    /// The terminal was resized.
    PageResized,
}

pub struct Browser {
    store: EventStore,
    filtered: Vec<Event>,
    search: SearchState,
    view: ViewState,
    window: ListWindow,
    detail_scroll: DetailScroll,
    in_flight: usize,
    pub status_message: Option<String>,
}

impl Browser {
    pub fn new(page_size: usize) -> Self {
        Self {
            store: EventStore::default(),
            filtered: Vec::new(),
            search: SearchState::default(),
            view: ViewState::default(),
            window: ListWindow::new(page_size),
            detail_scroll: DetailScroll::new(page_size),
            in_flight: 0,
            status_message: None,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn filtered(&self) -> &[Event] {
        &self.filtered
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn window(&self) -> &ListWindow {
        &self.window
    }

    pub fn detail_scroll(&self) -> &DetailScroll {
        &self.detail_scroll
    }

    pub fn page_size(&self) -> usize {
        self.window.page_size()
    }

    /// Number of fetches dispatched whose completion has not arrived yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn visible_events(&self) -> &[Event] {
        self.window.visible_slice(&self.filtered)
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.window.selection().and_then(|i| self.filtered.get(i))
    }

    /// Kick off the first load of the collection.
    pub fn start(&mut self) -> Effect {
        self.fetch(FetchRequest::ListAll)
    }

    /// Apply one routed action. Returns the effects the app should run.
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        let mut effects = Vec::new();
        match action {
            Action::MoveUp => self.window.move_up(),
            Action::MoveDown => self.window.move_down(),
            Action::OpenSelected => {
                if let Some(event) = self.selected_event() {
                    let request = FetchRequest::GetById {
                        id: event.id.clone(),
                        source: event.source,
                    };
                    effects.push(self.fetch(request));
                }
            }
            Action::BeginSearch(mode) => {
                if self.view.is_list() {
                    self.view = ViewState::List { focus: InputFocus::TextEntry };
                    if self.search.begin(mode) {
                        self.on_state_changed(Change::TermChanged);
                    }
                }
            }
            Action::EditBuffer(key) => {
                if self.view.focus() == Some(InputFocus::TextEntry) && self.search.edit(key) {
                    self.on_state_changed(Change::TermChanged);
                }
            }
            Action::CancelEntry => self.leave_text_entry(),
            Action::SubmitEntry => {
                self.leave_text_entry();
                if self.search.mode == SearchMode::FetchByLocation {
                    let location = self.search.location.trim();
                    if location.is_empty() {
                        debug!("empty location submitted, nothing to fetch");
                    } else {
                        let request = FetchRequest::GetByLocation(location.to_string());
                        effects.push(self.fetch(request));
                    }
                }
            }
            Action::Refresh => effects.push(self.fetch(FetchRequest::ListAll)),
            Action::Quit => effects.push(Effect::Quit),
            Action::ScrollUp => self.detail_scroll.scroll_up(),
            Action::ScrollDown => self.detail_scroll.scroll_down(),
            Action::OpenUrl => {
                if let Some(event) = self.view.detail_event() {
                    if !event.url.is_empty() {
                        effects.push(Effect::OpenUrl(event.url.clone()));
                    }
                }
            }
            Action::Back => {
                if !self.view.is_list() {
                    self.view = ViewState::List { focus: InputFocus::Navigating };
                    self.detail_scroll.clear();
                }
            }
            Action::RefreshDetail => {
                let id = self
                    .view
                    .detail_event()
                    .filter(|e| e.needs_refresh())
                    .map(|e| e.id.clone());
                if let Some(id) = id {
                    effects.push(self.fetch(FetchRequest::RefreshById(id)));
                }
            }
        }
        effects
    }

    /// Apply a fetch completion. Failures leave state untouched.
    pub fn complete(&mut self, outcome: FetchOutcome, now: DateTime<Utc>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let kind = outcome.kind();
        match outcome {
            FetchOutcome::Listed(Ok(events)) => {
                info!(count = events.len(), "event list loaded");
                self.status_message = None;
                self.store.replace(events);
                self.on_state_changed(Change::StoreReplaced { now });
            }
            FetchOutcome::Located(Ok(event)) => {
                info!(id = %event.id, "location fetch returned an event");
                self.status_message = None;
                self.store.replace(vec![event]);
                self.on_state_changed(Change::StoreReplaced { now });
            }
            FetchOutcome::Detail(Ok(event)) => {
                debug!(id = %event.id, "opening details");
                self.status_message = None;
                self.detail_scroll.load(&event);
                self.view = ViewState::Details { event };
            }
            FetchOutcome::Refreshed(Ok(event)) => match &mut self.view {
                ViewState::Details { event: open } if open.id == event.id => {
                    debug!(id = %event.id, "detail refreshed in place");
                    self.detail_scroll.reload(&event);
                    *open = event;
                    self.status_message = None;
                }
                _ => debug!(id = %event.id, "dropping refresh for an event no longer open"),
            },
            FetchOutcome::Listed(Err(err))
            | FetchOutcome::Located(Err(err))
            | FetchOutcome::Detail(Err(err))
            | FetchOutcome::Refreshed(Err(err)) => {
                warn!(kind, error = %err, "fetch failed");
                self.status_message = Some(format!("{kind} failed: {err}"));
            }
        }
    }

    /// The terminal changed height; both controllers follow.
    pub fn resize(&mut self, page_size: usize) {
        if page_size.max(1) == self.window.page_size() {
            return;
        }
        self.window.set_page_size(page_size);
        self.detail_scroll.set_page_size(page_size);
        self.on_state_changed(Change::PageResized);
    }

    /// Re-derive the filtered list, then re-clamp the list window and the
    /// detail scroll, in that order.
    pub fn on_state_changed(&mut self, change: Change) {
        if matches!(change, Change::StoreReplaced { .. } | Change::TermChanged) {
            self.filtered = filter_and_sort(self.store.events(), &self.search.term);
        }

        self.window.set_len(self.filtered.len());
        self.window.reset();
        if let Change::StoreReplaced { now } = change {
            self.window.skip_past(&self.filtered, now);
        }
        self.window.slide();

        let page_size = self.window.page_size();
        self.detail_scroll.set_page_size(page_size);
    }

    fn leave_text_entry(&mut self) {
        if self.view.focus() == Some(InputFocus::TextEntry) {
            self.view = ViewState::List { focus: InputFocus::Navigating };
        }
    }

    fn fetch(&mut self, request: FetchRequest) -> Effect {
        self.in_flight += 1;
        debug!(kind = request.kind(), in_flight = self.in_flight, "dispatching fetch");
        Effect::Fetch(request)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::error::FetchError;
    use crate::model::EventSource;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn event(id: &str, title: &str, hours: i64) -> Event {
        Event::new(id, title, now() + Duration::hours(hours))
    }

    fn loaded(page_size: usize, events: Vec<Event>) -> Browser {
        let mut browser = Browser::new(page_size);
        browser.start();
        browser.complete(FetchOutcome::Listed(Ok(events)), now());
        browser
    }

    fn type_text(browser: &mut Browser, text: &str) {
        for c in text.chars() {
            browser.apply(Action::EditBuffer(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }
    }

    fn failure() -> FetchError {
        FetchError::Status { url: "http://localhost/x".into(), status: 500 }
    }

    #[test]
    fn load_skips_elapsed_events() {
        let browser = loaded(10, vec![event("A", "A", 1), event("B", "B", -1), event("C", "C", 2)]);
        let ids: Vec<_> = browser.filtered().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["B", "A", "C"]);
        assert_eq!(browser.window().selected(), 1);
        assert_eq!(browser.window().offset(), 1);
        assert!(!browser.is_loading());
    }

    #[test]
    fn filter_term_is_live_and_resets_window() {
        let mut browser = loaded(
            5,
            vec![event("1", "Rust night", 1), event("2", "Go night", 2), event("3", "rustfmt", 3)],
        );
        browser.apply(Action::MoveDown);
        browser.apply(Action::BeginSearch(SearchMode::Filter));
        assert_eq!(browser.view().focus(), Some(InputFocus::TextEntry));
        type_text(&mut browser, "RUST");
        assert_eq!(browser.filtered().len(), 2);
        assert_eq!(browser.window().selected(), 0);

        browser.apply(Action::CancelEntry);
        assert_eq!(browser.view().focus(), Some(InputFocus::Navigating));
        assert_eq!(browser.search().term, "RUST");
        assert_eq!(browser.filtered().len(), 2);
    }

    #[test]
    fn submitting_location_requests_fetch_and_replaces_store() {
        let mut browser = loaded(5, vec![event("1", "a", 1), event("2", "b", 2)]);
        browser.apply(Action::BeginSearch(SearchMode::FetchByLocation));
        type_text(&mut browser, " lisbon ");
        let effects = browser.apply(Action::SubmitEntry);
        assert_eq!(
            effects,
            vec![Effect::Fetch(FetchRequest::GetByLocation("lisbon".into()))]
        );
        assert!(browser.is_loading());

        browser.complete(FetchOutcome::Located(Ok(event("L", "Lisbon Rust", 5))), now());
        assert_eq!(browser.store().len(), 1);
        assert_eq!(browser.filtered()[0].id, "L");
    }

    #[test]
    fn blank_location_does_not_fetch() {
        let mut browser = loaded(5, vec![event("1", "a", 1)]);
        browser.apply(Action::BeginSearch(SearchMode::FetchByLocation));
        assert!(browser.apply(Action::SubmitEntry).is_empty());
        assert_eq!(browser.view().focus(), Some(InputFocus::Navigating));
    }

    #[test]
    fn failed_location_fetch_keeps_collection() {
        let mut browser = loaded(5, vec![event("1", "a", 1), event("2", "b", 2)]);
        browser.apply(Action::BeginSearch(SearchMode::FetchByLocation));
        type_text(&mut browser, "nowhere");
        browser.apply(Action::SubmitEntry);
        browser.complete(FetchOutcome::Located(Err(failure())), now());
        assert_eq!(browser.store().len(), 2);
        assert!(browser.status_message.is_some());
        assert!(!browser.is_loading());
    }

    #[test]
    fn open_dispatches_by_source_and_enters_details() {
        let mut luma = event("L1", "Luma", 1);
        luma.source = EventSource::Luma;
        let mut browser = loaded(5, vec![luma]);

        let effects = browser.apply(Action::OpenSelected);
        assert_eq!(
            effects,
            vec![Effect::Fetch(FetchRequest::GetById { id: "L1".into(), source: EventSource::Luma })]
        );
        assert!(browser.view().is_list());

        let mut detail = event("L1", "Luma", 1);
        detail.description = Some("one\ntwo".into());
        browser.complete(FetchOutcome::Detail(Ok(detail)), now());
        assert!(browser.view().detail_event().is_some());
        assert_eq!(browser.detail_scroll().offset(), 0);
        assert_eq!(browser.detail_scroll().total_lines(), DETAIL_HEADER_LINES + 1 + 2);
    }

    #[test]
    fn open_on_empty_list_is_noop() {
        let mut browser = loaded(5, vec![]);
        assert!(browser.apply(Action::OpenSelected).is_empty());
        assert!(!browser.is_loading());
    }

    #[test]
    fn failed_detail_fetch_stays_in_list() {
        let mut browser = loaded(5, vec![event("1", "a", 1)]);
        browser.apply(Action::OpenSelected);
        browser.complete(FetchOutcome::Detail(Err(failure())), now());
        assert!(browser.view().is_list());
    }

    #[test]
    fn back_preserves_list_window() {
        let events = (0..20).map(|i| event(&i.to_string(), "e", i + 1)).collect();
        let mut browser = loaded(4, events);
        for _ in 0..7 {
            browser.apply(Action::MoveDown);
        }
        let before = browser.window().clone();
        browser.apply(Action::OpenSelected);
        browser.complete(FetchOutcome::Detail(Ok(event("7", "e", 8))), now());
        browser.apply(Action::ScrollDown);
        browser.apply(Action::Back);
        assert!(browser.view().is_list());
        assert_eq!(browser.window(), &before);
        assert_eq!(browser.detail_scroll().offset(), 0);
    }

    #[test]
    fn open_url_only_from_details() {
        let mut ev = event("1", "a", 1);
        ev.url = "https://example.com/1".into();
        let mut browser = loaded(5, vec![ev.clone()]);
        assert!(browser.apply(Action::OpenUrl).is_empty());
        browser.complete(FetchOutcome::Detail(Ok(ev)), now());
        assert_eq!(
            browser.apply(Action::OpenUrl),
            vec![Effect::OpenUrl("https://example.com/1".into())]
        );
    }

    #[test]
    fn refresh_detail_only_for_refreshable_events() {
        let mut luma = event("L", "luma", 1);
        luma.source = EventSource::Luma;
        let mut browser = loaded(5, vec![luma.clone()]);
        browser.complete(FetchOutcome::Detail(Ok(luma.clone())), now());

        let effects = browser.apply(Action::RefreshDetail);
        assert_eq!(effects, vec![Effect::Fetch(FetchRequest::RefreshById("L".into()))]);

        let mut refreshed = luma;
        refreshed.description = Some("now with text".into());
        browser.complete(FetchOutcome::Refreshed(Ok(refreshed)), now());
        let open = browser.view().detail_event().unwrap();
        assert_eq!(open.description.as_deref(), Some("now with text"));
        assert!(browser.apply(Action::RefreshDetail).is_empty());
    }

    #[test]
    fn stale_refresh_is_dropped_after_back() {
        let mut luma = event("L", "luma", 1);
        luma.source = EventSource::Luma;
        let mut browser = loaded(5, vec![luma.clone()]);
        browser.complete(FetchOutcome::Detail(Ok(luma.clone())), now());
        browser.apply(Action::RefreshDetail);
        browser.apply(Action::Back);
        browser.complete(FetchOutcome::Refreshed(Ok(luma)), now());
        assert!(browser.view().is_list());
    }

    #[test]
    fn refresh_reloads_and_skips_past_again() {
        let mut browser = loaded(3, vec![event("1", "a", 1)]);
        let effects = browser.apply(Action::Refresh);
        assert_eq!(effects, vec![Effect::Fetch(FetchRequest::ListAll)]);
        browser.complete(
            FetchOutcome::Listed(Ok(vec![event("x", "x", -2), event("y", "y", -1), event("z", "z", 1)])),
            now(),
        );
        assert_eq!(browser.window().selected(), 2);
        assert_eq!(browser.window().offset(), 2);
    }

    #[test]
    fn duplicate_refreshes_apply_last_arrival() {
        let mut browser = loaded(3, vec![]);
        browser.apply(Action::Refresh);
        browser.apply(Action::Refresh);
        assert_eq!(browser.in_flight(), 2);
        browser.complete(FetchOutcome::Listed(Ok(vec![event("first", "a", 1)])), now());
        browser.complete(FetchOutcome::Listed(Ok(vec![event("second", "b", 1)])), now());
        assert_eq!(browser.store().events()[0].id, "second");
        assert_eq!(browser.in_flight(), 0);
    }

    #[test]
    fn resize_resets_window_and_reclamps_detail() {
        let events = (0..12).map(|i| event(&i.to_string(), "e", i + 1)).collect();
        let mut browser = loaded(5, events);
        for _ in 0..6 {
            browser.apply(Action::MoveDown);
        }
        assert_eq!(browser.window().offset(), 2);

        let mut long = event("d", "d", 1);
        long.description = Some(vec!["x"; 20].join("\n"));
        browser.complete(FetchOutcome::Detail(Ok(long)), now());
        for _ in 0..30 {
            browser.apply(Action::ScrollDown);
        }
        assert_eq!(browser.detail_scroll().offset(), 21);

        browser.resize(20);
        assert_eq!(browser.window().selected(), 0);
        assert_eq!(browser.detail_scroll().offset(), 6);
    }

    #[test]
    fn begin_search_ignored_in_details() {
        let ev = event("1", "a", 1);
        let mut browser = loaded(5, vec![ev.clone()]);
        browser.complete(FetchOutcome::Detail(Ok(ev)), now());
        browser.apply(Action::BeginSearch(SearchMode::Filter));
        assert!(browser.view().detail_event().is_some());
    }
}
