use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Event, FetchRequest};

/// Where keystrokes go while the list is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFocus {
    #[default]
    Navigating,
    TextEntry,
}

/// What submitting the search bar does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Narrow the loaded collection as you type.
    #[default]
    Filter,
    /// Ask the backend to scrape a location; replaces the collection.
    FetchByLocation,
}

/// Top-level view state.
#[derive(Clone, Debug)]
pub enum ViewState {
    List { focus: InputFocus },
    Details { event: Event },
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::List { focus: InputFocus::Navigating }
    }
}

impl ViewState {
    pub fn is_list(&self) -> bool {
        matches!(self, ViewState::List { .. })
    }

    pub fn focus(&self) -> Option<InputFocus> {
        match self {
            ViewState::List { focus } => Some(*focus),
            ViewState::Details { .. } => None,
        }
    }

    pub fn detail_event(&self) -> Option<&Event> {
        match self {
            ViewState::Details { event } => Some(event),
            ViewState::List { .. } => None,
        }
    }
}

/// Search bar contents. The filter term and the location buffer are kept
/// apart so that typing a location never disturbs the live filter.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub term: String,
    pub location: String,
    pub mode: SearchMode,
}

impl SearchState {
    /// Buffer the search bar currently shows.
    pub fn buffer(&self) -> &str {
        match self.mode {
            SearchMode::Filter => &self.term,
            SearchMode::FetchByLocation => &self.location,
        }
    }

    /// Switch mode and clear that mode's buffer. Returns true if the filter
    /// term changed.
    pub fn begin(&mut self, mode: SearchMode) -> bool {
        self.mode = mode;
        match mode {
            SearchMode::Filter => {
                let changed = !self.term.is_empty();
                self.term.clear();
                changed
            }
            SearchMode::FetchByLocation => {
                self.location.clear();
                false
            }
        }
    }

    /// Apply a raw keystroke to the active buffer. Returns true if the filter
    /// term changed.
    pub fn edit(&mut self, key: KeyEvent) -> bool {
        let buffer = match self.mode {
            SearchMode::Filter => &mut self.term,
            SearchMode::FetchByLocation => &mut self.location,
        };
        let edited = match key.code {
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                buffer.push(c);
                true
            }
            KeyCode::Backspace => buffer.pop().is_some(),
            _ => false,
        };
        edited && self.mode == SearchMode::Filter
    }
}

/// One logical action produced by routing a keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    OpenSelected,
    BeginSearch(SearchMode),
    Refresh,
    Quit,
    EditBuffer(KeyEvent),
    CancelEntry,
    SubmitEntry,
    ScrollUp,
    ScrollDown,
    OpenUrl,
    Back,
    RefreshDetail,
}

/// Side effect requested by the engine; executed by the app layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Fetch(FetchRequest),
    OpenUrl(String),
    Quit,
}
