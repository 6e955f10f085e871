use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{Action, InputFocus, SearchMode, ViewState};

use super::App;

/// Result of handling a key: Quit the app, or key was consumed (needs render).
/// None means the key was not handled.
pub enum InputResult {
    Quit,
    Consumed,
}

/// Map one keystroke to at most one action for the current view.
///
/// Text entry is checked first: while it has focus every key except Esc and
/// Enter goes to the buffer untouched.
pub fn route(key: KeyEvent, view: &ViewState) -> Option<Action> {
    match view {
        ViewState::List { focus: InputFocus::TextEntry } => Some(match key.code {
            KeyCode::Esc => Action::CancelEntry,
            KeyCode::Enter => Action::SubmitEntry,
            _ => Action::EditBuffer(key),
        }),
        ViewState::List { focus: InputFocus::Navigating } => route_list(key.code),
        ViewState::Details { .. } => route_details(key.code),
    }
}

fn route_list(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::OpenSelected),
        KeyCode::Char('/') => Some(Action::BeginSearch(SearchMode::Filter)),
        KeyCode::Char('f') => Some(Action::BeginSearch(SearchMode::FetchByLocation)),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn route_details(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::Char('o') => Some(Action::OpenUrl),
        KeyCode::Char('b') | KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('r') => Some(Action::RefreshDetail),
        _ => None,
    }
}

/// Handle a key event. Returns Some(Quit) to exit, Some(Consumed) if key was handled and
/// a render is needed, None if the key was not handled.
pub fn handle_key(app: &mut App, key_event: KeyEvent) -> Option<InputResult> {
    // Terminals that report releases would otherwise fire every action twice.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputResult::Quit);
    }

    let action = route(key_event, app.browser.view())?;
    let effects = app.browser.apply(action);
    if app.run_effects(effects) {
        return Some(InputResult::Quit);
    }
    Some(InputResult::Consumed)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::model::Event;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn navigating() -> ViewState {
        ViewState::List { focus: InputFocus::Navigating }
    }

    fn typing() -> ViewState {
        ViewState::List { focus: InputFocus::TextEntry }
    }

    fn details() -> ViewState {
        ViewState::Details { event: Event::new("1", "t", Utc::now()) }
    }

    #[test]
    fn text_entry_swallows_command_keys() {
        for c in ['q', 'r', 'f', '/', 'j', 'k', 'o', 'b'] {
            let k = key(KeyCode::Char(c));
            assert_eq!(route(k, &typing()), Some(Action::EditBuffer(k)));
        }
        assert_eq!(
            route(key(KeyCode::Backspace), &typing()),
            Some(Action::EditBuffer(key(KeyCode::Backspace)))
        );
        assert_eq!(route(key(KeyCode::Esc), &typing()), Some(Action::CancelEntry));
        assert_eq!(route(key(KeyCode::Enter), &typing()), Some(Action::SubmitEntry));
    }

    #[test]
    fn list_bindings() {
        let view = navigating();
        assert_eq!(route(key(KeyCode::Up), &view), Some(Action::MoveUp));
        assert_eq!(route(key(KeyCode::Char('k')), &view), Some(Action::MoveUp));
        assert_eq!(route(key(KeyCode::Down), &view), Some(Action::MoveDown));
        assert_eq!(route(key(KeyCode::Char('j')), &view), Some(Action::MoveDown));
        assert_eq!(route(key(KeyCode::Enter), &view), Some(Action::OpenSelected));
        assert_eq!(
            route(key(KeyCode::Char('/')), &view),
            Some(Action::BeginSearch(SearchMode::Filter))
        );
        assert_eq!(
            route(key(KeyCode::Char('f')), &view),
            Some(Action::BeginSearch(SearchMode::FetchByLocation))
        );
        assert_eq!(route(key(KeyCode::Char('r')), &view), Some(Action::Refresh));
        assert_eq!(route(key(KeyCode::Esc), &view), None);
        assert_eq!(route(key(KeyCode::Char('o')), &view), None);
    }

    #[test]
    fn detail_bindings() {
        let view = details();
        assert_eq!(route(key(KeyCode::Up), &view), Some(Action::ScrollUp));
        assert_eq!(route(key(KeyCode::Char('j')), &view), Some(Action::ScrollDown));
        assert_eq!(route(key(KeyCode::Char('o')), &view), Some(Action::OpenUrl));
        assert_eq!(route(key(KeyCode::Char('b')), &view), Some(Action::Back));
        assert_eq!(route(key(KeyCode::Esc), &view), Some(Action::Back));
        assert_eq!(route(key(KeyCode::Char('r')), &view), Some(Action::RefreshDetail));
        assert_eq!(route(key(KeyCode::Char('/')), &view), None);
        assert_eq!(route(key(KeyCode::Enter), &view), None);
    }
}
