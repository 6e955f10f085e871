use std::io::{self, Write};

use chrono::{DateTime, Local};
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::controller::Browser;
use crate::model::{InputFocus, SearchMode, ViewState};

use super::shared::safe_truncate;

pub fn placeholder(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::Filter => "Filter meetups…",
        SearchMode::FetchByLocation => "Fetch location…",
    }
}

/// Search bar text as shown, without styling.
pub fn search_bar_text(browser: &Browser) -> String {
    let search = browser.search();
    let focused = browser.view().focus() == Some(InputFocus::TextEntry);
    let label = match search.mode {
        SearchMode::Filter => "/",
        SearchMode::FetchByLocation => "f",
    };
    if focused {
        format!("{} {}_", label, search.buffer())
    } else if search.buffer().is_empty() {
        format!("{} {}", label, placeholder(search.mode))
    } else {
        format!("{} {}", label, search.buffer())
    }
}

pub fn help_text(view: &ViewState) -> &'static str {
    match view {
        ViewState::List { focus: InputFocus::TextEntry } => "Type to edit | Enter: Submit | Esc: Done",
        ViewState::List { focus: InputFocus::Navigating } => {
            "↑/k ↓/j: Move | Enter: Details | /: Filter | f: Fetch location | r: Refresh | q: Quit"
        }
        ViewState::Details { .. } => "↑/k ↓/j: Scroll | o: Open link | b/Esc: Back | r: Load description",
    }
}

/// Search bar on the left, loading/status and the clock on the right, then
/// the key help row.
pub fn render_footer(
    out: &mut impl Write,
    browser: &Browser,
    width: usize,
    now: DateTime<Local>,
) -> io::Result<()> {
    let clock = now.format("%Y-%m-%d %H:%M:%S").to_string();
    let status = if browser.is_loading() {
        "⟳ loading… ".to_string()
    } else {
        browser
            .status_message
            .as_deref()
            .map(|m| format!("{m} "))
            .unwrap_or_default()
    };

    let right_len = status.chars().count() + clock.chars().count();
    let left_width = width.saturating_sub(right_len + 1);
    let bar = search_bar_text(browser);
    let bar = safe_truncate(&bar, left_width);
    let pad = left_width.saturating_sub(bar.chars().count());

    let focused = browser.view().focus() == Some(InputFocus::TextEntry);
    let empty = browser.search().buffer().is_empty();
    if focused {
        queue!(out, SetForegroundColor(Color::Cyan))?;
    } else if empty {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    queue!(out, Print(bar), SetAttribute(Attribute::Reset), ResetColor)?;
    write!(out, "{:pad$} ", "", pad = pad)?;

    if !status.is_empty() {
        queue!(out, SetForegroundColor(Color::Yellow), Print(&status), ResetColor)?;
    }
    queue!(out, SetForegroundColor(Color::DarkGrey), Print(&clock), ResetColor)?;
    write!(out, "\r\n")?;

    let help = safe_truncate(help_text(browser.view()), width);
    queue!(out, SetForegroundColor(Color::DarkGrey), Print(help), ResetColor)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::Action;

    #[test]
    fn placeholder_when_idle_cursor_when_typing() {
        let mut browser = Browser::new(5);
        assert_eq!(search_bar_text(&browser), "/ Filter meetups…");

        browser.apply(Action::BeginSearch(SearchMode::FetchByLocation));
        assert_eq!(search_bar_text(&browser), "f _");
        browser.apply(Action::EditBuffer(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert_eq!(search_bar_text(&browser), "f x_");

        browser.apply(Action::CancelEntry);
        assert_eq!(search_bar_text(&browser), "f x");
    }

    #[test]
    fn help_follows_view() {
        let details = ViewState::Details {
            event: crate::model::Event::new("1", "t", chrono::Utc::now()),
        };
        assert!(help_text(&details).contains("Open link"));
        assert!(help_text(&ViewState::default()).contains("Refresh"));
    }
}
