mod details;
mod footer;
mod format;
mod list;
mod shared;

use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use crossterm::{
    cursor, execute, queue,
    style::{Color, ResetColor, SetForegroundColor},
    terminal,
};

use crate::controller::Browser;
use crate::layout::Layout;
use crate::model::ViewState;

pub use details::detail_lines;
pub use footer::{help_text, search_bar_text};
pub use format::{format_ticket_price, relative_age, time_to_go};
pub use list::list_row;
pub use shared::{safe_truncate, truncate_str};

pub struct Presenter;

/// Minimum terminal dimensions for usable rendering.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 8;

impl Presenter {
    /// Check if the terminal is large enough. If not, render a "too small"
    /// message and return `true` (meaning "skip normal rendering").
    pub fn render_size_guard(layout: &Layout) -> io::Result<bool> {
        let Layout { cols, rows } = *layout;
        if cols < MIN_COLS || rows < MIN_ROWS {
            let mut out = io::stdout();
            execute!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
            let msg = format!(
                "Terminal too small ({}x{}). Resize to at least {}x{}.",
                cols, rows, MIN_COLS, MIN_ROWS
            );
            let y = rows / 2;
            let x = cols.saturating_sub(msg.chars().count() as u16) / 2;
            queue!(out, cursor::MoveTo(x, y), SetForegroundColor(Color::Yellow))?;
            write!(out, "{}", msg)?;
            queue!(out, ResetColor)?;
            out.flush()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Draw one full frame: title, body for the current view, footer.
    pub fn render(browser: &Browser, layout: &Layout) -> io::Result<()> {
        let mut out = io::stdout();
        queue!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
        Self::draw(&mut out, browser, layout, Local::now())?;
        out.flush()
    }

    /// Frame body written to any sink; `render` points it at stdout.
    pub fn draw(
        out: &mut impl Write,
        browser: &Browser,
        layout: &Layout,
        now: DateTime<Local>,
    ) -> io::Result<()> {
        let width = usize::from(layout.cols);

        let title = match browser.view() {
            ViewState::List { .. } => format!(
                "📅 Meetups ({} of {})",
                browser.filtered().len(),
                browser.store().len()
            ),
            ViewState::Details { .. } => "🔎 Meetup Details".to_string(),
        };
        shared::write_bold(out, &title)?;
        shared::write_colored(out, &shared::separator(width), Color::DarkGrey)?;

        match browser.view() {
            ViewState::List { .. } => list::render_list(out, browser, width, now)?,
            ViewState::Details { event } => details::render_details(
                out,
                event,
                browser.detail_scroll(),
                width,
                now.with_timezone(&Utc),
            )?,
        }

        footer::render_footer(out, browser, width, now)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::layout::CHROME_ROWS;
    use crate::model::{Event, FetchOutcome};

    #[test]
    fn frame_fills_exactly_the_terminal() {
        let layout = Layout::new(80, 20);
        let now = Local.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let events = (0..30)
            .map(|i| Event::new(i.to_string(), "e", now.with_timezone(&Utc) + chrono::Duration::hours(i)))
            .collect();
        let mut browser = Browser::new(layout.page_size());
        browser.complete(FetchOutcome::Listed(Ok(events)), now.with_timezone(&Utc));

        let mut out = Vec::new();
        Presenter::draw(&mut out, &browser, &layout, now).unwrap();
        let text = String::from_utf8(out).unwrap();
        // Last row has no trailing newline.
        assert_eq!(text.matches("\r\n").count() + 1, usize::from(layout.rows) - 1);
        assert_eq!(layout.page_size() + usize::from(CHROME_ROWS), usize::from(layout.rows));
    }
}
