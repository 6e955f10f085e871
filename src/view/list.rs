use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use crossterm::style::Color;

use crate::controller::Browser;
use crate::model::Event;

use super::format::time_to_go;
use super::shared::{truncate_str, write_colored, write_dim, write_selected, writeln};

/// One list row without the cursor column.
pub fn list_row(event: &Event, now: DateTime<Local>) -> String {
    let local = event.date_time.with_timezone(&Local).naive_local();
    let countdown = time_to_go(local, now.naive_local());
    format!(
        "{} {} {} | {}",
        countdown,
        event.source.glyph(),
        event.title,
        event.venue_name
    )
}

/// Draw the list window, padded to `page_size` rows, then the more-hint row.
pub fn render_list(
    out: &mut impl Write,
    browser: &Browser,
    width: usize,
    now: DateTime<Local>,
) -> io::Result<()> {
    let window = browser.window();
    let page_size = window.page_size();
    let visible = browser.visible_events();

    if browser.filtered().is_empty() {
        let msg = if browser.is_loading() {
            "  Loading events..."
        } else if browser.store().is_empty() {
            "  No events available. Press r to refresh."
        } else {
            "  No events match the filter."
        };
        write_dim(out, msg)?;
        for _ in 1..page_size {
            writeln(out, "")?;
        }
        return writeln(out, "");
    }

    let now_utc = now.with_timezone(&Utc);
    for (i, event) in visible.iter().enumerate() {
        let selected = window.offset() + i == window.selected();
        let prefix = if selected { "❯ " } else { "  " };
        let row = format!("{}{}", prefix, list_row(event, now));
        let row = truncate_str(&row, width);

        if selected {
            write_selected(out, &row, width)?;
        } else if event.date_time < now_utc {
            write_dim(out, &row)?;
        } else if event.is_online() {
            write_colored(out, &row, Color::Blue)?;
        } else {
            write_colored(out, &row, Color::Green)?;
        }
    }
    for _ in visible.len()..page_size {
        writeln(out, "")?;
    }

    let range = window.visible_range();
    let mut hint = Vec::new();
    if range.start > 0 {
        hint.push(format!("↑ {} more", range.start));
    }
    if range.end < browser.filtered().len() {
        hint.push(format!("↓ {} more", browser.filtered().len() - range.end));
    }
    write_dim(out, &format!("  {}", hint.join("   ")))
}
