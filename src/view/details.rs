use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use crossterm::{
    queue,
    style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::controller::DetailScroll;
use crate::model::Event;

use super::format::{format_ticket_price, relative_age};
use super::shared::{safe_truncate, write_bold, write_colored, writeln};

/// Flattened detail text: the fixed header, a blank line, then the
/// description. Its length always equals `detail_line_count(event)`.
pub fn detail_lines(event: &Event, now: DateTime<Utc>) -> Vec<String> {
    let local = event.date_time.with_timezone(&Local);
    let mut lines = Vec::new();

    lines.push(format!(
        "{} ({}, {})",
        event.title,
        local.format("%Y-%m-%d %H:%M"),
        relative_age(event.date_time, now)
    ));
    lines.push(format!("Group: {}", event.group_name));

    let state = event.state.to_uppercase();
    let city = event.venue_city.as_deref().filter(|c| !c.is_empty()).unwrap_or(event.city.as_str());
    let place: Vec<&str> = [event.venue_name.as_str(), city, state.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    lines.push(format!("Venue: {}", place.join(", ")));

    let mut attendance = format!("RSVPs: {}", event.rsvps_count);
    if event.ticket_count > 0 {
        attendance.push_str(&format!(" | Tickets: {}/{}", event.ticket_remaining, event.ticket_count));
    }
    if event.ticket_price.as_ref().is_some_and(|p| !p.is_null()) {
        attendance.push_str(&format!(" | Price: {}", format_ticket_price(event.ticket_price.as_ref())));
    }
    lines.push(attendance);

    lines.push(format!("Link: {}", event.url));
    lines.push(String::new());

    if let Some(description) = event.description.as_deref() {
        lines.extend(description.lines().map(str::to_string));
    }
    lines
}

/// Draw the visible slice of the detail text, padded to the page, plus a
/// position row.
pub fn render_details(
    out: &mut impl Write,
    event: &Event,
    scroll: &DetailScroll,
    width: usize,
    now: DateTime<Utc>,
) -> io::Result<()> {
    let lines = detail_lines(event, now);
    let range = scroll.visible_range();
    let mut printed = 0;

    for (idx, line) in lines.iter().enumerate().skip(range.start).take(range.len()) {
        let line = safe_truncate(line, width);
        match idx {
            0 => write_bold(out, line)?,
            1 | 3 => write_colored(out, line, Color::Yellow)?,
            2 => write_colored(out, line, Color::Cyan)?,
            4 => {
                queue!(out, SetForegroundColor(Color::Magenta), SetAttribute(Attribute::Underlined))?;
                write!(out, "{}", line)?;
                queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
                write!(out, "\r\n")?;
            }
            _ => writeln(out, &format!("  {}", line))?,
        }
        printed += 1;
    }
    for _ in printed..scroll.page_size() {
        writeln(out, "")?;
    }

    let position = if event.description.is_none() {
        if event.needs_refresh() {
            "  (no description yet, press r to fetch it)".to_string()
        } else {
            "  (no description)".to_string()
        }
    } else if scroll.max_offset() > 0 {
        format!("  line {}/{}", scroll.offset() + 1, scroll.max_offset() + 1)
    } else {
        String::new()
    };
    queue!(out, SetForegroundColor(Color::DarkGrey))?;
    write!(out, "{}\r\n", position)?;
    queue!(out, ResetColor)
}
