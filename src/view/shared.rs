use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

/// Truncate a string to at most `max_len` characters (not bytes), appending "..."
/// if truncated. Safe for multi-byte UTF-8.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let keep = max_len.saturating_sub(3);
        let truncated: String = s.chars().take(keep).collect();
        format!("{}...", truncated)
    }
}

/// Cut `s` to at most `max_chars` characters without splitting a code point.
pub fn safe_truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

pub fn writeln(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{}\r\n", text)
}

pub fn write_colored(out: &mut impl Write, text: &str, color: Color) -> io::Result<()> {
    queue!(out, SetForegroundColor(color))?;
    write!(out, "{}\r\n", text)?;
    queue!(out, ResetColor)
}

pub fn write_dim(out: &mut impl Write, text: &str) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Dim))?;
    write!(out, "{}\r\n", text)?;
    queue!(out, SetAttribute(Attribute::Reset))
}

pub fn write_bold(out: &mut impl Write, text: &str) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Bold))?;
    write!(out, "{}\r\n", text)?;
    queue!(out, SetAttribute(Attribute::Reset))
}

/// Full-width highlighted row for the current selection.
pub fn write_selected(out: &mut impl Write, text: &str, width: usize) -> io::Result<()> {
    queue!(out, SetBackgroundColor(Color::DarkMagenta), SetForegroundColor(Color::White))?;
    write!(out, "{:<width$}", text, width = width)?;
    queue!(out, ResetColor)?;
    write!(out, "\r\n")
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
