use crossterm::terminal;

/// Rows taken by chrome around the list/detail body: title, separator,
/// more-hint, search bar and help line, plus one spare.
pub const CHROME_ROWS: u16 = 6;

/// Used when the terminal size cannot be read (e.g. no tty).
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Terminal dimensions and what they allow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub cols: u16,
    pub rows: u16,
}

impl Layout {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn from_terminal() -> Self {
        let (cols, rows) = terminal::size().unwrap_or(FALLBACK_SIZE);
        Self::new(cols, rows)
    }

    /// Body rows for the list window and the detail text. Never below 1.
    pub fn page_size(&self) -> usize {
        usize::from(self.rows.saturating_sub(CHROME_ROWS)).max(1)
    }
}
