use std::ops::Range;

use crate::model::Event;

/// Lines the detail view prints above the description: title, group,
/// venue, attendance and link.
pub const DETAIL_HEADER_LINES: usize = 5;

/// Flattened height of an event's detail rendering: header, one blank
/// separator, then the description lines (none when it is not loaded).
pub fn detail_line_count(event: &Event) -> usize {
    let description_lines = event.description.as_deref().map_or(0, |d| d.lines().count());
    DETAIL_HEADER_LINES + 1 + description_lines
}

/// Scroll position over one event's detail text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailScroll {
    offset: usize,
    total_lines: usize,
    page_size: usize,
}

impl DetailScroll {
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            total_lines: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.page_size)
    }

    /// A new event was opened; start at the top.
    pub fn load(&mut self, event: &Event) {
        self.total_lines = detail_line_count(event);
        self.offset = 0;
    }

    /// The open event was replaced in place; keep the position if it still fits.
    pub fn reload(&mut self, event: &Event) {
        self.total_lines = detail_line_count(event);
        self.clamp();
    }

    pub fn clear(&mut self) {
        self.total_lines = 0;
        self.offset = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp();
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.offset = (self.offset + 1).min(self.max_offset());
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.offset..(self.offset + self.page_size).min(self.total_lines)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}
