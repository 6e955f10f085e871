use std::ops::Range;

use chrono::{DateTime, Utc};

use crate::model::Event;

/// Selection and scroll window over the filtered list.
///
/// Keeps `offset <= selected < offset + page_size` whenever the list is
/// non-empty, and `selected` inside `[0, len - 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListWindow {
    selected: usize,
    offset: usize,
    page_size: usize,
    len: usize,
}

impl ListWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            page_size: page_size.max(1),
            len: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Selected index, or `None` when there is nothing to select.
    pub fn selection(&self) -> Option<usize> {
        (self.len > 0).then_some(self.selected)
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Track a new list length, pulling `selected` back inside it.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.clamp();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.slide();
    }

    /// Jump to the first event that has not started yet. Assumes `events`
    /// is sorted ascending by time.
    pub fn skip_past(&mut self, events: &[Event], now: DateTime<Utc>) {
        if let Some(idx) = events.iter().position(|e| e.date_time >= now) {
            if idx > 0 {
                self.selected = idx;
                self.offset = idx;
            }
        }
        self.clamp();
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.slide();
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
        self.slide();
    }

    /// Move the window just enough to keep `selected` visible.
    pub fn slide(&mut self) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + self.page_size {
            self.offset = self.selected + 1 - self.page_size;
        }
    }

    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.len);
        let end = (self.offset + self.page_size).min(self.len);
        start..end
    }

    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    fn clamp(&mut self) {
        if self.len == 0 {
            self.reset();
            return;
        }
        if self.selected >= self.len {
            self.selected = self.len - 1;
        }
        self.slide();
    }
}
