use crate::model::Event;

/// Last-fetched raw collection. Replaced wholesale, never merged.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn replace(&mut self, events: Vec<Event>) {
        self.events = events;
    }
}
