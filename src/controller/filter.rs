use crate::model::Event;

/// Case-insensitive substring match over the searchable attributes, then a
/// stable ascending sort by start time. An empty term matches everything.
pub fn filter_and_sort(events: &[Event], term: &str) -> Vec<Event> {
    let needle = term.to_lowercase();
    let mut matched: Vec<Event> = events
        .iter()
        .filter(|e| matches_term(e, &needle))
        .cloned()
        .collect();
    matched.sort_by_key(|e| e.date_time);
    matched
}

/// `needle` must already be lowercased.
fn matches_term(event: &Event, needle: &str) -> bool {
    needle.is_empty()
        || event
            .searchable_fields()
            .any(|field| field.to_lowercase().contains(needle))
}
