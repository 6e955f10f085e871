use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Upstream provider an event came from. Decides which detail/refresh
/// endpoint applies to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    #[default]
    Meetup,
    Luma,
}

impl EventSource {
    /// Only secondary-source events can be re-scraped on demand.
    pub fn is_refreshable(self) -> bool {
        matches!(self, EventSource::Luma)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            EventSource::Meetup => "☘",
            EventSource::Luma => "✦",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default)]
    pub venue_city: Option<String>,
    #[serde(default, alias = "venueState", deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub venue_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    pub date_time: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: EventSource,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rsvps_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticket_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticket_remaining: u32,
    #[serde(default)]
    pub ticket_price: Option<serde_json::Value>,
}

/// The backend sends `null` for unknown counts and names; treat it like a
/// missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Event {
    /// Minimal event for callers that only care about identity and time.
    pub fn new(id: impl Into<String>, title: impl Into<String>, date_time: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            group_name: String::new(),
            city: String::new(),
            venue_city: None,
            state: String::new(),
            venue_name: String::new(),
            url: String::new(),
            date_time,
            description: None,
            source: EventSource::Meetup,
            rsvps_count: 0,
            ticket_count: 0,
            ticket_remaining: 0,
            ticket_price: None,
        }
    }

    /// Attributes the list filter searches, in no particular order.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.title.as_str()),
            Some(self.group_name.as_str()),
            Some(self.city.as_str()),
            self.venue_city.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    pub fn is_online(&self) -> bool {
        self.venue_name == "Online event"
    }

    /// Whether the detail view may ask the backend to re-scrape this event.
    pub fn needs_refresh(&self) -> bool {
        self.description.is_none() && self.source.is_refreshable()
    }
}
