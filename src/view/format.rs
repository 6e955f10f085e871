use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

/// Short countdown for list rows: `started`, `today @HH:MM` or whole
/// calendar days ahead (`3d`). Both times are wall-clock local.
pub fn time_to_go(event: NaiveDateTime, now: NaiveDateTime) -> String {
    if event <= now {
        return "started".to_string();
    }
    let days = (event.date() - now.date()).num_days();
    if days == 0 {
        format!("today @{}", event.format("%H:%M"))
    } else {
        format!("{days}d")
    }
}

/// Distance from now in days and hours, e.g. `3d2h ꜛ` ahead or `5h ago`.
pub fn relative_age(event: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = event - now;
    let upcoming = delta.num_seconds() >= 0;
    let total_hours = delta.num_hours().abs();
    let days = total_hours / 24;
    let hours = total_hours % 24;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{days}d"));
    }
    if hours > 0 || days == 0 {
        out.push_str(&format!("{hours}h"));
    }
    out.push_str(if upcoming { " ꜛ" } else { " ago" });
    out
}

/// Price as the backend sent it: strings verbatim, numbers in dollars.
pub fn format_ticket_price(price: Option<&Value>) -> String {
    match price {
        None | Some(Value::Null) => "N/A".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) => format!("${v:.2}"),
            None => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}
