use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub mod calendar;
pub mod error;
pub mod events;

pub use calendar::{CalendarService, MonthCursor};
pub use error::{CalendarError, CalendarResult};
pub use events::EventIndex;

/// Caller-supplied event identifier. The bundled data uses numbers, but
/// string ids are accepted too. Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl EventId {
    /// Integers keep their numeric form; any other scalar is stringified.
    /// Null and structured values fall back to the empty id.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(EventId::Number)
                .unwrap_or_else(|| EventId::Text(n.to_string())),
            Value::String(s) => EventId::Text(s.clone()),
            Value::Bool(b) => EventId::Text(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => EventId::default(),
        }
    }
}

impl Default for EventId {
    fn default() -> Self {
        EventId::Text(String::new())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{}", n),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

/// A scheduled event as read from the static data source.
///
/// Every field except `id` is an opaque display string. Missing fields
/// deserialize as empty so a broken record just never matches a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: EventId,
    /// Calendar date in YYYY-MM-DD format, compared verbatim
    pub date: String,
    /// Clock time such as "10:00 AM"
    pub time: String,
    pub title: String,
    /// Free-form duration such as "1h" or "30m"
    pub duration: String,
}

impl Event {
    /// Build an event from a loosely typed JSON record. A field that is
    /// missing, null or structured comes out empty, so a bad record simply
    /// never matches a day instead of spoiling the whole source.
    pub fn from_record(record: &Value) -> Self {
        let field = |name: &str| record.get(name).map(scalar_text).unwrap_or_default();

        Self {
            id: record.get("id").map(EventId::from_value).unwrap_or_default(),
            date: field("date"),
            time: field("time"),
            title: field("title"),
            duration: field("duration"),
        }
    }

    /// Tooltip text shown when hovering an event chip
    pub fn tooltip(&self) -> String {
        format!("{} at {} ({})", self.title, self.time, self.duration)
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// An event placed on a specific day, flagged when another event that day
/// shares its time slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub event: Event,
    pub conflicting: bool,
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Empty padding cell before the first day of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// Base highlight of a day cell. Today wins over weekend colouring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayTone {
    Today,
    Sunday,
    Saturday,
    Weekday,
}

/// A single cell in the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    pub date: Option<NaiveDate>,
    pub day_type: CalendarDayType,
    pub tone: DayTone,
    pub is_selected: bool,
    pub events: Vec<ScheduledEvent>,
}

impl CalendarDay {
    pub fn padding() -> Self {
        Self {
            day: 0,
            date: None,
            day_type: CalendarDayType::PaddingBefore,
            tone: DayTone::Weekday,
            is_selected: false,
            events: Vec::new(),
        }
    }

    pub fn is_padding(&self) -> bool {
        self.day_type == CalendarDayType::PaddingBefore
    }
}

/// A month laid out for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub cursor: MonthCursor,
    /// Heading such as "June 2025"
    pub title: String,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Cells that represent real days, skipping leading padding
    pub fn month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|d| !d.is_padding())
    }
}
