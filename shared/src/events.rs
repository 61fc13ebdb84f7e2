//! Static event source for the calendar.
//!
//! Events are loaded once and never mutated. Lookups are a linear scan
//! matching the event's date string against the day's `YYYY-MM-DD` key.

use crate::error::{CalendarError, CalendarResult};
use crate::{Event, ScheduledEvent};
use chrono::NaiveDate;
use serde_json::Value;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Immutable, unordered collection of events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventIndex {
    events: Vec<Event>,
}

impl EventIndex {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Parse a JSON array of event records. Only the top level has to be
    /// well formed; each record is read leniently.
    pub fn from_json(json: &str) -> CalendarResult<Self> {
        let Value::Array(records) = serde_json::from_str::<Value>(json)? else {
            return Err(CalendarError::NotAnArray);
        };

        let events: Vec<Event> = records.iter().map(Event::from_record).collect();
        log::debug!("Loaded {} calendar events", events.len());
        Ok(Self::new(events))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Events whose date string equals the formatted date, in source order
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        let key = date.format(DATE_KEY_FORMAT).to_string();
        self.events.iter().filter(|e| e.date == key).collect()
    }

    /// Events for the date with conflict flags applied
    pub fn scheduled_on(&self, date: NaiveDate) -> Vec<ScheduledEvent> {
        flag_conflicts(&self.events_on(date))
    }
}

/// Mark each event that shares its time string with a differently-identified
/// event in the same list
pub fn flag_conflicts(day_events: &[&Event]) -> Vec<ScheduledEvent> {
    day_events
        .iter()
        .map(|event| {
            let conflicting = day_events
                .iter()
                .any(|other| other.time == event.time && other.id != event.id);
            ScheduledEvent {
                event: (*event).clone(),
                conflicting,
            }
        })
        .collect()
}
