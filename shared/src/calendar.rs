//! Calendar domain logic for the month view.
//!
//! Date arithmetic, grid layout and per-day event placement live here so the
//! UI only has to map the resulting `CalendarMonth` onto markup and classes.

use crate::error::{CalendarError, CalendarResult};
use crate::events::EventIndex;
use crate::{CalendarDay, CalendarDayType, CalendarMonth, DayTone};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The month currently on display. Always refers to a real first-of-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::InvalidDate { year, month, day: 1 })?;
        Ok(Self { year, month })
    }

    /// Cursor for the month that contains `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Constructors only admit year/month pairs chrono can represent
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Day `day` of this month, if it exists
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 => if is_leap_year(self.year) { 29 } else { 28 },
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of the first day (0 = Sunday, 1 = Monday, etc.)
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Heading such as "June 2025"
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Short weekday names in grid column order
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Calendar service that lays out months and places events on days
#[derive(Clone, Debug, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Generate the month grid: leading padding cells, then one cell per day
    pub fn generate_calendar_month(
        &self,
        cursor: MonthCursor,
        events: &EventIndex,
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> CalendarMonth {
        let days_in_month = cursor.days_in_month();
        let first_day = cursor.first_weekday();

        log::debug!(
            "Generating calendar for {}/{}: {} days, first weekday {}",
            cursor.month(),
            cursor.year(),
            days_in_month,
            first_day
        );

        let mut calendar_days = Vec::with_capacity((first_day + days_in_month) as usize);

        for _ in 0..first_day {
            calendar_days.push(CalendarDay::padding());
        }

        for day in 1..=days_in_month {
            let Some(date) = cursor.date(day) else {
                continue;
            };

            calendar_days.push(CalendarDay {
                day,
                date: Some(date),
                day_type: CalendarDayType::MonthDay,
                tone: self.day_tone(date, today),
                is_selected: selected == Some(date),
                events: events.scheduled_on(date),
            });
        }

        CalendarMonth {
            cursor,
            title: cursor.title(),
            days: calendar_days,
        }
    }

    /// Base highlight for a day: today, then Sunday, then Saturday
    pub fn day_tone(&self, date: NaiveDate, today: NaiveDate) -> DayTone {
        if date == today {
            return DayTone::Today;
        }
        match date.weekday() {
            Weekday::Sun => DayTone::Sunday,
            Weekday::Sat => DayTone::Saturday,
            _ => DayTone::Weekday,
        }
    }

    /// Heading for the selected-day panel, e.g. "Events on Jun 5, 2025"
    pub fn selected_day_heading(&self, date: NaiveDate) -> String {
        format!("Events on {}", date.format("%b %-d, %Y"))
    }
}
