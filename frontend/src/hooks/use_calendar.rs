use chrono::NaiveDate;
use shared::MonthCursor;
use yew::prelude::*;

/// Displayed month plus the optional selected day
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalendarState {
    pub cursor: MonthCursor,
    pub selected: Option<NaiveDate>,
}

impl CalendarState {
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            cursor: MonthCursor::containing(today),
            selected: None,
        }
    }

    pub fn next_month(self) -> Self {
        Self { cursor: self.cursor.next(), ..self }
    }

    pub fn previous_month(self) -> Self {
        Self { cursor: self.cursor.previous(), ..self }
    }

    /// Selection survives navigation; there is no way to clear it
    pub fn select(self, date: NaiveDate) -> Self {
        Self { selected: Some(date), ..self }
    }
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub select_day: Callback<NaiveDate>,
}

#[hook]
pub fn use_calendar(today: NaiveDate) -> UseCalendarResult {
    let state = use_state(|| CalendarState::starting_at(today));

    let prev_month = {
        let state = state.clone();
        use_callback(*state, move |_: MouseEvent, current| {
            let updated = current.previous_month();
            log::debug!("Navigated back to {}", updated.cursor.title());
            state.set(updated);
        })
    };

    let next_month = {
        let state = state.clone();
        use_callback(*state, move |_: MouseEvent, current| {
            let updated = current.next_month();
            log::debug!("Navigated forward to {}", updated.cursor.title());
            state.set(updated);
        })
    };

    let select_day = {
        let state = state.clone();
        use_callback(*state, move |date: NaiveDate, current| {
            log::debug!("Selected {}", date);
            state.set(current.select(date));
        })
    };

    UseCalendarResult {
        state: *state,
        actions: UseCalendarActions {
            prev_month,
            next_month,
            select_day,
        },
    }
}
