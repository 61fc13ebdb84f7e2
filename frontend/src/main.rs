use shared::CalendarService;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;
#[cfg(test)]
mod test_utils;

use components::calendar::Calendar;
use components::header::CalendarHeader;
use components::selected_day_panel::SelectedDayPanel;
use config::CalendarConfig;
use hooks::use_calendar::use_calendar;
use hooks::use_events::use_events;
use services::date_utils;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub config: CalendarConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = &props.config;
    // Re-read on every render so the highlight follows the clock past midnight
    let today = config.today.unwrap_or_else(date_utils::today);

    let events = use_events(config.events_source.clone());
    let calendar = use_calendar(today);
    let state = calendar.state;

    let calendar_data = CalendarService::new().generate_calendar_month(
        state.cursor,
        &events,
        today,
        state.selected,
    );

    html! {
        <div class="calendar-container">
            <CalendarHeader
                title={calendar_data.title.clone()}
                on_previous={calendar.actions.prev_month.clone()}
                on_next={calendar.actions.next_month.clone()}
            />

            {if let Some(selected) = state.selected {
                let day_events = events.events_on(selected).into_iter().cloned().collect::<Vec<_>>();
                html! { <SelectedDayPanel date={selected} events={day_events} /> }
            } else {
                html! {}
            }}

            <Calendar
                calendar_data={calendar_data}
                on_select_day={calendar.actions.select_day.clone()}
            />
        </div>
    }
}

fn main() {
    let config = CalendarConfig::default();
    Logger::init(config.log_level);
    Logger::info_with_component("main", "Starting month calendar");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::selected_day_panel::EMPTY_DAY_MESSAGE;
    use crate::test_utils::{click, count, mount, text};
    use chrono::NaiveDate;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const EVENTS: &str = r#"[
        {"id": 1, "date": "2025-06-05", "time": "10:00 AM", "title": "Client Call", "duration": "45m"},
        {"id": 2, "date": "2025-06-05", "time": "10:00 AM", "title": "Dentist", "duration": "1h"},
        {"id": 3, "date": "2025-06-05", "time": "2:00 PM", "title": "Code Review", "duration": "30m"},
        {"id": 4, "date": "2025-06-05", "time": 1400, "title": "Bad Time", "duration": "1h"}
    ]"#;

    fn config() -> CalendarConfig {
        CalendarConfig {
            today: NaiveDate::from_ymd_opt(2025, 6, 10),
            ..CalendarConfig::with_events(EVENTS)
        }
    }

    #[wasm_bindgen_test]
    async fn test_app_renders_configured_events() {
        let root = mount::<App>(AppProps { config: config() }).await;

        let content = text(&root);
        assert!(content.contains("June 2025"));
        assert!(content.contains("Client Call"));
        assert!(content.contains("Bad Time"));

        // June 2025 starts on a Sunday
        assert_eq!(count(&root, ".calendar-grid > .calendar-day"), 30);
        assert_eq!(count(&root, ".calendar-day.today"), 1);
        assert_eq!(count(&root, ".event-chip"), 4);
        assert_eq!(count(&root, ".event-chip.conflict"), 2);
    }

    #[wasm_bindgen_test]
    async fn test_next_month_adds_leading_blanks() {
        let root = mount::<App>(AppProps { config: config() }).await;

        click(&root, "button[aria-label='Next Month']").await;

        // July 2025 starts on a Tuesday: 2 blanks + 31 days
        assert!(text(&root).contains("July 2025"));
        assert_eq!(count(&root, ".calendar-day.empty"), 2);
        assert_eq!(count(&root, ".calendar-grid > .calendar-day"), 33);

        click(&root, "button[aria-label='Previous Month']").await;
        click(&root, "button[aria-label='Previous Month']").await;
        assert!(text(&root).contains("May 2025"));
    }

    #[wasm_bindgen_test]
    async fn test_selecting_empty_day_shows_empty_message() {
        let root = mount::<App>(AppProps { config: config() }).await;
        assert_eq!(count(&root, ".selected-day-panel"), 0);

        // First cell of June 2025 is the 1st, which has no events
        click(&root, ".calendar-day.clickable").await;

        assert_eq!(count(&root, ".calendar-day.selected"), 1);
        assert!(text(&root).contains("Events on Jun 1, 2025"));
        assert!(text(&root).contains(EMPTY_DAY_MESSAGE));
    }
}
