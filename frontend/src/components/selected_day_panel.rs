use chrono::NaiveDate;
use shared::{CalendarService, Event};
use yew::prelude::*;

pub const EMPTY_DAY_MESSAGE: &str = "No events scheduled.";

#[derive(Properties, PartialEq)]
pub struct SelectedDayPanelProps {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

/// Event list for the selected day, shown above the grid
#[function_component(SelectedDayPanel)]
pub fn selected_day_panel(props: &SelectedDayPanelProps) -> Html {
    let heading = CalendarService::new().selected_day_heading(props.date);

    html! {
        <div class="selected-day-panel">
            <h3 class="selected-day-heading">{heading}</h3>
            {if props.events.is_empty() {
                html! { <p class="selected-day-empty">{EMPTY_DAY_MESSAGE}</p> }
            } else {
                html! {
                    <ul class="selected-day-events">
                        {for props.events.iter().enumerate().map(|(idx, event)| html! {
                            <li key={format!("{}-{}", idx, event.id)}>
                                {"🕒 "}
                                <strong>{&event.time}</strong>
                                {format!(" – {} ({})", event.title, event.duration)}
                            </li>
                        })}
                    </ul>
                }
            }}
        </div>
    }
}
