use chrono::NaiveDate;
use shared::calendar::WEEKDAY_LABELS;
use shared::{CalendarDay, CalendarMonth, DayTone, ScheduledEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub calendar_data: CalendarMonth,
    pub on_select_day: Callback<NaiveDate>,
}

/// Classes for a day cell: base, tone, then the selection ring
pub fn day_classes(day: &CalendarDay) -> Classes {
    if day.is_padding() {
        return classes!("calendar-day", "empty");
    }

    let tone = match day.tone {
        DayTone::Today => "today",
        DayTone::Sunday => "sunday",
        DayTone::Saturday => "saturday",
        DayTone::Weekday => "weekday",
    };

    classes!(
        "calendar-day",
        "clickable",
        tone,
        day.is_selected.then_some("selected")
    )
}

pub fn weekday_classes(label: &str) -> Classes {
    match label {
        "Sun" => classes!("weekday", "sunday"),
        "Sat" => classes!("weekday", "saturday"),
        _ => classes!("weekday"),
    }
}

pub fn event_chip_classes(scheduled: &ScheduledEvent) -> Classes {
    classes!("event-chip", scheduled.conflicting.then_some("conflict"))
}

fn render_events(events: &[ScheduledEvent]) -> Html {
    html! {
        <div class="day-events">
            {for events.iter().enumerate().map(|(idx, scheduled)| html! {
                <div
                    key={format!("{}-{}", idx, scheduled.event.id)}
                    class={event_chip_classes(scheduled)}
                    title={scheduled.event.tooltip()}
                >
                    {&scheduled.event.title}
                </div>
            })}
        </div>
    }
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar_data = &props.calendar_data;

    let calendar_days = calendar_data.days.iter().enumerate().map(|(index, day_data)| {
        let Some(date) = day_data.date else {
            return html! { <div key={format!("empty-{}", index)} class={day_classes(day_data)}></div> };
        };

        let onclick = {
            let on_select_day = props.on_select_day.clone();
            Callback::from(move |_: MouseEvent| on_select_day.emit(date))
        };

        html! {
            <div key={day_data.day.to_string()} class={day_classes(day_data)} {onclick}>
                <div class="day-number">{day_data.day}</div>
                {render_events(&day_data.events)}
            </div>
        }
    });

    html! {
        <div class="calendar">
            <div class="calendar-weekdays">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div key={*label} class={weekday_classes(label)}>{*label}</div>
                })}
            </div>
            <div class="calendar-grid">
                {for calendar_days}
            </div>
        </div>
    }
}
