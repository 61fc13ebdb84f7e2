use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarHeaderProps {
    /// Month heading, e.g. "June 2025"
    pub title: AttrValue,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(CalendarHeader)]
pub fn calendar_header(props: &CalendarHeaderProps) -> Html {
    html! {
        <div class="calendar-header">
            <button
                class="nav-button"
                onclick={props.on_previous.clone()}
                aria-label="Previous Month"
            >
                {"<"}
            </button>
            <h2 class="month-title">{props.title.to_string()}</h2>
            <button
                class="nav-button"
                onclick={props.on_next.clone()}
                aria-label="Next Month"
            >
                {">"}
            </button>
        </div>
    }
}
