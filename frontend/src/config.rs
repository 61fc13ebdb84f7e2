use chrono::NaiveDate;
use log::LevelFilter;
use yew::AttrValue;

/// Events shipped with the widget
pub const BUNDLED_EVENTS: &str = include_str!("../data/events.json");

/// Mount-time settings for the calendar widget
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarConfig {
    /// JSON array of event records
    pub events_source: AttrValue,
    /// Fixed "today"; `None` uses the browser clock
    pub today: Option<NaiveDate>,
    pub log_level: LevelFilter,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            events_source: AttrValue::Static(BUNDLED_EVENTS),
            today: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl CalendarConfig {
    pub fn with_events(events_source: impl Into<AttrValue>) -> Self {
        Self {
            events_source: events_source.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_config_default() {
        let config = CalendarConfig::default();
        assert_eq!(config.events_source.as_str(), BUNDLED_EVENTS);
        assert_eq!(config.today, None);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[wasm_bindgen_test]
    fn test_config_with_events() {
        let config = CalendarConfig::with_events("[]");
        assert_eq!(config.events_source.as_str(), "[]");
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
