use crate::services::logging::Logger;
use anyhow::Context;
use shared::EventIndex;
use std::rc::Rc;
use yew::prelude::*;

/// Parse an event source into an index
pub fn load_events(source: &str) -> anyhow::Result<EventIndex> {
    EventIndex::from_json(source).context("Failed to load calendar events")
}

/// Load events once when the widget mounts. A broken source leaves the
/// calendar empty and logs the failure.
#[hook]
pub fn use_events(source: AttrValue) -> Rc<EventIndex> {
    let events = use_state(|| Rc::new(EventIndex::default()));

    {
        let events = events.clone();
        use_effect_with(source, move |source| {
            match load_events(source) {
                Ok(index) => {
                    Logger::info_with_component(
                        "use_events",
                        &format!("Loaded {} events", index.len()),
                    );
                    events.set(Rc::new(index));
                }
                Err(e) => {
                    Logger::error_with_component("use_events", &format!("{:#}", e));
                }
            }
            || ()
        });
    }

    (*events).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_load_bundled_events() {
        let index = load_events(crate::config::BUNDLED_EVENTS).unwrap();
        assert!(!index.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_load_events_error_has_context() {
        let err = load_events("not json").unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Failed to load calendar events"));
        assert!(message.contains("Malformed event data"));
    }
}
