use gloo::timers::future::sleep;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::BaseComponent;

/// Mount a component into a fresh node under `<body>` and let it render
pub async fn mount<C: BaseComponent>(props: C::Properties) -> Element {
    let root = gloo::utils::document()
        .create_element("div")
        .expect("create test root");
    gloo::utils::body()
        .append_child(&root)
        .expect("attach test root");

    yew::Renderer::<C>::with_root_and_props(root.clone(), props).render();
    settle().await;
    root
}

/// Yield to the scheduler so pending renders and effects run
pub async fn settle() {
    sleep(Duration::ZERO).await;
    sleep(Duration::ZERO).await;
}

pub fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector)
        .expect("valid selector")
        .length()
}

pub async fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("no element matches {}", selector))
        .unchecked_into::<HtmlElement>()
        .click();
    settle().await;
}

pub fn text(root: &Element) -> String {
    root.text_content().unwrap_or_default()
}
