//! DOM Helpers
//!
//! The handful of page-level side effects the views need: reading the CSRF
//! token, leaving the page, toggling containers, and nudging the map.

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlInputElement};

use shopper::views::Effect;

use crate::map::MapWidget;

/// Selector of the hidden input carrying the CSRF token
pub const CSRF_INPUT_SELECTOR: &str = "[name=csrfmiddlewaretoken]";

/// Token from the page's CSRF form field, if the page has one
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let input = document
        .query_selector(CSRF_INPUT_SELECTOR)
        .ok()??
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    let token = input.value();
    (!token.is_empty()).then_some(token)
}

/// Element by id, as an `HtmlElement`
pub fn element(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn set_visible(id: &str, visible: bool) {
    let Some(element) = element(id) else {
        return;
    };
    let display = if visible { "" } else { "none" };
    if let Err(e) = element.style().set_property("display", display) {
        web_sys::console::error_1(&format!("Failed to toggle #{}: {:?}", id, e).into());
    }
}

pub fn navigate(route: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(route) {
        web_sys::console::error_1(&format!("Navigation to {} failed: {:?}", route, e).into());
    }
}

/// Leaflet recomputes its size on window resize
pub fn refresh_map_viewport() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let dispatched = Event::new("resize").and_then(|event| window.dispatch_event(&event));
    if let Err(e) = dispatched {
        web_sys::console::error_1(&format!("Failed to dispatch resize event: {:?}", e).into());
    }
}

/// Carry out what a view-model asked for
pub fn perform(effect: Effect, map: Option<&MapWidget>) {
    match effect {
        Effect::None => {}
        Effect::Navigate(route) => navigate(route),
        Effect::RefreshMapViewport => refresh_map_viewport(),
        Effect::RedrawMap(overlay) => match map {
            Some(map) => map.draw(&overlay),
            None => web_sys::console::error_1(&"Map redraw requested but no map is attached".into()),
        },
    }
}
