//! Inventory view root: zip code form plus the store map.
//!
//! The map is attached once the view's markup is in the page, and every
//! listing replaces its markers wholesale.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlElement, SubmitEvent};

use shopper::views::InventoryView;

use crate::api::shopper_api;
use crate::browser;
use crate::components::StatusMessage;
use crate::map::{MapWidget, MAP_ELEMENT_ID};

type MapSlot = Rc<RefCell<Option<MapWidget>>>;

pub fn mount(container: HtmlElement) {
    let slot = MapSlot::default();
    let view_slot = Rc::clone(&slot);
    mount_to(container, move || view! { <Inventory map=view_slot /> });

    match MapWidget::attach(MAP_ELEMENT_ID) {
        Ok(widget) => *slot.borrow_mut() = Some(widget),
        Err(e) => web_sys::console::error_1(&format!("Failed to create map: {:?}", e).into()),
    }
}

#[component]
fn Inventory(map: MapSlot) -> impl IntoView {
    let state = create_rw_signal(InventoryView::default());

    // Prefill the zip code on file
    if let Some(ticket) = state.try_update(|s| s.begin_zipcode()) {
        spawn_local(async move {
            let result = shopper_api().get_zipcode().await;
            if let Some(effect) = state.try_update(|s| s.apply_zipcode(ticket, result)) {
                browser::perform(effect, None);
            }
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, request)) = state.try_update(|s| s.begin_list()) else {
            return;
        };
        let map = Rc::clone(&map);
        spawn_local(async move {
            let result = shopper_api().list_inventory(&request).await;
            if let Some(effect) = state.try_update(|s| s.apply_list(ticket, result)) {
                browser::perform(effect, map.borrow().as_ref());
            }
        });
    };

    view! {
        <div class="inventory">
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Zip code"
                    prop:value=move || state.with(|s| s.zipcode.clone())
                    on:input=move |ev| state.update(|s| s.zipcode = event_target_value(&ev))
                />
                <button type="submit">"List"</button>
            </form>
            <StatusMessage message=Signal::derive(move || state.with(|s| s.message().to_string())) />
            <div id=MAP_ELEMENT_ID style="height: 500px"></div>
        </div>
    }
}
