//! Dashboard switcher: shows one of the products, add and inventory roots.

use leptos::*;
use web_sys::HtmlElement;

use shopper::views::{DashboardPanel, DashboardPanels};

use crate::browser;

pub fn mount(container: HtmlElement) {
    mount_to(container, || view! { <Panels /> });
}

fn sync_visibility(current: DashboardPanel) {
    for panel in DashboardPanel::ALL {
        browser::set_visible(panel.element_id(), panel == current);
    }
}

#[component]
fn Panels() -> impl IntoView {
    let state = create_rw_signal(DashboardPanels::default());
    sync_visibility(state.with_untracked(|s| s.current()));

    let show = move |panel: DashboardPanel| {
        if let Some(effect) = state.try_update(|s| s.show(panel)) {
            // The container has to be visible before the map measures it
            sync_visibility(panel);
            browser::perform(effect, None);
        }
    };

    view! {
        <nav class="panels">
            {DashboardPanel::ALL
                .into_iter()
                .map(|panel| view! {
                    <button
                        type="button"
                        class:active=move || state.with(|s| s.is_visible(panel))
                        on:click=move |_| show(panel)
                    >
                        {panel.label()}
                    </button>
                })
                .collect_view()}
        </nav>
    }
}
