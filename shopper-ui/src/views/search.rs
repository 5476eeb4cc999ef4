//! Search/Add view root.

use leptos::*;
use web_sys::{HtmlElement, SubmitEvent};

use shopper::api::Retailer;
use shopper::views::SearchAddView;

use crate::api::shopper_api;
use crate::browser;
use crate::components::StatusMessage;

pub fn mount(container: HtmlElement) {
    mount_to(container, || view! { <SearchAdd /> });
}

#[component]
fn SearchAdd() -> impl IntoView {
    let state = create_rw_signal(SearchAddView::default());

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, request)) = state.try_update(|s| s.begin_search()) else {
            return;
        };
        spawn_local(async move {
            let result = shopper_api().search_product(&request).await;
            if let Some(effect) = state.try_update(|s| s.apply_search(ticket, result)) {
                browser::perform(effect, None);
            }
        });
    };

    let on_add = move |_| {
        let Some((ticket, request)) = state.try_update(|s| s.begin_add()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = shopper_api().add_product(&request).await;
            if let Some(effect) = state.try_update(|s| s.apply_add(ticket, result)) {
                browser::perform(effect, None);
            }
        });
    };

    view! {
        <div class="search-add">
            <form on:submit=on_search>
                <select
                    prop:value=move || state.with(|s| s.store.short_name().to_string())
                    on:change=move |ev| {
                        let choice = event_target_value(&ev);
                        state.update(|s| s.store = Retailer::from_short_name(&choice).unwrap_or_default());
                    }
                >
                    {Retailer::ALL
                        .iter()
                        .map(|retailer| view! {
                            <option value=retailer.short_name()>{retailer.display_name()}</option>
                        })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Keyword or SKU"
                    prop:value=move || state.with(|s| s.keyword.clone())
                    on:input=move |ev| state.update(|s| s.keyword = event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
                <button type="button" on:click=move |_| state.update(|s| s.clear())>"Clear"</button>
            </form>

            {move || {
                state.with(|s| {
                    s.product().map(|product| {
                        let quantity = product.quantity.map(|q| q.to_string()).unwrap_or_default();
                        view! {
                            <div class="product">
                                <p><b>"SKU"</b>": "{product.sku.clone()}</p>
                                <p><b>"Name"</b>": "{product.name.clone()}</p>
                                <input
                                    type="number"
                                    min="0"
                                    placeholder="Quantity"
                                    prop:value=quantity
                                    on:input=move |ev| {
                                        let raw = event_target_value(&ev);
                                        state.update_untracked(|s| {
                                            if let Some(product) = s.product_mut() {
                                                product.quantity = raw.trim().parse().ok();
                                            }
                                        });
                                    }
                                />
                            </div>
                        }
                    })
                })
            }}

            <button
                type="button"
                disabled=move || state.with(|s| !s.can_add())
                on:click=on_add
            >
                "Add"
            </button>
            <StatusMessage message=Signal::derive(move || state.with(|s| s.message().to_string())) />
        </div>
    }
}
