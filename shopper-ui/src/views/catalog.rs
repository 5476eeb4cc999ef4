//! Product list view root. Loads on mount; every row can be pushed back.

use leptos::*;
use web_sys::HtmlElement;

use shopper::views::CatalogView;

use crate::api::shopper_api;
use crate::browser;
use crate::components::StatusMessage;

pub fn mount(container: HtmlElement) {
    mount_to(container, || view! { <Catalog /> });
}

fn list(state: RwSignal<CatalogView>) {
    let Some(ticket) = state.try_update(|s| s.begin_list()) else {
        return;
    };
    spawn_local(async move {
        let result = shopper_api().list_all().await;
        if let Some(effect) = state.try_update(|s| s.apply_list(ticket, result)) {
            browser::perform(effect, None);
        }
    });
}

fn update(state: RwSignal<CatalogView>, index: usize) {
    let Some((ticket, request)) = state.try_update(|s| s.begin_update(index)).flatten() else {
        return;
    };
    spawn_local(async move {
        let result = shopper_api().update_product(&request).await;
        if let Some(effect) = state.try_update(|s| s.apply_update(ticket, result)) {
            browser::perform(effect, None);
        }
    });
}

#[component]
fn Catalog() -> impl IntoView {
    let state = create_rw_signal(CatalogView::default());
    list(state);

    // Row edits go to the held copy without re-rendering the table
    let edit_track = move |index: usize, track: bool| {
        state.update_untracked(|s| {
            if let Some(product) = s.edit(index) {
                product.track = Some(u8::from(track));
            }
        })
    };
    let edit_quantity = move |index: usize, raw: String| {
        state.update_untracked(|s| {
            if let Some(product) = s.edit(index) {
                product.quantity = raw.trim().parse().ok();
            }
        })
    };

    view! {
        <div class="catalog">
            <table>
                <thead>
                    <tr>
                        <th>"SKU"</th>
                        <th>"Name"</th>
                        <th>"Track"</th>
                        <th>"Quantity"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state.with(|s| {
                            s.products()
                                .iter()
                                .enumerate()
                                .map(|(index, product)| {
                                    let quantity = product
                                        .quantity
                                        .map(|q| q.to_string())
                                        .unwrap_or_default();
                                    view! {
                                        <tr>
                                            <td>{product.sku.clone()}</td>
                                            <td>{product.name.clone()}</td>
                                            <td>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=product.is_tracked()
                                                    on:change=move |ev| edit_track(index, event_target_checked(&ev))
                                                />
                                            </td>
                                            <td>
                                                <input
                                                    type="number"
                                                    min="0"
                                                    prop:value=quantity
                                                    on:input=move |ev| edit_quantity(index, event_target_value(&ev))
                                                />
                                            </td>
                                            <td>
                                                <button type="button" on:click=move |_| update(state, index)>
                                                    "Update"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </tbody>
            </table>
            <button type="button" on:click=move |_| list(state)>"Refresh"</button>
            <StatusMessage message=Signal::derive(move || state.with(|s| s.message().to_string())) />
        </div>
    }
}
