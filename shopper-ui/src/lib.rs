//! Shopper Browser Views
//!
//! Leptos (CSR) front end for the server-rendered shopper pages. Each page
//! carries empty containers; [`start`] mounts a view root into every
//! container it finds, so one bundle serves the account and shopper pages.
//!
//! State and request handling live in the `shopper` crate's view-models;
//! this crate binds them to the DOM, the fetch API and Leaflet.

pub mod api;
pub mod browser;
pub mod components;
pub mod map;
pub mod views;

use web_sys::HtmlElement;

/// Container ids and the view root mounted into each
const VIEW_ROOTS: [(&str, fn(HtmlElement)); 5] = [
    ("auth", views::auth::mount),
    ("panels", views::panels::mount),
    ("products", views::catalog::mount),
    ("add", views::search::mount),
    ("inventory", views::inventory::mount),
];

/// Mount every view root whose container is on the page
pub fn start() {
    console_error_panic_hook::set_once();

    for (id, mount) in VIEW_ROOTS {
        if let Some(container) = browser::element(id) {
            web_sys::console::log_1(&format!("Mounting #{}", id).into());
            mount(container);
        }
    }
}
