//! Status Message Component
//!
//! The one-line message each view shows under its form.

use leptos::*;

/// Renders nothing while the message is empty
#[component]
pub fn StatusMessage(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        {move || {
            let text = message.get();
            if text.is_empty() {
                view! {}.into_view()
            } else {
                view! { <p class="message">{text}</p> }.into_view()
            }
        }}
    }
}
