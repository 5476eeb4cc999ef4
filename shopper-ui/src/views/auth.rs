//! Login / registration view root.

use leptos::*;
use web_sys::{HtmlElement, SubmitEvent};

use shopper::views::{AuthPanel, AuthView};

use crate::api::shopper_api;
use crate::browser;
use crate::components::StatusMessage;

pub fn mount(container: HtmlElement) {
    mount_to(container, || view! { <Auth /> });
}

#[component]
fn Auth() -> impl IntoView {
    let state = create_rw_signal(AuthView::default());

    view! {
        <div class="auth">
            <div class="auth-tabs">
                <button
                    type="button"
                    class:active=move || state.with(|s| s.is_visible(AuthPanel::Login))
                    on:click=move |_| state.update(|s| s.show_login())
                >
                    "Login"
                </button>
                <button
                    type="button"
                    class:active=move || state.with(|s| s.is_visible(AuthPanel::Register))
                    on:click=move |_| state.update(|s| s.show_register())
                >
                    "Register"
                </button>
            </div>

            <Show when=move || state.with(|s| s.is_visible(AuthPanel::Login))>
                <LoginPanel state=state />
            </Show>
            <Show when=move || state.with(|s| s.is_visible(AuthPanel::Register))>
                <RegisterPanel state=state />
            </Show>
        </div>
    }
}

#[component]
fn LoginPanel(state: RwSignal<AuthView>) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, request)) = state.try_update(|s| s.login.begin_submit()) else {
            return;
        };
        spawn_local(async move {
            let result = shopper_api().login(&request).await;
            if let Some(effect) = state.try_update(|s| s.login.apply(ticket, result)) {
                browser::perform(effect, None);
            }
        });
    };

    view! {
        <form on:submit=on_submit>
            <input
                type="text"
                placeholder="Username"
                prop:value=move || state.with(|s| s.login.username.clone())
                on:input=move |ev| state.update(|s| s.login.username = event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || state.with(|s| s.login.password.clone())
                on:input=move |ev| state.update(|s| s.login.password = event_target_value(&ev))
            />
            <img class="captcha" alt="captcha" src=move || state.with(|s| s.login.captcha_src()) />
            <input
                type="text"
                placeholder="Captcha"
                prop:value=move || state.with(|s| s.login.captcha.clone())
                on:input=move |ev| state.update(|s| s.login.captcha = event_target_value(&ev))
            />
            <button type="submit">"Login"</button>
            <StatusMessage message=Signal::derive(move || state.with(|s| s.login.message().to_string())) />
        </form>
    }
}

#[component]
fn RegisterPanel(state: RwSignal<AuthView>) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, request)) = state.try_update(|s| s.register.begin_submit()) else {
            return;
        };
        spawn_local(async move {
            let result = shopper_api().register(&request).await;
            if let Some(effect) = state.try_update(|s| s.register.apply(ticket, result)) {
                browser::perform(effect, None);
            }
        });
    };

    view! {
        <form on:submit=on_submit>
            <input
                type="text"
                placeholder="Username"
                prop:value=move || state.with(|s| s.register.username.clone())
                on:input=move |ev| state.update(|s| s.register.username = event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || state.with(|s| s.register.password_1.clone())
                on:input=move |ev| state.update(|s| s.register.password_1 = event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Confirm password"
                prop:value=move || state.with(|s| s.register.password_2.clone())
                on:input=move |ev| state.update(|s| s.register.password_2 = event_target_value(&ev))
            />
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || state.with(|s| s.register.agreement)
                    on:change=move |ev| state.update(|s| s.register.agreement = event_target_checked(&ev))
                />
                "I agree to the terms"
            </label>
            <img class="captcha" alt="captcha" src=move || state.with(|s| s.register.captcha_src()) />
            <input
                type="text"
                placeholder="Captcha"
                prop:value=move || state.with(|s| s.register.captcha.clone())
                on:input=move |ev| state.update(|s| s.register.captcha = event_target_value(&ev))
            />
            <button type="submit">"Register"</button>
            <StatusMessage message=Signal::derive(move || state.with(|s| s.register.message().to_string())) />
        </form>
    }
}
