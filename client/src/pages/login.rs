//! Access gate page: a single shared-password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

const EMPTY_PASSWORD: &str = "パスワードを入力してください";

/// Trim the input and require a value.
fn validate_password_input(raw: &str) -> Result<String, &'static str> {
    let password = raw.trim();
    if password.is_empty() {
        return Err(EMPTY_PASSWORD);
    }
    Ok(password.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already unlocked: go straight to the dashboard.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.with(|a| a.unlocked) {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let value = match validate_password_input(&password.get_untracked()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            match crate::net::api::unlock(&value).await {
                Ok(()) => {
                    password.set(String::new());
                    auth.update(|a| a.resolve(true));
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Dugout"</h1>
                <p class="login-card__subtitle">"MLB成績ダッシュボード"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="パスワード"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "確認中..." } else { "ログイン" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
