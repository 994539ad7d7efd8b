//! Free-text question panel with conversation history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Questions go to the backend's natural-language endpoint with the selected
//! season. Assistant answers keep their full envelope, so tables, charts,
//! and cards render inline under the answer text.

use leptos::prelude::*;
use stats::query::{DEFAULT_SEASON, FIRST_SEASON};

use crate::components::result_view::ResultView;
use crate::net::api::call_backend_api;
use crate::state::chat::{ChatMessage, ChatRole, ChatState};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let season = RwSignal::new(DEFAULT_SEASON);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.loading));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let question = text.trim().to_owned();
        if question.is_empty() || chat.with_untracked(|c| c.loading) {
            return;
        }
        chat.update(|c| c.push_question(&question));
        input.set(String::new());
        let year = season.get_untracked();
        leptos::task::spawn_local(async move {
            let response = call_backend_api(&question, year).await;
            chat.update(|c| c.push_answer(response));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.with(|t| t.trim().is_empty()) && !chat.with(|c| c.loading);

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                <Show when=move || chat.with(|c| c.messages.is_empty())>
                    <div class="chat-panel__empty">"選手の成績について質問してください"</div>
                </Show>
                <For
                    each=move || chat.with(|c| c.messages.clone())
                    key=|msg: &ChatMessage| msg.id.clone()
                    children=|msg: ChatMessage| {
                        let is_user = msg.role == ChatRole::User;
                        view! {
                            <div
                                class="chat-panel__message"
                                class:chat-panel__message--user=is_user
                                class:chat-panel__message--assistant={!is_user}
                            >
                                {match msg.response {
                                    Some(response) => view! { <ResultView response=response/> }.into_any(),
                                    None => view! { <span>{msg.content}</span> }.into_any(),
                                }}
                            </div>
                        }
                    }
                />
                {move || {
                    chat.with(|c| c.loading)
                        .then(|| view! { <div class="chat-panel__loading">"回答を生成中..."</div> })
                }}
            </div>

            <div class="chat-panel__input-row">
                <select
                    class="chat-panel__season"
                    prop:value=move || season.get().to_string()
                    on:change=move |ev| {
                        if let Ok(y) = event_target_value(&ev).parse::<u16>() {
                            season.set(y);
                        }
                    }
                >
                    {(FIRST_SEASON..=DEFAULT_SEASON)
                        .rev()
                        .map(|y| view! { <option value=y.to_string()>{format!("{y}年")}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="例: 大谷翔平の2024年の打撃成績は？"
                    disabled=move || chat.with(|c| c.loading)
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=move |_| do_send() disabled=move || !can_send()>
                    "送信"
                </button>
                <button
                    class="btn"
                    disabled=move || chat.with(|c| c.messages.is_empty() || c.loading)
                    on:click=move |_| chat.update(ChatState::clear)
                >
                    "履歴をクリア"
                </button>
            </div>
        </div>
    }
}
