//! One-click preset questions.

use leptos::prelude::*;
use stats::quick::QUICK_QUESTIONS;

/// Preset grid. Reports the chosen preset id; buttons are disabled while a
/// request is in flight.
#[component]
pub fn QuickQuestions(on_select: Callback<&'static str>, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <div class="quick-questions">
            {QUICK_QUESTIONS
                .iter()
                .map(|question| {
                    let id = question.id;
                    view! {
                        <button
                            class="option-card quick-questions__item"
                            disabled=move || loading.get()
                            on:click=move |_| on_select.run(id)
                        >
                            <span class="option-card__title">{question.title}</span>
                            <span class="option-card__description">{question.description}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
