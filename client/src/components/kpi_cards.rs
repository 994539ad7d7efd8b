use leptos::prelude::*;
use stats::response::KpiCard;

/// One card per metric, with the player and season as a caption.
#[component]
pub fn KpiCards(cards: Vec<KpiCard>) -> impl IntoView {
    let caption = cards.first().map(|card| match card.season {
        Some(season) => format!("{} / {season}年", card.player_name),
        None => card.player_name.clone(),
    });

    view! {
        <div class="kpi-cards">
            {caption.map(|text| view! { <p class="kpi-cards__caption">{text}</p> })}
            <div class="kpi-cards__grid">
                {cards
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class="kpi-card" data-metric=card.metric>
                                <span class="kpi-card__label">{card.label}</span>
                                <span class="kpi-card__value">{card.formatted}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
