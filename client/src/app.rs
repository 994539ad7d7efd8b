//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::{auth::AuthState, chat::ChatState, dashboard::DashboardState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ja">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, checks the access gate once on
/// startup, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let chat = RwSignal::new(ChatState::default());
    let dashboard = RwSignal::new(DashboardState::default());

    provide_context(auth);
    provide_context(chat);
    provide_context(dashboard);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let unlocked = crate::net::api::fetch_access_status().await;
        auth.update(|a| a.resolve(unlocked));
    });

    view! {
        <Title text="Dugout"/>

        <Router>
            <Routes fallback=|| "ページが見つかりません。".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
