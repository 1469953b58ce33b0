//! Top navigation for the authenticated view tree.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api;
use crate::net::config::{ApiConfig, LOGOUT_PATH};
use crate::routes::{AUTHENTICATED_ROUTES, AppRoute};
use crate::state::session::SessionState;

/// Navigation bar plus the page body for signed-in users.
#[component]
pub fn AppNav(active: AppRoute, children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ApiConfig>();

    let user_name = move || {
        session
            .get()
            .user
            .as_ref()
            .map_or_else(|| "—".to_owned(), crate::net::types::User::display_name)
    };

    let links = AUTHENTICATED_ROUTES
        .iter()
        .map(|(path, route)| {
            let class = if *route == active { "app-nav__link app-nav__link--active" } else { "app-nav__link" };
            view! {
                <A href=*path attr:class=class>
                    {route.title()}
                </A>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="app-layout">
            <nav class="app-nav">
                <div class="app-nav__links">{links}</div>
                <div class="app-nav__user">
                    <span class="app-nav__name">{user_name}</span>
                    <button class="btn app-nav__logout" on:click=move |_| api::navigate_to(&config, LOGOUT_PATH)>
                        "Log out"
                    </button>
                </div>
            </nav>
            <main class="app-main">{children()}</main>
        </div>
    }
}
