//! Root application component with the session probe and navigation gate.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::app_nav::AppNav;
use crate::components::notice_toast::NoticeToast;
use crate::net::config::ApiConfig;
use crate::pages::{ai::AiPage, landing::LandingPage, not_found::NotFoundPage, placeholder::PlaceholderPage};
use crate::routes::{AppRoute, resolve_route};
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the app-wide contexts, probes the session once, and hands every
/// render to the [`Gate`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    let session = RwSignal::new(SessionState::default());
    let notice = RwSignal::new(NoticeState::default());

    provide_context(config.clone());
    provide_context(session);
    provide_context(notice);

    // Single identity probe per mount; no retry.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::session::probe(&session, crate::net::api::fetch_current_user(config)).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <Stylesheet id="leptos" href="/pkg/community-client.css"/>
        <Title text="Community"/>

        <Router>
            <Gate/>
        </Router>
        <NoticeToast/>
    }
}

/// Mounts the view for the current path and session status.
#[component]
fn Gate() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    move || {
        let status = session.with(SessionState::status);
        render_route(resolve_route(status, &location.pathname.get()))
    }
}

fn render_route(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage/> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage/> }.into_any(),
        AppRoute::Ai => view! {
            <AppNav active=route>
                <AiPage/>
            </AppNav>
        }
        .into_any(),
        _ => view! {
            <AppNav active=route>
                <PlaceholderPage route=route/>
            </AppNav>
        }
        .into_any(),
    }
}
