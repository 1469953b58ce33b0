//! Landing page shown to anonymous visitors (and while the session loads).

use leptos::prelude::*;

use crate::net::api;
use crate::net::config::{ApiConfig, LOGIN_PATH};
use crate::state::session::{SessionState, SessionStatus};

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ApiConfig>();
    let checking = move || session.with(SessionState::status) == SessionStatus::Loading;

    view! {
        <div class="landing-page">
            <div class="landing-card">
                <h1>"Community"</h1>
                <p class="landing-card__subtitle">
                    "Events, courses, mentorship and an AI guide for your practice."
                </p>
                <button
                    class="btn btn--primary landing-card__login"
                    disabled=checking
                    on:click=move |_| api::navigate_to(&config, LOGIN_PATH)
                >
                    {move || if checking() { "Checking session..." } else { "Sign in" }}
                </button>
            </div>
        </div>
    }
}
