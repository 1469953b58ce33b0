//! Titled stand-in for business pages rendered outside this crate.

use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn PlaceholderPage(route: AppRoute) -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">{route.title()}</h1>
        </section>
    }
}
