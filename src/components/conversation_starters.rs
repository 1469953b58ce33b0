//! Conversation-starter panel for a counterpart profile.
//!
//! Each starter can be copied to the clipboard and, when the host passes
//! `on_select`, picked directly. The two actions are independent.

use leptos::prelude::*;

use crate::components::notice_toast::dismiss_later;
use crate::net::config::ApiConfig;
use crate::state::notice::NoticeState;
use crate::state::starters::{self, StarterState};
use crate::util::clipboard;

/// Generate and display opening messages for `target_user_id`.
#[component]
pub fn ConversationStarters(
    #[prop(into)] target_user_id: String,
    #[prop(optional)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let state = RwSignal::new(StarterState::default());

    let on_generate = move |_| {
        let target = target_user_id.clone();
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let _ = starters::generate(&state, target, move |t| {
                    crate::net::api::generate_conversation_starters(config, t)
                })
                .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, target);
    };

    let on_copy = move |text: String| {
        let seq = notice
            .try_update(|n| starters::copy(&text, clipboard::write_text, n))
            .flatten();
        if let Some(seq) = seq {
            dismiss_later(notice, seq);
        }
    };

    view! {
        <div class="starters">
            <div class="starters__header">
                <h3>"Conversation starters"</h3>
                <button
                    class="btn btn--primary starters__generate"
                    on:click=on_generate
                    disabled=move || state.with(StarterState::is_pending)
                >
                    {move || if state.with(StarterState::is_pending) { "Generating..." } else { "Generate" }}
                </button>
            </div>

            {move || {
                state
                    .with(|s| s.error().map(str::to_owned))
                    .map(|e| view! { <p class="starters__error">{format!("Could not generate starters: {e}")}</p> })
            }}

            <ul class="starters__list">
                {move || {
                    state
                        .with(|s| s.items().to_vec())
                        .into_iter()
                        .map(|item| {
                            let copy_text = item.clone();
                            let select_text = item.clone();
                            view! {
                                <li class="starters__item">
                                    <span class="starters__text">{item}</span>
                                    <button class="btn starters__copy" on:click=move |_| on_copy(copy_text.clone())>
                                        "Copy"
                                    </button>
                                    {on_select
                                        .map(|select| {
                                            view! {
                                                <button
                                                    class="btn starters__select"
                                                    on:click=move |_| select.run(select_text.clone())
                                                >
                                                    "Use"
                                                </button>
                                            }
                                        })}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
