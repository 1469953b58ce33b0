//! AI features page: assistant chat plus conversation starters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The starter panel is shown for the profile named by `?target=`. Changing
//! the target mounts a fresh panel, so lists never leak between profiles.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::assistant_widget::AssistantWidget;
use crate::components::conversation_starters::ConversationStarters;

#[component]
pub fn AiPage() -> impl IntoView {
    let query = use_query_map();
    let target = Memo::new(move |_| query.get().get("target").filter(|t| !t.trim().is_empty()));
    let chosen = RwSignal::new(None::<String>);
    let on_select = Callback::new(move |text: String| chosen.set(Some(text)));

    view! {
        <div class="ai-page">
            <section class="ai-page__assistant">
                <h1>"AI assistant"</h1>
                <AssistantWidget/>
            </section>
            {move || {
                target
                    .get()
                    .map(|target_user_id| {
                        view! {
                            <section class="ai-page__starters">
                                <ConversationStarters target_user_id=target_user_id on_select=on_select/>
                                {move || {
                                    chosen
                                        .get()
                                        .map(|text| {
                                            view! {
                                                <p class="ai-page__chosen">
                                                    "Selected opener: " <span>{text}</span>
                                                </p>
                                            }
                                        })
                                }}
                            </section>
                        }
                    })
            }}
        </div>
    }
}
