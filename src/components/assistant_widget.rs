//! AI assistant chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one [`AssistantState`]. Questions go to the assistant endpoint and the
//! exchange appears only once the answer is known; while a request is pending
//! the input is disabled and a thinking indicator is shown outside the
//! transcript.

use leptos::prelude::*;

use crate::net::config::ApiConfig;
use crate::net::types::Resource;
use crate::state::assistant::{AssistantState, Turn};
use crate::util::markdown::render_markdown_html;

/// Chat panel with quick questions, transcript, suggestion badges, and
/// resource cards.
#[component]
pub fn AssistantWidget() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let state = RwSignal::new(AssistantState::default());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = state.with(|s| (s.transcript().len(), s.is_pending()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let submit = Callback::new(move |question: String| {
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let _ = crate::state::assistant::ask(&state, question, move |q| {
                    crate::net::api::ask_assistant(config, q)
                })
                .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, question);
    });

    let pick = move |question: String| {
        if state.try_update(|s| s.pick(&question)).unwrap_or(false) {
            submit.run(question);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit.run(state.get_untracked().draft);
        }
    };

    let can_send = move || state.with(|s| s.can_ask(&s.draft));

    view! {
        <div class="ai-panel">
            <div class="ai-panel__messages" node_ref=messages_ref>
                {move || {
                    let quick = state.with(AssistantState::quick_questions);
                    (!quick.is_empty())
                        .then(|| {
                            view! {
                                <div class="ai-panel__quick">
                                    <p class="ai-panel__empty">"Ask me anything, or start with:"</p>
                                    {quick
                                        .iter()
                                        .map(|q| {
                                            let question = (*q).to_owned();
                                            view! {
                                                <button
                                                    class="btn ai-panel__quick-question"
                                                    disabled=move || state.with(AssistantState::is_pending)
                                                    on:click=move |_| pick(question.clone())
                                                >
                                                    {*q}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}

                {move || {
                    state
                        .with(|s| s.transcript().to_vec())
                        .into_iter()
                        .map(render_turn)
                        .collect::<Vec<_>>()
                }}

                <div class="ai-panel__suggestions">
                    {move || {
                        state
                            .with(|s| s.latest_suggestions().to_vec())
                            .into_iter()
                            .map(|suggestion| {
                                let label = suggestion.clone();
                                view! {
                                    <button
                                        class="badge ai-panel__suggestion"
                                        disabled=move || state.with(AssistantState::is_pending)
                                        on:click=move |_| pick(suggestion.clone())
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="ai-panel__resources">
                    {move || {
                        state
                            .with(|s| s.latest_resources().to_vec())
                            .into_iter()
                            .map(render_resource)
                            .collect::<Vec<_>>()
                    }}
                </div>

                {move || {
                    state
                        .with(AssistantState::is_pending)
                        .then(|| view! { <div class="ai-panel__loading">"Thinking..."</div> })
                }}

                {move || {
                    state
                        .with(|s| s.error().map(str::to_owned))
                        .map(|e| view! { <div class="ai-panel__error">{format!("Assistant request failed: {e}")}</div> })
                }}
            </div>

            <div class="ai-panel__input-row">
                <input
                    class="ai-panel__input"
                    type="text"
                    placeholder="Ask the assistant..."
                    disabled=move || state.with(AssistantState::is_pending)
                    prop:value=move || state.with(|s| s.draft.clone())
                    on:input=move |ev| state.update(|s| s.draft = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary ai-panel__send"
                    on:click=move |_| submit.run(state.get_untracked().draft)
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

fn render_turn(turn: Turn) -> AnyView {
    match turn {
        Turn::User { content } => view! {
            <div class="ai-panel__message">
                <div class="ai-panel__content"><span>{content}</span></div>
            </div>
        }
        .into_any(),
        Turn::Assistant { content, .. } => {
            let rendered = render_markdown_html(&content);
            view! {
                <div class="ai-panel__message ai-panel__message--assistant">
                    <div class="ai-panel__content ai-panel__markdown">
                        <div class="ai-panel__markdown-body" inner_html=rendered></div>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

fn render_resource(resource: Resource) -> impl IntoView {
    view! {
        <div class="card ai-panel__resource">
            <h4 class="ai-panel__resource-title">{resource.title}</h4>
            <p class="ai-panel__resource-description">{resource.description}</p>
        </div>
    }
}
