//! State for the AI assistant widget: transcript, draft, and request.
//!
//! DESIGN
//! ======
//! The transcript is append-only and grows by whole exchanges. A question is
//! not shown until its answer is known: the user turn and the assistant turn
//! are appended in the same update that settles the request, and a failed
//! request leaves the transcript untouched.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use crate::net::error::ApiError;
use crate::net::types::{AskResponse, Resource};
use crate::state::cell::StateCell;
use crate::state::mutation::{MutationState, Settled, execute_with};

/// Canned prompts offered while the transcript is empty.
pub const QUICK_QUESTIONS: &[&str] = &[
    "Comment débuter dans le tantra ?",
    "Quels exercices de respiration pour commencer ?",
    "Comment trouver un praticien près de chez moi ?",
    "Quelles formations recommandez-vous ?",
];

/// One transcript entry. Only assistant turns carry suggestions and resources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    User {
        content: String,
    },
    Assistant {
        content: String,
        suggestions: Vec<String>,
        resources: Vec<Resource>,
    },
}

impl Turn {
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::User { content } | Self::Assistant { content, .. } => content,
        }
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User { .. })
    }
}

/// Assistant widget state. Each widget instance owns one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssistantState {
    transcript: Vec<Turn>,
    /// Text currently in the input field.
    pub draft: String,
    pub request: MutationState<String, AskResponse>,
}

impl AssistantState {
    #[must_use]
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.request.is_pending()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.request.error()
    }

    /// Whether `question` would be sent right now.
    #[must_use]
    pub fn can_ask(&self, question: &str) -> bool {
        !question.trim().is_empty() && !self.is_pending()
    }

    /// Put a quick question or suggestion in the draft as if it were typed.
    /// Ignored while a request is pending.
    pub fn pick(&mut self, question: &str) -> bool {
        if self.is_pending() {
            return false;
        }
        self.draft = question.to_owned();
        true
    }

    /// Canned prompts, offered only before the first exchange.
    #[must_use]
    pub fn quick_questions(&self) -> &'static [&'static str] {
        if self.transcript.is_empty() { QUICK_QUESTIONS } else { &[] }
    }

    /// Suggestions from the most recent assistant turn.
    #[must_use]
    pub fn latest_suggestions(&self) -> &[String] {
        match self.latest_answer() {
            Some(Turn::Assistant { suggestions, .. }) => suggestions,
            _ => &[],
        }
    }

    /// Resources from the most recent assistant turn.
    #[must_use]
    pub fn latest_resources(&self) -> &[Resource] {
        match self.latest_answer() {
            Some(Turn::Assistant { resources, .. }) => resources,
            _ => &[],
        }
    }

    fn latest_answer(&self) -> Option<&Turn> {
        self.transcript.iter().rev().find(|turn| !turn.is_user())
    }

    fn append_exchange(&mut self, question: &str, response: &AskResponse) {
        self.transcript.push(Turn::User { content: question.to_owned() });
        self.transcript.push(Turn::Assistant {
            content: response.message.clone(),
            suggestions: response.suggestions.clone(),
            resources: response.resources.clone(),
        });
        self.draft.clear();
    }
}

fn request_of(state: &mut AssistantState) -> &mut MutationState<String, AskResponse> {
    &mut state.request
}

/// Send `question` to the assistant and append the exchange when it answers.
///
/// Returns `None` without issuing a call when the question is blank or a
/// request is already pending.
pub async fn ask<C, F, Fut>(cell: &C, question: String, call: F) -> Option<Settled<AskResponse>>
where
    C: StateCell<AssistantState>,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<AskResponse, ApiError>>,
{
    if !cell.try_update(|state| state.can_ask(&question)).unwrap_or(false) {
        return None;
    }
    let settled = execute_with(cell, request_of, question, call, |state, question, response| {
        state.append_exchange(question, response);
    })
    .await;
    Some(settled)
}
