//! Conversation-starter generator state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown next to a counterpart's profile. A successful generation replaces the
//! list wholesale; a failed one keeps the previous list on screen. Copying a
//! starter is a clipboard side effect and never touches this state.

#[cfg(test)]
#[path = "starters_test.rs"]
mod starters_test;

use crate::net::error::ApiError;
use crate::state::cell::StateCell;
use crate::state::mutation::{MutationState, Settled, execute_with};
use crate::state::notice::NoticeState;

/// Generated openers for one target profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StarterState {
    /// Target the current `items` were generated for.
    pub target_id: Option<String>,
    items: Vec<String>,
    pub request: MutationState<String, Vec<String>>,
}

impl StarterState {
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.request.is_pending()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.request.error()
    }

    fn replace_items(&mut self, target_id: &str, items: &[String]) {
        self.target_id = Some(target_id.to_owned());
        self.items = items.to_vec();
    }
}

fn request_of(state: &mut StarterState) -> &mut MutationState<String, Vec<String>> {
    &mut state.request
}

/// Fetch openers for `target_id` and replace the list when they arrive.
pub async fn generate<C, F, Fut>(cell: &C, target_id: String, call: F) -> Settled<Vec<String>>
where
    C: StateCell<StarterState>,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<Vec<String>, ApiError>>,
{
    execute_with(cell, request_of, target_id, call, |state, target_id, items| {
        state.replace_items(target_id, items);
    })
    .await
}

/// Write `text` to the clipboard through `write` and raise a notice.
///
/// Returns the notice sequence when the write was accepted.
pub fn copy<W>(text: &str, write: W, notice: &mut NoticeState) -> Option<u64>
where
    W: FnOnce(&str) -> bool,
{
    if write(text) {
        Some(notice.show("Copied to clipboard"))
    } else {
        log::warn!("starters: clipboard unavailable");
        None
    }
}
