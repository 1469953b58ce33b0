//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled once by the identity probe issued when the app mounts and read by
//! the navigation gate. There is no polling and no retry: a failed probe means
//! anonymous until the next full reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::state::cell::StateCell;

/// Derived authentication status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Anonymous,
}

/// Current user and whether the probe is still outstanding.
///
/// Status is never stored; it is computed from these two fields so that
/// "authenticated" and "user present" cannot disagree.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Session after the probe resolved.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.loading {
            SessionStatus::Loading
        } else if self.user.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }
}

/// Run the identity probe once and store its outcome.
pub async fn probe<C, Fut>(cell: &C, call: Fut)
where
    C: StateCell<SessionState>,
    Fut: Future<Output = Option<User>>,
{
    let user = call.await;
    match &user {
        Some(u) => log::info!("session: authenticated as {}", u.display_name()),
        None => log::info!("session: anonymous"),
    }
    if cell.try_update(|state| *state = SessionState::resolved(user)).is_none() {
        log::debug!("session: app unmounted before the probe resolved");
    }
}
