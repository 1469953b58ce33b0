//! Generic single-call request/response tracker.
//!
//! DESIGN
//! ======
//! `MutationState` is plain data with two transitions: `begin` when a call is
//! issued and `settle` when it resolves. Each call gets a [`Ticket`] carrying
//! a per-instance sequence number; a resolution is applied only if its ticket
//! is newer than every ticket already applied, so a slow early call can never
//! overwrite the result of a later one.
//!
//! Concurrent calls are not serialized here. Widgets disable their trigger
//! while a call is pending.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

use crate::net::error::ApiError;
use crate::state::cell::StateCell;

/// Lifecycle of the most recent call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// Identifies one issued call within a [`MutationState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Observable state of a request/response unit of work.
///
/// `last_output` survives later failures and new pending calls; the view
/// decides whether to show stale output next to an error.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationState<I, O> {
    pub phase: Phase,
    pub last_input: Option<I>,
    pub last_output: Option<O>,
    pub last_error: Option<String>,
    issued: u64,
    applied: u64,
}

impl<I, O> Default for MutationState<I, O> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            last_input: None,
            last_output: None,
            last_error: None,
            issued: 0,
            applied: 0,
        }
    }
}

impl<I, O> MutationState<I, O> {
    /// Record a new call and move to `Pending`.
    pub fn begin(&mut self, input: I) -> Ticket {
        self.issued += 1;
        self.phase = Phase::Pending;
        self.last_input = Some(input);
        self.last_error = None;
        Ticket(self.issued)
    }

    /// Apply a call's resolution. Returns `false` when the ticket has been
    /// superseded by an already-applied newer call.
    pub fn settle(&mut self, ticket: Ticket, result: Result<O, String>) -> bool {
        if ticket.0 <= self.applied {
            log::debug!("mutation: dropping superseded resolution #{} (applied #{})", ticket.0, self.applied);
            return false;
        }
        self.applied = ticket.0;
        let succeeded = result.is_ok();
        match result {
            Ok(output) => {
                self.last_output = Some(output);
                self.last_error = None;
            }
            Err(message) => self.last_error = Some(message),
        }
        self.phase = if self.applied < self.issued {
            // A newer call is still outstanding.
            Phase::Pending
        } else if succeeded {
            Phase::Success
        } else {
            Phase::Error
        };
        true
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

/// How a driven call ended, from the caller's point of view.
#[derive(Clone, Debug, PartialEq)]
pub enum Settled<O> {
    /// The resolution was applied to state.
    Applied(Result<O, String>),
    /// A newer call had already been applied; this result was discarded.
    Superseded,
    /// The owning view was gone; nothing was applied.
    Detached,
}

fn whole<T>(state: &mut T) -> &mut T {
    state
}

/// Drive one call against a cell holding a bare [`MutationState`].
pub async fn execute<C, I, O, F, Fut>(cell: &C, input: I, call: F) -> Settled<O>
where
    C: StateCell<MutationState<I, O>>,
    I: Clone,
    O: Clone,
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = Result<O, ApiError>>,
{
    execute_with(cell, whole::<MutationState<I, O>>, input, call, |_, _, _| {}).await
}

/// Drive one call against a [`MutationState`] embedded in a larger state.
///
/// `lens` selects the mutation state inside `S`. `on_success` runs inside the
/// same update that settles the call, so derived state (a transcript, a
/// suggestion list) changes together with the phase.
pub async fn execute_with<S, C, I, O, F, Fut, A>(
    cell: &C,
    lens: fn(&mut S) -> &mut MutationState<I, O>,
    input: I,
    call: F,
    on_success: A,
) -> Settled<O>
where
    C: StateCell<S>,
    I: Clone,
    O: Clone,
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = Result<O, ApiError>>,
    A: FnOnce(&mut S, &I, &O),
{
    let Some(ticket) = cell.try_update(|state| lens(state).begin(input.clone())) else {
        log::debug!("mutation: owner gone before the call was issued");
        return Settled::Detached;
    };

    let result = call(input.clone()).await.map_err(|e| {
        log::warn!("mutation: request failed: {e}");
        e.to_string()
    });

    let applied = cell.try_update(|state| {
        if !lens(state).settle(ticket, result.clone()) {
            return false;
        }
        if let Ok(output) = &result {
            on_success(state, &input, output);
        }
        true
    });

    match applied {
        Some(true) => Settled::Applied(result),
        Some(false) => Settled::Superseded,
        None => {
            log::debug!("mutation: owner gone before resolution was applied");
            Settled::Detached
        }
    }
}
