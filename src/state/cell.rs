//! Owned state handles that may outlive their view.
//!
//! A network call can resolve after the widget that issued it is gone.
//! `try_update` returns `None` in that case and the update is skipped instead
//! of touching disposed state.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::prelude::{RwSignal, Update};

/// Mutable access to a piece of widget state that may have been torn down.
pub trait StateCell<T> {
    /// Apply `f` to the state, or return `None` if the owner is gone.
    fn try_update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn try_update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Update::try_update(self, f)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn try_update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T> StateCell<T> for Weak<RefCell<T>> {
    fn try_update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let owner = self.upgrade()?;
        let mut state = owner.borrow_mut();
        Some(f(&mut state))
    }
}
