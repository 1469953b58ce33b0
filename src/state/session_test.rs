use super::*;
use futures::executor::block_on;
use std::cell::RefCell;
use std::rc::Rc;

fn alice() -> User {
    User { id: Some("u1".to_owned()), first_name: Some("Alice".to_owned()), ..User::default() }
}

// =============================================================
// Status derivation
// =============================================================

#[test]
fn default_session_is_loading() {
    let state = SessionState::default();
    assert_eq!(state.status(), SessionStatus::Loading);
    assert!(state.user.is_none());
}

#[test]
fn resolved_with_user_is_authenticated() {
    let state = SessionState::resolved(Some(alice()));
    assert_eq!(state.status(), SessionStatus::Authenticated);
    assert!(state.is_authenticated());
}

#[test]
fn resolved_without_user_is_anonymous() {
    let state = SessionState::resolved(None);
    assert_eq!(state.status(), SessionStatus::Anonymous);
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_iff_user_present() {
    for user in [None, Some(alice())] {
        let state = SessionState::resolved(user.clone());
        assert_eq!(state.is_authenticated(), user.is_some());
    }
}

// =============================================================
// probe
// =============================================================

#[test]
fn probe_stores_user() {
    let cell = Rc::new(RefCell::new(SessionState::default()));
    block_on(probe(&cell, async { Some(alice()) }));
    assert_eq!(cell.borrow().status(), SessionStatus::Authenticated);
    assert_eq!(cell.borrow().user, Some(alice()));
}

#[test]
fn probe_failure_becomes_anonymous() {
    let cell = Rc::new(RefCell::new(SessionState::default()));
    block_on(probe(&cell, async { None }));
    assert_eq!(cell.borrow().status(), SessionStatus::Anonymous);
}

#[test]
fn probe_after_unmount_is_noop() {
    let owner = Rc::new(RefCell::new(SessionState::default()));
    let weak = Rc::downgrade(&owner);
    drop(owner);
    block_on(probe(&weak, async { Some(alice()) }));
    assert!(weak.upgrade().is_none());
}
