use super::*;
use futures::channel::oneshot;
use futures::executor::block_on;
use std::cell::RefCell;
use std::rc::Rc;
use std::task::Poll;

fn new_cell() -> Rc<RefCell<StarterState>> {
    Rc::new(RefCell::new(StarterState::default()))
}

async fn yield_now() {
    let mut yielded = false;
    futures::future::poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await;
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

// =============================================================
// generate
// =============================================================

#[test]
fn default_has_no_items() {
    let state = StarterState::default();
    assert!(state.items().is_empty());
    assert!(state.target_id.is_none());
}

#[test]
fn generate_sends_target_and_stores_items() {
    let cell = new_cell();
    let settled = block_on(generate(&cell, "user-42".to_owned(), |target| async move {
        assert_eq!(target, "user-42");
        Ok(strings(&["Hi!", "Hey there"]))
    }));
    assert_eq!(settled, Settled::Applied(Ok(strings(&["Hi!", "Hey there"]))));
    let state = cell.borrow();
    assert_eq!(state.items(), strings(&["Hi!", "Hey there"]).as_slice());
    assert_eq!(state.target_id.as_deref(), Some("user-42"));
}

#[test]
fn second_generation_replaces_list_wholesale() {
    let cell = new_cell();
    block_on(generate(&cell, "user-42".to_owned(), |_| async { Ok(strings(&["Hi!", "Hey there"])) }));
    block_on(generate(&cell, "user-42".to_owned(), |_| async { Ok(strings(&["New one"])) }));
    assert_eq!(cell.borrow().items(), strings(&["New one"]).as_slice());
}

#[test]
fn repeated_items_are_not_deduplicated() {
    let cell = new_cell();
    block_on(generate(&cell, "u".to_owned(), |_| async { Ok(strings(&["Hi!"])) }));
    block_on(generate(&cell, "u".to_owned(), |_| async { Ok(strings(&["Hi!", "Hi!"])) }));
    assert_eq!(cell.borrow().items().len(), 2);
}

#[test]
fn failed_generation_keeps_stale_list() {
    let cell = new_cell();
    block_on(generate(&cell, "user-42".to_owned(), |_| async { Ok(strings(&["Hi!"])) }));
    let settled = block_on(generate(&cell, "user-7".to_owned(), |_| async {
        Err(ApiError::Network("offline".to_owned()))
    }));
    assert_eq!(settled, Settled::Applied(Err("network error: offline".to_owned())));
    let state = cell.borrow();
    assert_eq!(state.items(), strings(&["Hi!"]).as_slice());
    assert_eq!(state.target_id.as_deref(), Some("user-42"));
    assert_eq!(state.error(), Some("network error: offline"));
}

#[test]
fn older_generation_resolving_last_does_not_replace_newer_list() {
    let cell = new_cell();
    let (old_tx, old_rx) = oneshot::channel::<Result<Vec<String>, ApiError>>();
    let (new_tx, new_rx) = oneshot::channel::<Result<Vec<String>, ApiError>>();

    let older = generate(&cell, "user-1".to_owned(), move |_| async move {
        old_rx.await.unwrap_or_else(|_| Err(ApiError::Network("dropped".to_owned())))
    });
    let newer = generate(&cell, "user-2".to_owned(), move |_| async move {
        new_rx.await.unwrap_or_else(|_| Err(ApiError::Network("dropped".to_owned())))
    });
    let resolver = async {
        let _ = new_tx.send(Ok(strings(&["Hello user two"])));
        yield_now().await;
        let _ = old_tx.send(Ok(strings(&["Hello user one"])));
    };

    let (older, newer, ()) = block_on(async { futures::join!(older, newer, resolver) });
    assert_eq!(newer, Settled::Applied(Ok(strings(&["Hello user two"]))));
    assert_eq!(older, Settled::Superseded);
    let state = cell.borrow();
    assert_eq!(state.items(), strings(&["Hello user two"]).as_slice());
    assert_eq!(state.target_id.as_deref(), Some("user-2"));
    assert!(!state.is_pending());
}

// =============================================================
// copy
// =============================================================

#[test]
fn copy_writes_text_and_shows_notice() {
    let mut notice = NoticeState::default();
    let written = RefCell::new(String::new());
    let seq = copy("Hi!", |t| {
        written.borrow_mut().push_str(t);
        true
    }, &mut notice);
    assert_eq!(seq, Some(1));
    assert_eq!(written.borrow().as_str(), "Hi!");
    assert_eq!(notice.message.as_deref(), Some("Copied to clipboard"));
}

#[test]
fn copy_failure_shows_no_notice() {
    let mut notice = NoticeState::default();
    assert_eq!(copy("Hi!", |_| false, &mut notice), None);
    assert!(notice.message.is_none());
}

#[test]
fn copy_never_touches_starters() {
    let cell = new_cell();
    let mut notice = NoticeState::default();

    copy("before", |_| true, &mut notice);
    assert_eq!(*cell.borrow(), StarterState::default());

    block_on(generate(&cell, "user-42".to_owned(), |_| async { Ok(strings(&["Hi!"])) }));
    let snapshot = cell.borrow().clone();
    copy("Hi!", |_| true, &mut notice);
    copy("unrelated", |_| true, &mut notice);
    assert_eq!(*cell.borrow(), snapshot);
}
