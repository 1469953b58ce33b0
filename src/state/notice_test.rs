use super::*;

#[test]
fn show_sets_message_and_bumps_seq() {
    let mut notice = NoticeState::default();
    let seq = notice.show("Copied");
    assert_eq!(seq, 1);
    assert_eq!(notice.message.as_deref(), Some("Copied"));
}

#[test]
fn dismiss_clears_matching_notice() {
    let mut notice = NoticeState::default();
    let seq = notice.show("Copied");
    notice.dismiss(seq);
    assert!(notice.message.is_none());
}

#[test]
fn stale_dismiss_keeps_newer_notice() {
    let mut notice = NoticeState::default();
    let first = notice.show("Copied");
    notice.show("Copied again");
    notice.dismiss(first);
    assert_eq!(notice.message.as_deref(), Some("Copied again"));
}
