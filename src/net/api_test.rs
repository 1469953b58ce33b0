use super::*;
use futures::executor::block_on;

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
}

#[test]
fn check_status_rejects_unauthorized() {
    assert_eq!(check_status(401), Err(ApiError::Status(401)));
}

#[test]
fn check_status_rejects_server_errors() {
    assert_eq!(check_status(500), Err(ApiError::Status(500)));
    assert_eq!(check_status(302), Err(ApiError::Status(302)));
}

#[test]
fn identity_probe_without_browser_is_anonymous() {
    assert_eq!(block_on(fetch_current_user(ApiConfig::default())), None);
}

#[test]
fn assistant_call_without_browser_is_unavailable() {
    let result = block_on(ask_assistant(ApiConfig::default(), "Bonjour".to_owned()));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn starters_call_without_browser_is_unavailable() {
    let result = block_on(generate_conversation_starters(ApiConfig::default(), "user-42".to_owned()));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn probe_network_failure_message_names_cause() {
    assert_eq!(
        probe_network_failure_message("connection refused"),
        "no session (network error: connection refused)"
    );
}
