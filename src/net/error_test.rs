use super::*;

#[test]
fn status_error_message_includes_code() {
    assert_eq!(ApiError::Status(502).to_string(), "request failed with status 502");
}

#[test]
fn network_error_message_wraps_cause() {
    assert_eq!(
        ApiError::Network("connection reset".to_owned()).to_string(),
        "network error: connection reset"
    );
}

#[test]
fn unavailable_error_message() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
