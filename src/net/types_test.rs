use super::*;
use serde_json::json;

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_camel_case_fields_and_keeps_extras() {
    let user: User = serde_json::from_value(json!({
        "id": "u1",
        "email": "ana@example.org",
        "firstName": "Ana",
        "lastName": "Lopes",
        "profileImageUrl": null,
        "isPremium": true
    }))
    .unwrap();
    assert_eq!(user.id.as_deref(), Some("u1"));
    assert_eq!(user.first_name.as_deref(), Some("Ana"));
    assert_eq!(user.extra.get("isPremium"), Some(&json!(true)));
}

#[test]
fn user_decodes_empty_object() {
    let user: User = serde_json::from_value(json!({})).unwrap();
    assert_eq!(user, User::default());
}

#[test]
fn display_name_prefers_full_name() {
    let user = User {
        first_name: Some("Ana".to_owned()),
        last_name: Some("Lopes".to_owned()),
        email: Some("ana@example.org".to_owned()),
        ..User::default()
    };
    assert_eq!(user.display_name(), "Ana Lopes");
}

#[test]
fn display_name_falls_back_to_email_then_id() {
    let with_email = User { email: Some("ana@example.org".to_owned()), ..User::default() };
    assert_eq!(with_email.display_name(), "ana@example.org");

    let with_id = User { id: Some("u1".to_owned()), first_name: Some("  ".to_owned()), ..User::default() };
    assert_eq!(with_id.display_name(), "u1");
}

// =============================================================
// Assistant payloads
// =============================================================

#[test]
fn ask_request_serializes_question_field() {
    let body = serde_json::to_value(AskRequest { question: "Bonjour ?".to_owned() }).unwrap();
    assert_eq!(body, json!({ "question": "Bonjour ?" }));
}

#[test]
fn ask_response_missing_lists_default_to_empty() {
    let resp: AskResponse = serde_json::from_value(json!({ "message": "Salut" })).unwrap();
    assert_eq!(resp.message, "Salut");
    assert!(resp.suggestions.is_empty());
    assert!(resp.resources.is_empty());
}

#[test]
fn ask_response_resource_url_is_optional() {
    let resp: AskResponse = serde_json::from_value(json!({
        "message": "m",
        "suggestions": ["A"],
        "resources": [
            { "title": "Guide", "description": "Basics" },
            { "title": "Course", "description": "Deep dive", "url": "/courses/1" }
        ]
    }))
    .unwrap();
    assert_eq!(resp.resources[0].url, None);
    assert_eq!(resp.resources[1].url.as_deref(), Some("/courses/1"));
}

#[test]
fn ask_response_without_message_is_rejected() {
    assert!(serde_json::from_value::<AskResponse>(json!({ "suggestions": [] })).is_err());
}

// =============================================================
// Conversation starters
// =============================================================

#[test]
fn starters_request_uses_camel_case_target() {
    let body = serde_json::to_value(StartersRequest { target_user_id: "user-42".to_owned() }).unwrap();
    assert_eq!(body, json!({ "targetUserId": "user-42" }));
}

#[test]
fn starters_response_decodes_list() {
    let resp: StartersResponse = serde_json::from_value(json!({ "suggestions": ["Hi!", "Hey there"] })).unwrap();
    assert_eq!(resp.suggestions, vec!["Hi!".to_owned(), "Hey there".to_owned()]);
}
