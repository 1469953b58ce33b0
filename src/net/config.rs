//! Endpoint configuration resolved at build time.
//!
//! The browser bundle has no process environment, so the API base URL is
//! baked in from `COMMUNITY_API_BASE_URL` when the crate is compiled. An empty
//! base keeps every call same-origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Identity probe; 2xx with a user body when a session exists.
pub const IDENTITY_PATH: &str = "/api/auth/user";
/// Server-side login redirect.
pub const LOGIN_PATH: &str = "/api/login";
/// Server-side logout redirect.
pub const LOGOUT_PATH: &str = "/api/logout";
/// Assistant question endpoint.
pub const ASSISTANT_PATH: &str = "/api/ai/assistant";
/// Conversation-starter generation endpoint.
pub const CONVERSATION_STARTERS_PATH: &str = "/api/ai/conversation-starters";

/// Resolved API location shared through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build config from the compile-time `COMMUNITY_API_BASE_URL` variable.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_base(option_env!("COMMUNITY_API_BASE_URL").unwrap_or_default())
    }

    /// Build config for an explicit base URL. A trailing `/` is dropped.
    #[must_use]
    pub fn with_base(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Absolute (or same-origin relative) URL for an endpoint path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
