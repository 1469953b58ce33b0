//! REST API helpers for the identity probe and the AI endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending the
//! session cookie.
//! Server-side (SSR) and native tests: stubs returning `None` or
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! The identity probe folds every failure into `None`: no session is a normal
//! state, not an error. The AI calls return [`ApiError`] so the mutation state
//! can surface the message inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
#[cfg(feature = "hydrate")]
use super::config::{ASSISTANT_PATH, CONVERSATION_STARTERS_PATH, IDENTITY_PATH};
use super::error::ApiError;
use super::types::{AskResponse, User};
#[cfg(feature = "hydrate")]
use super::types::{AskRequest, StartersRequest, StartersResponse};

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn probe_network_failure_message(cause: &str) -> String {
    format!("no session ({})", ApiError::Network(cause.to_owned()))
}

/// Probe the identity endpoint once.
/// Returns `None` on 401, any other failure, or on the server.
pub async fn fetch_current_user(config: ApiConfig) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(IDENTITY_PATH);
        let resp = match gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                log::info!("identity probe: {}", probe_network_failure_message(&e.to_string()));
                return None;
            }
        };
        if let Err(e) = check_status(resp.status()) {
            log::info!("identity probe: no session ({e})");
            return None;
        }
        let user = resp.json::<User>().await.ok();
        if user.is_none() {
            log::warn!("identity probe: undecodable identity body");
        }
        user
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B, R>(url: &str, body: &B) -> Result<R, ApiError>
where
    B: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .credentials(web_sys::RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(resp.status())?;
    resp.json::<R>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Ask the assistant a question via `POST /api/ai/assistant`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server answers non-2xx,
/// or the body does not decode.
pub async fn ask_assistant(config: ApiConfig, question: String) -> Result<AskResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(ASSISTANT_PATH);
        post_json(&url, &AskRequest { question }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, question);
        Err(ApiError::Unavailable)
    }
}

/// Generate opening messages for a target profile via
/// `POST /api/ai/conversation-starters`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server answers non-2xx,
/// or the body does not decode.
pub async fn generate_conversation_starters(
    config: ApiConfig,
    target_user_id: String,
) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(CONVERSATION_STARTERS_PATH);
        let body: StartersResponse = post_json(&url, &StartersRequest { target_user_id }).await?;
        Ok(body.suggestions)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, target_user_id);
        Err(ApiError::Unavailable)
    }
}

/// Send the browser to a server-side redirect endpoint (login / logout).
pub fn navigate_to(config: &ApiConfig, path: &str) {
    let url = config.endpoint(path);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
