//! REST API helpers for communicating with the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with a message fit for the form banner
//! instead of panics, so network failures degrade to a visible error state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactReceipt, ContactRequest};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiError;

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16, body: Option<&ApiError>) -> String {
    match body {
        Some(err) if !err.error.is_empty() => err.error.clone(),
        _ => format!("message could not be sent (status {status})"),
    }
}

/// Submit the contact form via `POST /api/contact`.
///
/// # Errors
///
/// Returns a human-readable message if the request fails or the server
/// rejects the submission.
pub async fn submit_contact(request: &ContactRequest) -> Result<ContactReceipt, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| {
                log::warn!("contact submit failed: {e}");
                "network error, please try again".to_owned()
            })?;
        if !resp.ok() {
            let body = resp.json::<ApiError>().await.ok();
            return Err(contact_failed_message(resp.status(), body.as_ref()));
        }
        resp.json::<ContactReceipt>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
