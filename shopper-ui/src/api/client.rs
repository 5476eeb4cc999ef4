//! Fetch Transport
//!
//! POSTs JSON to the page's own origin. The browser attaches the session
//! cookie; the CSRF token is read from the form field the server renders
//! into every page.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{RequestCredentials, RequestMode};

use shopper::api::{ApiError, ApiResult, ShopperApi, Transport, CSRF_HEADER};

use crate::browser;

/// Same-origin `fetch` transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

/// Typed API over the page's origin
pub fn shopper_api() -> ShopperApi<GlooTransport> {
    ShopperApi::new(GlooTransport)
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post_json(&self, path: &str, body: Option<Value>) -> ApiResult<Value> {
        let token = browser::csrf_token().ok_or(ApiError::MissingCsrfToken)?;

        let builder = Request::post(path)
            .header(CSRF_HEADER, &token)
            .header("Content-Type", "application/json")
            .mode(RequestMode::SameOrigin)
            .credentials(RequestCredentials::SameOrigin);
        let request = match body {
            Some(body) => builder.body(body.to_string()),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: response.status(),
                message: if text.is_empty() {
                    response.status_text()
                } else {
                    text
                },
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(serde_json::from_str(&text)?)
    }
}
