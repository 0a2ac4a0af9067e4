use std::convert::Infallible;

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode, Uri, header, request::Parts};
use tracing::{debug, error};

use crate::domain::errors::CustomerError;
use crate::interface_adapters::protocol::{ErrorDetail, Message};

// Fallbacks for requests that arrive without the usual routing headers.
const DEFAULT_SCHEME: &str = "http";
const FALLBACK_HOST: &str = "localhost";

// Absolute URL of the current request, rebuilt from the Host header and the
// forwarded scheme. Extraction never fails; missing headers fall back to
// defaults so every envelope carries a url.
pub struct RequestUrl(pub String);

impl<S> FromRequestParts<S> for RequestUrl
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestUrl(absolute_url(&parts.headers, &parts.uri)))
    }
}

pub fn absolute_url(headers: &HeaderMap, uri: &Uri) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or(DEFAULT_SCHEME);
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(FALLBACK_HOST);
    format!("{scheme}://{host}{}", uri.path())
}

// Translates a domain failure into the uniform envelope. The arms mirror the
// classification order: validation, then storage, then business rules, then
// the catch-all for anything else.
pub fn translate(url: String, err: CustomerError) -> (StatusCode, Json<Message>) {
    match err {
        CustomerError::Validation(violations) => {
            debug!(url = %url, violations = ?violations, "request failed validation");
            let errors = violations.iter().map(ErrorDetail::from).collect();
            (
                StatusCode::BAD_REQUEST,
                Json(Message::error(url, "Validation error", errors)),
            )
        }
        // The cause stays in the log; clients only learn that storage failed.
        CustomerError::Storage(cause) => {
            error!(url = %url, cause = %cause, "storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Message::error(url, "Internal storage error", Vec::new())),
            )
        }
        CustomerError::BusinessRule(message) => {
            error!(url = %url, reason = %message, "request rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(Message::error(url, message, Vec::new())),
            )
        }
        CustomerError::Unexpected(message) => {
            error!(url = %url, reason = %message, "unexpected failure");
            (
                StatusCode::BAD_REQUEST,
                Json(Message::error(url, message, Vec::new())),
            )
        }
    }
}
