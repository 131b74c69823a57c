//! ==============================================================================
//! api.rs - http client for the click backend
//! ==============================================================================
//!
//! purpose:
//!     the two remote operations the page performs: registering a click and
//!     fetching today's per-button counts. both talk to the backend that
//!     serves this page, so the paths are relative.
//!
//! error policy:
//!     a non-2xx from /clique surfaces the body's `erro` text when it is
//!     parseable and non-empty, otherwise a fixed generic message. /contagens_hoje
//!     never surfaces body text; callers decide whether to swallow the error
//!     (counters keep their last good values) or show it.
//!
//! ==============================================================================

use gloo_net::http::Request;
use shared::{ClickReceipt, ClickRequest, ErrorBody, TodayCounts};
use std::fmt;

// ==============================================================================
// endpoints and messages
// ==============================================================================

const CLICK_ENDPOINT: &str = "/clique";
const COUNTS_ENDPOINT: &str = "/contagens_hoje";

const GENERIC_CLICK_ERROR: &str = "Erro ao registar o clique.";
const GENERIC_COUNTS_ERROR: &str = "Erro ao obter as contagens de hoje.";

// ==============================================================================
// error type
// ==============================================================================

/// failure of a backend call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// the backend answered with a non-success status; the message is the
    /// best one available (body `erro` field or a generic fallback)
    Request(String),
    /// the call never produced a usable response (network failure, or a
    /// success body that did not parse); displays the generic message of
    /// the operation that failed
    Transport {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    fn transport(message: &'static str, err: impl fmt::Display) -> Self {
        ApiError::Transport {
            message,
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(message) => write!(f, "{message}"),
            ApiError::Transport { message, .. } => write!(f, "{message}"),
        }
    }
}

// ==============================================================================
// operations
// ==============================================================================

/// register one click for `button_id` and return the backend's receipt
pub async fn register_click(button_id: &str) -> Result<ClickReceipt, ApiError> {
    let body = ClickRequest {
        botao: button_id.to_string(),
    };
    let payload = serde_json::to_string(&body)
        .map_err(|err| ApiError::transport(GENERIC_CLICK_ERROR, err))?;

    let response = Request::post(CLICK_ENDPOINT)
        .header("Content-Type", "application/json")
        .body(payload)
        .map_err(|err| ApiError::transport(GENERIC_CLICK_ERROR, err))?
        .send()
        .await
        .map_err(|err| ApiError::transport(GENERIC_CLICK_ERROR, err))?;

    if !response.ok() {
        let body_text = response.text().await.unwrap_or_default();
        return Err(ApiError::Request(click_error_message(&body_text)));
    }

    response
        .json::<ClickReceipt>()
        .await
        .map_err(|err| ApiError::transport(GENERIC_CLICK_ERROR, err))
}

/// fetch the per-button totals for the current day
pub async fn fetch_today_counts() -> Result<TodayCounts, ApiError> {
    let response = Request::get(COUNTS_ENDPOINT)
        .send()
        .await
        .map_err(|err| ApiError::transport(GENERIC_COUNTS_ERROR, err))?;

    if !response.ok() {
        // no body contract on failure for this endpoint
        return Err(ApiError::Request(GENERIC_COUNTS_ERROR.to_string()));
    }

    response
        .json::<TodayCounts>()
        .await
        .map_err(|err| ApiError::transport(GENERIC_COUNTS_ERROR, err))
}

// ==============================================================================
// helpers
// ==============================================================================

/// pick the user-facing message for a failed /clique call: the body's `erro`
/// field when present and non-empty, a fixed generic message otherwise
fn click_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { erro: Some(message) }) if !message.is_empty() => message,
        _ => GENERIC_CLICK_ERROR.to_string(),
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_error_uses_body_erro_field() {
        assert_eq!(click_error_message(r#"{"erro":"Botão inválido."}"#), "Botão inválido.");
    }

    #[test]
    fn test_click_error_falls_back_on_unparseable_body() {
        assert_eq!(click_error_message("<html>502</html>"), GENERIC_CLICK_ERROR);
        assert_eq!(click_error_message(""), GENERIC_CLICK_ERROR);
    }

    #[test]
    fn test_click_error_falls_back_on_missing_or_empty_erro() {
        assert_eq!(click_error_message("{}"), GENERIC_CLICK_ERROR);
        assert_eq!(click_error_message(r#"{"erro":""}"#), GENERIC_CLICK_ERROR);
    }

    #[test]
    fn test_request_error_displays_its_message() {
        let err = ApiError::Request("Botão inválido.".to_string());
        assert_eq!(err.to_string(), "Botão inválido.");
    }

    #[test]
    fn test_click_transport_error_displays_click_message() {
        let err = ApiError::transport(GENERIC_CLICK_ERROR, "fetch aborted");
        assert_eq!(err.to_string(), GENERIC_CLICK_ERROR);
    }

    #[test]
    fn test_counts_transport_error_displays_counts_message() {
        let err = ApiError::transport(GENERIC_COUNTS_ERROR, "fetch aborted");
        assert_eq!(err.to_string(), GENERIC_COUNTS_ERROR);
    }
}
