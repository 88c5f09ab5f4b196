//! Client for the remote layout-generation service

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{CatalogItem, LayoutResult, RoomSpec};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const TIMEOUT_MESSAGE: &str = "Request took too long, please try again.";
const SERVER_MESSAGE: &str = "Server error occurred. Please try again.";
const VALIDATION_MESSAGE: &str = "Please check your input values.";
const NETWORK_MESSAGE: &str = "Unable to reach server. Please check your connection.";
const STATUS_MESSAGE: &str = "An error occurred";
const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

/// Failure of a service call. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response within the client timeout.
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    /// 5xx response.
    #[error("{}", or_fallback(.message, SERVER_MESSAGE))]
    Server { status: u16, message: Option<String> },

    /// 4xx response.
    #[error("{}", or_fallback(.message, VALIDATION_MESSAGE))]
    Validation { status: u16, message: Option<String> },

    /// Any other non-success status.
    #[error("{}", or_fallback(.message, STATUS_MESSAGE))]
    Status { status: u16, message: Option<String> },

    /// The request was sent but nothing came back.
    #[error("{}", NETWORK_MESSAGE)]
    Network(#[source] reqwest::Error),

    #[error("{}", or_fallback(.message, UNEXPECTED_MESSAGE))]
    Unexpected { message: Option<String> },
}

fn or_fallback<'a>(message: &'a Option<String>, fallback: &'a str) -> &'a str {
    message.as_deref().unwrap_or(fallback)
}

impl ApiError {
    /// HTTP status of a server-reported failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. }
            | ApiError::Validation { status, .. }
            | ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn from_status(status: u16, message: Option<String>) -> Self {
        if status >= 500 {
            ApiError::Server { status, message }
        } else if status >= 400 {
            ApiError::Validation { status, message }
        } else {
            ApiError::Status { status, message }
        }
    }

    fn unexpected(message: impl Into<String>) -> Self {
        let message = message.into();
        ApiError::Unexpected {
            message: (!message.is_empty()).then_some(message),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() || (err.is_request() && err.status().is_none()) {
            ApiError::Network(err)
        } else {
            ApiError::unexpected(err.to_string())
        }
    }
}

/// Error body the service sends with 4xx/5xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    message: Option<String>,
    error: Option<String>,
}

impl ErrorPayload {
    /// `message` wins over `error`; blank strings count as absent.
    fn into_message(self) -> Option<String> {
        let present = |s: Option<String>| s.filter(|s| !s.is_empty());
        present(self.message).or_else(|| present(self.error))
    }
}

/// HTTP client for `POST /layout` and `GET /furniture`.
#[derive(Debug, Clone)]
pub struct LayoutClient {
    http: Client,
    base_url: String,
}

impl LayoutClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("roomplan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::unexpected(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the service to furnish a room.
    pub async fn generate_layout(&self, room: &RoomSpec) -> Result<LayoutResult, ApiError> {
        let url = format!("{}/layout", self.base_url);
        info!(%url, length = room.length, width = room.width, budget = room.budget, "requesting layout");

        let response = self.http.post(&url).json(room).send().await?;
        let layout: LayoutResult = read_json(response).await?;

        info!(
            items = layout.furniture.len(),
            total_cost = layout.total_cost,
            "layout received"
        );
        Ok(layout)
    }

    /// Fetch the furniture catalog.
    pub async fn list_furniture(&self) -> Result<Vec<CatalogItem>, ApiError> {
        let url = format!("{}/furniture", self.base_url);
        debug!(%url, "requesting furniture catalog");

        let response = self.http.get(&url).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    debug!(status = status.as_u16(), "service responded");

    if status.is_success() {
        return response.json::<T>().await.map_err(ApiError::from);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorPayload>(&body)
        .unwrap_or_default()
        .into_message();
    Err(ApiError::from_status(status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes_pick_the_right_variant() {
        assert!(matches!(ApiError::from_status(503, None), ApiError::Server { status: 503, .. }));
        assert!(matches!(ApiError::from_status(422, None), ApiError::Validation { status: 422, .. }));
        assert!(matches!(ApiError::from_status(302, None), ApiError::Status { status: 302, .. }));
    }

    #[test]
    fn generic_messages_when_server_is_silent() {
        assert_eq!(ApiError::Timeout.to_string(), "Request took too long, please try again.");
        assert_eq!(ApiError::from_status(500, None).to_string(), "Server error occurred. Please try again.");
        assert_eq!(ApiError::from_status(400, None).to_string(), "Please check your input values.");
        assert_eq!(ApiError::from_status(399, None).to_string(), "An error occurred");
        assert_eq!(ApiError::unexpected("").to_string(), "An unexpected error occurred");
        assert_eq!(ApiError::unexpected("boom").to_string(), "boom");
    }

    #[test]
    fn server_message_takes_precedence() {
        let err = ApiError::from_status(500, Some("AI service unavailable".into()));
        assert_eq!(err.to_string(), "AI service unavailable");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn payload_prefers_message_over_error() {
        let both: ErrorPayload = serde_json::from_str(r#"{"message":"m","error":"e"}"#).unwrap();
        assert_eq!(both.into_message().as_deref(), Some("m"));

        let blank: ErrorPayload = serde_json::from_str(r#"{"message":"","error":"e"}"#).unwrap();
        assert_eq!(blank.into_message().as_deref(), Some("e"));

        assert_eq!(ErrorPayload::default().into_message(), None);
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let client = LayoutClient::new("http://example.test/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://example.test/api");
    }
}
