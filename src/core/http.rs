//! Shared HTTP transport for the responses API.
//!
//! Makes exactly one attempt per call. Retrying and model fallback belong to
//! [`crate::core::ResilientCompleter`]; this layer only maps raw failures into
//! tagged [`ServiceErrorKind`]s.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::{LlmError, ServiceErrorKind};

/// Lowercase markers for failures whose description is all we have.
const RATE_LIMIT_MARKERS: &[&str] = &["rate limit", "429", "rpm", "tpm"];
const TIMEOUT_MARKERS: &[&str] = &["timeout", "timed out"];
const CONNECTION_MARKERS: &[&str] = &["connection aborted", "connection reset", "connection refused"];
const OVERLOAD_MARKERS: &[&str] = &[
    "overloaded",
    "temporarily unavailable",
    "capacity",
    "unavailable",
];
const SERVER_MARKERS: &[&str] = &["bad gateway", "gateway", "server error"];
const UNSUPPORTED_PARAMETER_MARKERS: &[&str] = &[
    "unsupported parameter",
    "unsupported_parameter",
    "unsupported value",
    "not supported with this model",
];

/// Configuration for the underlying `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total time for a single attempt
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            user_agent: None,
        }
    }
}

pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self, LlmError> {
        let default_ua = format!("stargate/{}", env!("CARGO_PKG_VERSION"));
        let ua = config.user_agent.as_deref().unwrap_or(&default_ua);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(ua)
            .build()
            .map_err(|e| {
                LlmError::Configuration(format!("Failed to build reqwest client: {e}"))
            })?;

        Ok(Self { client })
    }

    /// Make a single POST request with a JSON body.
    #[tracing::instrument(
        name = "http_post_json",
        level = "debug",
        skip(self, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, LlmError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| {
            warn!(error = %e, "HTTP request failed");
            LlmError::Service {
                kind: classify_transport_error(&e),
                message: format!("Request failed: {e}"),
                status_code: None,
            }
        })?;

        let status = res.status();
        let response_text = res.text().await.map_err(|e| LlmError::Service {
            kind: classify_transport_error(&e),
            message: format!("Failed to read response body: {e}"),
            status_code: Some(status.as_u16()),
        })?;

        if !status.is_success() {
            let kind = classify_status(status, &response_text);
            warn!(status = %status, %kind, "API returned error status");
            return Err(LlmError::Service {
                kind,
                message: format!("API error ({status}): {response_text}"),
                status_code: Some(status.as_u16()),
            });
        }

        debug!(status = %status, "HTTP request successful");

        serde_json::from_str(&response_text).map_err(|e| LlmError::Service {
            kind: ServiceErrorKind::MalformedResponse,
            message: format!("Failed to parse API response: {e}"),
            status_code: Some(status.as_u16()),
        })
    }
}

/// Map a non-success status (and its body) into a tag.
pub fn classify_status(status: StatusCode, body: &str) -> ServiceErrorKind {
    match status {
        StatusCode::TOO_MANY_REQUESTS => ServiceErrorKind::RateLimited,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ServiceErrorKind::Timeout,
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => ServiceErrorKind::Overloaded,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceErrorKind::Authentication,
        s if s.is_server_error() => ServiceErrorKind::ServerError,
        s if s.is_client_error() => {
            if contains_any(&body.to_lowercase(), UNSUPPORTED_PARAMETER_MARKERS) {
                ServiceErrorKind::UnsupportedParameter
            } else {
                ServiceErrorKind::InvalidRequest
            }
        }
        _ => classify_message(body).unwrap_or(ServiceErrorKind::Unknown),
    }
}

fn classify_transport_error(err: &reqwest::Error) -> ServiceErrorKind {
    if err.is_timeout() {
        ServiceErrorKind::Timeout
    } else if err.is_connect() || err.is_request() || err.is_body() {
        ServiceErrorKind::Connection
    } else if err.is_decode() {
        ServiceErrorKind::MalformedResponse
    } else {
        classify_message(&err.to_string()).unwrap_or(ServiceErrorKind::Unknown)
    }
}

/// Classify a free-form failure description by the transient-failure markers.
///
/// Only used when no structured signal (status code, error flags) is available.
pub fn classify_message(message: &str) -> Option<ServiceErrorKind> {
    let s = message.to_lowercase();

    [
        (RATE_LIMIT_MARKERS, ServiceErrorKind::RateLimited),
        (TIMEOUT_MARKERS, ServiceErrorKind::Timeout),
        (CONNECTION_MARKERS, ServiceErrorKind::Connection),
        (OVERLOAD_MARKERS, ServiceErrorKind::Overloaded),
        (SERVER_MARKERS, ServiceErrorKind::ServerError),
    ]
    .into_iter()
    .find(|(markers, _)| contains_any(&s, markers))
    .map(|(_, kind)| kind)
}

fn contains_any(haystack: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| haystack.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let cases = [
            (429, ServiceErrorKind::RateLimited),
            (408, ServiceErrorKind::Timeout),
            (504, ServiceErrorKind::Timeout),
            (502, ServiceErrorKind::Overloaded),
            (503, ServiceErrorKind::Overloaded),
            (500, ServiceErrorKind::ServerError),
            (401, ServiceErrorKind::Authentication),
            (403, ServiceErrorKind::Authentication),
            (400, ServiceErrorKind::InvalidRequest),
            (404, ServiceErrorKind::InvalidRequest),
        ];

        for (code, expected) in cases {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(classify_status(status, ""), expected, "status {code}");
        }
    }

    #[test]
    fn test_unsupported_parameter_body() {
        let body = r#"{"error":{"message":"Unsupported parameter: 'temperature' is not supported with this model.","type":"invalid_request_error","param":"temperature","code":"unsupported_parameter"}}"#;
        assert_eq!(
            classify_status(StatusCode::BAD_REQUEST, body),
            ServiceErrorKind::UnsupportedParameter
        );
    }

    #[test]
    fn test_message_markers() {
        assert_eq!(
            classify_message("Rate limit reached for gpt-4o-mini on RPM"),
            Some(ServiceErrorKind::RateLimited)
        );
        assert_eq!(
            classify_message("Request timed out."),
            Some(ServiceErrorKind::Timeout)
        );
        assert_eq!(
            classify_message("('Connection aborted.', RemoteDisconnected)"),
            Some(ServiceErrorKind::Connection)
        );
        assert_eq!(
            classify_message("The engine is currently overloaded"),
            Some(ServiceErrorKind::Overloaded)
        );
        assert_eq!(
            classify_message("502 Bad Gateway"),
            Some(ServiceErrorKind::ServerError)
        );
        assert_eq!(classify_message("Incorrect API key provided"), None);
    }
}
