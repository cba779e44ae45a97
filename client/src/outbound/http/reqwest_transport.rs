//! Reqwest-backed HTTP transport.
//!
//! This adapter owns transport details only: URL assembly with the API key,
//! timeouts, and mapping HTTP failures onto [`TransportError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use super::{HttpTransport, TransportError, TransportRequest};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_USER_AGENT: &str = "popular-movies-client/0.1";
const API_KEY_PARAM: &str = "api_key";

/// Connection settings for [`ReqwestTransport`].
#[derive(Debug, Clone)]
pub struct TransportSettings {
    /// Base URL every endpoint is appended to, such as
    /// `https://api.themoviedb.org/3`.
    pub base_url: Url,
    /// Catalogue API key sent as the `api_key` query parameter.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// HTTP user-agent header value.
    pub user_agent: String,
}

impl TransportSettings {
    /// Settings with the default timeout and user agent.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Transport that performs GET requests against one base URL.
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    api_key: String,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Build a transport using a reqwest client with an explicit timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(settings: TransportSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: settings.base_url,
            api_key: settings.api_key,
            timeout: settings.timeout,
        })
    }

    fn timeout_message(&self) -> String {
        format!("Request timeout after {}ms", self.timeout.as_millis())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &TransportRequest) -> Result<Vec<u8>, TransportError> {
        let url = build_url(&self.base_url, &self.api_key, request)?;
        debug!(endpoint = %request.endpoint, "sending catalogue request");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| self.map_transport_error(&error))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| self.map_transport_error(&error))?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

impl ReqwestTransport {
    fn map_transport_error(&self, error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::timeout(self.timeout_message())
        } else {
            TransportError::transport(error.to_string())
        }
    }
}

fn build_url(
    base_url: &Url,
    api_key: &str,
    request: &TransportRequest,
) -> Result<Url, TransportError> {
    let base = base_url.as_str().trim_end_matches('/');
    let path = request.endpoint.trim_start_matches('/');
    let mut url = Url::parse(&format!("{base}/{path}")).map_err(|error| {
        TransportError::invalid_request(format!(
            "cannot build URL for endpoint {}: {error}",
            request.endpoint
        ))
    })?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair(API_KEY_PARAM, api_key);
        for (key, value) in &request.query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

/// Error document TMDB returns alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct TmdbErrorDto {
    #[serde(default)]
    status_code: Option<i64>,
    status_message: String,
}

fn map_status_error(status: StatusCode, body: &[u8]) -> TransportError {
    let detail = serde_json::from_slice::<TmdbErrorDto>(body)
        .map(|error| match error.status_code {
            Some(code) => format!("{} (code {code})", error.status_message),
            None => error.status_message,
        })
        .unwrap_or_else(|_| body_preview(body));
    let reason = status.canonical_reason().unwrap_or("unknown status");
    let message = if detail.is_empty() {
        reason.to_owned()
    } else {
        format!("{reason}: {detail}")
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => TransportError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            TransportError::timeout(message)
        }
        _ => TransportError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network transport helpers.

    use super::*;
    use rstest::rstest;

    fn base(raw: &str) -> Url {
        Url::parse(raw).expect("valid base url")
    }

    #[rstest]
    #[case("https://api.themoviedb.org/3")]
    #[case("https://api.themoviedb.org/3/")]
    fn appends_endpoint_without_dropping_base_path(#[case] raw_base: &str) {
        let request = TransportRequest::get("/movie/popular").with_query("page", 2);
        let url = build_url(&base(raw_base), "secret", &request).expect("url builds");

        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/movie/popular?api_key=secret&page=2"
        );
    }

    #[rstest]
    fn encodes_query_values() {
        let request = TransportRequest::get("search/movie").with_query("query", "the wailing");
        let url = build_url(&base("https://api.themoviedb.org/3"), "k&y", &request)
            .expect("url builds");

        assert_eq!(url.path(), "/3/search/movie");
        assert_eq!(url.query(), Some("api_key=k%26y&query=the+wailing"));
    }

    #[rstest]
    #[case::rate_limited(StatusCode::TOO_MANY_REQUESTS, "RateLimited")]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, "Timeout")]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, "Timeout")]
    #[case::unauthorised(StatusCode::UNAUTHORIZED, "Status")]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "Status")]
    fn maps_http_statuses_to_transport_errors(#[case] status: StatusCode, #[case] expected: &str) {
        let error = map_status_error(status, b"upstream unavailable");
        match expected {
            "RateLimited" => assert!(
                matches!(error, TransportError::RateLimited { .. }),
                "429 should map to RateLimited",
            ),
            "Timeout" => assert!(
                matches!(error, TransportError::Timeout { .. }),
                "timeout statuses should map to Timeout",
            ),
            "Status" => assert!(
                matches!(error, TransportError::Status { status: code, .. } if code == status.as_u16()),
                "other statuses should keep their code",
            ),
            _ => panic!("unsupported test expectation: {expected}"),
        }
    }

    #[rstest]
    fn prefers_the_tmdb_status_message() {
        let body = br#"{"success":false,"status_code":7,"status_message":"Invalid API key: You must be granted a valid key."}"#;
        let error = map_status_error(StatusCode::UNAUTHORIZED, body);

        assert_eq!(
            error,
            TransportError::status(
                401_u16,
                "Unauthorized: Invalid API key: You must be granted a valid key. (code 7)"
            )
        );
    }

    #[rstest]
    fn falls_back_to_a_compacted_body_preview() {
        let body = format!("<html>\n  <body>{}</body>\n</html>", "x".repeat(200));
        let error = map_status_error(StatusCode::BAD_GATEWAY, body.as_bytes());
        let TransportError::Status { message, .. } = error else {
            panic!("expected status error");
        };

        assert!(message.starts_with("Bad Gateway: <html> <body>"));
        assert!(message.ends_with("..."));
    }

    #[rstest]
    fn empty_bodies_report_the_reason_phrase() {
        let error = map_status_error(StatusCode::SERVICE_UNAVAILABLE, b"");
        assert_eq!(
            error,
            TransportError::status(503_u16, "Service Unavailable")
        );
    }

    #[rstest]
    fn builds_a_client_from_settings() {
        let settings = TransportSettings::new(base("https://api.themoviedb.org/3"), "secret")
            .with_timeout(Duration::from_millis(2500));
        let transport = ReqwestTransport::new(settings).expect("client builds");

        assert_eq!(transport.timeout_message(), "Request timeout after 2500ms");
    }
}
