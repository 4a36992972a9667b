//! Typed HTTP client for the operations API
//!
//! Every call returns `Result<T, ApiError>`. Response bodies are decoded into
//! the `contracts` records here, so a shape mismatch surfaces as
//! [`ApiError::Decode`] instead of reaching a view.

use contracts::shared::error::ErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::api_utils::api_base;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not signed in")]
    NotAuthenticated,
    #[error("failed to encode request: {0}")]
    Serialize(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a notification: the server's own detail when it sent one, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::NotAuthenticated => "Your session has ended, please sign in again".to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::NotAuthenticated | ApiError::Status { status: 401, .. }
        )
    }

    /// Classify a non-2xx response from its status and raw body
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message());
        ApiError::Status { status, detail }
    }
}

/// Decode a 2xx body into a typed record
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Encode query parameters; `None` fields are skipped by the record's serde attributes
pub fn build_query<Q: Serialize>(query: &Q) -> Result<String, ApiError> {
    serde_qs::to_string(query).map_err(|e| ApiError::Serialize(e.to_string()))
}

/// Client bound to one base URL and, once signed in, one bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
        }
    }

    /// Client for calls that carry no credentials (login)
    pub fn anonymous() -> Self {
        Self::new(api_base(), None)
    }

    pub fn authenticated(token: String) -> Self {
        Self::new(api_base(), Some(token))
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Full URL for `path`, with `query` appended only when it is non-empty
    pub fn url(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base, path)
        } else {
            format!("{}{}?{}", self.base, path, query)
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::NotAuthenticated)?;
        Ok(builder.header("Authorization", &format!("Bearer {}", token)))
    }

    /// Authenticated GET
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_json_with_query(path, "").await
    }

    /// Authenticated GET with a pre-encoded query string
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(path, query);
        log::debug!("GET {}", url);
        let builder = self.authorize(Request::get(&url))?;
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }

    /// Authenticated POST with a JSON body
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let builder = self.authorize(Request::post(&self.url(path, "")))?;
        send_json(builder, body).await
    }

    /// Authenticated POST without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.authorize(Request::post(&self.url(path, "")))?;
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(response).await
    }

    /// POST without credentials, used only by login
    pub async fn post_json_public<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        send_json(Request::post(&self.url(path, "")), body).await
    }
}

async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let err = ApiError::from_status(status, &body);
        log::warn!("{} {} failed: {}", response.url(), status, err);
        return Err(err);
    }

    decode_body(&body).map_err(|err| {
        log::warn!("{} returned an unexpected body: {}", response.url(), err);
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_service_entry::aggregate::{ServiceEntry, ServiceListFilter};

    #[test]
    fn test_status_with_detail() {
        let err = ApiError::from_status(401, r#"{"detail":"Invalid credentials"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                detail: Some("Invalid credentials".into())
            }
        );
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_status_without_detail() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::Status { status: 502, detail: None });
        assert_eq!(err.user_message("Failed to load services"), "Failed to load services");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_network_error_uses_fallback() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message("Failed to load"), "Failed to load");
    }

    #[test]
    fn test_decode_error_kind() {
        let result: Result<Vec<ServiceEntry>, _> = decode_body(r#"[{"customer_name":"x"}]"#);
        assert!(matches!(result, Err(ApiError::Decode(_))));

        let empty: Vec<ServiceEntry> = decode_body("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_query_contains_only_supplied_dates() {
        let filter = ServiceListFilter::from_inputs("2026-10-01", "", "");
        assert_eq!(build_query(&filter).unwrap(), "date_from=2026-10-01");

        let both = ServiceListFilter::from_inputs("2026-10-01", "2026-10-31", "");
        assert_eq!(
            build_query(&both).unwrap(),
            "date_from=2026-10-01&date_to=2026-10-31"
        );

        assert_eq!(build_query(&ServiceListFilter::default()).unwrap(), "");
    }

    #[test]
    fn test_query_omits_unselected_therapist() {
        let by_therapist = ServiceListFilter::from_inputs("", "", "u7");
        assert_eq!(build_query(&by_therapist).unwrap(), "therapist_id=u7");

        let all = ServiceListFilter::from_inputs("2026-10-01", "2026-10-31", "u7");
        assert_eq!(
            build_query(&all).unwrap(),
            "date_from=2026-10-01&date_to=2026-10-31&therapist_id=u7"
        );

        let blank_select = ServiceListFilter::from_inputs("2026-10-01", "", "");
        assert!(!build_query(&blank_select).unwrap().contains("therapist_id"));
    }

    #[test]
    fn test_url_omits_empty_query() {
        let client = ApiClient::new("http://localhost:8000", Some("t".into()));
        assert_eq!(client.url("/api/services", ""), "http://localhost:8000/api/services");
        assert_eq!(
            client.url("/api/services", "date_to=2026-10-31"),
            "http://localhost:8000/api/services?date_to=2026-10-31"
        );
    }

    #[test]
    fn test_anonymous_client_has_no_token() {
        let client = ApiClient::new("http://localhost:8000", None);
        assert!(!client.has_token());
    }
}
