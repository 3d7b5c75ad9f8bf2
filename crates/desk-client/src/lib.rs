//! # desk-client
//!
//! Typed REST client for the ExamDesk backend.
//!
//! Endpoint groups live in their own modules, each adding methods to
//! [`ApiClient`]:
//! - `auth`: login and signup
//! - `exams`: exam catalog and management
//! - `tasks`: task assignment, status, comments
//! - `users`: admin user management
//! - `mock_tests`: admin mock-test authoring
//! - `exports`: filtered CSV export
//! - `registration`: bulk CSV registration of students and sales members
//!
//! [`poll`] keeps a task (or task list) fresh by re-fetching on an interval.

pub mod auth;
pub mod exams;
pub mod exports;
pub mod poll;
pub mod registration;
pub mod tasks;
pub mod users;

mod error;
mod http;

pub use error::ApiError;
pub use exports::{ExportFile, ExportQuery};

use reqwest::{Method, RequestBuilder};

/// HTTP client bound to one backend and, optionally, one session token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url` (no trailing `/api`).
    ///
    /// No request timeout is set: slow backend responses are waited out.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build (e.g., no TLS backend available).
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach (or drop) the bearer token sent with every request.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and check the status.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        http::check_response(builder.send().await?).await
    }

    /// Send, check, and decode a JSON body.
    pub(crate) async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        http::decode(self.send(builder).await?).await
    }
}

/// Percent-encode one path segment.
pub(crate) fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:5000/", "examdesk-test").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/api/exams"), "http://localhost:5000/api/exams");
    }

    #[test]
    fn bearer_token_is_attached() {
        let client = ApiClient::new("http://localhost:5000", "examdesk-test")
            .unwrap()
            .with_token(Some("jwt-abc".into()));
        let request = client
            .request(Method::GET, "/api/tasks")
            .build()
            .unwrap();
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Bearer jwt-abc"
        );
    }

    #[test]
    fn anonymous_requests_have_no_authorization() {
        let client = ApiClient::new("http://localhost:5000", "examdesk-test").unwrap();
        let request = client.request(Method::GET, "/api/exams").build().unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
        assert!(!client.has_token());
    }

    #[test]
    fn ids_are_percent_encoded() {
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
