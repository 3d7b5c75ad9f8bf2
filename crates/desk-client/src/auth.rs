//! Login and signup.

use desk_core::forms::SignupRequest;
use desk_core::responses::{LoginRequest, LoginResponse, SignupResponse};
use reqwest::Method;

use crate::{ApiClient, error::ApiError};

const DEACTIVATED: &str = "Your account has been deactivated";

impl ApiClient {
    /// `POST /api/login`.
    ///
    /// # Errors
    ///
    /// A 403 means the account exists but was deactivated by an admin and is
    /// reported as [`ApiError::Forbidden`] with a fixed message.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self.request(Method::POST, "/api/login").json(request);
        match self.send_json(builder).await {
            Err(ApiError::Forbidden(_)) => Err(ApiError::Forbidden(DEACTIVATED.to_string())),
            other => other,
        }
    }

    /// `POST /api/signup`.
    pub async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError> {
        let builder = self.request(Method::POST, "/api/signup").json(request);
        self.send_json(builder).await
    }
}
