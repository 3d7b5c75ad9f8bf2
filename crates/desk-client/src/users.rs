//! Admin user management.

use desk_core::entities::User;
use desk_core::enums::{AccountStatus, UserRole};
use desk_core::responses::{UserStatusChange, UserStatusResponse, UserUpdate, UsersResponse};
use reqwest::{Method, RequestBuilder};

use crate::{ApiClient, error::ApiError, segment};

impl ApiClient {
    /// `GET /admin/users?search=&userType=`.
    pub async fn list_users(
        &self,
        search: Option<&str>,
        user_type: Option<UserRole>,
    ) -> Result<Vec<User>, ApiError> {
        let mut params = Vec::new();
        if let Some(search) = search.filter(|s| !s.trim().is_empty()) {
            params.push(format!("search={}", urlencoding::encode(search.trim())));
        }
        if let Some(role) = user_type {
            params.push(format!("userType={}", role.as_str()));
        }
        let path = if params.is_empty() {
            "/admin/users".to_string()
        } else {
            format!("/admin/users?{}", params.join("&"))
        };
        let response: UsersResponse = self.send_json(self.request(Method::GET, &path)).await?;
        Ok(response.users)
    }

    /// `GET /api/users/{id}`.
    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        let path = format!("/api/users/{}", segment(id));
        self.send_json(self.request(Method::GET, &path)).await
    }

    /// `POST /admin/change-status`; returns the updated user.
    pub async fn set_user_status(
        &self,
        user_id: &str,
        status: AccountStatus,
    ) -> Result<User, ApiError> {
        let body = UserStatusChange {
            user_id: user_id.to_string(),
            status,
        };
        let response: UserStatusResponse = self
            .send_json(self.request(Method::POST, "/admin/change-status").json(&body))
            .await?;
        Ok(response.user)
    }

    /// `PUT /admin/users/{id}` with the full edited profile. The response
    /// shape varies between backend versions, so callers refetch the user.
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<(), ApiError> {
        self.send(self.update_user_request(id, update)).await?;
        Ok(())
    }

    fn update_user_request(&self, id: &str, update: &UserUpdate) -> RequestBuilder {
        let path = format!("/admin/users/{}", segment(id));
        self.request(Method::PUT, &path).json(update)
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/admin/users/{}", segment(id));
        self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn update_user_puts_the_full_profile() {
        let client = ApiClient::new("http://localhost:5000", "examdesk-test")
            .unwrap()
            .with_token(Some("jwt-admin".into()));
        let update = UserUpdate {
            name: "Asha Rao".into(),
            email: "asha@school.in".into(),
            user_type: UserRole::School,
            status: AccountStatus::Active,
            school_name: Some("DPS North".into()),
            phone_number: None,
        };

        let request = client.update_user_request("u 1", &update).build().unwrap();
        assert_eq!(request.method(), Method::PUT);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:5000/admin/users/u%201"
        );
        let body: serde_json::Value =
            serde_json::from_slice(request.body().unwrap().as_bytes().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Asha Rao",
                "email": "asha@school.in",
                "userType": "school",
                "status": "active",
                "schoolName": "DPS North"
            })
        );
    }
}
