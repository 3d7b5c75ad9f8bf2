//! Bulk registration from CSV uploads.

use std::path::Path;

use desk_core::entities::BulkRegistrationReport;
use reqwest::Method;
use reqwest::multipart::Form;

use crate::tasks::file_part;
use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// `POST /api/register-students`: one CSV of students for one exam.
    pub async fn register_students(
        &self,
        csv: &Path,
        exam_id: &str,
    ) -> Result<BulkRegistrationReport, ApiError> {
        let form = Form::new()
            .part("file", file_part(csv).await?)
            .text("examId", exam_id.to_string());
        self.send_json(
            self.request(Method::POST, "/api/register-students")
                .multipart(form),
        )
        .await
    }

    /// `POST /api/register-sales`. The backend's summary has no fixed shape,
    /// so it is returned as raw JSON.
    pub async fn register_sales(&self, csv: &Path) -> Result<serde_json::Value, ApiError> {
        let form = Form::new().part("file", file_part(csv).await?);
        self.send_json(self.request(Method::POST, "/api/register-sales").multipart(form))
            .await
    }
}
