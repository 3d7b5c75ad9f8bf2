//! Exam catalog and management endpoints.

use desk_core::entities::Exam;
use desk_core::enums::ExamStatus;
use desk_core::forms::ExamPayload;
use desk_core::responses::StatusToggleResponse;
use reqwest::Method;

use crate::{ApiClient, error::ApiError, segment};

impl ApiClient {
    /// `GET /api/exams`: the full collection, active and inactive.
    pub async fn list_exams(&self) -> Result<Vec<Exam>, ApiError> {
        self.send_json(self.request(Method::GET, "/api/exams")).await
    }

    /// Like [`Self::list_exams`], but a failure is logged and yields an empty
    /// list. Dashboards use this: no retry, no error screen.
    pub async fn list_exams_or_empty(&self) -> Vec<Exam> {
        self.list_exams().await.unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to fetch exams");
            Vec::new()
        })
    }

    pub async fn get_exam(&self, id: &str) -> Result<Exam, ApiError> {
        let path = format!("/api/exams/{}", segment(id));
        self.send_json(self.request(Method::GET, &path)).await
    }

    /// `POST /api/exams/create`. The response body is not used; callers
    /// re-fetch the list.
    pub async fn create_exam(&self, payload: &ExamPayload) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, "/api/exams/create")
            .json(payload);
        self.send(builder).await?;
        Ok(())
    }

    pub async fn update_exam(&self, id: &str, payload: &ExamPayload) -> Result<(), ApiError> {
        let path = format!("/api/exams/{}", segment(id));
        self.send(self.request(Method::PUT, &path).json(payload))
            .await?;
        Ok(())
    }

    pub async fn delete_exam(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/exams/{}", segment(id));
        self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }

    /// `PATCH /api/exams/{id}/status`: flips active/inactive and returns the
    /// new status.
    pub async fn toggle_exam_status(&self, id: &str) -> Result<ExamStatus, ApiError> {
        let path = format!("/api/exams/{}/status", segment(id));
        let response: StatusToggleResponse =
            self.send_json(self.request(Method::PATCH, &path)).await?;
        Ok(response.exam.status)
    }
}
