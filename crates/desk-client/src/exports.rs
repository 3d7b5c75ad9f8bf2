//! Filtered CSV export.

use desk_core::CoreError;
use desk_core::entities::ExportFilters;
use desk_core::enums::UserRole;
use reqwest::Method;
use reqwest::header::CONTENT_DISPOSITION;

use crate::{ApiClient, error::ApiError};

const DEFAULT_FILENAME: &str = "export.csv";

/// Which records to export. At least one filter must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportQuery {
    pub user_type: Option<UserRole>,
    pub school_name: Option<String>,
}

impl ExportQuery {
    fn query_string(&self) -> Result<String, CoreError> {
        let mut params = Vec::new();
        if let Some(role) = self.user_type {
            params.push(format!("usertype={}", role.as_str()));
        }
        if let Some(school) = self.school_name.as_deref().filter(|s| !s.trim().is_empty()) {
            params.push(format!("schoolname={}", urlencoding::encode(school.trim())));
        }
        if params.is_empty() {
            return Err(CoreError::Validation(
                "Choose a user type or a school to export".to_string(),
            ));
        }
        Ok(params.join("&"))
    }
}

/// A downloaded export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ApiClient {
    /// `GET /api/generate-csv`.
    pub async fn export_csv(&self, query: &ExportQuery) -> Result<ExportFile, ApiError> {
        let path = format!("/api/generate-csv?{}", query.query_string()?);
        let resp = self.send(self.request(Method::GET, &path)).await?;
        let filename = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_disposition)
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        let bytes = resp.bytes().await?.to_vec();
        Ok(ExportFile { filename, bytes })
    }

    /// `GET /api/student-filters`: the schools offered as export filters.
    pub async fn export_filters(&self) -> Result<ExportFilters, ApiError> {
        self.send_json(self.request(Method::GET, "/api/student-filters"))
            .await
    }
}

/// Extract the file name from a `Content-Disposition` header value.
///
/// An RFC 5987 `filename*=` value wins over a plain `filename=`. A quoted
/// name runs to its closing quote, so it may contain `;`. Any directory part
/// is dropped so the name is always safe to write into the current directory.
#[must_use]
pub fn parse_content_disposition(header: &str) -> Option<String> {
    let name = extended_filename(header).or_else(|| plain_filename(header))?;
    let name = name.rsplit(['/', '\\']).next().unwrap_or(&name).trim();
    (!name.is_empty() && name != "." && name != "..").then(|| name.to_string())
}

/// Text following `param` (matched case-insensitively).
fn param_value<'a>(header: &'a str, param: &str) -> Option<&'a str> {
    let start = header.to_ascii_lowercase().find(param)? + param.len();
    Some(header[start..].trim_start())
}

/// `filename*=charset'lang'percent-encoded`. Only UTF-8 decodes; anything
/// else falls back to the plain parameter.
fn extended_filename(header: &str) -> Option<String> {
    let rest = param_value(header, "filename*=")?;
    let raw = rest.split(';').next().unwrap_or(rest).trim().trim_matches('"');
    let encoded = raw.splitn(3, '\'').nth(2).unwrap_or(raw);
    urlencoding::decode(encoded).ok().map(std::borrow::Cow::into_owned)
}

fn plain_filename(header: &str) -> Option<String> {
    let rest = param_value(header, "filename=")?;
    let raw = match rest.strip_prefix('"') {
        Some(quoted) => quoted.find('"').map_or(quoted, |end| &quoted[..end]),
        None => rest.split(';').next().unwrap_or(rest),
    };
    Some(raw.trim().to_string())
}
