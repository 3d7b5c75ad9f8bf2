use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// Option lists for the filtered CSV export.
///
/// The backend only returns `schools`; the user types are fixed client-side.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportFilters {
    #[serde(default)]
    pub schools: Vec<String>,
    #[serde(default = "default_user_types")]
    pub user_types: Vec<UserRole>,
}

fn default_user_types() -> Vec<UserRole> {
    vec![
        UserRole::Student,
        UserRole::Sales,
        UserRole::School,
        UserRole::Admin,
    ]
}

impl Default for ExportFilters {
    fn default() -> Self {
        Self {
            schools: Vec::new(),
            user_types: default_user_types(),
        }
    }
}
