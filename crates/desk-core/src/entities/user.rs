use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AccountStatus, UserRole};

/// A platform account as listed by the admin user management endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: UserRole,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(default, alias = "phoneNo", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}
