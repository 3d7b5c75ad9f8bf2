use desk_core::entities::{BulkRegistrationReport, Exam, Task, User};
use desk_core::forms::{ExamPayload, MockTestPayload, SignupRequest};
use desk_core::responses::{LoginResponse, UserUpdate};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPE_NAMES: &[&str] = &[
    "exam",
    "task",
    "user",
    "bulk-report",
    "login-response",
    "signup-request",
    "exam-payload",
    "mock-test-payload",
    "user-update",
];

/// Handle `examdesk schema <type>`. Needs neither config nor a session.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_of(&args.type_name)?, flags.format)
}

fn schema_of(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name.trim().to_ascii_lowercase().as_str() {
        "exam" => schema_for!(Exam),
        "task" => schema_for!(Task),
        "user" => schema_for!(User),
        "bulk-report" => schema_for!(BulkRegistrationReport),
        "login-response" => schema_for!(LoginResponse),
        "signup-request" => schema_for!(SignupRequest),
        "exam-payload" => schema_for!(ExamPayload),
        "mock-test-payload" => schema_for!(MockTestPayload),
        "user-update" => schema_for!(UserUpdate),
        other => anyhow::bail!(
            "unknown type '{other}'; expected one of: {}",
            TYPE_NAMES.join(", ")
        ),
    };
    Ok(serde_json::to_value(schema)?)
}
