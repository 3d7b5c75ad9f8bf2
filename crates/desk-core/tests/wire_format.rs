//! Backend payload fixtures: each must deserialize, and what we send back must
//! validate against the generated JSON Schema.

use desk_core::entities::*;
use desk_core::enums::*;
use desk_core::forms::{ExamDraft, TaskDraft};
use desk_core::responses::*;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! fixture_matches_schema {
    ($name:ident, $ty:ty, $fixture:expr) => {
        #[test]
        fn $name() {
            let parsed: $ty = serde_json::from_value($fixture).unwrap();
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&parsed).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn exam_fixture() -> serde_json::Value {
    json!({
        "_id": "65f1c0a2e4b0a1b2c3d4e5f6",
        "title": "National Math Olympiad",
        "subject": "Math",
        "date": "2025-05-02T00:00:00.000Z",
        "duration": "2 hours",
        "difficulty": "Medium",
        "image": "https://cdn.example.com/math.png",
        "status": "active",
        "featured": true,
        "description": "Annual olympiad",
        "syllabus": [{"title": "Algebra", "topics": ["Linear equations", "Quadratics"]}],
        "resources": [{"title": "Books", "items": ["RD Sharma"]}],
        "faqs": [{"question": "Is there negative marking?", "answer": "No"}],
        "registrationDeadline": "2025-04-20",
        "fee": "250",
        "__v": 0
    })
}

fn task_fixture() -> serde_json::Value {
    json!({
        "_id": "t-100",
        "title": "Visit Green Valley High",
        "description": "Pitch the olympiad",
        "assignedBy": "Admin",
        "assignedTo": "u-sales-1",
        "assignedDate": "2025-03-01",
        "dueDate": "2025-03-10",
        "priority": "high",
        "status": "in-progress",
        "attachments": [{"name": "brochure.pdf", "url": "/uploads/brochure.pdf", "type": "application/pdf"}],
        "comments": [{
            "_id": "c-1",
            "text": "Meeting booked",
            "authorId": "u-sales-1",
            "authorName": "Ravi",
            "authorType": "sales",
            "createdAt": "2025-03-02T10:00:00.000Z"
        }],
        "schoolName": "Green Valley High"
    })
}

fixture_matches_schema!(exam_fixture_matches_schema, Exam, exam_fixture());
fixture_matches_schema!(task_fixture_matches_schema, Task, task_fixture());
fixture_matches_schema!(
    user_fixture_matches_schema,
    User,
    json!({
        "_id": "u-1",
        "name": "Asha",
        "email": "asha@example.com",
        "userType": "school",
        "status": "inactive",
        "schoolName": "Green Valley High",
        "phoneNo": "555-0100"
    })
);
fixture_matches_schema!(
    bulk_report_matches_schema,
    BulkRegistrationReport,
    json!({
        "total": 2,
        "successCount": 1,
        "duplicateCount": 1,
        "errorCount": 0,
        "processedStudents": [
            {"row": 2, "status": "success", "data": {"name": "A", "email": "a@x.io"}},
            {"row": 3, "status": "skipped", "reason": "Duplicate", "existingId": "u-2"}
        ]
    })
);
fixture_matches_schema!(
    login_response_matches_schema,
    LoginResponse,
    json!({"token": "jwt", "userType": "student", "name": "Kiran", "userId": "u-9", "olympiadExamName": "National Math Olympiad"})
);
fixture_matches_schema!(
    status_toggle_matches_schema,
    StatusToggleResponse,
    json!({"message": "Status updated", "exam": {"status": "inactive", "title": "ignored"}})
);

#[test]
fn exam_fixture_parses_extras_and_ignores_unknown_fields() {
    let exam: Exam = serde_json::from_value(exam_fixture()).unwrap();
    assert_eq!(exam.id, "65f1c0a2e4b0a1b2c3d4e5f6");
    assert_eq!(exam.difficulty, Difficulty::Medium);
    assert_eq!(exam.registration_deadline.as_deref(), Some("2025-04-20"));
    assert_eq!(exam.location, None);
}

#[test]
fn user_phone_number_accepts_legacy_key() {
    let user: User = serde_json::from_value(json!({
        "_id": "u-1", "name": "A", "email": "a@x.io", "userType": "admin", "phoneNo": "1"
    }))
    .unwrap();
    assert_eq!(user.phone_number.as_deref(), Some("1"));
    assert_eq!(user.status, AccountStatus::Active);
}

#[test]
fn edited_exam_payload_keeps_backend_content() {
    let exam: Exam = serde_json::from_value(exam_fixture()).unwrap();
    let payload = ExamDraft::from_exam(&exam).to_payload().unwrap();
    assert_eq!(payload.syllabus, exam.syllabus);
    assert_eq!(payload.faqs, exam.faqs);
    assert_eq!(payload.date, "2025-05-02");
    assert!(payload.featured);
}

#[test]
fn task_edit_draft_keeps_assignment() {
    let task: Task = serde_json::from_value(task_fixture()).unwrap();
    let draft = TaskDraft::from_task(&task);
    let fields = draft.text_fields().unwrap();
    assert!(fields.contains(&("status", "in-progress".to_string())));
    assert!(fields.contains(&("schoolName", "Green Valley High".to_string())));
    assert!(draft.attachments.is_empty());
}
