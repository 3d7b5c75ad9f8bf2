//! `examdesk dashboard`: the landing view for the logged-in role.
//!
//! Each role gets its own summary, built from one exam fetch (and one task
//! fetch for sales and admin). Builders are pure so they can be tested
//! without a backend.

use chrono::{Datelike, NaiveDate, Utc};
use desk_auth::StoredSession;
use desk_core::entities::{Exam, Task};
use desk_core::enums::{TaskStatus, UserRole};
use desk_core::filter::{self, ExamQuery};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "dashboard", rename_all = "kebab-case")]
enum DashboardResponse {
    StudentDashboard {
        name: Option<String>,
        registered_exam: Option<String>,
        my_exams: Vec<Exam>,
        this_month: Vec<Exam>,
        featured: Vec<Exam>,
    },
    SchoolDashboard {
        name: Option<String>,
        subjects: Vec<String>,
        featured: Vec<Exam>,
        exams: Vec<Exam>,
    },
    SalesDashboard {
        name: Option<String>,
        tasks: Vec<Task>,
        counts: TaskCounts,
    },
    AdminDashboard {
        active_exams: usize,
        inactive_exams: usize,
        tasks: TaskCounts,
    },
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
struct TaskCounts {
    total: usize,
    pending: usize,
    in_progress: usize,
    completed: usize,
}

impl TaskCounts {
    fn of(tasks: &[Task]) -> Self {
        tasks.iter().fold(
            Self {
                total: tasks.len(),
                ..Self::default()
            },
            |mut counts, task| {
                match task.status {
                    TaskStatus::Pending => counts.pending += 1,
                    TaskStatus::InProgress => counts.in_progress += 1,
                    TaskStatus::Completed => counts.completed += 1,
                }
                counts
            },
        )
    }
}

pub async fn handle(args: &DashboardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    let query = ExamQuery::for_role(session.role)
        .search(args.search.as_deref().unwrap_or_default())
        .subject(args.subject.clone())
        .difficulty(parse_optional(args.difficulty.as_deref())?);
    let exams = query.apply(&ctx.client.list_exams_or_empty().await);

    let tasks = match session.role {
        UserRole::Sales => {
            let Some(user_id) = session.user_id.as_deref() else {
                anyhow::bail!("session has no user id; run `examdesk auth login` again");
            };
            ctx.client.list_tasks(Some(user_id)).await?
        }
        UserRole::Admin => ctx.client.list_tasks(None).await?,
        UserRole::Student | UserRole::School => Vec::new(),
    };
    tracing::debug!(role = %session.role, exams = exams.len(), tasks = tasks.len(), "dashboard data loaded");

    let response = build(session, exams, tasks, Utc::now().date_naive());
    output(&response, flags.format)
}

fn build(session: &StoredSession, exams: Vec<Exam>, tasks: Vec<Task>, today: NaiveDate) -> DashboardResponse {
    let name = session.user_name.clone();
    match session.role {
        UserRole::Student => DashboardResponse::StudentDashboard {
            my_exams: session
                .registered_exam
                .as_deref()
                .map(|title| filter::registered_for(&exams, title))
                .unwrap_or_default(),
            this_month: filter::upcoming_in_month(&exams, today.year(), today.month()),
            featured: filter::featured(&exams),
            registered_exam: session.registered_exam.clone(),
            name,
        },
        UserRole::School => DashboardResponse::SchoolDashboard {
            name,
            subjects: filter::subjects(&exams),
            featured: filter::featured(&exams),
            exams,
        },
        UserRole::Sales => DashboardResponse::SalesDashboard {
            name,
            counts: TaskCounts::of(&tasks),
            tasks,
        },
        UserRole::Admin => {
            let (active, inactive) = filter::partition_by_status(&exams);
            DashboardResponse::AdminDashboard {
                active_exams: active.len(),
                inactive_exams: inactive.len(),
                tasks: TaskCounts::of(&tasks),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use desk_auth::StoredSession;
    use desk_core::entities::{Exam, Task};
    use desk_core::enums::UserRole;
    use pretty_assertions::assert_eq;

    use super::{DashboardResponse, TaskCounts, build};

    fn exam(id: &str, title: &str, date: &str, featured: bool, status: &str) -> Exam {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "title": title,
            "subject": "Science",
            "date": date,
            "featured": featured,
            "status": status,
        }))
        .expect("fixture should deserialize")
    }

    fn task(id: &str, status: &str) -> Task {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "title": "Visit school",
            "assignedTo": "s1",
            "status": status,
        }))
        .expect("fixture should deserialize")
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).expect("valid date")
    }

    fn ids(exams: &[Exam]) -> Vec<&str> {
        exams.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn student_sees_registered_and_this_month() {
        let mut session = StoredSession::new("tok", UserRole::Student);
        session.registered_exam = Some(" Science Fair ".into());
        let exams = vec![
            exam("e1", "Science Fair", "2025-07-01", false, "active"),
            exam("e2", "Physics Bowl", "2025-06-21", true, "active"),
        ];

        let DashboardResponse::StudentDashboard {
            my_exams,
            this_month,
            featured,
            ..
        } = build(&session, exams, Vec::new(), today())
        else {
            panic!("expected the student dashboard");
        };
        assert_eq!(ids(&my_exams), vec!["e1"]);
        assert_eq!(ids(&this_month), vec!["e2"]);
        assert_eq!(ids(&featured), vec!["e2"]);
    }

    #[test]
    fn student_without_registration_has_no_exams_of_their_own() {
        let session = StoredSession::new("tok", UserRole::Student);
        let exams = vec![exam("e1", "Science Fair", "2025-07-01", false, "active")];
        let DashboardResponse::StudentDashboard { my_exams, .. } =
            build(&session, exams, Vec::new(), today())
        else {
            panic!("expected the student dashboard");
        };
        assert!(my_exams.is_empty());
    }

    #[test]
    fn sales_counts_tasks_by_status() {
        let session = StoredSession::new("tok", UserRole::Sales);
        let tasks = vec![
            task("t1", "pending"),
            task("t2", "in-progress"),
            task("t3", "pending"),
        ];
        let DashboardResponse::SalesDashboard { counts, .. } =
            build(&session, Vec::new(), tasks, today())
        else {
            panic!("expected the sales dashboard");
        };
        assert_eq!(
            counts,
            TaskCounts {
                total: 3,
                pending: 2,
                in_progress: 1,
                completed: 0,
            }
        );
    }

    #[test]
    fn admin_splits_exams_by_status() {
        let session = StoredSession::new("tok", UserRole::Admin);
        let exams = vec![
            exam("e1", "A", "2025-06-01", false, "active"),
            exam("e2", "B", "2025-06-02", false, "inactive"),
            exam("e3", "C", "2025-06-03", false, "inactive"),
        ];
        let response = build(&session, exams, vec![task("t1", "completed")], today());
        assert_eq!(
            response,
            DashboardResponse::AdminDashboard {
                active_exams: 1,
                inactive_exams: 2,
                tasks: TaskCounts {
                    total: 1,
                    completed: 1,
                    ..TaskCounts::default()
                },
            }
        );
    }

    #[test]
    fn dashboard_tag_is_the_landing_page() {
        let session = StoredSession::new("tok", UserRole::School);
        let json = serde_json::to_value(build(&session, Vec::new(), Vec::new(), today()))
            .expect("serializes");
        assert_eq!(json["dashboard"], UserRole::School.dashboard());
    }
}
