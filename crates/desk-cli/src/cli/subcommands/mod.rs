pub mod auth;
pub mod exam;
pub mod export;
pub mod register;
pub mod task;
pub mod user;

pub use auth::AuthCommands;
pub use exam::ExamCommands;
pub use export::ExportCommands;
pub use mock_test::MockTestCommands;
pub use register::RegisterCommands;
pub use task::TaskCommands;
pub use user::UserCommands;
