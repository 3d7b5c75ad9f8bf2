pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod exam;
pub mod export;
pub mod mock_test;
pub mod register;
pub mod schema;
pub mod shared;
pub mod task;
pub mod user;
