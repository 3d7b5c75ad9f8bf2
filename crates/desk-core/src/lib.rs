//! # desk-core
//!
//! Core types and pure client logic for ExamDesk.
//!
//! This crate provides the foundational types shared across all ExamDesk crates:
//! - Entity structs for backend records (exams, tasks, users, bulk reports)
//! - Role, status, and priority enums with wire-format names
//! - Cross-cutting error types
//! - Exam and task filtering used by every dashboard
//! - Form controllers: the registration wizard, keyed exam drafts, task drafts
//! - Request/response bodies exchanged with the backend API

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod forms;
pub mod responses;

pub use errors::CoreError;
