//! Domain types and business rules for the student roster.
//!
//! This crate is storage- and transport-agnostic: persistence is consumed
//! through the [`repository::StudentRepository`] trait and errors are plain
//! values in [`error::CoreError`], so the service logic can be exercised
//! without a database or an HTTP stack.

pub mod error;
pub mod repository;
pub mod service;
pub mod student;
pub mod types;
