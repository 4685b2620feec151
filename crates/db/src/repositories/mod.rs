//! Repository layer: sqlx-backed implementations of the persistence
//! capabilities consumed by `roster-core`.

pub mod student_repo;

pub use student_repo::PgStudentRepo;
