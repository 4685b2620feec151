//! Abstract persistence capability the service depends on.

use async_trait::async_trait;

use crate::student::{NewStudent, Student};
use crate::types::DbId;

/// Persistence operations required by
/// [`StudentService`](crate::service::StudentService).
///
/// Implementations report failures as opaque [`anyhow::Error`]s; the service
/// propagates them unchanged rather than interpreting store-level details.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Every persisted student, in whatever order the store supplies.
    async fn find_all(&self) -> anyhow::Result<Vec<Student>>;

    /// True iff a persisted student has exactly this email (case-sensitive).
    async fn exists_by_email(&self, email: &str) -> anyhow::Result<bool>;

    /// True iff a persisted student has this id.
    async fn exists_by_id(&self, id: DbId) -> anyhow::Result<bool>;

    /// Persist the record, returning the stored row with its assigned id.
    async fn save(&self, student: &NewStudent) -> anyhow::Result<Student>;

    /// Remove the row. The service only calls this after confirming the id
    /// exists.
    async fn delete_by_id(&self, id: DbId) -> anyhow::Result<()>;
}
