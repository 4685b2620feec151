//! Repository for the `student` table.

use async_trait::async_trait;
use roster_core::repository::StudentRepository;
use roster_core::student::{NewStudent, Student};
use roster_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::StudentRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, gender";

/// sqlx-backed implementation of the repository capability.
///
/// Cheap to clone; the pool is internally reference-counted.
#[derive(Debug, Clone)]
pub struct PgStudentRepo {
    pool: PgPool,
}

impl PgStudentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Student>> {
        let query = format!("SELECT {COLUMNS} FROM student ORDER BY id ASC");
        let rows = sqlx::query_as::<_, StudentRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Student::try_from).collect()
    }

    async fn exists_by_email(&self, email: &str) -> anyhow::Result<bool> {
        // Exact match; email comparison is case-sensitive in this design.
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM student WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn exists_by_id(&self, id: DbId) -> anyhow::Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM student WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn save(&self, student: &NewStudent) -> anyhow::Result<Student> {
        let query = format!(
            "INSERT INTO student (name, email, gender)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, StudentRow>(&query)
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.gender.as_str())
            .fetch_one(&self.pool)
            .await?;
        Student::try_from(row)
    }

    async fn delete_by_id(&self, id: DbId) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM student WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
