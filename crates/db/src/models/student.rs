//! Row mapping for the `student` table.

use roster_core::student::{Gender, Student};
use roster_core::types::DbId;
use sqlx::FromRow;

/// A raw row from the `student` table. `gender` is stored as uppercase text
/// constrained by a CHECK, so the conversion below only fails if the table
/// was written by something other than this crate.
#[derive(Debug, FromRow)]
pub struct StudentRow {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub gender: String,
}

impl TryFrom<StudentRow> for Student {
    type Error = anyhow::Error;

    fn try_from(row: StudentRow) -> Result<Self, Self::Error> {
        let gender = Gender::parse(&row.gender).ok_or_else(|| {
            anyhow::anyhow!("unknown gender value {:?} in student row {}", row.gender, row.id)
        })?;
        Ok(Student {
            id: row.id,
            name: row.name,
            email: row.email,
            gender,
        })
    }
}
