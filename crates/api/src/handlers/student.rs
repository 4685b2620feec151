//! Handlers for the `/students` resource.

use axum::extract::{Path, State};
use axum::Json;
use roster_core::error::CoreError;
use roster_core::student::{NewStudent, Student};
use roster_core::types::DbId;
use validator::Validate;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/students
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = state.service.get_all_students().await?;
    Ok(Json(students))
}

/// POST /api/v1/students
///
/// Field validation runs before the service is invoked; a failure reports
/// the number of violated constraints and never reaches the service.
/// Returns 200 with the persisted student, per the consumed contract.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewStudent>,
) -> AppResult<Json<Student>> {
    if let Err(errors) = input.validate() {
        return Err(CoreError::Validation {
            count: error_count(&errors),
        }
        .into());
    }
    let student = state.service.add_student(input).await?;
    Ok(Json(student))
}

/// DELETE /api/v1/students/{id}
///
/// Returns 200 with an empty body on success.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<()> {
    state.service.delete_student(id).await?;
    Ok(())
}

/// Total number of violated field constraints.
fn error_count(errors: &validator::ValidationErrors) -> usize {
    errors.field_errors().values().map(|e| e.len()).sum()
}
