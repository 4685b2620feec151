//! Route definitions for the `/students` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// GET    /        -> get_all
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(student::get_all).post(student::create))
        .route("/{id}", delete(student::delete))
}
