use crate::types::DbId;

/// Domain error taxonomy for the student service.
///
/// `EmailTaken` and `StudentNotFound` are deterministic outcomes of the
/// service's precondition checks; their `Display` strings are part of the
/// API contract and surfaced to clients verbatim. `Repository` wraps any
/// store-level failure opaquely, without interpretation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Another persisted student already has this email.
    #[error("Email {email} taken")]
    EmailTaken { email: String },

    /// No persisted student has this id.
    ///
    /// The message grammar ("does not exists") is kept verbatim from the
    /// consumed API contract.
    #[error("Student with id {id} does not exists")]
    StudentNotFound { id: DbId },

    /// The request body failed field validation before reaching the service.
    #[error("Validation failed for object='student'. Error count: {count}")]
    Validation { count: usize },

    /// An opaque failure from the repository capability.
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}
