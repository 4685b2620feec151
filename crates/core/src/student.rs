//! The Student entity and its creation payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::DbId;

/// Closed set of gender values, serialized and stored as uppercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// The uppercase storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    /// Parse the uppercase storage representation. Returns `None` for any
    /// value outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            "OTHER" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted student. `id` is assigned by the store and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub gender: Gender,
}

/// A student that has not been persisted yet.
///
/// Any `id` in an incoming JSON body is ignored; the store assigns one on
/// save. Field constraints are checked at the API boundary, before the
/// service is invoked.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewStudent {
    #[validate(custom(function = not_blank))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub gender: Gender,
}

/// Reject names that are empty or whitespace-only.
fn not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("name must not be blank".into());
        return Err(err);
    }
    Ok(())
}
