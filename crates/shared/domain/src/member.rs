//! Member domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Member domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

impl Member {
    /// Overwrite every mutable field with the supplied values
    pub fn apply(&mut self, input: MemberInput) {
        self.name = input.name;
        self.email = input.email;
        self.birth_date = input.birth_date;
    }
}

/// Validated member fields used for create and full-field update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInput {
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

/// Reference to an existing member by id.
///
/// Unknown fields are ignored, so full member objects are accepted too.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MemberReference {
    /// Member identifier
    pub id: String,
}

/// Member response returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MemberResponse {
    /// Unique member identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Birth date (yyyy-mm-dd)
    pub birth_date: NaiveDate,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            birth_date: member.birth_date,
        }
    }
}
