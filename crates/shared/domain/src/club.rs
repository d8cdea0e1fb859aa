//! Club domain entity and its member relation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::member::{Member, MemberResponse};

/// Club domain entity.
///
/// The club owns the membership relation: every write to the relation goes
/// through its `members` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub founding_date: NaiveDate,
    pub description: String,
    pub image: String,
    pub members: Vec<Member>,
}

impl Club {
    /// Overwrite every scalar field; the member list is left untouched
    pub fn apply(&mut self, input: ClubInput) {
        self.name = input.name;
        self.founding_date = input.founding_date;
        self.description = input.description;
        self.image = input.image;
    }

    /// Check whether a member is currently associated with this club
    pub fn has_member(&self, member_id: Uuid) -> bool {
        self.members.iter().any(|m| m.id == member_id)
    }

    /// Find an associated member by id
    pub fn member(&self, member_id: Uuid) -> Option<&Member> {
        self.members.iter().find(|m| m.id == member_id)
    }

    /// Associate a member. The relation is a set, so re-adding is a no-op.
    pub fn add_member(&mut self, member: Member) {
        if !self.has_member(member.id) {
            self.members.push(member);
        }
    }

    /// Drop a member from the relation
    pub fn remove_member(&mut self, member_id: Uuid) {
        self.members.retain(|m| m.id != member_id);
    }

    /// Replace the whole relation, collapsing repeated ids
    pub fn replace_members(&mut self, members: Vec<Member>) {
        self.members.clear();
        for member in members {
            self.add_member(member);
        }
    }

    /// Ids of the associated members, in list order
    pub fn member_ids(&self) -> Vec<Uuid> {
        self.members.iter().map(|m| m.id).collect()
    }
}

/// Validated club fields used for create and full-field update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubInput {
    pub name: String,
    pub founding_date: NaiveDate,
    pub description: String,
    pub image: String,
}

/// Club response returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClubResponse {
    /// Unique club identifier
    pub id: Uuid,
    /// Club name
    pub name: String,
    /// Founding date (yyyy-mm-dd)
    pub founding_date: NaiveDate,
    /// Short description (at most 100 characters)
    pub description: String,
    /// Image URL
    pub image: String,
    /// Associated members
    pub members: Vec<MemberResponse>,
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        Self {
            id: club.id,
            name: club.name,
            founding_date: club.founding_date,
            description: club.description,
            image: club.image,
            members: club.members.into_iter().map(MemberResponse::from).collect(),
        }
    }
}
