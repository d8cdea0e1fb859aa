//! Club database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Club, Member};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clubs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub founding_date: Date,
    pub description: String,
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// Clubs own the `club_members` join table
impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        super::club_member::Relation::Member.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::club_member::Relation::Club.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain entity together with the loaded member rows
    pub fn into_domain(self, members: Vec<super::member::Model>) -> Club {
        Club {
            id: self.id,
            name: self.name,
            founding_date: self.founding_date,
            description: self.description,
            image: self.image,
            members: members.into_iter().map(Member::from).collect(),
        }
    }
}
