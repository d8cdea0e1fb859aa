//! Member database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Member;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub birth_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// Members reach their clubs through the `club_members` join table
impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        super::club_member::Relation::Club.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::club_member::Relation::Member.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Member {
    fn from(model: Model) -> Self {
        Member {
            id: model.id,
            name: model.name,
            email: model.email,
            birth_date: model.birth_date,
        }
    }
}
