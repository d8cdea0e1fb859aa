//! Club repository implementation.
//!
//! The club side owns the membership relation, so this repository is the
//! only place that writes `club_members` rows.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::club::{self, ActiveModel, Entity as ClubEntity};
use super::entities::club_member::{self, Entity as ClubMemberEntity};
use super::entities::member::{self, Entity as MemberEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{Club, ClubInput, CLUB_NOT_FOUND};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Club repository trait for dependency injection.
///
/// Every club returned carries its member list.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Find club by ID with its members loaded
    async fn find_by_id_with_members(&self, id: Uuid) -> AppResult<Option<Club>>;

    /// List all clubs with their members loaded
    async fn list_with_members(&self) -> AppResult<Vec<Club>>;

    /// Insert a new club with a generated id and no members
    async fn create(&self, input: ClubInput) -> AppResult<Club>;

    /// Persist the scalar fields of an existing club. The relation is untouched.
    async fn update(&self, club: Club) -> AppResult<Club>;

    /// Replace the stored relation with `club.members` and return the reloaded club
    async fn save_members(&self, club: Club) -> AppResult<Club>;

    /// Delete club by ID, dropping its member associations
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM implementation of ClubRepository
pub struct ClubStore {
    db: DatabaseConnection,
}

impl ClubStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_members(&self, model: &club::Model) -> AppResult<Vec<member::Model>> {
        model
            .find_related(MemberEntity)
            .order_by_asc(member::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl ClubRepository for ClubStore {
    async fn find_by_id_with_members(&self, id: Uuid) -> AppResult<Option<Club>> {
        let Some(model) = ClubEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
        else {
            return Ok(None);
        };

        let members = self.load_members(&model).await?;
        Ok(Some(model.into_domain(members)))
    }

    async fn list_with_members(&self) -> AppResult<Vec<Club>> {
        // Ordering by id keeps each club's joined rows together
        let rows = ClubEntity::find()
            .order_by_asc(club::Column::Id)
            .find_with_related(MemberEntity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .map(|(model, members)| model.into_domain(members))
            .collect())
    }

    async fn create(&self, input: ClubInput) -> AppResult<Club> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            founding_date: Set(input.founding_date),
            description: Set(input.description),
            image: Set(input.image),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(model.into_domain(Vec::new()))
    }

    async fn update(&self, club: Club) -> AppResult<Club> {
        let existing = ClubEntity::find_by_id(club.id)
            .one(&self.db)
            .await?
            .ok_or_not_found(CLUB_NOT_FOUND)?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(club.name);
        active.founding_date = Set(club.founding_date);
        active.description = Set(club.description);
        active.image = Set(club.image);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        let members = self.load_members(&model).await?;
        Ok(model.into_domain(members))
    }

    async fn save_members(&self, club: Club) -> AppResult<Club> {
        let rows: Vec<club_member::ActiveModel> = club
            .member_ids()
            .into_iter()
            .map(|member_id| club_member::ActiveModel {
                club_id: Set(club.id),
                member_id: Set(member_id),
            })
            .collect();

        // Dropping the transaction on an early return rolls it back
        let txn = self.db.begin().await.map_err(AppError::from)?;

        ClubMemberEntity::delete_many()
            .filter(club_member::Column::ClubId.eq(club.id))
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        if !rows.is_empty() {
            ClubMemberEntity::insert_many(rows)
                .exec_without_returning(&txn)
                .await
                .map_err(AppError::from)?;
        }

        txn.commit().await.map_err(AppError::from)?;

        tracing::debug!(club_id = %club.id, "Club members saved");

        self.find_by_id_with_members(club.id)
            .await?
            .ok_or_not_found(CLUB_NOT_FOUND)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        // club_members rows go with it (ON DELETE CASCADE)
        let result = ClubEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(CLUB_NOT_FOUND));
        }

        Ok(())
    }
}
