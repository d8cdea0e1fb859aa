//! Member repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::member::{self, ActiveModel, Entity as MemberEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{Member, MemberInput, MEMBER_NOT_FOUND};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Member repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>>;

    /// List all members
    async fn list(&self) -> AppResult<Vec<Member>>;

    /// Insert a new member with a generated id
    async fn create(&self, input: MemberInput) -> AppResult<Member>;

    /// Persist every field of an existing member
    async fn update(&self, member: Member) -> AppResult<Member>;

    /// Delete member by ID, dropping its club associations
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM implementation of MemberRepository
pub struct MemberStore {
    db: DatabaseConnection,
}

impl MemberStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberRepository for MemberStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>> {
        let result = MemberEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Member::from))
    }

    async fn list(&self) -> AppResult<Vec<Member>> {
        let models = MemberEntity::find()
            .order_by_asc(member::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Member::from).collect())
    }

    async fn create(&self, input: MemberInput) -> AppResult<Member> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email),
            birth_date: Set(input.birth_date),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Member::from(model))
    }

    async fn update(&self, member: Member) -> AppResult<Member> {
        let existing = MemberEntity::find_by_id(member.id)
            .one(&self.db)
            .await?
            .ok_or_not_found(MEMBER_NOT_FOUND)?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(member.name);
        active.email = Set(member.email);
        active.birth_date = Set(member.birth_date);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Member::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        // club_members rows go with it (ON DELETE CASCADE)
        let result = MemberEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MEMBER_NOT_FOUND));
        }

        Ok(())
    }
}
