//! Club service - Handles club CRUD use cases.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{ensure_description, parse_id, Club, ClubInput, CLUB_NOT_FOUND};

use crate::repository::ClubRepository;

/// Club service trait for dependency injection.
///
/// Clubs are always returned with their member list loaded.
#[async_trait]
pub trait ClubService: Send + Sync {
    /// List all clubs
    async fn list_clubs(&self) -> AppResult<Vec<Club>>;

    /// Get club by ID
    async fn get_club(&self, id: &str) -> AppResult<Club>;

    /// Create a new club with no members
    async fn create_club(&self, input: ClubInput) -> AppResult<Club>;

    /// Replace every scalar field of an existing club
    async fn update_club(&self, id: &str, input: ClubInput) -> AppResult<Club>;

    /// Delete club and its member associations
    async fn delete_club(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of ClubService using repository.
pub struct ClubManager {
    repo: Arc<dyn ClubRepository>,
}

impl ClubManager {
    /// Create new club service instance with repository
    pub fn new(repo: Arc<dyn ClubRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ClubService for ClubManager {
    async fn list_clubs(&self) -> AppResult<Vec<Club>> {
        self.repo.list_with_members().await
    }

    async fn get_club(&self, id: &str) -> AppResult<Club> {
        let id = parse_id(id, CLUB_NOT_FOUND)?;
        tracing::debug!(club_id = %id, "Fetching club");

        self.repo
            .find_by_id_with_members(id)
            .await?
            .ok_or_not_found(CLUB_NOT_FOUND)
    }

    async fn create_club(&self, input: ClubInput) -> AppResult<Club> {
        ensure_description(&input.description)?;

        let club = self.repo.create(input).await?;
        tracing::info!(club_id = %club.id, "Club created");
        Ok(club)
    }

    async fn update_club(&self, id: &str, input: ClubInput) -> AppResult<Club> {
        let mut club = self.get_club(id).await?;
        ensure_description(&input.description)?;

        club.apply(input);
        let club = self.repo.update(club).await?;
        tracing::info!(club_id = %club.id, "Club updated");
        Ok(club)
    }

    async fn delete_club(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id, CLUB_NOT_FOUND)?;

        self.repo.delete(id).await?;
        tracing::info!(club_id = %id, "Club deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::AppError;
    use domain::DESCRIPTION_TOO_LONG;
    use mockall::predicate::eq;
    use uuid::Uuid;

    use crate::repository::MockClubRepository;

    fn input(description: String) -> ClubInput {
        ClubInput {
            name: "Harbour Sailing".to_string(),
            founding_date: NaiveDate::from_ymd_opt(1932, 4, 9).unwrap(),
            description,
            image: "https://example.com/sailing.png".to_string(),
        }
    }

    fn from_input(id: Uuid, input: ClubInput) -> Club {
        Club {
            id,
            name: input.name,
            founding_date: input.founding_date,
            description: input.description,
            image: input.image,
            members: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_club_description_limit() {
        let mut repo = MockClubRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(from_input(Uuid::new_v4(), input)));

        let service = ClubManager::new(Arc::new(repo));

        let club = service.create_club(input("a".repeat(100))).await.unwrap();
        assert_eq!(club.description.len(), 100);

        let err = service.create_club(input("a".repeat(101))).await.unwrap_err();
        assert!(matches!(err, AppError::PreconditionFailed(ref msg) if msg == DESCRIPTION_TOO_LONG));
    }

    #[tokio::test]
    async fn test_update_club_checks_existence_first() {
        let id = Uuid::new_v4();
        let mut repo = MockClubRepository::new();
        repo.expect_find_by_id_with_members()
            .with(eq(id))
            .returning(|_| Ok(None));
        repo.expect_update().never();

        let service = ClubManager::new(Arc::new(repo));
        let err = service
            .update_club(&id.to_string(), input("a".repeat(101)))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref msg) if msg == CLUB_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_club_rejects_long_description() {
        let id = Uuid::new_v4();
        let mut repo = MockClubRepository::new();
        repo.expect_find_by_id_with_members()
            .with(eq(id))
            .returning(|id| Ok(Some(from_input(id, input("Old".to_string())))));
        repo.expect_update().never();

        let service = ClubManager::new(Arc::new(repo));
        let err = service
            .update_club(&id.to_string(), input("a".repeat(101)))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::PreconditionFailed(_)));
    }

    #[tokio::test]
    async fn test_update_club_success() {
        let id = Uuid::new_v4();
        let mut repo = MockClubRepository::new();
        repo.expect_find_by_id_with_members()
            .with(eq(id))
            .returning(|id| Ok(Some(from_input(id, input("Old".to_string())))));
        repo.expect_update().times(1).returning(Ok);

        let service = ClubManager::new(Arc::new(repo));
        let club = service
            .update_club(&id.to_string(), input("Dinghies and keelboats".to_string()))
            .await
            .unwrap();

        assert_eq!(club.id, id);
        assert_eq!(club.description, "Dinghies and keelboats");
    }

    #[tokio::test]
    async fn test_get_club_with_malformed_id_is_not_found() {
        let mut repo = MockClubRepository::new();
        repo.expect_find_by_id_with_members().never();

        let service = ClubManager::new(Arc::new(repo));
        let err = service.get_club("club-1").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref msg) if msg == CLUB_NOT_FOUND));
    }
}
