//! Member service - Handles member CRUD use cases.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{ensure_email, parse_id, Member, MemberInput, MEMBER_NOT_FOUND};

use crate::repository::MemberRepository;

/// Member service trait for dependency injection.
#[async_trait]
pub trait MemberService: Send + Sync {
    /// List all members
    async fn list_members(&self) -> AppResult<Vec<Member>>;

    /// Get member by ID
    async fn get_member(&self, id: &str) -> AppResult<Member>;

    /// Create a new member (email format is checked here)
    async fn create_member(&self, input: MemberInput) -> AppResult<Member>;

    /// Replace every field of an existing member
    async fn update_member(&self, id: &str, input: MemberInput) -> AppResult<Member>;

    /// Delete member and its club associations
    async fn delete_member(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of MemberService using repository.
pub struct MemberManager {
    repo: Arc<dyn MemberRepository>,
}

impl MemberManager {
    /// Create new member service instance with repository
    pub fn new(repo: Arc<dyn MemberRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl MemberService for MemberManager {
    async fn list_members(&self) -> AppResult<Vec<Member>> {
        self.repo.list().await
    }

    async fn get_member(&self, id: &str) -> AppResult<Member> {
        let id = parse_id(id, MEMBER_NOT_FOUND)?;
        tracing::debug!(member_id = %id, "Fetching member");

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(MEMBER_NOT_FOUND)
    }

    async fn create_member(&self, input: MemberInput) -> AppResult<Member> {
        ensure_email(&input.email)?;

        let member = self.repo.create(input).await?;
        tracing::info!(member_id = %member.id, "Member created");
        Ok(member)
    }

    async fn update_member(&self, id: &str, input: MemberInput) -> AppResult<Member> {
        let mut member = self.get_member(id).await?;
        ensure_email(&input.email)?;

        member.apply(input);
        let member = self.repo.update(member).await?;
        tracing::info!(member_id = %member.id, "Member updated");
        Ok(member)
    }

    async fn delete_member(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id, MEMBER_NOT_FOUND)?;

        self.repo.delete(id).await?;
        tracing::info!(member_id = %id, "Member deleted");
        Ok(())
    }
}
