//! Membership service - Maintains the club/member relation.
//!
//! Every write goes through the club's member list. Operations naming both a
//! club and a member resolve the member first, so a missing member is
//! reported even when the club id is also unknown.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{parse_id, Club, Member, CLUB_NOT_FOUND, MEMBER_NOT_ASSOCIATED, MEMBER_NOT_FOUND};

use crate::repository::{ClubRepository, MemberRepository};

/// Membership service trait for dependency injection.
#[async_trait]
pub trait MembershipService: Send + Sync {
    /// Associate a member with a club and return the club
    async fn add_member(&self, club_id: &str, member_id: &str) -> AppResult<Club>;

    /// Get a member through the club it belongs to
    async fn find_member(&self, club_id: &str, member_id: &str) -> AppResult<Member>;

    /// List the members of a club
    async fn list_members(&self, club_id: &str) -> AppResult<Vec<Member>>;

    /// Replace the whole member list of a club. Nothing is written unless
    /// every referenced member exists.
    async fn replace_members(&self, club_id: &str, member_ids: Vec<String>) -> AppResult<Club>;

    /// Drop a member from a club
    async fn remove_member(&self, club_id: &str, member_id: &str) -> AppResult<()>;
}

/// Concrete implementation of MembershipService over both repositories.
pub struct MembershipManager {
    members: Arc<dyn MemberRepository>,
    clubs: Arc<dyn ClubRepository>,
}

impl MembershipManager {
    /// Create new membership service instance with repositories
    pub fn new(members: Arc<dyn MemberRepository>, clubs: Arc<dyn ClubRepository>) -> Self {
        Self { members, clubs }
    }

    async fn fetch_member(&self, member_id: &str) -> AppResult<Member> {
        let id = parse_id(member_id, MEMBER_NOT_FOUND)?;
        self.members
            .find_by_id(id)
            .await?
            .ok_or_not_found(MEMBER_NOT_FOUND)
    }

    async fn fetch_club(&self, club_id: &str) -> AppResult<Club> {
        let id = parse_id(club_id, CLUB_NOT_FOUND)?;
        self.clubs
            .find_by_id_with_members(id)
            .await?
            .ok_or_not_found(CLUB_NOT_FOUND)
    }
}

#[async_trait]
impl MembershipService for MembershipManager {
    async fn add_member(&self, club_id: &str, member_id: &str) -> AppResult<Club> {
        let member = self.fetch_member(member_id).await?;
        let mut club = self.fetch_club(club_id).await?;

        if club.has_member(member.id) {
            tracing::debug!(club_id = %club.id, member_id = %member.id, "Member already associated");
            return Ok(club);
        }

        let member_id = member.id;
        club.add_member(member);
        let club = self.clubs.save_members(club).await?;
        tracing::info!(club_id = %club.id, member_id = %member_id, "Member added to club");
        Ok(club)
    }

    async fn find_member(&self, club_id: &str, member_id: &str) -> AppResult<Member> {
        let member = self.fetch_member(member_id).await?;
        let club = self.fetch_club(club_id).await?;

        club.member(member.id)
            .cloned()
            .ok_or_else(|| AppError::precondition_failed(MEMBER_NOT_ASSOCIATED))
    }

    async fn list_members(&self, club_id: &str) -> AppResult<Vec<Member>> {
        let club = self.fetch_club(club_id).await?;
        Ok(club.members)
    }

    async fn replace_members(&self, club_id: &str, member_ids: Vec<String>) -> AppResult<Club> {
        let mut club = self.fetch_club(club_id).await?;

        let mut members = Vec::with_capacity(member_ids.len());
        for member_id in &member_ids {
            members.push(self.fetch_member(member_id).await?);
        }

        club.replace_members(members);
        let club = self.clubs.save_members(club).await?;
        tracing::info!(club_id = %club.id, count = club.members.len(), "Club members replaced");
        Ok(club)
    }

    async fn remove_member(&self, club_id: &str, member_id: &str) -> AppResult<()> {
        let member = self.fetch_member(member_id).await?;
        let mut club = self.fetch_club(club_id).await?;

        if !club.has_member(member.id) {
            return Err(AppError::precondition_failed(MEMBER_NOT_ASSOCIATED));
        }

        club.remove_member(member.id);
        let club = self.clubs.save_members(club).await?;
        tracing::info!(club_id = %club.id, member_id = %member.id, "Member removed from club");
        Ok(())
    }
}
