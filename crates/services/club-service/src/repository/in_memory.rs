//! In-memory repository implementation.
//!
//! Backs both repository traits with one shared state so that member
//! deletes cascade into club memberships the same way the database does.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Club, ClubInput, Member, MemberInput, CLUB_NOT_FOUND, MEMBER_NOT_FOUND};

use super::{ClubRepository, MemberRepository};

#[derive(Default)]
struct State {
    members: HashMap<Uuid, Member>,
    // Stored without members; the relation lives in `memberships`
    clubs: HashMap<Uuid, Club>,
    memberships: Vec<(Uuid, Uuid)>,
}

impl State {
    fn assemble(&self, club: &Club) -> Club {
        let mut members: Vec<Member> = self
            .memberships
            .iter()
            .filter(|(club_id, _)| *club_id == club.id)
            .filter_map(|(_, member_id)| self.members.get(member_id).cloned())
            .collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));

        Club {
            members,
            ..club.clone()
        }
    }
}

/// In-memory store implementing both `MemberRepository` and `ClubRepository`
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| AppError::internal("Failed to acquire lock"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| AppError::internal("Failed to acquire lock"))
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>> {
        let state = self.read()?;
        Ok(state.members.get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Member>> {
        let state = self.read()?;
        let mut members: Vec<Member> = state.members.values().cloned().collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(members)
    }

    async fn create(&self, input: MemberInput) -> AppResult<Member> {
        let mut state = self.write()?;
        let member = Member {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            birth_date: input.birth_date,
        };
        state.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn update(&self, member: Member) -> AppResult<Member> {
        let mut state = self.write()?;
        let Some(existing) = state.members.get_mut(&member.id) else {
            return Err(AppError::not_found(MEMBER_NOT_FOUND));
        };
        *existing = member.clone();
        Ok(member)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.write()?;
        if state.members.remove(&id).is_none() {
            return Err(AppError::not_found(MEMBER_NOT_FOUND));
        }
        state.memberships.retain(|(_, member_id)| *member_id != id);
        Ok(())
    }
}

#[async_trait]
impl ClubRepository for InMemoryStore {
    async fn find_by_id_with_members(&self, id: Uuid) -> AppResult<Option<Club>> {
        let state = self.read()?;
        Ok(state.clubs.get(&id).map(|club| state.assemble(club)))
    }

    async fn list_with_members(&self) -> AppResult<Vec<Club>> {
        let state = self.read()?;
        let mut clubs: Vec<Club> = state.clubs.values().map(|c| state.assemble(c)).collect();
        clubs.sort_by_key(|c| c.id);
        Ok(clubs)
    }

    async fn create(&self, input: ClubInput) -> AppResult<Club> {
        let mut state = self.write()?;
        let club = Club {
            id: Uuid::new_v4(),
            name: input.name,
            founding_date: input.founding_date,
            description: input.description,
            image: input.image,
            members: Vec::new(),
        };
        state.clubs.insert(club.id, club.clone());
        Ok(club)
    }

    async fn update(&self, club: Club) -> AppResult<Club> {
        let mut state = self.write()?;
        let Some(existing) = state.clubs.get_mut(&club.id) else {
            return Err(AppError::not_found(CLUB_NOT_FOUND));
        };
        *existing = Club {
            members: Vec::new(),
            ..club
        };
        let stored = existing.clone();
        Ok(state.assemble(&stored))
    }

    async fn save_members(&self, club: Club) -> AppResult<Club> {
        let mut state = self.write()?;
        let Some(stored) = state.clubs.get(&club.id).cloned() else {
            return Err(AppError::not_found(CLUB_NOT_FOUND));
        };

        // Same outcome as the club_members foreign key: nothing is written
        let member_ids = club.member_ids();
        if member_ids.iter().any(|id| !state.members.contains_key(id)) {
            return Err(AppError::not_found(MEMBER_NOT_FOUND));
        }

        state.memberships.retain(|(club_id, _)| *club_id != club.id);
        for member_id in member_ids {
            if !state.memberships.contains(&(club.id, member_id)) {
                state.memberships.push((club.id, member_id));
            }
        }

        Ok(state.assemble(&stored))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.write()?;
        if state.clubs.remove(&id).is_none() {
            return Err(AppError::not_found(CLUB_NOT_FOUND));
        }
        state.memberships.retain(|(club_id, _)| *club_id != id);
        Ok(())
    }
}
