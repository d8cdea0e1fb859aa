//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::{ClubRepository, ClubStore, InMemoryStore, MemberRepository, MemberStore};
use crate::service::{
    ClubManager, ClubService, MemberManager, MemberService, MembershipManager, MembershipService,
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<dyn MemberService>,
    pub clubs: Arc<dyn ClubService>,
    pub memberships: Arc<dyn MembershipService>,
    /// Present when backed by Postgres; used by the health check
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire the services over an explicit pair of repositories.
    pub fn from_repositories(
        member_repo: Arc<dyn MemberRepository>,
        club_repo: Arc<dyn ClubRepository>,
    ) -> Self {
        Self {
            members: Arc::new(MemberManager::new(member_repo.clone())),
            clubs: Arc::new(ClubManager::new(club_repo.clone())),
            memberships: Arc::new(MembershipManager::new(member_repo, club_repo)),
            database: None,
        }
    }

    /// Wire the services over the SeaORM stores.
    pub fn from_database(db: Database) -> Self {
        let conn = db.get_connection();
        let member_repo = Arc::new(MemberStore::new(conn.clone()));
        let club_repo = Arc::new(ClubStore::new(conn));

        Self {
            database: Some(Arc::new(db)),
            ..Self::from_repositories(member_repo, club_repo)
        }
    }

    /// Wire the services over a fresh in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::from_repositories(store.clone(), store)
    }
}
