//! Repository layer for data access.

pub mod entities;
mod club_repository;
mod in_memory;
mod member_repository;

pub use club_repository::{ClubRepository, ClubStore};
pub use in_memory::InMemoryStore;
pub use member_repository::{MemberRepository, MemberStore};

#[cfg(any(test, feature = "test-utils"))]
pub use club_repository::MockClubRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use member_repository::MockMemberRepository;
