//! Service layer - Business logic over the repository traits.

mod club_service;
mod member_service;
mod membership_service;

pub use club_service::{ClubManager, ClubService};
pub use member_service::{MemberManager, MemberService};
pub use membership_service::{MembershipManager, MembershipService};
