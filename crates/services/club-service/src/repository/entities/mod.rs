//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod club;
pub mod club_member;
pub mod member;
