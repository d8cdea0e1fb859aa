//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! members, clubs, the rules that gate what may be stored, and the errors
//! raised when those rules are broken.

pub mod club;
pub mod constants;
pub mod error;
pub mod member;
pub mod validation;

pub use club::{Club, ClubInput, ClubResponse};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use member::{Member, MemberInput, MemberReference, MemberResponse};
pub use validation::{ensure_description, ensure_email, parse_date, parse_id, DATE_PATTERN};
