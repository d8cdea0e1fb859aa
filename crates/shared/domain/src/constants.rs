//! Domain-level constants.
//!
//! These constants define business rules and the messages reported when
//! those rules are violated.

// =============================================================================
// Validation
// =============================================================================

/// Maximum number of characters allowed in a club description
pub const MAX_DESCRIPTION_LENGTH: usize = 100;

/// Calendar format used for birth and founding dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Messages
// =============================================================================

pub const MEMBER_NOT_FOUND: &str = "The member with the given id was not found";

pub const CLUB_NOT_FOUND: &str = "The club with the given id was not found";

pub const MEMBER_NOT_ASSOCIATED: &str =
    "The member with the given id is not associated with the club";

pub const INVALID_EMAIL: &str = "The email does not have the required format";

pub const DESCRIPTION_TOO_LONG: &str = "The description cannot be longer than 100 characters";

pub const INVALID_DATE: &str = "Invalid date: the yyyy-mm-dd format is required";
