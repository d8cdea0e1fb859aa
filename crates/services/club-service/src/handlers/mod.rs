//! HTTP request handlers.

pub mod club_handler;
pub mod health_handler;
pub mod member_handler;
pub mod membership_handler;

pub use club_handler::club_routes;
pub use health_handler::health_routes;
pub use member_handler::member_routes;
pub use membership_handler::membership_routes;
