//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::club_handler::ClubRequest;
use crate::handlers::health_handler::{HealthResponse, StorageHealth};
use crate::handlers::member_handler::MemberRequest;
use domain::{ClubResponse, MemberReference, MemberResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::member_handler::list_members,
        crate::handlers::member_handler::get_member,
        crate::handlers::member_handler::create_member,
        crate::handlers::member_handler::update_member,
        crate::handlers::member_handler::delete_member,
        crate::handlers::club_handler::list_clubs,
        crate::handlers::club_handler::get_club,
        crate::handlers::club_handler::create_club,
        crate::handlers::club_handler::update_club,
        crate::handlers::club_handler::delete_club,
        crate::handlers::membership_handler::add_club_member,
        crate::handlers::membership_handler::get_club_member,
        crate::handlers::membership_handler::list_club_members,
        crate::handlers::membership_handler::replace_club_members,
        crate::handlers::membership_handler::remove_club_member,
    ),
    components(
        schemas(
            MemberRequest,
            MemberResponse,
            MemberReference,
            ClubRequest,
            ClubResponse,
            HealthResponse,
            StorageHealth,
        )
    ),
    tags(
        (name = "Members", description = "Member management endpoints"),
        (name = "Clubs", description = "Club management endpoints"),
        (name = "Memberships", description = "Club membership endpoints"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
