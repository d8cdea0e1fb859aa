//! Club membership handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::{AppError, AppResult};
use domain::{ClubResponse, MemberReference, MemberResponse};

use crate::state::AppState;

/// Create membership routes.
///
/// Club ids share the `:id` segment name with the club routes.
pub fn membership_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clubs/:id/members",
            get(list_club_members).put(replace_club_members),
        )
        .route(
            "/clubs/:id/members/:member_id",
            get(get_club_member)
                .post(add_club_member)
                .delete(remove_club_member),
        )
}

/// Associate a member with a club
#[utoipa::path(
    post,
    path = "/clubs/{id}/members/{member_id}",
    tag = "Memberships",
    params(
        ("id" = String, Path, description = "Club ID"),
        ("member_id" = String, Path, description = "Member ID")
    ),
    responses(
        (status = 201, description = "Club with the member associated", body = ClubResponse),
        (status = 404, description = "Member or club not found")
    )
)]
pub async fn add_club_member(
    State(state): State<AppState>,
    Path((club_id, member_id)): Path<(String, String)>,
) -> AppResult<(StatusCode, Json<ClubResponse>)> {
    let club = state.memberships.add_member(&club_id, &member_id).await?;
    Ok((StatusCode::CREATED, Json(ClubResponse::from(club))))
}

/// Get a member of a club
#[utoipa::path(
    get,
    path = "/clubs/{id}/members/{member_id}",
    tag = "Memberships",
    params(
        ("id" = String, Path, description = "Club ID"),
        ("member_id" = String, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Associated member", body = MemberResponse),
        (status = 404, description = "Member or club not found"),
        (status = 412, description = "Member is not associated with the club")
    )
)]
pub async fn get_club_member(
    State(state): State<AppState>,
    Path((club_id, member_id)): Path<(String, String)>,
) -> AppResult<Json<MemberResponse>> {
    let member = state.memberships.find_member(&club_id, &member_id).await?;
    Ok(Json(MemberResponse::from(member)))
}

/// List the members of a club
#[utoipa::path(
    get,
    path = "/clubs/{id}/members",
    tag = "Memberships",
    params(
        ("id" = String, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Members of the club", body = Vec<MemberResponse>),
        (status = 404, description = "Club not found")
    )
)]
pub async fn list_club_members(
    State(state): State<AppState>,
    Path(club_id): Path<String>,
) -> AppResult<Json<Vec<MemberResponse>>> {
    let members = state.memberships.list_members(&club_id).await?;
    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

/// Replace the member list of a club
#[utoipa::path(
    put,
    path = "/clubs/{id}/members",
    tag = "Memberships",
    params(
        ("id" = String, Path, description = "Club ID")
    ),
    request_body = Vec<MemberReference>,
    responses(
        (status = 200, description = "Club with its new member list", body = ClubResponse),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Club or one of the members not found")
    )
)]
pub async fn replace_club_members(
    State(state): State<AppState>,
    Path(club_id): Path<String>,
    payload: Result<Json<Vec<MemberReference>>, JsonRejection>,
) -> AppResult<Json<ClubResponse>> {
    let Json(references) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    let member_ids = references.into_iter().map(|r| r.id).collect();

    let club = state
        .memberships
        .replace_members(&club_id, member_ids)
        .await?;
    Ok(Json(ClubResponse::from(club)))
}

/// Drop a member from a club
#[utoipa::path(
    delete,
    path = "/clubs/{id}/members/{member_id}",
    tag = "Memberships",
    params(
        ("id" = String, Path, description = "Club ID"),
        ("member_id" = String, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Member removed from the club"),
        (status = 404, description = "Member or club not found"),
        (status = 412, description = "Member is not associated with the club")
    )
)]
pub async fn remove_club_member(
    State(state): State<AppState>,
    Path((club_id, member_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    state.memberships.remove_member(&club_id, &member_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
