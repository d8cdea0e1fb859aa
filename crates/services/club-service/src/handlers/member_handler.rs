//! Member handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{parse_date, MemberInput, MemberResponse};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Member create/update request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MemberRequest {
    /// Display name
    #[validate(length(min = 1, message = "The name cannot be empty"))]
    #[schema(example = "Lucia Perez")]
    pub name: String,
    /// Email address
    #[validate(email(message = "The email does not have the required format"))]
    #[schema(example = "lucia@example.com")]
    pub email: String,
    /// Birth date (yyyy-mm-dd)
    #[validate(length(min = 1, message = "The birth date cannot be empty"))]
    #[schema(example = "1988-06-14")]
    pub birth_date: String,
}

impl MemberRequest {
    fn into_input(self) -> AppResult<MemberInput> {
        Ok(MemberInput {
            birth_date: parse_date(&self.birth_date)?,
            name: self.name,
            email: self.email,
        })
    }
}

/// Create member routes
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(list_members).post(create_member))
        .route(
            "/members/:id",
            get(get_member).put(update_member).delete(delete_member),
        )
}

/// List all members
#[utoipa::path(
    get,
    path = "/members",
    tag = "Members",
    responses(
        (status = 200, description = "List of all members", body = Vec<MemberResponse>)
    )
)]
pub async fn list_members(State(state): State<AppState>) -> AppResult<Json<Vec<MemberResponse>>> {
    let members = state.members.list_members().await?;
    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

/// Get member by ID
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "Members",
    params(
        ("id" = String, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member", body = MemberResponse),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MemberResponse>> {
    let member = state.members.get_member(&id).await?;
    Ok(Json(MemberResponse::from(member)))
}

/// Create a member
#[utoipa::path(
    post,
    path = "/members",
    tag = "Members",
    request_body = MemberRequest,
    responses(
        (status = 201, description = "Member created", body = MemberResponse),
        (status = 400, description = "Validation error"),
        (status = 412, description = "Invalid email or date format")
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<MemberRequest>,
) -> AppResult<(StatusCode, Json<MemberResponse>)> {
    let member = state.members.create_member(payload.into_input()?).await?;
    Ok((StatusCode::CREATED, Json(MemberResponse::from(member))))
}

/// Update every field of a member
#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "Members",
    params(
        ("id" = String, Path, description = "Member ID")
    ),
    request_body = MemberRequest,
    responses(
        (status = 200, description = "Member updated", body = MemberResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Member not found"),
        (status = 412, description = "Invalid email or date format")
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<MemberRequest>,
) -> AppResult<Json<MemberResponse>> {
    let member = state
        .members
        .update_member(&id, payload.into_input()?)
        .await?;
    Ok(Json(MemberResponse::from(member)))
}

/// Delete a member
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "Members",
    params(
        ("id" = String, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.members.delete_member(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
