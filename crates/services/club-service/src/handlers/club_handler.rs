//! Club handlers.

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
use domain::{parse_date, ClubInput, ClubResponse};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Club create/update request with validation.
///
/// The description length limit is enforced by the club service.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ClubRequest {
    /// Club name
    #[validate(length(min = 1, message = "The name cannot be empty"))]
    #[schema(example = "Harbour Sailing")]
    pub name: String,
    /// Founding date (yyyy-mm-dd)
    #[validate(length(min = 1, message = "The founding date cannot be empty"))]
    #[schema(example = "1932-04-09")]
    pub founding_date: String,
    /// Short description (at most 100 characters)
    #[validate(length(min = 1, message = "The description cannot be empty"))]
    #[schema(example = "Dinghies and keelboats")]
    pub description: String,
    /// Image URL
    #[validate(url(message = "The image must be a valid URL"))]
    #[schema(example = "https://example.com/sailing.png")]
    pub image: String,
}

impl ClubRequest {
    fn into_input(self) -> AppResult<ClubInput> {
        Ok(ClubInput {
            founding_date: parse_date(&self.founding_date)?,
            name: self.name,
            description: self.description,
            image: self.image,
        })
    }
}

/// Create club routes
pub fn club_routes() -> Router<AppState> {
    Router::new()
        .route("/clubs", get(list_clubs).post(create_club))
        .route(
            "/clubs/:id",
            get(get_club).put(update_club).delete(delete_club),
        )
}

/// List all clubs with their members
#[utoipa::path(
    get,
    path = "/clubs",
    tag = "Clubs",
    responses(
        (status = 200, description = "List of all clubs", body = Vec<ClubResponse>)
    )
)]
pub async fn list_clubs(State(state): State<AppState>) -> AppResult<Json<Vec<ClubResponse>>> {
    let clubs = state.clubs.list_clubs().await?;
    Ok(Json(clubs.into_iter().map(ClubResponse::from).collect()))
}

/// Get club by ID
#[utoipa::path(
    get,
    path = "/clubs/{id}",
    tag = "Clubs",
    params(
        ("id" = String, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Club with its members", body = ClubResponse),
        (status = 404, description = "Club not found")
    )
)]
pub async fn get_club(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ClubResponse>> {
    let club = state.clubs.get_club(&id).await?;
    Ok(Json(ClubResponse::from(club)))
}

/// Create a club
#[utoipa::path(
    post,
    path = "/clubs",
    tag = "Clubs",
    request_body = ClubRequest,
    responses(
        (status = 201, description = "Club created", body = ClubResponse),
        (status = 400, description = "Validation error"),
        (status = 412, description = "Description too long or invalid date")
    )
)]
pub async fn create_club(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ClubRequest>,
) -> AppResult<(StatusCode, Json<ClubResponse>)> {
    let club = state.clubs.create_club(payload.into_input()?).await?;
    Ok((StatusCode::CREATED, Json(ClubResponse::from(club))))
}

/// Update every field of a club
#[utoipa::path(
    put,
    path = "/clubs/{id}",
    tag = "Clubs",
    params(
        ("id" = String, Path, description = "Club ID")
    ),
    request_body = ClubRequest,
    responses(
        (status = 200, description = "Club updated", body = ClubResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Club not found"),
        (status = 412, description = "Description too long or invalid date")
    )
)]
pub async fn update_club(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ClubRequest>,
) -> AppResult<Json<ClubResponse>> {
    let club = state.clubs.update_club(&id, payload.into_input()?).await?;
    Ok(Json(ClubResponse::from(club)))
}

/// Delete a club
#[utoipa::path(
    delete,
    path = "/clubs/{id}",
    tag = "Clubs",
    params(
        ("id" = String, Path, description = "Club ID")
    ),
    responses(
        (status = 204, description = "Club deleted"),
        (status = 404, description = "Club not found")
    )
)]
pub async fn delete_club(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.clubs.delete_club(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
