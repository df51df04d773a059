use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::StoreError;
use crate::models::{leaderboard::Leaderboard, user::User};
use crate::services::leaderboard_service::LeaderboardService;

#[derive(Deserialize, ToSchema)]
pub struct SubmitScoreRequest {
    username: String,
    points: i64,
}

#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub leaderboard: Leaderboard,
}

#[utoipa::path(
    post,
    path = "/points",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score saved, rank populated", body = UserResponse),
        (status = 400, description = "Invalid request body"),
    )
)]
pub async fn submit_score(
    State(service): State<Arc<LeaderboardService>>,
    Json(req): Json<SubmitScoreRequest>,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    if req.username.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "username must not be empty".to_string(),
        ));
    }

    service
        .save_user(User {
            username: req.username,
            points: req.points,
            rank: 0,
        })
        .await
        .map(|user| Json(UserResponse { user }))
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

#[utoipa::path(
    get,
    path = "/points/{username}",
    params(
        ("username" = String, Path, description = "Username to look up")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found"),
    )
)]
pub async fn get_user(
    State(service): State<Arc<LeaderboardService>>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    service
        .get_user(&username)
        .await
        .map(|user| Json(UserResponse { user }))
        .map_err(|e| match e {
            StoreError::NotFound => (
                StatusCode::NOT_FOUND,
                format!("no record found for {username}"),
            ),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        })
}

#[utoipa::path(
    get,
    path = "/leaderboard",
    responses(
        (status = 200, description = "Full leaderboard, ascending by score", body = LeaderboardResponse),
    )
)]
pub async fn get_leaderboard(
    State(service): State<Arc<LeaderboardService>>,
) -> Result<Json<LeaderboardResponse>, (StatusCode, String)> {
    service
        .get_leaderboard()
        .await
        .map(|leaderboard| Json(LeaderboardResponse { leaderboard }))
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

pub fn leaderboard_routes(service: Arc<LeaderboardService>) -> Router {
    Router::new()
        .route("/points", post(submit_score))
        .route("/points/{username}", get(get_user))
        .route("/leaderboard", get(get_leaderboard))
        .with_state(service)
}
