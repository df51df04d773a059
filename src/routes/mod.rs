use axum::{routing::get, Router};
use redis::aio::ConnectionManager;
use std::sync::Arc;

use crate::services::leaderboard_service::LeaderboardService;
use crate::services::score_set::{ScoreSet, LEADERBOARD_KEY};

pub mod leaderboard;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check OK")
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}

pub fn init_routes(conn: ConnectionManager) -> Router {
    let scores = ScoreSet::new(conn, LEADERBOARD_KEY);
    let leaderboard_service = Arc::new(LeaderboardService::new(scores));

    Router::new()
        .route("/health", get(health_check))
        .merge(leaderboard::leaderboard_routes(leaderboard_service))
}
