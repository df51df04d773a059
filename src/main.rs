use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;

mod config;
mod db;
mod error;
mod models;
mod routes;
mod services;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health_check,
        routes::leaderboard::submit_score,
        routes::leaderboard::get_user,
        routes::leaderboard::get_leaderboard,
    ),
    components(
        schemas(
            models::user::User,
            models::leaderboard::Leaderboard,
            routes::leaderboard::SubmitScoreRequest,
            routes::leaderboard::UserResponse,
            routes::leaderboard::LeaderboardResponse,
        ),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leaderboard_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    let conn = db::init_store(&config.redis_addr).await;

    let app = Router::new()
        .merge(routes::init_routes(conn))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.listen_addr.as_str())
        .await
        .expect("Failed to bind listen address");
    tracing::info!("listening on {}", config.listen_addr);
    axum::serve(listener, app).await.expect("Server error");
}

#[cfg(test)]
mod tests;
