use axum::{body::Body, Router};
use redis::aio::ConnectionManager;
use serde_json::Value;

use crate::routes;
use crate::services::score_set::{ScoreSet, LEADERBOARD_KEY};

pub struct TestContext {
    pub app: Router,
    pub conn: ConnectionManager,
}

/// Connects to the Redis instance named by `REDIS_TEST_ADDR`. Returns `None`
/// when the variable is unset so tests can skip instead of failing on
/// machines without a test store.
pub async fn setup() -> Option<TestContext> {
    dotenv::dotenv().ok();
    let Ok(addr) = std::env::var("REDIS_TEST_ADDR") else {
        eprintln!("REDIS_TEST_ADDR not set; skipping test");
        return None;
    };

    let client =
        redis::Client::open(format!("redis://{addr}")).expect("Invalid test Redis address");
    let conn = client
        .get_connection_manager()
        .await
        .expect("Failed to connect to test Redis");

    let app = routes::init_routes(conn.clone());
    Some(TestContext { app, conn })
}

/// Clears the shared leaderboard key. Only one test may do this; anything
/// else that needs store state should use [`scratch_set`].
pub async fn clear_leaderboard(ctx: &TestContext) {
    let mut conn = ctx.conn.clone();
    let _: i64 = redis::cmd("DEL")
        .arg(LEADERBOARD_KEY)
        .query_async(&mut conn)
        .await
        .expect("Failed to clear leaderboard key");
}

/// A score set under its own scratch key, cleared before use, so tests can
/// run in parallel without stepping on the shared leaderboard key.
pub async fn scratch_set(ctx: &TestContext, key: &str) -> ScoreSet {
    let mut conn = ctx.conn.clone();
    let _: i64 = redis::cmd("DEL")
        .arg(key)
        .query_async(&mut conn)
        .await
        .expect("Failed to clear scratch key");
    ScoreSet::new(ctx.conn.clone(), key)
}

/// Helper to create a JSON body for requests.
pub fn json_body(json: &Value) -> Body {
    Body::from(json.to_string())
}
