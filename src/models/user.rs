use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A leaderboard member. `rank` is derived from the current score ordering on
/// every read, never stored on its own: rank 0 is the lowest score, ties break
/// lexicographically on username.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct User {
    pub username: String,
    pub points: i64,
    #[serde(default)]
    pub rank: u64,
}
