use serde::Serialize;
use utoipa::ToSchema;

use crate::models::user::User;

/// Read-only projection over the whole ordered set, ascending by score
/// (rank 0 first). Computed fresh on each query; owns no state.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct Leaderboard {
    pub count: usize,
    pub users: Vec<User>,
}
