use crate::error::StoreError;
use crate::models::leaderboard::Leaderboard;
use crate::models::user::User;
use crate::services::score_set::ScoreSet;

/// User/Leaderboard semantics on top of a [`ScoreSet`]. A rank returned next
/// to a score always comes from the same transaction as that score.
pub struct LeaderboardService {
    scores: ScoreSet,
}

impl LeaderboardService {
    pub fn new(scores: ScoreSet) -> Self {
        Self { scores }
    }

    /// Upserts the user's points and returns the user with `rank` populated.
    /// The upsert and the rank read commit as one transaction: a rank read
    /// issued afterwards could observe a concurrent writer's ordering.
    pub async fn save_user(&self, mut user: User) -> Result<User, StoreError> {
        let (rank,): (Option<u64>,) = self
            .scores
            .batch()
            .upsert(&user.username, user.points)
            .rank(&user.username)
            .commit()
            .await?;
        // The member was upserted in the same transaction, so the rank read
        // cannot miss.
        user.rank = rank.unwrap_or_default();
        Ok(user)
    }

    /// Reads score and rank in one transaction. Only the score read decides
    /// whether the member exists; rank is meaningless without a score.
    pub async fn get_user(&self, username: &str) -> Result<User, StoreError> {
        let (score, rank): (Option<i64>, Option<u64>) = self
            .scores
            .batch()
            .score(username)
            .rank(username)
            .commit()
            .await?;
        let points = score.ok_or(StoreError::NotFound)?;
        Ok(User {
            username: username.to_string(),
            points,
            rank: rank.unwrap_or_default(),
        })
    }

    /// Full listing, ascending by score. This is a single non-transactional
    /// scan: it may interleave with concurrent upserts, a weaker guarantee
    /// than the per-user transactional reads above. An empty set is an empty
    /// leaderboard, not an error.
    pub async fn get_leaderboard(&self) -> Result<Leaderboard, StoreError> {
        let entries = self.scores.all_ordered().await?;
        Ok(ranked(entries))
    }
}

/// Assigns ranks by position over an ascending (member, score) sequence.
pub(crate) fn ranked(entries: Vec<(String, i64)>) -> Leaderboard {
    let users: Vec<User> = entries
        .into_iter()
        .enumerate()
        .map(|(rank, (username, points))| User {
            username,
            points,
            rank: rank as u64,
        })
        .collect();
    Leaderboard {
        count: users.len(),
        users,
    }
}
