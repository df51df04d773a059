use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::error::StoreError;

/// Key of the single ordered set backing the production leaderboard.
pub const LEADERBOARD_KEY: &str = "leaderboard";

/// A keyed collection of unique members with numeric scores, ordered ascending
/// by score (ties ordered lexicographically by member, Redis sorted-set
/// semantics). The backing store is the sole serialization point; there is no
/// in-process locking.
pub struct ScoreSet {
    conn: ConnectionManager,
    key: String,
}

impl ScoreSet {
    pub fn new(conn: ConnectionManager, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    /// Inserts or overwrites the score for `member`. No history is kept.
    pub async fn upsert(&self, member: &str, score: i64) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let _: i64 = conn.zadd(&self.key, member, score).await?;
        Ok(())
    }

    pub async fn score(&self, member: &str) -> Result<i64, StoreError> {
        let mut conn = self.conn.clone();
        let score: Option<i64> = conn.zscore(&self.key, member).await?;
        score.ok_or(StoreError::NotFound)
    }

    /// Zero-based ascending-order position of `member`.
    pub async fn rank(&self, member: &str) -> Result<u64, StoreError> {
        let mut conn = self.conn.clone();
        let rank: Option<u64> = conn.zrank(&self.key, member).await?;
        rank.ok_or(StoreError::NotFound)
    }

    /// Full ordered enumeration, ascending by score. An empty set yields an
    /// empty vec, not an error.
    pub async fn all_ordered(&self) -> Result<Vec<(String, i64)>, StoreError> {
        let mut conn = self.conn.clone();
        Ok(conn.zrange_withscores(&self.key, 0, -1).await?)
    }

    /// Opens an atomic batch (MULTI/EXEC). Queued operations are committed as
    /// one indivisible unit relative to other transactions; a failed commit
    /// applies none of them and yields no partial results.
    pub fn batch(&self) -> ScoreSetBatch<'_> {
        let mut pipe = redis::pipe();
        pipe.atomic();
        ScoreSetBatch { set: self, pipe }
    }
}

/// Capability-scoped batch over one [`ScoreSet`]: queue operations, commit
/// once, and receive every result together.
pub struct ScoreSetBatch<'a> {
    set: &'a ScoreSet,
    pipe: redis::Pipeline,
}

impl ScoreSetBatch<'_> {
    /// Queues an upsert. Its acknowledgement is ignored; only read results
    /// appear in the commit output.
    pub fn upsert(mut self, member: &str, score: i64) -> Self {
        self.pipe.zadd(&self.set.key, member, score).ignore();
        self
    }

    /// Queues a score read, yielding `Option<i64>` in the commit results.
    pub fn score(mut self, member: &str) -> Self {
        self.pipe.zscore(&self.set.key, member);
        self
    }

    /// Queues a rank read, yielding `Option<u64>` in the commit results.
    pub fn rank(mut self, member: &str) -> Self {
        self.pipe.zrank(&self.set.key, member);
        self
    }

    pub async fn commit<T: redis::FromRedisValue>(self) -> Result<T, StoreError> {
        let mut conn = self.set.conn.clone();
        Ok(self.pipe.query_async(&mut conn).await?)
    }
}
