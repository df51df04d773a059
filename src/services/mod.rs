pub mod leaderboard_service;
pub mod score_set;
