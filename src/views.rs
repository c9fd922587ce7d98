//! Display models
//!
//! Records store entries in insertion order; every listing shows the most
//! recently appended entry first.

use crate::domain::{Challenge, ResultEntry, UserRecord};
use crate::points::Level;

/// Iterate a history most recent first
pub fn newest_first<T>(items: &[T]) -> std::iter::Rev<std::slice::Iter<'_, T>> {
    items.iter().rev()
}

/// Challenges, most recent first
pub fn challenge_list(record: &UserRecord) -> Vec<&Challenge> {
    newest_first(&record.challenges).collect()
}

/// Results, most recent first
pub fn result_list(record: &UserRecord) -> Vec<&ResultEntry> {
    newest_first(&record.results).collect()
}

/// Profile page: identity, counters and latest results
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub username: String,
    pub email: String,
    pub challenge_count: usize,
    pub result_count: usize,
    pub achievement_count: usize,
    pub points: u32,
    pub level: &'static Level,
    /// Up to `recent_limit` latest results, most recent first
    pub recent_results: Vec<ResultEntry>,
}

impl ProfileSummary {
    pub fn from_record(record: &UserRecord, recent_limit: usize) -> Self {
        Self {
            username: record.username().to_string(),
            email: record.email.clone(),
            challenge_count: record.challenges.len(),
            result_count: record.results.len(),
            achievement_count: record.achievements().len(),
            points: record.points(),
            level: Level::for_points(record.points()),
            recent_results: newest_first(&record.results)
                .take(recent_limit)
                .cloned()
                .collect(),
        }
    }
}
