//! Points and level view
//!
//! Everything here is derived from a loaded record; nothing is stored.

mod levels;

pub use levels::{Level, LEVELS};

use crate::domain::{Achievement, UserRecord};
use crate::views::newest_first;

/// Total points, level and award history of one user
#[derive(Debug, Clone)]
pub struct PointsSummary {
    pub total: u32,
    pub level: &'static Level,
    /// Points needed for the next level (None at the top)
    pub next_level_points: Option<u32>,
    /// Award log, most recent first
    pub history: Vec<Achievement>,
}

impl PointsSummary {
    pub fn from_record(record: &UserRecord) -> Self {
        let total = record.points();
        let level = Level::for_points(total);

        Self {
            total,
            level,
            next_level_points: level.next().map(|l| l.points_required),
            history: newest_first(record.achievements()).cloned().collect(),
        }
    }

    /// Progress toward the next level (0.0 - 1.0)
    pub fn progress_to_next(&self) -> f32 {
        match self.next_level_points {
            Some(next) => {
                let in_level = self.total - self.level.points_required;
                let span = next - self.level.points_required;
                if span == 0 {
                    1.0
                } else {
                    (in_level as f32) / (span as f32)
                }
            }
            None => 1.0, // Max level
        }
    }

    pub fn is_max_level(&self) -> bool {
        self.next_level_points.is_none()
    }
}
