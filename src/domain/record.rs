//! The per-user record and the entries it accumulates

use serde::{Deserialize, Serialize};

use super::sport::Sport;
use super::timestamp;

/// A user-defined sport goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub sport: Sport,
    #[serde(default)]
    pub description: String,
    /// Target value as typed (e.g. "5")
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub unit: String,
    /// Free-text deadline (e.g. "31.12.2025")
    #[serde(default)]
    pub deadline: String,
    /// `DD.MM.YYYY`
    #[serde(rename = "createdDate", default)]
    pub created_date: String,
}

/// A logged performance measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub sport: Sport,
    /// Numeric string exactly as entered (trimmed)
    pub value: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub note: String,
    /// `DD.MM.YYYY HH:MM`
    #[serde(default)]
    pub timestamp: String,
}

impl ResultEntry {
    /// `DD.MM.YYYY` portion of the timestamp
    pub fn date(&self) -> &str {
        timestamp::date_part(&self.timestamp)
    }
}

/// An entry in the append-only award log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub points: u32,
    /// `DD.MM.YYYY HH:MM`
    #[serde(default)]
    pub timestamp: String,
}

/// Full persisted state for one user
///
/// `points` is never set directly: it is always the sum of the achievement
/// log, which is only ever appended to through [`UserRecord::award_achievement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    username: String,
    pub email: String,
    password: String,
    #[serde(default)]
    points: u32,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub results: Vec<ResultEntry>,
    #[serde(default)]
    achievements: Vec<Achievement>,
}

impl UserRecord {
    /// A fresh record with zero points and empty histories
    ///
    /// `password` is stored as given; callers pass an encoded hash.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            points: 0,
            challenges: Vec::new(),
            results: Vec::new(),
            achievements: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Stored password credential (encoded hash, or plaintext for legacy records)
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Append an achievement stamped with the current time and update the total
    pub fn award_achievement(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        points: u32,
    ) -> &Achievement {
        self.award_achievement_at(title, description, points, timestamp::now_minute_stamp())
    }

    /// Append an achievement with an explicit timestamp
    pub fn award_achievement_at(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        points: u32,
        timestamp: impl Into<String>,
    ) -> &Achievement {
        self.achievements.push(Achievement {
            title: title.into(),
            description: description.into(),
            points,
            timestamp: timestamp.into(),
        });
        self.points = self.achievement_total();
        &self.achievements[self.achievements.len() - 1]
    }

    /// Sum of all awarded points
    pub fn achievement_total(&self) -> u32 {
        self.achievements
            .iter()
            .fold(0u32, |acc, a| acc.saturating_add(a.points))
    }

    /// Bring the stored total back in line with the achievement log.
    ///
    /// Returns the previous stored value when it had drifted.
    pub fn reconcile_points(&mut self) -> Option<u32> {
        let derived = self.achievement_total();
        if derived == self.points {
            return None;
        }
        let stale = self.points;
        self.points = derived;
        Some(stale)
    }
}
