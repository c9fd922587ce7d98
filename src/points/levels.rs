//! Level thresholds and titles

/// Level definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub rank: u32,
    pub points_required: u32,
    pub title: &'static str,
}

/// All level definitions (must be sorted by rank)
pub static LEVELS: &[Level] = &[
    Level {
        rank: 1,
        points_required: 0,
        title: "Beginner",
    },
    Level {
        rank: 2,
        points_required: 100,
        title: "Athlete",
    },
    Level {
        rank: 3,
        points_required: 300,
        title: "Master",
    },
    Level {
        rank: 4,
        points_required: 600,
        title: "Champion",
    },
];

impl Level {
    /// Level reached with `points`
    pub fn for_points(points: u32) -> &'static Level {
        LEVELS
            .iter()
            .rev()
            .find(|l| points >= l.points_required)
            .unwrap_or(&LEVELS[0])
    }

    /// The level after this one (None at the top)
    pub fn next(&self) -> Option<&'static Level> {
        LEVELS.iter().find(|l| l.rank == self.rank + 1)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_points() {
        assert_eq!(Level::for_points(0).title, "Beginner");
        assert_eq!(Level::for_points(99).title, "Beginner");
        assert_eq!(Level::for_points(100).title, "Athlete");
        assert_eq!(Level::for_points(299).title, "Athlete");
        assert_eq!(Level::for_points(300).title, "Master");
        assert_eq!(Level::for_points(599).title, "Master");
        assert_eq!(Level::for_points(600).title, "Champion");
        assert_eq!(Level::for_points(100_000).title, "Champion"); // Beyond max
    }

    #[test]
    fn test_next_level() {
        assert_eq!(Level::for_points(0).next().map(|l| l.title), Some("Athlete"));
        assert!(Level::for_points(600).next().is_none());
    }
}
