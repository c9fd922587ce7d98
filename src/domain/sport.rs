use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The sports a challenge or result can be logged against
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sport {
    Running,
    Swimming,
    Cycling,
    Basketball,
    Football,
    Volleyball,
    Gymnastics,
    Other,
    /// A stored name outside the catalogue, kept exactly as written
    Custom(String),
}

/// All selectable sports, in menu order
pub static SPORTS: &[Sport] = &[
    Sport::Running,
    Sport::Swimming,
    Sport::Cycling,
    Sport::Basketball,
    Sport::Football,
    Sport::Volleyball,
    Sport::Gymnastics,
    Sport::Other,
];

impl Sport {
    /// Get the key used in stored records
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "running",
            Self::Swimming => "swimming",
            Self::Cycling => "cycling",
            Self::Basketball => "basketball",
            Self::Football => "football",
            Self::Volleyball => "volleyball",
            Self::Gymnastics => "gymnastics",
            Self::Other => "other",
            Self::Custom(name) => name,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &str {
        match self {
            Self::Running => "Running",
            Self::Swimming => "Swimming",
            Self::Cycling => "Cycling",
            Self::Basketball => "Basketball",
            Self::Football => "Football",
            Self::Volleyball => "Volleyball",
            Self::Gymnastics => "Gymnastics",
            Self::Other => "Other",
            Self::Custom(name) => name,
        }
    }

    /// Catalogue entry whose key or label matches `name`, ignoring case
    fn lookup(name: &str) -> Option<Sport> {
        SPORTS
            .iter()
            .find(|sport| {
                sport.as_str().eq_ignore_ascii_case(name)
                    || sport.label().eq_ignore_ascii_case(name)
            })
            .cloned()
    }
}

impl From<String> for Sport {
    /// Read a stored name. Names outside the catalogue survive unchanged.
    fn from(name: String) -> Self {
        Self::lookup(name.trim()).unwrap_or(Sport::Custom(name))
    }
}

impl From<Sport> for String {
    fn from(sport: Sport) -> Self {
        match sport {
            Sport::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Sport {
    type Err = ValidationError;

    /// Parse form input; only catalogue sports are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.is_empty() {
            return Err(ValidationError::BlankField("sport"));
        }
        Self::lookup(wanted).ok_or_else(|| ValidationError::UnknownSport(wanted.to_string()))
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Running".parse::<Sport>(), Ok(Sport::Running));
        assert_eq!("  SWIMMING ".parse::<Sport>(), Ok(Sport::Swimming));
    }

    #[test]
    fn rejects_blank_and_unknown() {
        assert_eq!(
            "".parse::<Sport>(),
            Err(ValidationError::BlankField("sport"))
        );
        assert_eq!(
            "curling".parse::<Sport>(),
            Err(ValidationError::UnknownSport("curling".to_string()))
        );
    }

    #[test]
    fn stored_catalogue_names_match_ignoring_case() {
        let sport: Sport = serde_json::from_str("\"Running\"").unwrap();
        assert_eq!(sport, Sport::Running);
        assert_eq!(serde_json::to_string(&Sport::Cycling).unwrap(), "\"cycling\"");
    }

    #[test]
    fn unknown_stored_name_is_kept_verbatim() {
        let sport: Sport = serde_json::from_str("\"Skriešana\"").unwrap();
        assert_eq!(sport, Sport::Custom("Skriešana".to_string()));
        assert_eq!(sport.label(), "Skriešana");
        assert_eq!(serde_json::to_string(&sport).unwrap(), "\"Skriešana\"");
    }
}
