//! Difficulty tiers.

use serde::{Deserialize, Serialize};

/// Difficulty tier of a topic.
///
/// Tiers are totally ordered: `Beginner < Intermediate < Advanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All tiers in aggregation order
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Lowercase name as used in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "basic" | "b" => Ok(Difficulty::Beginner),
            "intermediate" | "i" => Ok(Difficulty::Intermediate),
            "advanced" | "expert" | "a" => Ok(Difficulty::Advanced),
            _ => anyhow::bail!("Unknown difficulty: {}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);

        let mut tiers = vec![Difficulty::Advanced, Difficulty::Beginner, Difficulty::Intermediate];
        tiers.sort();
        assert_eq!(tiers, Difficulty::ALL.to_vec());
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("beginner".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert_eq!("BASIC".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert_eq!("i".parse::<Difficulty>().unwrap(), Difficulty::Intermediate);
        assert_eq!(" Advanced ".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert_eq!("expert".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("novice".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");

        let parsed: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);
    }
}
