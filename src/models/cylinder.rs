//! Cylinder addressing and sweep direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cylinder number on the disk surface.
///
/// Legal request cylinders lie in `[0, capacity]`. The head itself is not
/// range-checked by the engine.
pub type Cylinder = i64;

/// Preferred initial travel direction for the sweeping policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward higher cylinder numbers (toward `capacity`).
    #[default]
    Up,
    /// Toward lower cylinder numbers (toward 0).
    Down,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The physical end of the disk reached when travelling this way.
    pub fn limit(self, capacity: Cylinder) -> Cylinder {
        match self {
            Direction::Up => capacity,
            Direction::Down => 0,
        }
    }

    /// Lowercase name (`"up"` / `"down"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a direction name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sweep direction: {0}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit() {
        assert_eq!(Direction::Up.limit(199), 199);
        assert_eq!(Direction::Down.limit(199), 0);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Direction::Up.reversed(), Direction::Down);
        assert_eq!(Direction::Down.reversed(), Direction::Up);
    }

    #[test]
    fn test_parse() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!(" DOWN ".parse::<Direction>().unwrap(), Direction::Down);

        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err.to_string(), "unknown sweep direction: sideways");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
        let d: Direction = serde_json::from_str("\"up\"").unwrap();
        assert_eq!(d, Direction::Up);
    }
}
