use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PaginationError, PaginationResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, Direction::Asc)
    }
}

impl FromStr for Direction {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(PaginationError::InvalidArgument(format!(
                "Unknown sort direction '{other}'"
            ))),
        }
    }
}

/// One parsed sort clause, written as `"field,asc"` or `"field,desc"`.
///
/// The direction may be omitted, in which case it is ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOrder {
    pub property: String,
    pub direction: Direction,
}

impl SortOrder {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Desc,
        }
    }

    /// Parse every clause of a pagination's sort list, keeping their order.
    pub fn parse_all(clauses: &[String]) -> PaginationResult<Vec<SortOrder>> {
        clauses.iter().map(|clause| clause.parse()).collect()
    }
}

impl FromStr for SortOrder {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (property, direction) = match s.split_once(',') {
            Some((property, direction)) => (property.trim(), direction.parse()?),
            None => (s.trim(), Direction::Asc),
        };
        if property.is_empty() {
            return Err(PaginationError::InvalidArgument(format!(
                "Sort clause '{s}' has no property"
            )));
        }
        Ok(Self {
            property: property.to_string(),
            direction,
        })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.property, self.direction.as_str())
    }
}
