use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse geographic bucket used as a locality proxy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    South,
    East,
    West,
    #[default]
    Central,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "north",
            Region::South => "south",
            Region::East => "east",
            Region::West => "west",
            Region::Central => "central",
        }
    }

    pub fn is_central(&self) -> bool {
        matches!(self, Region::Central)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" => Ok(Region::North),
            "south" => Ok(Region::South),
            "east" => Ok(Region::East),
            "west" => Ok(Region::West),
            "central" => Ok(Region::Central),
            _ => Err(format!("Invalid region: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parsing() {
        assert_eq!("north".parse::<Region>().unwrap(), Region::North);
        assert_eq!(" Central ".parse::<Region>().unwrap(), Region::Central);
        assert!("northeast".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_default_is_central() {
        assert_eq!(Region::default(), Region::Central);
        assert!(Region::default().is_central());
    }
}
