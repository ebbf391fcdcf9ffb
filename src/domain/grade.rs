use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    MiddleSchool,
    HighSchool,
}

/// School grade, levels 7 through 12. Grades 7-9 form the middle-school
/// band, 10-12 the high-school band; knowledge-tag accumulation never
/// crosses the band boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Grade {
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
}

impl Grade {
    pub fn all() -> &'static [Grade] {
        &[
            Grade::Seven,
            Grade::Eight,
            Grade::Nine,
            Grade::Ten,
            Grade::Eleven,
            Grade::Twelve,
        ]
    }

    pub fn level(self) -> u8 {
        match self {
            Grade::Seven => 7,
            Grade::Eight => 8,
            Grade::Nine => 9,
            Grade::Ten => 10,
            Grade::Eleven => 11,
            Grade::Twelve => 12,
        }
    }

    pub fn band(self) -> GradeBand {
        if self.level() <= 9 {
            GradeBand::MiddleSchool
        } else {
            GradeBand::HighSchool
        }
    }
}

impl TryFrom<u8> for Grade {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            7 => Ok(Grade::Seven),
            8 => Ok(Grade::Eight),
            9 => Ok(Grade::Nine),
            10 => Ok(Grade::Ten),
            11 => Ok(Grade::Eleven),
            12 => Ok(Grade::Twelve),
            other => Err(anyhow!("grade level out of range (7-12): {other}")),
        }
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.level()
    }
}

impl FromStr for Grade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level: u8 = s
            .trim()
            .parse()
            .map_err(|_| anyhow!("grade must be a number between 7 and 12: {s}"))?;
        Grade::try_from(level)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(Grade::Nine.band(), GradeBand::MiddleSchool);
        assert_eq!(Grade::Ten.band(), GradeBand::HighSchool);
    }

    #[test]
    fn parses_from_level() {
        assert_eq!("7".parse::<Grade>().unwrap(), Grade::Seven);
        assert_eq!(" 12 ".parse::<Grade>().unwrap(), Grade::Twelve);
        assert!("6".parse::<Grade>().is_err());
        assert!("13".parse::<Grade>().is_err());
    }

    #[test]
    fn ordering_follows_levels() {
        assert!(Grade::Seven < Grade::Nine);
        assert!(Grade::Ten < Grade::Twelve);
    }
}
