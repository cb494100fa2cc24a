//! Validated argument types for the gamelogs CLI.

use crate::error::{MsfError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;


/// Type-safe wrapper for week numbers (1-40).
///
/// # Examples
///
/// ```rust
/// use msf_gamelogs::cli::types::Week;
///
/// let week: Week = "17".parse().unwrap();
/// assert_eq!(week.as_u8(), 17);
/// assert!("41".parse::<Week>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Week(u8);

impl Week {
    pub const MAX: u8 = 40;

    pub fn new(week: u8) -> Result<Self> {
        if (1..=Self::MAX).contains(&week) {
            Ok(Self(week))
        } else {
            Err(MsfError::InvalidArgument {
                kind: "week",
                value: week.to_string(),
            })
        }
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = MsfError;

    fn from_str(s: &str) -> Result<Self> {
        let week = s.trim().parse::<u8>().map_err(|_| MsfError::InvalidArgument {
            kind: "week",
            value: s.to_string(),
        })?;
        Self::new(week)
    }
}

/// Calendar date in the feed's `YYYYMMDD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameDate(NaiveDate);

impl GameDate {
    const FORMAT: &'static str = "%Y%m%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for GameDate {
    type Err = MsfError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        // chrono accepts short years; the feed wants exactly eight digits
        if trimmed.len() != 8 {
            return Err(MsfError::InvalidArgument {
                kind: "date",
                value: s.to_string(),
            });
        }
        NaiveDate::parse_from_str(trimmed, Self::FORMAT)
            .map(Self)
            .map_err(|_| MsfError::InvalidArgument {
                kind: "date",
                value: s.to_string(),
            })
    }
}
