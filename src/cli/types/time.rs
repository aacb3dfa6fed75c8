//! Season type for the NHL stats API.

use crate::error::{NhlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Year in which a season started, e.g. `2014` for the 2014-2015 season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Year in which the season ends.
    pub fn end_year(&self) -> u16 {
        self.0 + 1
    }

    /// Season label used in the output table, e.g. `"2019-2020"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.0, self.end_year())
    }

    /// Season parameter expected by the stats API, e.g. `"20192020"`.
    pub fn api_param(&self) -> String {
        format!("{}{}", self.0, self.end_year())
    }

    /// Seasons from `self` through `last`, both inclusive. Empty when `last < self`.
    pub fn through(self, last: Season) -> impl Iterator<Item = Season> {
        (self.0..=last.0).map(Season)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2020)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
