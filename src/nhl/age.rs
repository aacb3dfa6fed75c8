//! Player age in hockey "Years-Days" notation.
//!
//! Ages are taken as of a cutoff date in the year a season ends (January 31
//! by default). The year/day split is an approximation: whole 365-day years
//! are peeled off first, then one day per four elapsed calendar years is
//! removed as a leap correction. Output must stay identical to existing
//! datasets, so none of this is calendar-exact.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::{cli::types::Season, error::NhlError, Result};


const DAYS_PER_YEAR: i64 = 365;

/// Month and day of the age cutoff, applied to the year a season ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeCutoff {
    pub month: u32,
    pub day: u32,
}

impl AgeCutoff {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Cutoff date for `season`. Invalid month/day combinations (e.g. Feb 30) are rejected.
    pub fn date_for(&self, season: Season) -> Result<NaiveDate> {
        let year = i32::from(season.end_year());
        NaiveDate::from_ymd_opt(year, self.month, self.day).ok_or_else(|| NhlError::InvalidDate {
            value: format!("{year}-{:02}-{:02}", self.month, self.day),
        })
    }
}

impl Default for AgeCutoff {
    fn default() -> Self {
        Self { month: 1, day: 31 }
    }
}

/// Age rendered as `"{years}-{days}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerAge {
    pub years: i64,
    pub days: i64,
}

impl fmt::Display for PlayerAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.years, self.days)
    }
}

impl Serialize for PlayerAge {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse an API birth date (`YYYY-MM-DD`).
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| NhlError::InvalidDate {
        value: raw.to_string(),
    })
}

/// Compute a player's age for `season`.
///
/// Fails with [`NhlError::BirthAfterCutoff`] when the birth date is later
/// than the cutoff date.
pub fn compute_age(birth_date: NaiveDate, season: Season, cutoff: AgeCutoff) -> Result<PlayerAge> {
    let cutoff_date = cutoff.date_for(season)?;
    let total_days = (cutoff_date - birth_date).num_days();
    if total_days < 0 {
        return Err(NhlError::BirthAfterCutoff {
            birth_date: birth_date.to_string(),
            cutoff: cutoff_date.to_string(),
        });
    }

    let mut years = 0;
    let mut days = total_days;
    while days > DAYS_PER_YEAR {
        years += 1;
        days -= DAYS_PER_YEAR;
    }

    let elapsed_years = i64::from(cutoff_date.year() - birth_date.year());
    days -= leap_days(elapsed_years);

    if days < 0 {
        years -= 1;
        days += DAYS_PER_YEAR;
    }

    Ok(PlayerAge { years, days })
}

/// `elapsed_years / 4` rounded half to even.
fn leap_days(elapsed_years: i64) -> i64 {
    let quotient = elapsed_years.div_euclid(4);
    match elapsed_years.rem_euclid(4) {
        0 | 1 => quotient,
        2 if quotient % 2 == 0 => quotient,
        _ => quotient + 1,
    }
}
