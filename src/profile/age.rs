//! Completed-birthday age from a masked birth date

use crate::error::{ProfileError, Result};
use chrono::{Datelike, NaiveDate};

/// Parse a `DD/MM/YYYY` string into a calendar date.
///
/// Anything other than three `/`-separated components of 2, 2 and 4 ASCII
/// digits, or a day/month pair that does not exist, is `MalformedDate`.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
    let malformed = || ProfileError::MalformedDate {
        input: input.to_string(),
    };

    let parts: Vec<&str> = input.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(malformed());
    };

    let well_formed = [(day, 2), (month, 2), (year, 4)]
        .iter()
        .all(|(part, len)| part.len() == *len && part.chars().all(|c| c.is_ascii_digit()));
    if !well_formed {
        return Err(malformed());
    }

    let day: u32 = day.parse().map_err(|_| malformed())?;
    let month: u32 = month.parse().map_err(|_| malformed())?;
    let year: i32 = year.parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Whole years between `birth` and `today`, counting only birthdays already reached
pub fn completed_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// Age on `today` for a masked birth date string.
///
/// A birth date after `today` gives a negative age; only the shape of the
/// date is checked here.
pub fn age_on(date_str: &str, today: NaiveDate) -> Result<i32> {
    let birth = parse_birth_date(date_str)?;
    Ok(completed_years(birth, today))
}
