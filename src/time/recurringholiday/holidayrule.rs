use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{
    Deserialize,
    Serialize
};

use crate::time::holidayerror::HolidayError;
use crate::time::period::Period;
use crate::time::utility::is_valid_month_day;
use super::easter::{
    EASTER_MAX_YEAR,
    EASTER_MIN_YEAR,
    easter_sunday
};

/// How the date of a recurring holiday is derived from a year.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum HolidayRule {
    /// Same month and day every year.
    FixedDate { month: u32, day: u32 },
    /// Western Easter Sunday shifted by a number of days.
    EasterRelated { shift_days: i32 },
    /// The given weekday on or before a reference month/day, optionally only
    /// from a statutory first year onward.
    WeekdayOnOrBefore {
        weekday: Weekday,
        month: u32,
        day: u32,
        first_year: Option<i32>
    }
}

impl HolidayRule {
    pub fn fixed_date(month: u32, day: u32) -> Result<HolidayRule, HolidayError> {
        if !is_valid_month_day(month, day) {
            return Err(HolidayError::InvalidConfiguration(format!(
                "no year has a day {} in month {}", day, month
            )));
        }
        Ok(HolidayRule::FixedDate { month, day })
    }

    pub fn easter_related(shift_days: i32) -> HolidayRule {
        HolidayRule::EasterRelated { shift_days }
    }

    pub fn weekday_on_or_before(weekday: Weekday, month: u32, day: u32, first_year: Option<i32>) -> Result<HolidayRule, HolidayError> {
        if !is_valid_month_day(month, day) {
            return Err(HolidayError::InvalidConfiguration(format!(
                "no year has a day {} in month {}", day, month
            )));
        }
        if let Some(year) = first_year {
            if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
                return Err(HolidayError::InvalidConfiguration(format!(
                    "the first year {} lies outside the supported years {} to {}",
                    year,
                    NaiveDate::MIN.year(),
                    NaiveDate::MAX.year()
                )));
            }
        }
        Ok(HolidayRule::WeekdayOnOrBefore { weekday, month, day, first_year })
    }

    pub fn min_year(&self) -> i32 {
        match self {
            HolidayRule::FixedDate { .. } => NaiveDate::MIN.year(),
            HolidayRule::EasterRelated { .. } => EASTER_MIN_YEAR,
            HolidayRule::WeekdayOnOrBefore { first_year, .. } => first_year.unwrap_or(NaiveDate::MIN.year())
        }
    }

    pub fn max_year(&self) -> i32 {
        match self {
            HolidayRule::EasterRelated { .. } => EASTER_MAX_YEAR,
            _ => NaiveDate::MAX.year()
        }
    }

    #[inline]
    pub fn is_valid_year(&self, year: i32) -> bool {
        (self.min_year()..=self.max_year()).contains(&year)
    }

    /// Date of the holiday in `year`.
    ///
    /// The error message is generic; `RecurringHoliday::get_date` rewraps it
    /// with the holiday's name.
    pub fn get_date(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        if !self.is_valid_year(year) {
            return Err(self.out_of_range());
        }

        match *self {
            HolidayRule::FixedDate { month, day } => {
                NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                    HolidayError::OutOfRange(format!("{}-{:02}-{:02} does not exist", year, month, day))
                })
            },
            HolidayRule::EasterRelated { shift_days } => {
                let easter = easter_sunday(year)?;
                Period::days(shift_days)
                    .checked_add_to(easter)
                    .ok_or_else(|| self.out_of_range())
            },
            HolidayRule::WeekdayOnOrBefore { weekday, month, day, .. } => {
                let base = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                    HolidayError::OutOfRange(format!("{}-{:02}-{:02} does not exist", year, month, day))
                })?;
                weekday_on_or_before(base, weekday).ok_or_else(|| self.out_of_range())
            }
        }
    }

    fn out_of_range(&self) -> HolidayError {
        HolidayError::OutOfRange(format!(
            "the holiday can only be determined for the years between {} and {}",
            self.min_year(),
            self.max_year()
        ))
    }
}

/// The `weekday` of the Monday-based week containing `base`, moved back a
/// week if it falls after `base`.
fn weekday_on_or_before(base: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let monday = Period::days(-(base.weekday().num_days_from_monday() as i32)).checked_add_to(base)?;
    let candidate = Period::days(weekday.num_days_from_monday() as i32).checked_add_to(monday)?;
    if candidate > base {
        Period::weeks(1).checked_sub_from(candidate)
    } else {
        Some(candidate)
    }
}
