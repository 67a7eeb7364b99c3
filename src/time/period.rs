use std::fmt;

use chrono::{
    Datelike,
    Days,
    NaiveDate
};

use crate::time::utility::days_of_month;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TimeUnit {
    Days,
    Weeks,
    Years
}

impl TimeUnit {
    pub fn to_char(&self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W',
            TimeUnit::Years => 'Y'
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Period {
    number: i32,
    unit: TimeUnit
}

impl Period {
    pub fn new(number: i32, unit: TimeUnit) -> Period {
        Period { number, unit }
    }

    pub fn days(number: i32) -> Period {
        Period::new(number, TimeUnit::Days)
    }

    pub fn weeks(number: i32) -> Period {
        Period::new(number, TimeUnit::Weeks)
    }

    pub fn years(number: i32) -> Period {
        Period::new(number, TimeUnit::Years)
    }

    pub fn negate(&self) -> Period {
        Period::new(-self.number, self.unit)
    }

    /// Shifts `horizon` by this period.
    ///
    /// Year shifts keep month and day, clamping to the last day of the month
    /// (29 February + 1Y = 28 February). Returns `None` when the result leaves
    /// the range representable by `NaiveDate`.
    pub fn checked_add_to(&self, horizon: NaiveDate) -> Option<NaiveDate> {
        match self.unit {
            TimeUnit::Days => shift_days(horizon, self.number as i64),
            TimeUnit::Weeks => shift_days(horizon, 7 * self.number as i64),
            TimeUnit::Years => shift_years(horizon, self.number)
        }
    }

    pub fn checked_sub_from(&self, horizon: NaiveDate) -> Option<NaiveDate> {
        self.negate().checked_add_to(horizon)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit.to_char())
    }
}

fn shift_days(horizon: NaiveDate, number: i64) -> Option<NaiveDate> {
    let days = Days::new(number.unsigned_abs());
    if number >= 0 {
        horizon.checked_add_days(days)
    } else {
        horizon.checked_sub_days(days)
    }
}

fn shift_years(horizon: NaiveDate, number: i32) -> Option<NaiveDate> {
    let new_year = horizon.year().checked_add(number)?;
    let last = days_of_month(new_year, horizon.month());
    NaiveDate::from_ymd_opt(new_year, horizon.month(), last.min(horizon.day()))
}
