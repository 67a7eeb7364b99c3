use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::time::holidayerror::HolidayError;
use super::administrativearea::{
    AdministrativeArea,
    AdministrativeScope
};
use super::holidayrule::HolidayRule;

pub const GOOD_FRIDAY_SHIFT: i32 = -2;
pub const EASTER_SUNDAY_SHIFT: i32 = 0;
pub const EASTER_MONDAY_SHIFT: i32 = 1;
pub const ASCENSION_OF_CHRIST_SHIFT: i32 = 39;
pub const WHIT_SUNDAY_SHIFT: i32 = 49;
pub const WHIT_MONDAY_SHIFT: i32 = 50;
pub const CORPUS_CHRISTI_SHIFT: i32 = 60;

/// First year of the current statutory regulation of the Day of Prayer and Repentance.
pub const DAY_OF_PRAYER_AND_REPENTANCE_FIRST_YEAR: i32 = 1995;

/// An annually recurring holiday: a date rule plus key, name and the areas
/// it is observed in.
///
/// Values are immutable once built and meant to be shared through `Arc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecurringHoliday {
    key: String,
    name: String,
    scope: AdministrativeScope,
    rule: HolidayRule
}

fn default_key(type_name: &str) -> String {
    format!("{}::{}", env!("CARGO_CRATE_NAME"), type_name)
}

fn checked_name(name: String, key: &str) -> Result<String, HolidayError> {
    if name.trim().is_empty() {
        return Err(HolidayError::InvalidConfiguration(format!("the name of {} must not be empty", key)));
    }
    Ok(name)
}

impl RecurringHoliday {
    fn with_default_naming(type_name: &str, rule: HolidayRule) -> RecurringHoliday {
        RecurringHoliday {
            key: default_key(type_name),
            name: type_name.to_owned(),
            scope: AdministrativeScope::nationwide(),
            rule
        }
    }

    /// A holiday on the same month and day every year.
    ///
    /// Unlike the other kinds a fixed-date holiday has no default name, so an
    /// empty `name` is rejected.
    pub fn fixed_date(month: u32, day: u32, name: impl Into<String>) -> Result<RecurringHoliday, HolidayError> {
        let rule = HolidayRule::fixed_date(month, day)?;
        RecurringHoliday::with_default_naming("FixedHoliday", rule).with_name(name)
    }

    /// Easter Sunday shifted by `shift_days`. Well known shifts get the name
    /// of their feast as default name.
    pub fn easter_related(shift_days: i32) -> RecurringHoliday {
        let type_name = match shift_days {
            GOOD_FRIDAY_SHIFT => "GoodFriday",
            EASTER_SUNDAY_SHIFT => "EasterSunday",
            EASTER_MONDAY_SHIFT => "EasterMonday",
            ASCENSION_OF_CHRIST_SHIFT => "AscensionOfChrist",
            WHIT_SUNDAY_SHIFT => "WhitSunday",
            WHIT_MONDAY_SHIFT => "WhitMonday",
            CORPUS_CHRISTI_SHIFT => "CorpusChristi",
            _ => "EasterRelatedHoliday"
        };
        RecurringHoliday::with_default_naming(type_name, HolidayRule::easter_related(shift_days))
    }

    pub fn good_friday() -> RecurringHoliday {
        RecurringHoliday::easter_related(GOOD_FRIDAY_SHIFT)
    }

    pub fn easter_sunday() -> RecurringHoliday {
        RecurringHoliday::easter_related(EASTER_SUNDAY_SHIFT)
    }

    pub fn easter_monday() -> RecurringHoliday {
        RecurringHoliday::easter_related(EASTER_MONDAY_SHIFT)
    }

    pub fn ascension_of_christ() -> RecurringHoliday {
        RecurringHoliday::easter_related(ASCENSION_OF_CHRIST_SHIFT)
    }

    pub fn whit_sunday() -> RecurringHoliday {
        RecurringHoliday::easter_related(WHIT_SUNDAY_SHIFT)
    }

    pub fn whit_monday() -> RecurringHoliday {
        RecurringHoliday::easter_related(WHIT_MONDAY_SHIFT)
    }

    pub fn corpus_christi() -> RecurringHoliday {
        RecurringHoliday::easter_related(CORPUS_CHRISTI_SHIFT)
    }

    /// `weekday` on or before `(month, day)`, calculable from `first_year` on.
    pub fn weekday_on_or_before(weekday: Weekday, month: u32, day: u32, first_year: Option<i32>) -> Result<RecurringHoliday, HolidayError> {
        let rule = HolidayRule::weekday_on_or_before(weekday, month, day, first_year)?;
        Ok(RecurringHoliday::with_default_naming("WeekdayOnOrBeforeHoliday", rule))
    }

    /// The Wednesday on or before 22 November, from 1995 onward.
    pub fn day_of_prayer_and_repentance() -> RecurringHoliday {
        let rule = HolidayRule::WeekdayOnOrBefore {
            weekday: Weekday::Wed,
            month: 11,
            day: 22,
            first_year: Some(DAY_OF_PRAYER_AND_REPENTANCE_FIRST_YEAR)
        };
        RecurringHoliday::with_default_naming("DayOfPrayerAndRepentance", rule)
    }

    pub fn with_key(mut self, key: impl Into<String>) -> RecurringHoliday {
        self.key = key.into();
        self
    }

    /// Replaces the name; a blank `name` is rejected.
    pub fn with_name(mut self, name: impl Into<String>) -> Result<RecurringHoliday, HolidayError> {
        self.name = checked_name(name.into(), &self.key)?;
        Ok(self)
    }

    /// Restricts the holiday to `areas`; an empty iterator keeps it nationwide.
    pub fn with_areas<I>(mut self, areas: I) -> RecurringHoliday
    where I: IntoIterator<Item = AdministrativeArea> {
        self.scope = AdministrativeScope::new(areas);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &AdministrativeScope {
        &self.scope
    }

    pub fn rule(&self) -> &HolidayRule {
        &self.rule
    }

    pub fn min_year(&self) -> i32 {
        self.rule.min_year()
    }

    pub fn max_year(&self) -> i32 {
        self.rule.max_year()
    }

    pub fn is_valid_year(&self, year: i32) -> bool {
        self.rule.is_valid_year(year)
    }

    #[inline]
    pub fn is_nationwide(&self) -> bool {
        self.scope.is_nationwide()
    }

    pub fn is_observed_in(&self, areas: &[AdministrativeArea]) -> bool {
        self.scope.is_observed_in(areas)
    }

    pub fn get_date(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        self.rule.get_date(year).map_err(|error| match (&self.rule, error) {
            (HolidayRule::EasterRelated { .. }, HolidayError::OutOfRange(_)) => HolidayError::OutOfRange(format!(
                "the calculation of {} relies on EasterSunday and therefore can only be determined for the years between {} and {}",
                self.name,
                self.min_year(),
                self.max_year()
            )),
            (_, HolidayError::OutOfRange(reason)) => HolidayError::OutOfRange(format!(
                "{} cannot be determined for the year {}: {}", self.name, year, reason
            )),
            (_, other) => other
        })
    }

    pub fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_date(d.year()).is_ok_and(|date| date == *d)
    }
}

/// True if `holiday` is observed in `area`.
pub fn area_has_holiday(area: &AdministrativeArea, holiday: &RecurringHoliday) -> bool {
    holiday.is_nationwide() || holiday.scope().contains(area)
}
