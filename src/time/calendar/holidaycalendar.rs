use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use tracing::{debug, trace};

use crate::time::calendar::holidaycalendarconfigurer::HolidayCalendarConfigurer;
use crate::time::holidayerror::HolidayError;
use crate::time::period::Period;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::recurringholiday::administrativearea::AdministrativeArea;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// The concrete holidays of a period of at most one year.
///
/// Each holiday added is resolved to the single date it falls on inside the
/// period; at most one holiday is kept per date.
pub struct HolidayCalendar {
    period: RangeOfDates,
    holidays: BTreeMap<NaiveDate, Arc<RecurringHoliday>>
}

impl HolidayCalendar {
    pub fn builder() -> HolidayCalendarBuilder {
        HolidayCalendarBuilder::default()
    }

    pub fn period(&self) -> RangeOfDates {
        self.period
    }

    pub fn period_start(&self) -> NaiveDate {
        self.period.start_date()
    }

    pub fn period_end(&self) -> NaiveDate {
        self.period.end_date()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// All concrete holidays of the period, ordered by date.
    pub fn holidays(&self) -> &BTreeMap<NaiveDate, Arc<RecurringHoliday>> {
        &self.holidays
    }

    pub fn get_holiday(&self, d: NaiveDate) -> Option<&RecurringHoliday> {
        self.holidays.get(&d).map(|holiday| holiday.as_ref())
    }

    /// True if `holiday` takes place within the period.
    ///
    /// Inside a single calendar year the holiday has to satisfy both bounds.
    /// For a period crossing new year its date in the start year is checked
    /// against the start and its date in the end year against the end, and
    /// either match is enough.
    pub fn is_in_period(&self, holiday: &RecurringHoliday) -> Result<bool, HolidayError> {
        let not_before_start = holiday.get_date(self.period.start_year())? >= self.period_start();
        let not_after_end = holiday.get_date(self.period.end_year())? <= self.period_end();
        if self.period.spans_year_boundary() {
            Ok(not_before_start || not_after_end)
        } else {
            Ok(not_before_start && not_after_end)
        }
    }

    /// The date on which `holiday` takes place within the period: its date in
    /// the start year if that is not before the period start, otherwise its
    /// date in the end year.
    pub fn get_concrete_date(&self, holiday: &RecurringHoliday) -> Result<NaiveDate, HolidayError> {
        let in_start_year = holiday.get_date(self.period.start_year())?;
        // `>=` keeps a holiday on the first day of a cross-year period inside the period
        if in_start_year >= self.period_start() {
            return Ok(in_start_year);
        }
        holiday.get_date(self.period.end_year())
    }

    /// Adds `holiday` at its concrete date if it falls inside the period,
    /// replacing whatever holiday was stored for that date.
    ///
    /// Returns whether the holiday was added. An error from resolving the
    /// holiday's date (e.g. 29 February in a common start year) is returned
    /// as is, so inside a configurer it aborts building the calendar.
    pub fn add_holiday<H>(&mut self, holiday: H) -> Result<bool, HolidayError>
    where H: Into<Arc<RecurringHoliday>> {
        let holiday: Arc<RecurringHoliday> = holiday.into();
        if !self.is_in_period(&holiday)? {
            trace!("Skipped holiday outside of period: {} ({})", holiday.name(), holiday.key());
            return Ok(false);
        }

        let date = self.get_concrete_date(&holiday)?;
        if let Some(replaced) = self.holidays.insert(date, Arc::clone(&holiday)) {
            debug!("Replaced holiday on {}: {} -> {}", date, replaced.name(), holiday.name());
        } else {
            trace!("Added holiday on {}: {}", date, holiday.name());
        }
        Ok(true)
    }

    /// True if a holiday observed in any of `areas` falls on `d`. Without
    /// areas only nationwide holidays count.
    pub fn is_holiday(&self, d: NaiveDate, areas: &[AdministrativeArea]) -> bool {
        self.holidays
            .get(&d)
            .is_some_and(|holiday| holiday.is_observed_in(areas))
    }

    pub fn is_working_day(&self, d: NaiveDate, areas: &[AdministrativeArea]) -> bool {
        !HolidayCalendar::is_weekend(d) && !self.is_holiday(d, areas)
    }

    /// True for Saturdays and Sundays.
    #[inline]
    pub fn is_weekend(d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// The first working day on or after `d` within the period, or `None` if
    /// `d` precedes the period or no working day is left in it.
    pub fn next_working_day(&self, d: NaiveDate, areas: &[AdministrativeArea]) -> Option<NaiveDate> {
        if !self.period.contain(d) {
            return None;
        }
        self.period
            .iter_from(d)
            .find(|tested| self.is_working_day(*tested, areas))
    }
}

impl fmt::Debug for HolidayCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayCalendar")
            .field("period_start", &self.period_start())
            .field("period_end", &self.period_end())
            .field("holidays", &self.holidays.iter().map(|(d, h)| (*d, h.name())).collect::<Vec<_>>())
            .finish()
    }
}

/// Collects the period and the configurer of a `HolidayCalendar` and
/// validates them all at once in `build`.
#[derive(Default, Clone)]
pub struct HolidayCalendarBuilder {
    period_start: Option<NaiveDate>,
    period_end: Option<NaiveDate>,
    configurer: Option<Arc<dyn HolidayCalendarConfigurer>>
}

impl HolidayCalendarBuilder {
    pub fn period_start(mut self, start: NaiveDate) -> HolidayCalendarBuilder {
        self.period_start = Some(start);
        self
    }

    pub fn period_end(mut self, end: NaiveDate) -> HolidayCalendarBuilder {
        self.period_end = Some(end);
        self
    }

    /// 1 January to 31 December of `year`.
    pub fn for_year(mut self, year: i32) -> HolidayCalendarBuilder {
        self.period_start = NaiveDate::from_ymd_opt(year, 1, 1);
        self.period_end = NaiveDate::from_ymd_opt(year, 12, 31);
        self
    }

    /// One year beginning on `begin`, i.e. up to the day before its anniversary.
    pub fn for_relative_year(mut self, begin: NaiveDate) -> HolidayCalendarBuilder {
        self.period_start = Some(begin);
        self.period_end = Period::years(1)
            .checked_add_to(begin)
            .and_then(|anniversary| Period::days(1).checked_sub_from(anniversary));
        self
    }

    pub fn configurer(mut self, configurer: Arc<dyn HolidayCalendarConfigurer>) -> HolidayCalendarBuilder {
        self.configurer = Some(configurer);
        self
    }

    pub fn build(self) -> Result<HolidayCalendar, HolidayError> {
        let start = self.period_start.ok_or_else(|| {
            HolidayError::InvalidConfiguration("the beginning of the period in a holiday calendar must be set".to_owned())
        })?;
        let end = self.period_end.ok_or_else(|| {
            HolidayError::InvalidConfiguration("the end of the period in a holiday calendar must be set".to_owned())
        })?;
        if end < start {
            return Err(HolidayError::InvalidConfiguration(format!(
                "the end of the period ({}) must not be earlier than its beginning ({})", end, start
            )));
        }
        // A missing anniversary means `start + 1Y` is beyond the last
        // representable date, so every `end` is within one year.
        if Period::years(1).checked_add_to(start).is_some_and(|max_end| end > max_end) {
            return Err(HolidayError::InvalidConfiguration(format!(
                "the period {} to {} is longer than one year", start, end
            )));
        }

        let mut holiday_calendar = HolidayCalendar {
            period: RangeOfDates::new(start, end),
            holidays: BTreeMap::new()
        };
        if let Some(configurer) = self.configurer {
            configurer.configure(&mut holiday_calendar)?;
        }
        debug!(
            "Built holiday calendar for {} to {} with {} holidays",
            start,
            end,
            holiday_calendar.len()
        );
        Ok(holiday_calendar)
    }
}
