use std::sync::Arc;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::holidayerror::HolidayError;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// Populates a freshly built, empty `HolidayCalendar` with the holidays of a
/// country or region.
///
/// Called exactly once by `HolidayCalendarBuilder::build`. Returning an error
/// aborts the construction of the calendar.
pub trait HolidayCalendarConfigurer: Send + Sync {
    fn configure(&self, holiday_calendar: &mut HolidayCalendar) -> Result<(), HolidayError>;
}

impl<F> HolidayCalendarConfigurer for F
where F: Fn(&mut HolidayCalendar) -> Result<(), HolidayError> + Send + Sync {
    fn configure(&self, holiday_calendar: &mut HolidayCalendar) -> Result<(), HolidayError> {
        self(holiday_calendar)
    }
}

/// Adds a fixed list of holidays in order, so a later entry wins if two
/// resolve to the same date.
#[derive(Clone, Debug, Default)]
pub struct HolidayListConfigurer {
    holidays: Vec<Arc<RecurringHoliday>>
}

impl HolidayListConfigurer {
    pub fn new(holidays: Vec<Arc<RecurringHoliday>>) -> HolidayListConfigurer {
        HolidayListConfigurer { holidays }
    }

    pub fn holidays(&self) -> &[Arc<RecurringHoliday>] {
        &self.holidays
    }
}

impl HolidayCalendarConfigurer for HolidayListConfigurer {
    fn configure(&self, holiday_calendar: &mut HolidayCalendar) -> Result<(), HolidayError> {
        for holiday in self.holidays.iter() {
            holiday_calendar.add_holiday(Arc::clone(holiday))?;
        }
        Ok(())
    }
}
