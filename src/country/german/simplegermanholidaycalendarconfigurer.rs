use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarconfigurer::HolidayCalendarConfigurer;
use crate::time::holidayerror::HolidayError;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use super::germanfederalstate::GermanFederalState::{
    self,
    BadenWuerttemberg,
    Bayern,
    Berlin,
    Brandenburg,
    Bremen,
    Hamburg,
    Hessen,
    MecklenburgVorpommern,
    Niedersachsen,
    NordrheinWestfalen,
    RheinlandPfalz,
    Saarland,
    Sachsen,
    SachsenAnhalt,
    SchleswigHolstein,
    Thueringen
};

fn in_states(holiday: RecurringHoliday, states: &[GermanFederalState]) -> RecurringHoliday {
    holiday.with_areas(states.iter().map(|state| state.area()))
}

fn fixed(day: u32, month: u32, name: &str, states: &[GermanFederalState]) -> Result<RecurringHoliday, HolidayError> {
    Ok(in_states(RecurringHoliday::fixed_date(month, day, name)?, states))
}

/// Public holidays of Germany by federal state, without one-off holidays.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleGermanHolidayCalendarConfigurer;

impl HolidayCalendarConfigurer for SimpleGermanHolidayCalendarConfigurer {
    fn configure(&self, holiday_calendar: &mut HolidayCalendar) -> Result<(), HolidayError> {
        let holidays = [
            fixed(1, 1, "Neujahr", &[])?,
            fixed(6, 1, "Heilige Drei Könige", &[BadenWuerttemberg, Bayern, SachsenAnhalt])?,
            fixed(8, 3, "Frauentag", &[Berlin])?,
            RecurringHoliday::good_friday().with_name("Karfreitag")?,
            RecurringHoliday::easter_sunday().with_name("Ostersonntag")?,
            RecurringHoliday::easter_monday().with_name("Ostermontag")?,
            RecurringHoliday::ascension_of_christ().with_name("Christi Himmelfahrt")?,
            RecurringHoliday::whit_sunday().with_name("Pfingstsonntag")?,
            RecurringHoliday::whit_monday().with_name("Pfingstmontag")?,
            fixed(1, 5, "Tag der Arbeit", &[])?,
            in_states(
                RecurringHoliday::corpus_christi().with_name("Fronleichnam")?,
                &[BadenWuerttemberg, Bayern, Hessen, NordrheinWestfalen, RheinlandPfalz, Saarland]
            ),
            fixed(15, 8, "Mariä Himmelfahrt", &[Saarland])?,
            fixed(20, 9, "Weltkindertag", &[Thueringen])?,
            fixed(3, 10, "Tag der Deutschen Einheit", &[])?,
            fixed(31, 10, "Reformationstag", &[
                Brandenburg,
                Bremen,
                Hamburg,
                MecklenburgVorpommern,
                Niedersachsen,
                Sachsen,
                SachsenAnhalt,
                SchleswigHolstein,
                Thueringen
            ])?,
            fixed(1, 11, "Allerheiligen", &[BadenWuerttemberg, Bayern, NordrheinWestfalen, RheinlandPfalz, Saarland])?,
            in_states(
                RecurringHoliday::day_of_prayer_and_repentance().with_name("Buß- und Bettag")?,
                &[Sachsen]
            ),
            fixed(25, 12, "Erster Weihnachtstag", &[])?,
            fixed(26, 12, "Zweiter Weihnachtstag", &[])?
        ];

        for holiday in holidays {
            holiday_calendar.add_holiday(holiday)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar_2021() -> HolidayCalendar {
        HolidayCalendar::builder()
            .for_year(2021)
            .configurer(Arc::new(SimpleGermanHolidayCalendarConfigurer))
            .build()
            .unwrap()
    }

    #[test]
    fn configure() {
        let calendar = calendar_2021();
        assert!(calendar.is_holiday(ymd(2021, 11, 17), &[Sachsen.area()]));
        assert!(!calendar.is_holiday(ymd(2021, 10, 31), &[Bayern.area()]));
    }

    #[test]
    fn all_holidays_of_2021_are_present() {
        let calendar = calendar_2021();
        assert_eq!(calendar.len(), 19);
        assert_eq!(calendar.get_holiday(ymd(2021, 4, 2)).map(|h| h.name()), Some("Karfreitag"));
        assert_eq!(calendar.get_holiday(ymd(2021, 6, 3)).map(|h| h.name()), Some("Fronleichnam"));
        assert!(calendar.is_holiday(ymd(2021, 6, 3), &[Hessen.area()]));
        assert!(!calendar.is_holiday(ymd(2021, 6, 3), &[Berlin.area()]));
        assert!(calendar.is_holiday(ymd(2021, 10, 3), &[]));
    }

    #[test]
    fn next_working_day_after_easter() {
        let calendar = calendar_2021();
        // Good Friday, weekend and Easter Monday
        assert_eq!(calendar.next_working_day(ymd(2021, 4, 2), &[]), Some(ymd(2021, 4, 6)));
    }

    #[test]
    fn configuring_before_1995_fails() {
        let result = HolidayCalendar::builder()
            .for_year(1994)
            .configurer(Arc::new(SimpleGermanHolidayCalendarConfigurer))
            .build();
        assert!(result.unwrap_err().is_out_of_range());
    }
}
