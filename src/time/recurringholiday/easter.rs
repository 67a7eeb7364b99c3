use chrono::NaiveDate;

use crate::time::holidayerror::HolidayError;

/// First year of the Gregorian calendar covered by the Easter formula.
pub const EASTER_MIN_YEAR: i32 = 1583;
/// Last year for which the formula yields valid dates.
pub const EASTER_MAX_YEAR: i32 = 8202;

/// Gregorian Easter Sunday of `year` (Gauss' rule in Kinkelin's form).
///
/// Fails with `OutOfRange` outside `EASTER_MIN_YEAR..=EASTER_MAX_YEAR`.
pub fn easter_sunday(year: i32) -> Result<NaiveDate, HolidayError> {
    if !(EASTER_MIN_YEAR..=EASTER_MAX_YEAR).contains(&year) {
        return Err(HolidayError::OutOfRange(format!(
            "EasterSunday can only be determined for the years between {} and {}",
            EASTER_MIN_YEAR,
            EASTER_MAX_YEAR
        )));
    }

    let k = year / 100;
    // secular moon and sun corrections
    let m = 15 + (3 * k + 3) / 4 - (8 * k + 13) / 25;
    let s = 2 - (3 * k + 3) / 4;
    let a = year % 19;
    // seed of the first spring full moon
    let d = (19 * a + m) % 30;
    let r = (d + a / 11) / 29;
    // paschal full moon as a March day
    let og = 21 + d - r;
    // first Sunday in March
    let sz = 7 - (year + year / 4 + s) % 7;
    let oe = 7 - (og - sz) % 7;
    // 32 March is 1 April
    let os = (og + oe) as u32;

    let (month, day) = if os > 31 {
        (4, os - 31)
    } else {
        (3, os)
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        HolidayError::OutOfRange(format!("EasterSunday could not be represented for the year {}", year))
    })
}
