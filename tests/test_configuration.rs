//! Loading holiday calendars from JSON and using them to build calendars.

use std::sync::Arc;

use chrono::NaiveDate;

use holical::configuration::Configuration;
use holical::country::german::germanfederalstate::GermanFederalState;
use holical::country::german::simplegermanholidaycalendarconfigurer::SimpleGermanHolidayCalendarConfigurer;
use holical::manager::manager::IManager;
use holical::manager::managererror::ManagerError;
use holical::time::calendar::holidaycalendar::HolidayCalendar;

const CONFIG: &str = r#"
{
    "administrative_area": [
        { "iso": "DE-SN", "name": "Sachsen" },
        { "iso": "DE-BY", "name": "Bayern" }
    ],
    "holiday_calendar": [
        {
            "name": "Saxony",
            "holidays": [
                { "holiday_type": "FixedDate", "month": 1, "day": 1, "holiday_name": "Neujahr" },
                { "holiday_type": "EasterRelated", "shift_days": -2, "holiday_name": "Karfreitag" },
                { "holiday_type": "EasterRelated", "shift_days": 60, "holiday_name": "Fronleichnam", "areas": ["DE-BY"] },
                { "holiday_type": "WeekdayOnOrBefore", "weekday": "Wed", "month": 11, "day": 22,
                  "first_year": 1995, "holiday_name": "Buß- und Bettag", "areas": ["DE-SN"] },
                { "holiday_type": "FixedDate", "month": 12, "day": 25, "holiday_name": "Erster Weihnachtstag" }
            ]
        }
    ]
}
"#;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn json_calendar_matches_builtin_catalog() {
    let config = Configuration::new();
    config.from_json_str(CONFIG).unwrap();
    assert_eq!(config.administrative_area_manager().names(), vec!["DE-BY", "DE-SN"]);

    let configurer = config.holiday_calendar_configurer_manager().get("Saxony").unwrap();
    let from_json = HolidayCalendar::builder()
        .for_year(2021)
        .configurer(configurer)
        .build()
        .unwrap();
    let builtin = HolidayCalendar::builder()
        .for_year(2021)
        .configurer(Arc::new(SimpleGermanHolidayCalendarConfigurer))
        .build()
        .unwrap();

    let sachsen = [GermanFederalState::Sachsen.area()];
    let bayern = [GermanFederalState::Bayern.area()];
    for date in from_json.holidays().keys() {
        assert_eq!(from_json.is_holiday(*date, &sachsen), builtin.is_holiday(*date, &sachsen), "{date}");
        assert_eq!(from_json.is_holiday(*date, &bayern), builtin.is_holiday(*date, &bayern), "{date}");
    }
    assert!(from_json.is_holiday(ymd(2021, 11, 17), &sachsen));
    assert!(!from_json.is_holiday(ymd(2021, 11, 17), &bayern));
    assert!(from_json.is_holiday(ymd(2021, 6, 3), &bayern));
}

#[test]
fn unknown_calendar_name() {
    let config = Configuration::new();
    config.from_json_str(CONFIG).unwrap();
    let err = config.holiday_calendar_configurer_manager().get("Bavaria").unwrap_err();
    assert!(matches!(err, ManagerError::NameNotFoundError(_)));
}

#[test]
fn calendars_need_their_areas_declared() {
    let config = Configuration::new();
    let json = r#"{
        "holiday_calendar": [
            { "name": "Broken", "holidays": [
                { "holiday_type": "EasterRelated", "shift_days": 1, "areas": ["DE-BY"] }
            ] }
        ]
    }"#;
    let err = config.from_json_str(json).unwrap_err();
    assert_eq!(err.to_string(), "key 'DE-BY' not found");
}

#[test]
fn malformed_document() {
    let config = Configuration::new();
    assert!(matches!(config.from_json_str("{\"holiday_calendar\": 3}"), Err(ManagerError::JsonParseError(_))));
    assert!(matches!(
        config.from_json_str(r#"{"holiday_calendar": [{"name": "x", "holidays": [{"holiday_type": "Lunar"}]}]}"#),
        Err(ManagerError::JsonParseError(_))
    ));
}
