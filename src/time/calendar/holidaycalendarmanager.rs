use std::cell::{
    Ref,
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;
use serde_json;
use tracing::debug;

use crate::manager::manager::{IManager, Manager};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::manager::namedobject::NamedJsonObject;
use crate::time::calendar::holidaycalendarconfigurer::HolidayListConfigurer;
use crate::time::recurringholiday::administrativearea::AdministrativeArea;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

#[derive(Deserialize)]
struct AdministrativeAreaJsonProp {
    iso: String,
    name: String
}

/// Builds an area from `{"iso": .., "name": ..}`; the area is registered
/// under its iso code.
pub fn administrative_area_from_json(json: serde_json::Value) -> Result<(String, AdministrativeArea), ManagerError> {
    let json_prop: AdministrativeAreaJsonProp = parse_json_value(json)?;
    let area = AdministrativeArea::new(json_prop.iso, json_prop.name)?;
    Ok((area.iso().to_owned(), area))
}

#[derive(Deserialize)]
struct CommonHolidayJsonProp {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    holiday_name: Option<String>,
    #[serde(default)]
    areas: Vec<String>
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    shift_days: i32
}

#[derive(Deserialize)]
struct WeekdayOnOrBeforeHolidayJsonProp {
    weekday: Weekday,
    month: u32,
    day: u32,
    #[serde(default)]
    first_year: Option<i32>
}

#[derive(Deserialize)]
enum HolidayType {
    FixedDate,
    EasterRelated,
    WeekdayOnOrBefore
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

fn recurring_holiday_from_json(json: serde_json::Value, area_manager: &Manager<AdministrativeArea>) -> Result<RecurringHoliday, ManagerError> {
    let typed_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    let common: CommonHolidayJsonProp = parse_json_value(json.clone())?;

    let mut holiday = match typed_obj.holiday_type {
        HolidayType::FixedDate => {
            let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
            // a fixed date has no default name, an absent one is rejected
            let name = common.holiday_name.clone().unwrap_or_default();
            RecurringHoliday::fixed_date(json_prop.month, json_prop.day, name)?
        },
        HolidayType::EasterRelated => {
            let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
            RecurringHoliday::easter_related(json_prop.shift_days)
        },
        HolidayType::WeekdayOnOrBefore => {
            let json_prop: WeekdayOnOrBeforeHolidayJsonProp = parse_json_value(json)?;
            RecurringHoliday::weekday_on_or_before(json_prop.weekday, json_prop.month, json_prop.day, json_prop.first_year)?
        }
    };

    if let Some(key) = common.key {
        holiday = holiday.with_key(key);
    }
    if let Some(name) = common.holiday_name {
        holiday = holiday.with_name(name)?;
    }
    let mut areas = Vec::with_capacity(common.areas.len());
    for iso in common.areas.iter() {
        areas.push(area_manager.get(iso)?);
    }
    Ok(holiday.with_areas(areas))
}

#[derive(Deserialize)]
struct HolidayCalendarJsonProp {
    holidays: Vec<serde_json::Value>
}

/// Loads named holiday lists, each becoming a `HolidayListConfigurer`.
///
/// Area codes referenced by the holidays are resolved against the area
/// manager passed as supports, so areas have to be loaded first.
pub struct HolidayCalendarConfigurerManager {
    map_cell: RefCell<HashMap<String, Arc<HolidayListConfigurer>>>
}

impl HolidayCalendarConfigurerManager {
    pub fn new() -> HolidayCalendarConfigurerManager {
        HolidayCalendarConfigurerManager { map_cell: RefCell::new(HashMap::new()) }
    }
}

impl Default for HolidayCalendarConfigurerManager {
    fn default() -> Self {
        HolidayCalendarConfigurerManager::new()
    }
}

impl IManager<Arc<HolidayListConfigurer>, Manager<AdministrativeArea>> for HolidayCalendarConfigurerManager {
    fn map(&self) -> Ref<'_, HashMap<String, Arc<HolidayListConfigurer>>> {
        self.map_cell.borrow()
    }

    fn map_mut(&self) -> RefMut<'_, HashMap<String, Arc<HolidayListConfigurer>>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &Manager<AdministrativeArea>) -> Result<(), ManagerError> {
        let named_obj: NamedJsonObject = parse_json_value(json_value.clone())?;
        let calendar_json: HolidayCalendarJsonProp = parse_json_value(json_value)?;

        let mut holidays: Vec<Arc<RecurringHoliday>> = Vec::with_capacity(calendar_json.holidays.len());
        for holiday_json in calendar_json.holidays.into_iter() {
            holidays.push(Arc::new(recurring_holiday_from_json(holiday_json, supports)?));
        }

        debug!("Loaded holiday calendar '{}' with {} holidays", named_obj.name(), holidays.len());
        self.map_mut().insert(named_obj.name().to_owned(), Arc::new(HolidayListConfigurer::new(holidays)));
        Ok(())
    }
}
