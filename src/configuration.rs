use serde::Deserialize;


use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::time::calendar::holidaycalendarmanager::{
    HolidayCalendarConfigurerManager,
    administrative_area_from_json
};
use crate::time::recurringholiday::administrativearea::AdministrativeArea;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    administrative_area: Vec<serde_json::Value>,
    holiday_calendar: Vec<serde_json::Value>
}

/// Administrative areas and named holiday calendars loaded from one JSON
/// document.
pub struct Configuration {
    administrative_area_manager: Manager<AdministrativeArea>,
    holiday_calendar_configurer_manager: HolidayCalendarConfigurerManager
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            administrative_area_manager: Manager::new(administrative_area_from_json),
            holiday_calendar_configurer_manager: HolidayCalendarConfigurerManager::new()
        }
    }

    pub fn administrative_area_manager(&self) -> &Manager<AdministrativeArea> {
        &self.administrative_area_manager
    }

    pub fn holiday_calendar_configurer_manager(&self) -> &HolidayCalendarConfigurerManager {
        &self.holiday_calendar_configurer_manager
    }

    /// Areas are loaded before calendars so holidays can refer to them.
    pub fn from_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        self.administrative_area_manager.insert_obj_from_json_vec(&json_prop.administrative_area, &())?;
        self.holiday_calendar_configurer_manager.insert_obj_from_json_vec(
            &json_prop.holiday_calendar,
            &self.administrative_area_manager
        )?;
        Ok(())
    }

    pub fn from_json_str(&self, json_str: &str) -> Result<(), ManagerError> {
        let json_value: serde_json::Value = serde_json::from_str(json_str)?;
        self.from_json_value(json_value)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
