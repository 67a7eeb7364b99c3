pub mod configuration;

pub mod country {
    pub mod german {
        pub mod germanfederalstate;
        pub mod simplegermanholidaycalendarconfigurer;
    }
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod period;
    pub mod rangeofdates;
    pub mod holidayerror;

    pub mod recurringholiday {
        pub mod easter;
        pub mod administrativearea;
        pub mod holidayrule;
        pub mod recurringholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod holidaycalendarconfigurer;
        pub mod holidaycalendarmanager;
    }
}
