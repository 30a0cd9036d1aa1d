use comfy_table::Table;

use crate::config::get_data_dir;
use crate::error::Result;
use crate::fmt::won;
use crate::store::{JsonStore, Store};

pub struct RateUpdate {
    pub trip_rate: Option<i64>,
    pub lunch: Option<i64>,
    pub holiday_pay: Option<i64>,
    pub base_salary: Option<i64>,
    pub full_days: Option<u32>,
}

impl RateUpdate {
    fn is_empty(&self) -> bool {
        self.trip_rate.is_none()
            && self.lunch.is_none()
            && self.holiday_pay.is_none()
            && self.base_salary.is_none()
            && self.full_days.is_none()
    }
}

pub fn run(update: RateUpdate) -> Result<()> {
    let store = JsonStore::new(get_data_dir());
    let mut settings = store.load_settings()?;

    if !update.is_empty() {
        if let Some(v) = update.trip_rate {
            settings.trip_rate = v;
        }
        if let Some(v) = update.lunch {
            settings.default_lunch_cost = v;
        }
        if let Some(v) = update.holiday_pay {
            settings.default_holiday_pay = v;
        }
        if let Some(v) = update.base_salary {
            settings.base_salary = v;
        }
        if let Some(v) = update.full_days {
            settings.full_attendance_days = v;
        }
        store.save_settings(&settings)?;
        println!("Rates updated.");
    }

    let mut table = Table::new();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["Trip rate (regular)".to_string(), won(settings.trip_rate)]);
    table.add_row(vec![
        "Lunch allowance".to_string(),
        won(settings.default_lunch_cost),
    ]);
    table.add_row(vec![
        "Trip rate (holiday/weekend)".to_string(),
        won(settings.default_holiday_pay),
    ]);
    table.add_row(vec![
        "Full-attendance bonus".to_string(),
        won(settings.base_salary),
    ]);
    table.add_row(vec![
        "Full-attendance days".to_string(),
        settings.full_attendance_days.to_string(),
    ]);
    println!("{table}");
    Ok(())
}
