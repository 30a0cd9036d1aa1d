use chrono::{Datelike, NaiveDate};
use comfy_table::Table;

use crate::cli::parse_month_opt;
use crate::config::get_data_dir;
use crate::error::Result;
use crate::holidays::HolidayCalendar;
use crate::ledger::{date_key, days_in_month};
use crate::models::{Records, WorkStatus};
use crate::store::{JsonStore, Store};

pub fn run(month: Option<String>) -> Result<()> {
    let (year, month) = parse_month_opt(&month)?;
    let store = JsonStore::new(get_data_dir());

    let records = store.load_records()?;
    let calendar = HolidayCalendar::for_year(year);

    println!("{year}-{month:02}");
    println!("{}", format_calendar(year, month, &records, &calendar));
    Ok(())
}

/// Month grid, Sunday first. Each cell shows the day number plus the holiday
/// name and the recorded status when present.
pub fn format_calendar(
    year: i32,
    month: u32,
    records: &Records,
    calendar: &HolidayCalendar,
) -> String {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return String::new();
    };

    let mut table = Table::new();
    table.set_header(vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);

    let lead = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<String> = vec![String::new(); lead];

    for day in 1..=days_in_month(year, month) {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let mut cell = day.to_string();
        if let Some(name) = calendar.is_holiday(date) {
            cell.push('\n');
            cell.push_str(name);
        }
        if let Some(rec) = records.get(&date_key(date)) {
            match rec.status {
                WorkStatus::Work => cell.push_str(&format!("\nwork {}회", rec.trips)),
                WorkStatus::Off => cell.push_str("\noff"),
            }
        }
        cells.push(cell);
    }
    while cells.len() % 7 != 0 {
        cells.push(String::new());
    }
    for week in cells.chunks(7) {
        table.add_row(week.to_vec());
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_contains_holidays_and_records() {
        let mut records = Records::new();
        let settings = crate::models::Settings::default();
        crate::ledger::upsert_record(
            &mut records,
            NaiveDate::from_ymd_opt(2024, 9, 10).unwrap(),
            crate::ledger::RecordInput::Work {
                trips: 4,
                memo: String::new(),
                substitute_holiday: false,
            },
            &settings,
            false,
        );
        let calendar = HolidayCalendar::for_year(2024);
        let grid = format_calendar(2024, 9, &records, &calendar);
        assert!(grid.contains("추석"));
        assert!(grid.contains("work 4회"));
    }
}
