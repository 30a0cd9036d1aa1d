use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::parse_month_opt;
use crate::config::get_data_dir;
use crate::error::Result;
use crate::fmt::won;
use crate::holidays::HolidayCalendar;
use crate::ledger::compute_monthly_summary;
use crate::models::MonthlySummary;
use crate::store::{JsonStore, Store};

pub fn run(month: Option<String>) -> Result<()> {
    let (year, month) = parse_month_opt(&month)?;
    let store = JsonStore::new(get_data_dir());

    let records = store.load_records()?;
    let settings = store.load_settings()?;
    let calendar = HolidayCalendar::for_year(year);
    let summary = compute_monthly_summary(year, month, &records, &settings, &calendar);

    println!("{}", format_summary(year, month, &summary));
    Ok(())
}

pub fn format_summary(year: i32, month: u32, summary: &MonthlySummary) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(format!("{year}-{month:02}").bold().to_string()),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Work days"),
        Cell::new(summary.work_days.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Total trips"),
        Cell::new(summary.total_trips.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Lunch total"),
        Cell::new(won(summary.lunch_total)),
    ]);
    table.add_row(vec![
        Cell::new("Expected salary".bold().to_string()),
        Cell::new(won(summary.expected_salary).green().to_string()),
    ]);
    table.to_string()
}
