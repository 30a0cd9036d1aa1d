use chrono::Datelike;
use colored::Colorize;

use crate::cli::parse_date;
use crate::config::get_data_dir;
use crate::error::Result;
use crate::fmt::won;
use crate::holidays::HolidayCalendar;
use crate::ledger::{delete_record, upsert_record, RecordInput};
use crate::models::{WorkRecord, WorkStatus};
use crate::store::{JsonStore, Store};

pub fn work(date: &str, trips: Option<u32>, memo: Option<String>, substitute: bool) -> Result<()> {
    let day = parse_date(date)?;
    let store = JsonStore::new(get_data_dir());

    let mut records = store.load_records()?;
    let settings = store.load_settings()?;
    let calendar = HolidayCalendar::for_year(day.year());
    let holiday = calendar.is_holiday(day);

    let stored = upsert_record(
        &mut records,
        day,
        RecordInput::Work {
            // Absent trip count means 0, never an input error.
            trips: trips.unwrap_or(0),
            memo: memo.unwrap_or_default(),
            substitute_holiday: substitute,
        },
        &settings,
        holiday.is_some(),
    );
    store.save_records(&records)?;

    println!("{date} recorded as {}", "work".green());
    if let Some(name) = holiday {
        println!("Holiday: {name}");
    }
    print_pay_line(&stored);
    Ok(())
}

pub fn off(date: &str, memo: Option<String>) -> Result<()> {
    let day = parse_date(date)?;
    let store = JsonStore::new(get_data_dir());

    let mut records = store.load_records()?;
    let settings = store.load_settings()?;
    upsert_record(
        &mut records,
        day,
        RecordInput::Off {
            memo: memo.unwrap_or_default(),
        },
        &settings,
        false,
    );
    store.save_records(&records)?;

    println!("{date} recorded as {}", "off".yellow());
    Ok(())
}

pub fn delete(date: &str) -> Result<()> {
    let day = parse_date(date)?;
    let store = JsonStore::new(get_data_dir());

    let mut records = store.load_records()?;
    if delete_record(&mut records, day) {
        store.save_records(&records)?;
        println!("Deleted record for {date}");
    } else {
        println!("No record for {date}");
    }
    Ok(())
}

pub fn show(date: &str) -> Result<()> {
    let day = parse_date(date)?;
    let store = JsonStore::new(get_data_dir());

    let records = store.load_records()?;
    let key = crate::ledger::date_key(day);
    match records.get(&key) {
        Some(rec) => print_record(&key, rec),
        None => println!("No record for {date}"),
    }
    Ok(())
}

fn print_record(date: &str, rec: &WorkRecord) {
    let status = match rec.status {
        WorkStatus::Work => "work".green(),
        WorkStatus::Off => "off".yellow(),
    };
    println!("{date}  {status}");
    if rec.status == WorkStatus::Work {
        println!("Trips:      {}", rec.trips);
        if rec.substitute_holiday {
            println!("Substitute holiday");
        }
        print_pay_line(rec);
    }
    if !rec.memo.is_empty() {
        println!("Memo:       {}", rec.memo);
    }
}

fn print_pay_line(rec: &WorkRecord) {
    if let Some(pay) = rec.holiday_pay {
        println!("Holiday pay: {}", won(pay));
    }
    if let Some(lunch) = rec.lunch_cost {
        println!("Lunch:       {}", won(lunch));
    }
}
