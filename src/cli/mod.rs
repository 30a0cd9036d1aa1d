pub mod calendar;
pub mod export;
pub mod import;
pub mod init;
pub mod load;
pub mod rates;
pub mod record;
pub mod status;
pub mod summary;

use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};

use crate::error::{BusbookError, Result};

pub(crate) fn parse_date(date: &str) -> Result<NaiveDate> {
    // chrono's %m/%d also accept unpadded numbers; the persisted map keys
    // are strictly zero-padded, so require the full 10-char form.
    if date.len() != 10 {
        return Err(BusbookError::InvalidDate(date.to_string()));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| BusbookError::InvalidDate(date.to_string()))
}

/// `YYYY-MM` → (year, month); defaults to the current month.
pub(crate) fn parse_month_opt(month: &Option<String>) -> Result<(i32, u32)> {
    let Some(m) = month else {
        let now = chrono::Local::now();
        return Ok((now.year(), now.month()));
    };
    let parts: Vec<&str> = m.split('-').collect();
    if parts.len() == 2 {
        if let (Ok(year), Ok(month)) = (parts[0].parse(), parts[1].parse::<u32>()) {
            if (1..=12).contains(&month) {
                return Ok((year, month));
            }
        }
    }
    Err(BusbookError::InvalidMonth(m.clone()))
}

#[derive(Parser)]
#[command(name = "busbook", about = "Attendance and pay ledger CLI for bus drivers.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up busbook: choose a data directory and create the ledger files.
    Init {
        /// Path for busbook data (default: ~/Documents/busbook)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Record a work day.
    Work {
        /// Date: YYYY-MM-DD
        date: String,
        /// One-way trip count (default 0)
        #[arg(long)]
        trips: Option<u32>,
        /// Free-text memo
        #[arg(long)]
        memo: Option<String>,
        /// Treat this date as a substitute holiday (premium pay)
        #[arg(long)]
        substitute: bool,
    },
    /// Record an off day.
    Off {
        /// Date: YYYY-MM-DD
        date: String,
        /// Free-text memo
        #[arg(long)]
        memo: Option<String>,
    },
    /// Delete the record for a date.
    Delete {
        /// Date: YYYY-MM-DD
        date: String,
    },
    /// Show the record for a date.
    Show {
        /// Date: YYYY-MM-DD
        date: String,
    },
    /// Render a month as a calendar grid with statuses and holidays.
    Calendar {
        /// Month: YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Monthly summary: work days, trips, lunch total, expected salary.
    Summary {
        /// Month: YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Show or update pay rates and bonus settings.
    Rates {
        /// Per-trip pay on regular work days
        #[arg(long = "trip-rate")]
        trip_rate: Option<i64>,
        /// Flat lunch allowance per work day
        #[arg(long)]
        lunch: Option<i64>,
        /// Per-trip pay on holidays/weekends
        #[arg(long = "holiday-pay")]
        holiday_pay: Option<i64>,
        /// Full-attendance bonus amount
        #[arg(long = "base-salary")]
        base_salary: Option<i64>,
        /// Work days per month required for the full bonus
        #[arg(long = "full-days")]
        full_days: Option<u32>,
    },
    /// Export the ledger (records + settings) to a JSON backup file.
    Export {
        /// Output path (default: <data_dir>/exports/busbook-YYYYMMDD-HHMMSS.json)
        #[arg(long)]
        output: Option<String>,
    },
    /// Replace the ledger with a previously exported backup.
    Import {
        /// Path to an exported JSON file
        file: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show config location, data directory and record counts.
    Status,
    /// Switch to an existing busbook data directory.
    Load {
        /// Path to a data directory containing records.json
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-09-16").is_ok());
        assert!(parse_date("2024-9-16").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn test_parse_month_opt() {
        assert_eq!(
            parse_month_opt(&Some("2024-09".to_string())).unwrap(),
            (2024, 9)
        );
        assert!(parse_month_opt(&Some("2024-13".to_string())).is_err());
        assert!(parse_month_opt(&Some("september".to_string())).is_err());
        // None falls back to the current month.
        assert!(parse_month_opt(&None).is_ok());
    }
}
