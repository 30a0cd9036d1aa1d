use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Records, Settings};

pub const RECORDS_FILE: &str = "records.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Persistence port for the two ledger documents. The CLI uses [`JsonStore`];
/// tests can substitute any backend.
pub trait Store {
    fn load_records(&self) -> Result<Records>;
    fn save_records(&self, records: &Records) -> Result<()>;
    fn load_settings(&self) -> Result<Settings>;
    fn save_settings(&self, settings: &Settings) -> Result<()>;
}

/// File-backed store: `records.json` and `settings.json` in the data
/// directory, each written as one synchronous pretty-printed document.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn records_path(&self) -> PathBuf {
        self.dir.join(RECORDS_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    fn write(&self, path: &Path, json: String) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(path, format!("{json}\n"))?;
        Ok(())
    }
}

impl Store for JsonStore {
    /// Missing or unreadable file means a fresh ledger: empty map.
    fn load_records(&self) -> Result<Records> {
        let path = self.records_path();
        if !path.exists() {
            return Ok(Records::new());
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save_records(&self, records: &Records) -> Result<()> {
        self.write(&self.records_path(), serde_json::to_string_pretty(records)?)
    }

    /// Absent settings are all-zero defaults.
    fn load_settings(&self) -> Result<Settings> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.write(&self.settings_path(), serde_json::to_string_pretty(settings)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{upsert_record, RecordInput};
    use chrono::NaiveDate;

    #[test]
    fn test_missing_files_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        assert!(store.load_records().unwrap().is_empty());
        assert_eq!(store.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let settings = Settings {
            trip_rate: 3000,
            default_lunch_cost: 8000,
            default_holiday_pay: 2000,
            base_salary: 500_000,
            full_attendance_days: 20,
        };
        let mut records = Records::new();
        upsert_record(
            &mut records,
            NaiveDate::from_ymd_opt(2024, 9, 10).unwrap(),
            RecordInput::Work {
                trips: 4,
                memo: "기록".to_string(),
                substitute_holiday: false,
            },
            &settings,
            false,
        );

        store.save_settings(&settings).unwrap();
        store.save_records(&records).unwrap();

        assert_eq!(store.load_settings().unwrap(), settings);
        assert_eq!(store.load_records().unwrap(), records);
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("ledger");
        let store = JsonStore::new(&nested);
        store.save_settings(&Settings::default()).unwrap();
        assert!(nested.join(SETTINGS_FILE).exists());
    }
}
