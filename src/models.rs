use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Record map as persisted: `"YYYY-MM-DD"` → [`WorkRecord`]. One record per
/// date; writing a date that already has a record overwrites it.
pub type Records = BTreeMap<String, WorkRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    Work,
    Off,
}

/// One day's entry. `holiday_pay` and `lunch_cost` are snapshots taken from
/// the settings at write time; changing settings later never rewrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    pub status: WorkStatus,
    #[serde(default)]
    pub trips: u32,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub substitute_holiday: bool,
    /// Total premium pay for the day (not a per-trip rate). Only stored for
    /// work records saved on a premium day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_pay: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_cost: Option<i64>,
    /// Full ISO-8601 timestamp of the originally selected day.
    pub date: String,
}

/// Pay settings document. Every field defaults to 0 when absent — missing
/// numeric input is never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Per-trip pay on a regular (weekday, non-holiday) work day.
    pub trip_rate: i64,
    /// Flat lunch allowance for any work day.
    pub default_lunch_cost: i64,
    /// Per-trip pay on holidays, weekends, and substitute holidays.
    pub default_holiday_pay: i64,
    /// Full-attendance bonus amount.
    pub base_salary: i64,
    /// Work days per month required for the full bonus.
    pub full_attendance_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlySummary {
    pub work_days: u32,
    pub total_trips: u32,
    pub lunch_total: i64,
    pub expected_salary: i64,
}

pub const EXPORT_VERSION: &str = "1.0";

/// Backup file layout: the two persisted documents plus provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    pub records: Records,
    pub settings: Settings,
    #[serde(default)]
    pub export_date: String,
    #[serde(default)]
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_persisted_keys_are_camel_case() {
        let rec = WorkRecord {
            status: WorkStatus::Work,
            trips: 3,
            memo: String::new(),
            substitute_holiday: true,
            holiday_pay: Some(7500),
            lunch_cost: Some(8000),
            date: "2024-09-16T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["status"], "work");
        assert_eq!(json["substituteHoliday"], true);
        assert_eq!(json["holidayPay"], 7500);
        assert_eq!(json["lunchCost"], 8000);
    }

    #[test]
    fn test_off_record_omits_pay_fields() {
        let rec = WorkRecord {
            status: WorkStatus::Off,
            trips: 0,
            memo: "병원".to_string(),
            substitute_holiday: false,
            holiday_pay: None,
            lunch_cost: None,
            date: "2024-09-02T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("holidayPay").is_none());
        assert!(json.get("lunchCost").is_none());
    }

    #[test]
    fn test_settings_default_to_zero_for_missing_fields() {
        let s: Settings = serde_json::from_str(r#"{"tripRate": 3000}"#).unwrap();
        assert_eq!(s.trip_rate, 3000);
        assert_eq!(s.default_lunch_cost, 0);
        assert_eq!(s.base_salary, 0);
        assert_eq!(s.full_attendance_days, 0);
    }
}
