use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::holidays::HolidayCalendar;
use crate::models::{MonthlySummary, Records, Settings, WorkRecord, WorkStatus};

/// Persisted map key for a date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Premium pay applies on weekends, public holidays, and days the driver
/// marked as a substitute holiday.
pub fn is_premium_day(date: NaiveDate, substitute_holiday: bool, is_holiday: bool) -> bool {
    substitute_holiday || is_holiday || matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Status-dependent fields for [`upsert_record`].
#[derive(Debug, Clone)]
pub enum RecordInput {
    Work {
        trips: u32,
        memo: String,
        substitute_holiday: bool,
    },
    Off {
        memo: String,
    },
}

/// Compute and store the record for a date, overwriting any existing one.
///
/// Pay fields are snapshots of the current settings: a premium work day
/// stores `trips × default_holiday_pay` as its total holiday pay, and every
/// work day stores the lunch allowance. Off days store no pay fields.
/// Returns the stored record.
pub fn upsert_record(
    records: &mut Records,
    date: NaiveDate,
    input: RecordInput,
    settings: &Settings,
    is_holiday: bool,
) -> WorkRecord {
    let stamp = date.and_time(NaiveTime::MIN).and_utc().to_rfc3339();
    let record = match input {
        RecordInput::Work {
            trips,
            memo,
            substitute_holiday,
        } => {
            let premium = is_premium_day(date, substitute_holiday, is_holiday);
            WorkRecord {
                status: WorkStatus::Work,
                trips,
                memo,
                substitute_holiday,
                holiday_pay: premium.then(|| trips as i64 * settings.default_holiday_pay),
                lunch_cost: Some(settings.default_lunch_cost),
                date: stamp,
            }
        }
        RecordInput::Off { memo } => WorkRecord {
            status: WorkStatus::Off,
            trips: 0,
            memo,
            substitute_holiday: false,
            holiday_pay: None,
            lunch_cost: None,
            date: stamp,
        },
    };
    records.insert(date_key(date), record.clone());
    record
}

/// Remove the record for a date. Returns whether one existed.
pub fn delete_record(records: &mut Records, date: NaiveDate) -> bool {
    records.remove(&date_key(date)).is_some()
}

/// Derive the month's totals and expected salary.
///
/// Per work day: premium days contribute their *stored* holiday pay, regular
/// days contribute `trips × trip_rate` at today's rate. After the loop the
/// attendance bonus is applied: the full `base_salary` once `work_days`
/// reaches `full_attendance_days`; otherwise a prorated bonus, but only when
/// the last calendar day of the month has a work record with trips or a memo
/// (the driver closing out the month is what makes a partial month payable).
pub fn compute_monthly_summary(
    year: i32,
    month: u32,
    records: &Records,
    settings: &Settings,
    calendar: &HolidayCalendar,
) -> MonthlySummary {
    let mut summary = MonthlySummary::default();
    let days = days_in_month(year, month);

    for day in 1..=days {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let Some(record) = records.get(&date_key(date)) else {
            continue;
        };
        if record.status != WorkStatus::Work {
            continue;
        }

        summary.work_days += 1;
        summary.total_trips += record.trips;
        summary.lunch_total += record.lunch_cost.unwrap_or(0);

        let holiday = calendar.is_holiday(date).is_some();
        if is_premium_day(date, record.substitute_holiday, holiday) {
            summary.expected_salary += record.holiday_pay.unwrap_or(0);
        } else {
            summary.expected_salary += record.trips as i64 * settings.trip_rate;
        }
    }

    summary.expected_salary += attendance_bonus(year, month, days, records, settings, &summary);
    summary
}

fn attendance_bonus(
    year: i32,
    month: u32,
    days: u32,
    records: &Records,
    settings: &Settings,
    summary: &MonthlySummary,
) -> i64 {
    if settings.full_attendance_days == 0 || summary.work_days == 0 {
        return 0;
    }
    if summary.work_days >= settings.full_attendance_days {
        return settings.base_salary;
    }
    // Partial bonus only when the month's last day was explicitly closed out
    // with a work record carrying trips or a memo.
    let confirmed = NaiveDate::from_ymd_opt(year, month, days)
        .and_then(|last| records.get(&date_key(last)))
        .map(|rec| rec.status == WorkStatus::Work && (rec.trips > 0 || !rec.memo.is_empty()))
        .unwrap_or(false);
    if confirmed {
        settings.base_salary * summary.work_days as i64 / settings.full_attendance_days as i64
    } else {
        0
    }
}
