use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Solar holidays observed every year, as (month, day, name).
const SOLAR_HOLIDAYS: &[(u32, u32, &str)] = &[
    (1, 1, "신정"),
    (3, 1, "삼일절"),
    (5, 5, "어린이날"),
    (6, 6, "현충일"),
    (8, 15, "광복절"),
    (10, 3, "개천절"),
    (10, 9, "한글날"),
    (12, 25, "성탄절"),
];

/// Lunar-calendar holidays and one-off observances, as (year, month, day,
/// name). These cannot be derived from the solar date, so they are kept as a
/// fixed table for the years the ledger has been used in; extending to a new
/// year means appending its entries here. Years without entries get solar
/// holidays only.
const LUNAR_HOLIDAYS: &[(i32, u32, u32, &str)] = &[
    // 2024
    (2024, 2, 9, "설날"),
    (2024, 2, 10, "설날"),
    (2024, 2, 11, "설날"),
    (2024, 2, 12, "대체공휴일"),
    (2024, 4, 10, "국회의원선거"),
    (2024, 5, 15, "부처님오신날"),
    (2024, 9, 16, "추석"),
    (2024, 9, 17, "추석"),
    (2024, 9, 18, "추석"),
    // 2025
    (2025, 1, 28, "설날"),
    (2025, 1, 29, "설날"),
    (2025, 1, 30, "설날"),
    (2025, 5, 6, "대체공휴일"),
    (2025, 10, 5, "추석"),
    (2025, 10, 6, "추석"),
    (2025, 10, 7, "추석"),
    (2025, 10, 8, "대체공휴일"),
];

/// Holiday lookup table for a single year. Reference data only — rebuilt
/// whenever the year of interest changes, never mutated.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    days: BTreeMap<String, &'static str>,
}

impl HolidayCalendar {
    pub fn for_year(year: i32) -> Self {
        let mut days = BTreeMap::new();
        for &(m, d, name) in SOLAR_HOLIDAYS {
            days.insert(format!("{year:04}-{m:02}-{d:02}"), name);
        }
        for &(y, m, d, name) in LUNAR_HOLIDAYS {
            if y == year {
                days.insert(format!("{year:04}-{m:02}-{d:02}"), name);
            }
        }
        Self { days }
    }

    /// Holiday name for the date, or `None`. Dates outside this calendar's
    /// year never match.
    pub fn is_holiday(&self, date: NaiveDate) -> Option<&'static str> {
        self.days
            .get(&date.format("%Y-%m-%d").to_string())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_solar_holidays_any_year() {
        let cal = HolidayCalendar::for_year(2031);
        assert_eq!(cal.is_holiday(d(2031, 1, 1)), Some("신정"));
        assert_eq!(cal.is_holiday(d(2031, 10, 9)), Some("한글날"));
        assert_eq!(cal.is_holiday(d(2031, 12, 25)), Some("성탄절"));
        assert_eq!(cal.is_holiday(d(2031, 6, 15)), None);
    }

    #[test]
    fn test_chuseok_2024() {
        let cal = HolidayCalendar::for_year(2024);
        assert_eq!(cal.is_holiday(d(2024, 9, 16)), Some("추석"));
        assert_eq!(cal.is_holiday(d(2024, 9, 17)), Some("추석"));
        assert_eq!(cal.is_holiday(d(2024, 9, 18)), Some("추석"));
    }

    #[test]
    fn test_election_day_2024_only() {
        assert_eq!(
            HolidayCalendar::for_year(2024).is_holiday(d(2024, 4, 10)),
            Some("국회의원선거")
        );
        assert_eq!(
            HolidayCalendar::for_year(2025).is_holiday(d(2025, 4, 10)),
            None
        );
    }

    #[test]
    fn test_unknown_year_has_no_lunar_entries() {
        let cal = HolidayCalendar::for_year(2023);
        // Seollal fell on Jan 21–24 in 2023; not in the table.
        assert_eq!(cal.is_holiday(d(2023, 1, 22)), None);
        assert_eq!(cal.is_holiday(d(2023, 1, 1)), Some("신정"));
    }
}
