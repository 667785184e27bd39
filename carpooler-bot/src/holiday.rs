//! Holiday calendar lookup.
//!
//! [`HolidayCalendar`] is the seam the report renderer consumes;
//! [`RegionalHolidays`] implements the Italian national calendar with the
//! Bolzano/South Tyrol (BZ) subdivision extra. Unknown country codes resolve
//! no holidays.

use chrono::{Datelike, NaiveDate};

pub trait HolidayCalendar: Send + Sync {
    /// Name of the public holiday falling on `date`, if any.
    fn holiday_name(&self, date: NaiveDate) -> Option<String>;
}

/// Country/subdivision-indexed holiday table.
pub struct RegionalHolidays {
    country: String,
    subdiv: String,
}

impl RegionalHolidays {
    pub fn new(country: impl Into<String>, subdiv: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            subdiv: subdiv.into(),
        }
    }
}

impl HolidayCalendar for RegionalHolidays {
    fn holiday_name(&self, date: NaiveDate) -> Option<String> {
        if !self.country.eq_ignore_ascii_case("IT") {
            return None;
        }

        if let Some(name) = italian_fixed_holiday(date) {
            return Some(name.to_string());
        }

        let easter = easter_sunday(date.year())?;
        if date == easter {
            return Some("Pasqua di Resurrezione".to_string());
        }
        if date == easter + chrono::Duration::days(1) {
            return Some("Lunedì dell'Angelo".to_string());
        }
        if self.subdiv.eq_ignore_ascii_case("BZ") && date == easter + chrono::Duration::days(50) {
            return Some("Lunedì di Pentecoste".to_string());
        }

        None
    }
}

fn italian_fixed_holiday(date: NaiveDate) -> Option<&'static str> {
    match (date.month(), date.day()) {
        (1, 1) => Some("Capodanno"),
        (1, 6) => Some("Epifania del Signore"),
        (4, 25) => Some("Festa della Liberazione"),
        (5, 1) => Some("Festa dei Lavoratori"),
        (6, 2) => Some("Festa della Repubblica"),
        (8, 15) => Some("Assunzione della Vergine"),
        (11, 1) => Some("Tutti i Santi"),
        (12, 8) => Some("Immacolata Concezione"),
        (12, 25) => Some("Natale"),
        (12, 26) => Some("Santo Stefano"),
        _ => None,
    }
}

/// Gregorian Easter (Meeus/Jones/Butcher).
fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn test_easter_computus() {
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(2026), Some(date(2026, 4, 5)));
    }

    #[test]
    fn test_fixed_holidays() {
        let calendar = RegionalHolidays::new("IT", "BZ");

        assert_eq!(
            calendar.holiday_name(date(2025, 1, 1)),
            Some("Capodanno".to_string())
        );
        assert_eq!(
            calendar.holiday_name(date(2025, 12, 25)),
            Some("Natale".to_string())
        );
        assert_eq!(calendar.holiday_name(date(2025, 11, 12)), None);
    }

    #[test]
    fn test_easter_monday() {
        let calendar = RegionalHolidays::new("IT", "BZ");

        assert_eq!(
            calendar.holiday_name(date(2025, 4, 21)),
            Some("Lunedì dell'Angelo".to_string())
        );
    }

    #[test]
    fn test_pentecost_monday_is_bz_only() {
        let bz = RegionalHolidays::new("IT", "BZ");
        let national = RegionalHolidays::new("IT", "");

        // Easter 2025 is April 20, so Pentecost Monday is June 9.
        assert_eq!(
            bz.holiday_name(date(2025, 6, 9)),
            Some("Lunedì di Pentecoste".to_string())
        );
        assert_eq!(national.holiday_name(date(2025, 6, 9)), None);
    }

    #[test]
    fn test_unknown_country_has_no_holidays() {
        let calendar = RegionalHolidays::new("US", "");

        assert_eq!(calendar.holiday_name(date(2025, 1, 1)), None);
    }
}
