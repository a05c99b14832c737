/// Utilities for date and time formatting
///
/// Turkish month and weekday names are spelled out here instead of relying on
/// the browser locale.
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Weekday};

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

fn weekday_tr(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Pazartesi",
        Weekday::Tue => "Salı",
        Weekday::Wed => "Çarşamba",
        Weekday::Thu => "Perşembe",
        Weekday::Fri => "Cuma",
        Weekday::Sat => "Cumartesi",
        Weekday::Sun => "Pazar",
    }
}

/// Long Turkish date with weekday
/// Example: 2026-10-17 -> "17 Ekim 2026 Cumartesi"
pub fn format_long_tr(date: NaiveDate) -> String {
    format!(
        "{} {} {} {}",
        date.day(),
        MONTHS_TR[date.month0() as usize],
        date.year(),
        weekday_tr(date.weekday())
    )
}

/// Today's date in the browser's local time zone.
pub fn today_long_tr() -> String {
    format_long_tr(Local::now().date_naive())
}

/// Unix milliseconds to DD.MM.YYYY HH:MM in local time
pub fn format_timestamp_ms(ms: i64) -> String {
    format_timestamp_ms_in(ms, &Local)
}

fn format_timestamp_ms_in<Tz: TimeZone>(ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp_millis(ms) {
        Some(utc) => utc.with_timezone(tz).format("%d.%m.%Y %H:%M").to_string(),
        None => String::new(),
    }
}

/// Current time as Unix milliseconds, from the JS clock.
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_long_tr() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(format_long_tr(date), "17 Ekim 2026 Cumartesi");

        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert_eq!(format_long_tr(date), "5 Şubat 2024 Pazartesi");
    }

    #[test]
    fn test_format_timestamp_ms() {
        // 2024-03-15T14:02:26Z
        assert_eq!(format_timestamp_ms_in(1_710_511_346_000, &Utc), "15.03.2024 14:02");
    }
}
