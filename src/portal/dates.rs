//! Date rendering in the portal's single display locale (ru-RU).

use chrono::{DateTime, Datelike, NaiveDate, Utc};

const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

/// Long form: `15 января 2026 г.`
pub fn format_long(date: NaiveDate) -> String {
    format!(
        "{} {} {} г.",
        date.day(),
        MONTHS_GENITIVE[date.month0() as usize],
        date.year()
    )
}

/// Short numeric form: `15.01.2026`
pub fn format_short(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Calendar date of `now` in UTC.
pub fn utc_date(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}
