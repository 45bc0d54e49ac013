use chrono::{Datelike, NaiveDate, NaiveTime};

/// Russian month names in the genitive case, as the booking UI shows
/// dates ("13 августа").
const MONTH_NAMES: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// The date half of the canonical slot key: `DD.MM.YYYY`.
pub fn format_api_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Canonical dateTime key, the representation `BookingRecord.date_time`
/// uses: `DD.MM.YYYYTHH:MM`.
pub fn slot_key(date: NaiveDate, time: NaiveTime) -> String {
    format!("{}T{}", format_api_date(date), time.format("%H:%M"))
}

/// Human-readable date for slot display.
pub fn display_date(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTH_NAMES[date.month0() as usize])
}

/// Parses a schedule boundary, accepting `HH:MM` and `HH:MM:SS`.
pub fn parse_schedule_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_date_is_dotted_dmy() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 13).unwrap();
        assert_eq!(format_api_date(date), "13.08.2025");
    }

    #[test]
    fn slot_key_matches_booking_record_format() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 13).unwrap();
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(slot_key(date, time), "13.08.2025T09:00");
    }

    #[test]
    fn display_date_uses_genitive_month() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 13).unwrap();
        assert_eq!(display_date(date), "13 августа");
    }

    #[test]
    fn schedule_time_accepts_both_precisions() {
        assert_eq!(
            parse_schedule_time("09:30"),
            NaiveTime::from_hms_opt(9, 30, 0)
        );
        assert_eq!(
            parse_schedule_time("09:30:00"),
            NaiveTime::from_hms_opt(9, 30, 0)
        );
        assert_eq!(parse_schedule_time("morning"), None);
    }
}
