use chrono::{Datelike, Local, NaiveDate, Weekday};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

pub const PORTUGUESE_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const PORTUGUESE_MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const GENERIC_DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%B %d, %Y", "%d %B %Y"];

lazy_static! {
    static ref PORTUGUESE_LONG_DATE: Regex =
        Regex::new(r"^(\d{1,2})\D*?\s+de\s+(\p{L}+)\s+de\s+(\d{4})$")
            .expect("Failed to create portuguese date regex");
}

/// Turns the date strings found in event files into calendar dates.
///
/// Accepts ISO dates (`2025-09-01`, optionally followed by a time) and
/// Portuguese long dates (`8 de agosto de 2025`). Anything else is tried
/// against a few generic formats and finally degrades to `fallback`.
#[derive(Debug, Clone, Copy)]
pub struct DateParser {
    months: &'static [&'static str; 12],
    fallback: NaiveDate,
}

impl DateParser {
    pub fn new(fallback: NaiveDate) -> Self {
        Self {
            months: &PORTUGUESE_MONTHS,
            fallback,
        }
    }

    /// Parser falling back to the current local date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn fallback(&self) -> NaiveDate {
        self.fallback
    }

    pub fn parse(&self, date: &str) -> NaiveDate {
        let date = date.trim();

        if date.is_empty() {
            return self.fallback;
        }

        let parsed = if date.contains('-') {
            Self::parse_iso(date)
        } else {
            self.parse_portuguese(date)
        };

        parsed
            .or_else(|| Self::parse_generic(date))
            .unwrap_or_else(|| {
                warn!("Unrecognized date '{}', using {}", date, self.fallback);
                self.fallback
            })
    }

    fn parse_iso(date: &str) -> Option<NaiveDate> {
        // Datetimes such as 2025-09-01T09:00:00 only keep their calendar part
        let calendar_part = date.get(..10).unwrap_or(date);

        NaiveDate::parse_from_str(calendar_part, ISO_DATE_FORMAT).ok()
    }

    fn parse_portuguese(&self, date: &str) -> Option<NaiveDate> {
        let lowercase = date.to_lowercase();
        let captures = PORTUGUESE_LONG_DATE.captures(&lowercase)?;

        let day: u32 = captures[1].parse().ok()?;
        let month = self
            .months
            .iter()
            .position(|month| *month == &captures[2])?;
        let year: i32 = captures[3].parse().ok()?;

        NaiveDate::from_ymd_opt(year, month as u32 + 1, day)
    }

    fn parse_generic(date: &str) -> Option<NaiveDate> {
        GENERIC_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
    }
}

/// Brazilian display format, e.g. `8 de ago. de 2025`
pub fn format_display(date: NaiveDate) -> String {
    format!(
        "{} de {}. de {}",
        date.day(),
        PORTUGUESE_MONTH_ABBREVIATIONS[date.month0() as usize],
        date.year()
    )
}

/// Day count including both ends; events without an end last one day.
pub fn duration_in_days(start: NaiveDate, end: Option<NaiveDate>) -> u32 {
    match end {
        None => 1,
        Some(end) => {
            let days = (end - start).num_days().unsigned_abs();

            u32::try_from(days).map_or(u32::MAX, |days| days.saturating_add(1))
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> DateParser {
        DateParser::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
    }

    #[test_log::test]
    fn should_parse_portuguese_long_date() {
        let date = parser().parse("8 de agosto de 2025");

        assert_eq!(date.year(), 2025);
        assert_eq!(date.month0(), 7);
        assert_eq!(date.day(), 8);
    }

    #[test_log::test]
    fn should_parse_portuguese_date_regardless_of_case_and_accents() {
        assert_eq!(
            parser().parse("15 de Março de 2026"),
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
        );
        assert_eq!(
            parser().parse("1º de dezembro de 2025"),
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
        );
    }

    #[test_log::test]
    fn should_parse_iso_date_and_datetime() {
        assert_eq!(
            parser().parse("2025-09-01"),
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
        );
        assert_eq!(
            parser().parse("2025-10-21T09:00:00-03:00"),
            NaiveDate::from_ymd_opt(2025, 10, 21).unwrap()
        );
    }

    #[test_log::test]
    fn should_try_generic_formats_before_falling_back() {
        assert_eq!(
            parser().parse("20/11/2025"),
            NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
        );
    }

    #[test_log::test]
    fn when_date_is_unrecognized_should_fall_back() {
        let parser = parser();

        assert_eq!(parser.parse(""), parser.fallback());
        assert_eq!(parser.parse("em breve"), parser.fallback());
        assert_eq!(parser.parse("31 de fevereiro de 2025"), parser.fallback());
        assert_eq!(parser.parse("2025-13-45"), parser.fallback());
    }

    #[test_log::test]
    fn should_format_date_in_brazilian_style() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 8).unwrap();

        assert_eq!(format_display(date), "8 de ago. de 2025");
    }

    #[test_log::test]
    fn duration_should_include_both_ends() {
        let parser = parser();
        let start = parser.parse("2025-09-01");

        assert_eq!(duration_in_days(start, Some(parser.parse("2025-09-03"))), 3);
        assert_eq!(duration_in_days(start, Some(start)), 1);
        assert_eq!(duration_in_days(start, None), 1);
    }

    #[test_log::test]
    fn should_detect_weekends() {
        let parser = parser();

        assert!(is_weekend(parser.parse("2025-08-09")));
        assert!(is_weekend(parser.parse("2025-08-10")));
        assert!(!is_weekend(parser.parse("2025-08-08")));
    }
}
