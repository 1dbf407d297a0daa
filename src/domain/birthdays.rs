//! Upcoming birthday calculation

use crate::domain::fields::DATE_FORMAT;
use crate::domain::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// Number of days, starting today, in which a birthday counts as upcoming
pub const GREETING_WINDOW_DAYS: i64 = 7;

/// A contact to greet and the day to do it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub greeting_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.greeting_date.format(DATE_FORMAT))
    }
}

/// Collect the records whose birthday falls in the window starting at `today`.
/// Output keeps the order of `records`.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let last_day = today + Duration::days(GREETING_WINDOW_DAYS - 1);

    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let this_year = birthday.in_year(today.year());
            if this_year < today || this_year > last_day {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                greeting_date: greeting_date(this_year),
            })
        })
        .collect()
}

/// Move weekend birthdays to the following Monday
pub fn greeting_date(birthday: NaiveDate) -> NaiveDate {
    match birthday.weekday() {
        Weekday::Sat => birthday + Duration::days(2),
        Weekday::Sun => birthday + Duration::days(1),
        _ => birthday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, birthday: &str) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_birthday(birthday).unwrap();
        record
    }

    #[test]
    fn test_greeting_date_weekdays_unchanged() {
        // Monday, Apr 1, 2024 .. Friday, Apr 5, 2024
        for day in 1..=5 {
            assert_eq!(greeting_date(date(2024, 4, day)), date(2024, 4, day));
        }
    }

    #[test]
    fn test_greeting_date_saturday() {
        assert_eq!(greeting_date(date(2024, 4, 6)), date(2024, 4, 8));
    }

    #[test]
    fn test_greeting_date_sunday() {
        assert_eq!(greeting_date(date(2024, 4, 7)), date(2024, 4, 8));
    }

    #[test]
    fn test_greeting_date_crosses_month() {
        // Saturday, Mar 30, 2024
        assert_eq!(greeting_date(date(2024, 3, 30)), date(2024, 4, 1));
    }

    #[test]
    fn test_saturday_birthday_greeted_on_monday() {
        // Friday, Apr 5, 2024
        let today = date(2024, 4, 5);
        let records = vec![record("John", "06.04.1990")];

        let upcoming = upcoming_birthdays(&records, today);
        assert_eq!(
            upcoming,
            vec![UpcomingBirthday {
                name: "John".to_string(),
                greeting_date: date(2024, 4, 8),
            }]
        );
    }

    #[test]
    fn test_window_bounds() {
        let today = date(2024, 4, 5);
        let records = vec![
            record("Yesterday", "04.04.2000"),
            record("Today", "05.04.2000"),
            record("LastDay", "11.04.2000"),
            record("TooLate", "12.04.2000"),
            record("Far", "14.04.2000"),
        ];

        let names: Vec<String> = upcoming_birthdays(&records, today)
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Today", "LastDay"]);
    }

    #[test]
    fn test_records_without_birthday_skipped() {
        let today = date(2024, 4, 5);
        let mut no_birthday = Record::new("Ann").unwrap();
        no_birthday.add_phone("1234567890").unwrap();
        let records = vec![no_birthday];

        assert!(upcoming_birthdays(&records, today).is_empty());
    }

    #[test]
    fn test_keeps_record_order() {
        let today = date(2024, 4, 5);
        let records = vec![
            record("Zed", "09.04.1980"),
            record("Amy", "05.04.1995"),
        ];

        let upcoming = upcoming_birthdays(&records, today);
        assert_eq!(upcoming[0].name, "Zed");
        assert_eq!(upcoming[1].name, "Amy");
    }

    #[test]
    fn test_leap_day_in_common_year() {
        // Monday, Feb 27, 2023
        let today = date(2023, 2, 27);
        let records = vec![record("Leap", "29.02.2000")];

        let upcoming = upcoming_birthdays(&records, today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].greeting_date, date(2023, 2, 28));
    }

    #[test]
    fn test_display() {
        let upcoming = UpcomingBirthday {
            name: "Jane".to_string(),
            greeting_date: date(2024, 4, 8),
        };
        assert_eq!(upcoming.to_string(), "Jane: 08.04.2024");
    }
}
