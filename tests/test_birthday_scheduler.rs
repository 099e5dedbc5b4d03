//! Characterization tests for the upcoming birthday report.
//!
//! The legacy policy cases pin the historical behaviour, including the
//! cases it gets wrong near month and year ends. The calendar policy cases
//! show the same inputs handled with real day distances.

use address_book::fixtures::demo_book;
use address_book::models::ContactRecord;
use address_book::services::{upcoming, BirthdayPolicy, BirthdayReport};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn contact(name: &str, birthday: &str) -> ContactRecord {
    let mut record = ContactRecord::named(name).unwrap();
    record.add_birthday(birthday).unwrap();
    record
}

fn dates(report: &BirthdayReport) -> Vec<(String, NaiveDate)> {
    report
        .entries()
        .map(|e| (e.name.to_string(), e.greeting_date))
        .collect()
}

#[test]
fn test_demo_week_of_2024_08_01() {
    let book = demo_book().unwrap();

    let report = upcoming(date(2024, 8, 1), book.iter(), BirthdayPolicy::Legacy);

    assert_eq!(
        dates(&report),
        vec![
            ("Pane".to_string(), date(2024, 8, 7)),
            ("Cane".to_string(), date(2024, 8, 2)),
            ("Dane".to_string(), date(2024, 8, 5)),
        ]
    );
}

#[test]
fn test_legacy_month_boundary_is_excluded() {
    let records = vec![contact("Feb", "03.02.1990")];

    let legacy = upcoming(date(2024, 1, 28), &records, BirthdayPolicy::Legacy);
    let calendar = upcoming(date(2024, 1, 28), &records, BirthdayPolicy::Calendar);

    assert!(legacy.is_empty());
    assert_eq!(dates(&calendar), vec![("Feb".to_string(), date(2024, 2, 5))]);
}

#[test]
fn test_year_end() {
    let records = vec![contact("Past", "29.12.1990"), contact("Next", "02.01.1991")];

    let legacy = upcoming(date(2024, 12, 31), &records, BirthdayPolicy::Legacy);
    let calendar = upcoming(date(2024, 12, 31), &records, BirthdayPolicy::Calendar);

    assert!(legacy.is_empty());
    assert_eq!(dates(&calendar), vec![("Next".to_string(), date(2025, 1, 2))]);
}

#[test]
fn test_legacy_shift_past_month_end_still_counts() {
    // 2024-08-31 is a Saturday; the shifted Monday is 2024-09-02 and the
    // day-of-month difference goes negative
    let records = vec![contact("Edge", "31.08.1990")];

    let report = upcoming(date(2024, 8, 30), &records, BirthdayPolicy::Legacy);

    assert_eq!(dates(&report), vec![("Edge".to_string(), date(2024, 9, 2))]);
}

#[test]
fn test_leap_day_birthday_in_common_year() {
    let records = vec![contact("Leap", "29.02.2000")];

    // 2023-02-28 is a Tuesday
    let legacy = upcoming(date(2023, 2, 25), &records, BirthdayPolicy::Legacy);
    let calendar = upcoming(date(2023, 2, 25), &records, BirthdayPolicy::Calendar);

    assert_eq!(dates(&legacy), vec![("Leap".to_string(), date(2023, 2, 28))]);
    assert_eq!(dates(&calendar), dates(&legacy));
}

#[test]
fn test_legacy_order_follows_book_not_dates() {
    let records = vec![
        contact("Later", "06.08.1990"),
        contact("Sooner", "02.08.1990"),
    ];

    let report = upcoming(date(2024, 8, 1), &records, BirthdayPolicy::Legacy);

    assert_eq!(report.this_week.len(), 1);
    assert_eq!(report.this_week[0].name.as_str(), "Later");
    assert_eq!(report.next_week[0].name.as_str(), "Sooner");
}
