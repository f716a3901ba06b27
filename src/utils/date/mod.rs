// Date utility functions

use chrono::{Datelike, Duration, NaiveDate};

/// First day of the week containing `date`.
///
/// `first_day_of_week` counts from Sunday (0 = Sunday, 1 = Monday).
pub fn week_start(date: NaiveDate, first_day_of_week: u32) -> NaiveDate {
    let current_weekday = date.weekday().num_days_from_sunday();
    let start_weekday = first_day_of_week % 7;

    let days_back = if current_weekday >= start_weekday {
        current_weekday - start_weekday
    } else {
        7 + current_weekday - start_weekday
    };

    date - Duration::days(days_back as i64)
}

/// The seven days starting at `start`.
pub fn week_days(start: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|i| start + Duration::days(i)).collect()
}

/// "March 3 – 9, 2025" style label for the week starting at `start`.
pub fn week_label(start: NaiveDate) -> String {
    let end = start + Duration::days(6);
    if start.year() != end.year() {
        format!("{} – {}", start.format("%B %-d, %Y"), end.format("%B %-d, %Y"))
    } else if start.month() != end.month() {
        format!("{} – {}", start.format("%B %-d"), end.format("%B %-d, %Y"))
    } else {
        format!("{} – {}", start.format("%B %-d"), end.format("%-d, %Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2025-03-05 is a Wednesday
    #[test_case(1, date(2025, 3, 3) ; "monday start")]
    #[test_case(0, date(2025, 3, 2) ; "sunday start")]
    #[test_case(4, date(2025, 2, 27) ; "thursday start wraps back")]
    fn test_week_start(first_day: u32, expected: NaiveDate) {
        assert_eq!(week_start(date(2025, 3, 5), first_day), expected);
    }

    #[test]
    fn test_week_start_on_first_day_is_identity() {
        assert_eq!(week_start(date(2025, 3, 3), 1), date(2025, 3, 3));
    }

    #[test]
    fn test_week_days_len() {
        let days = week_days(date(2025, 3, 3));
        assert_eq!(days.len(), 7);
        assert_eq!(days[6], date(2025, 3, 9));
    }

    #[test]
    fn test_week_label_variants() {
        assert_eq!(week_label(date(2025, 3, 3)), "March 3 – 9, 2025");
        assert_eq!(week_label(date(2025, 3, 31)), "March 31 – April 6, 2025");
        assert_eq!(
            week_label(date(2025, 12, 29)),
            "December 29, 2025 – January 4, 2026"
        );
    }
}
