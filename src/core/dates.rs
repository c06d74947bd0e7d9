use chrono::{Local, NaiveDate};

/// The current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Complete years elapsed from `from` to `to`.
///
/// Negative when `from` is after `to`. A 29 February anniversary is only
/// reached on 1 March in non-leap years.
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    match to.years_since(from) {
        Some(years) => years as i32,
        None => -(from.years_since(to).unwrap_or(0) as i32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_complete_years_only() {
        assert_eq!(whole_years_between(date(1990, 1, 1), date(2024, 1, 1)), 34);
        assert_eq!(whole_years_between(date(1990, 6, 15), date(2024, 6, 14)), 33);
        assert_eq!(whole_years_between(date(1990, 6, 15), date(2024, 6, 15)), 34);
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(whole_years_between(date(2024, 3, 1), date(2024, 3, 1)), 0);
    }

    #[test]
    fn leap_day_birthday() {
        assert_eq!(whole_years_between(date(2000, 2, 29), date(2018, 2, 28)), 17);
        assert_eq!(whole_years_between(date(2000, 2, 29), date(2018, 3, 1)), 18);
        assert_eq!(whole_years_between(date(2000, 2, 29), date(2020, 2, 29)), 20);
    }

    #[test]
    fn future_start_is_negative() {
        assert_eq!(whole_years_between(date(2030, 5, 1), date(2026, 10, 17)), -3);
        assert_eq!(whole_years_between(date(2026, 12, 1), date(2026, 10, 17)), 0);
    }
}
