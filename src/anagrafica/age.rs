//! Age computation against the local calendar date.

use chrono::NaiveDate;

use crate::core::{today, whole_years_between};

/// Age of majority in Italy.
pub const ADULT_AGE: i32 = 18;

/// Whole years from `birthdate` to today. Negative for a future birthdate.
pub fn calculate_age(birthdate: NaiveDate) -> i32 {
    calculate_age_on(birthdate, today())
}

/// Whole years from `birthdate` to `on`.
pub fn calculate_age_on(birthdate: NaiveDate, on: NaiveDate) -> i32 {
    whole_years_between(birthdate, on)
}

/// Whether a person born on `birthdate` is 18 or older today.
pub fn is_over_18(birthdate: NaiveDate) -> bool {
    is_over_18_on(birthdate, today())
}

/// Whether a person born on `birthdate` is 18 or older on `on`.
pub fn is_over_18_on(birthdate: NaiveDate, on: NaiveDate) -> bool {
    calculate_age_on(birthdate, on) >= ADULT_AGE
}
