//! Shared building blocks: the error type, the literal pattern table,
//! and calendar helpers used by the age and expiry checks.

mod dates;
mod error;
#[cfg(any(
    feature = "anagrafica",
    feature = "banking",
    feature = "tessera",
    feature = "cie",
    feature = "piva"
))]
pub(crate) mod patterns;

pub use dates::{today, whole_years_between};
pub use error::*;
