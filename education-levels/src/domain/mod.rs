//! Domain types for national education levels.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod country;
mod level;

pub use country::{CountryCode, InvalidCountryCode};
pub use level::EducationLevel;
