//! Clock-time model and the plain digit-pattern luck rules

mod checks;
mod errors;
mod time;

pub use checks::{monotonic_step, palindrome, repeated_digit};
pub use errors::ClockError;
pub use time::{all_times, ClockMode, ClockTime};
