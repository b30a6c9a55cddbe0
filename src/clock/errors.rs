use thiserror::Error;

/// Errors that can occur constructing or parsing clock times
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClockError {
    #[error("Hour must be within 1..=24: {hour}")]
    InvalidHour { hour: u8 },
    #[error("Minute must be within 0..=59: {minute}")]
    InvalidMinute { minute: u8 },
    #[error("Time must look like H:MM: {0}")]
    InvalidFormat(String),
}
