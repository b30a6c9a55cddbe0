//! Lucky clock - classify clock times by digit-pattern rules
//!
//! A time is lucky when its digits are all the same, step by one, form a
//! palindrome, or can be arranged into a true arithmetic equation using the
//! four basic operators, digit concatenation, and an equals sign.

pub mod clock;
pub mod eval;
pub mod report;
pub mod search;

// Re-export the main public API
pub use clock::{ClockError, ClockMode, ClockTime};
pub use eval::{evaluate, EvalError, Op, Value};
pub use search::EquationSearch;

/// Find every true equation hidden in an ordered digit sequence
///
/// This is a convenience function that creates a default search and returns
/// the successful equations joined with `", "` in enumeration order.
///
/// # Arguments
///
/// * `digits` - An ordered sequence of digits, each 0-9
///
/// # Returns
///
/// * `Some(String)` - The comma-joined true equations, if any exist
/// * `None` - If no operator assignment forms a true equation
///
/// # Examples
///
/// ```
/// use lucky_clock::find_equations;
///
/// assert_eq!(find_equations(&[9, 1, 8]), Some("9-1=8, 9=1+8".to_string()));
/// assert_eq!(find_equations(&[2, 2, 3]), None);
/// ```
pub fn find_equations(digits: &[u8]) -> Option<String> {
    let search = EquationSearch::new();
    search.find_equations(digits)
}
