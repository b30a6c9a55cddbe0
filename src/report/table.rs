use std::fmt::Write;

use log::debug;
use rayon::prelude::*;

use crate::clock::{all_times, monotonic_step, palindrome, repeated_digit, ClockMode, ClockTime};
use crate::search::EquationSearch;

/// One time's classification across all four luck rules.
#[derive(Debug, Clone)]
pub struct LuckRow {
    pub time: ClockTime,
    pub lucky: bool,
    pub repeated: Option<&'static str>,
    pub steps: Option<&'static str>,
    pub palindrome: Option<&'static str>,
    pub equations: Option<String>,
    /// The present per-rule reasons joined with `", "`, in rule order.
    pub reason: Option<String>,
}

/// Run all four rules against one time.
pub fn check_time(time: ClockTime) -> LuckRow {
    let digits = time.digits();
    debug!("Checking {} with digits {:?}", time, digits);

    let repeated = repeated_digit(&digits);
    let steps = monotonic_step(&digits);
    let palin = palindrome(&digits);
    let equations = EquationSearch::new().find_equations(&digits);

    let reasons: Vec<&str> = [repeated, steps, palin, equations.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    let lucky = !reasons.is_empty();
    let reason = if lucky { Some(reasons.join(", ")) } else { None };

    LuckRow {
        time,
        lucky,
        repeated,
        steps,
        palindrome: palin,
        equations,
        reason,
    }
}

/// Classify every time on the given clock.
///
/// Times are checked in parallel; rows come back in enumeration order.
pub fn check_all_times(mode: ClockMode) -> Vec<LuckRow> {
    let times: Vec<ClockTime> = all_times(mode).collect();
    times.into_par_iter().map(check_time).collect()
}

/// One line per time, `9:18 is lucky (9-1=8, 9=1+8)` or `2:23 is unlucky`.
pub fn reasons_listing(rows: &[LuckRow]) -> String {
    let mut out = String::new();
    for row in rows {
        match row.reason.as_deref() {
            Some(reason) => {
                let _ = writeln!(out, "{} is lucky ({})", row.time, reason);
            }
            None => {
                let _ = writeln!(out, "{} is unlucky", row.time);
            }
        }
    }
    out
}

/// Tab-separated dump of every column, one row per time; absent cells
/// print as `-`.
pub fn table_listing(rows: &[LuckRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.time,
            row.lucky,
            row.repeated.unwrap_or("-"),
            row.steps.unwrap_or("-"),
            row.palindrome.unwrap_or("-"),
            row.equations.as_deref().unwrap_or("-"),
            row.reason.as_deref().unwrap_or("-"),
        );
    }
    out
}
