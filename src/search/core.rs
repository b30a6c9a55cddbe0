use log::{debug, info};

use crate::eval::{evaluate, EvalError};
use crate::search::assignments::OpAssignments;
use crate::search::render::render_equation;

/// Exhaustive search for operator assignments that turn a digit sequence
/// into a true equation.
pub struct EquationSearch {}

impl EquationSearch {
    /// Create a new equation search
    pub fn new() -> Self {
        Self {}
    }

    /// Try every operator assignment between the digits and collect the
    /// ones forming a true equation, joined with `", "` in enumeration
    /// order.
    ///
    /// A candidate succeeds only when it evaluates to the boolean `true`;
    /// numeric results and division failures are not successes. Returns
    /// `None` when no assignment works.
    pub fn find_equations(&self, digits: &[u8]) -> Option<String> {
        let operands: Vec<f64> = digits.iter().copied().map(f64::from).collect();
        let slots = digits.len().saturating_sub(1);

        let mut successes: Vec<String> = Vec::new();
        for ops in OpAssignments::new(slots) {
            match evaluate(&operands, &ops) {
                Ok(value) if value.is_true() => {
                    let equation = render_equation(digits, &ops);
                    debug!("True equation: {}", equation);
                    successes.push(equation);
                }
                Ok(_) => {}
                // A zero divisor disqualifies the candidate, nothing more.
                Err(EvalError::DivisionByZero) => {}
            }
        }

        if successes.is_empty() {
            None
        } else {
            info!("Found {} true equations for {:?}", successes.len(), digits);
            Some(successes.join(", "))
        }
    }
}

impl Default for EquationSearch {
    fn default() -> Self {
        Self::new()
    }
}
