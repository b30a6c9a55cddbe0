use std::fmt;

use log::debug;

use crate::eval::errors::EvalError;
use crate::eval::value::Value;

/// The closed operator alphabet, in enumeration order.
pub const OP_ALPHABET: [Op; 6] = [Op::Concat, Op::Mul, Op::Div, Op::Add, Op::Sub, Op::Eq];

/// Number of precedence tiers (see [`Op::tier`]).
pub(crate) const TIER_COUNT: usize = 4;

/// One symbol from the fixed operator alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Digit concatenation: `1_2` is the number 12.
    Concat,
    Mul,
    Div,
    Add,
    Sub,
    /// Equality; the only operator that produces a boolean.
    Eq,
}

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

/// `=` semantics: numbers compare numerically (exact), a boolean equals
/// only the same boolean. `2=2=2` is therefore false: `2=2` yields true,
/// and `true=2` fails the identity rule.
fn identity_eq(left: Value, right: Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Bool(_), Value::Number(_)) | (Value::Number(_), Value::Bool(_)) => false,
    }
}

impl Op {
    /// Precedence tier, lower collapsing first: `_`, then `*` `/`,
    /// then `+` `-`, then `=`.
    pub fn tier(self) -> usize {
        match self {
            Op::Concat => 0,
            Op::Mul | Op::Div => 1,
            Op::Add | Op::Sub => 2,
            Op::Eq => 3,
        }
    }

    /// Printable symbol used in equation renderings.
    pub fn symbol(self) -> char {
        match self {
            Op::Concat => '_',
            Op::Mul => '*',
            Op::Div => '/',
            Op::Add => '+',
            Op::Sub => '-',
            Op::Eq => '=',
        }
    }

    /// Apply the operator to two adjacent values.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] when `/` meets a zero divisor.
    pub fn apply(self, left: Value, right: Value) -> Result<Value, EvalError> {
        let value = match self {
            Op::Concat => Value::Number(10.0 * left.as_number() + right.as_number()),
            Op::Mul => Value::Number(left.as_number() * right.as_number()),
            Op::Div => {
                let divisor = right.as_number();
                if is_zero(divisor) {
                    debug!("Division by zero: {} / {}", left, right);
                    return Err(EvalError::DivisionByZero);
                }
                Value::Number(left.as_number() / divisor)
            }
            Op::Add => Value::Number(left.as_number() + right.as_number()),
            Op::Sub => Value::Number(left.as_number() - right.as_number()),
            Op::Eq => Value::Bool(identity_eq(left, right)),
        };
        Ok(value)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
