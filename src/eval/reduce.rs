use log::debug;

use crate::eval::errors::EvalError;
use crate::eval::op::{Op, TIER_COUNT};
use crate::eval::value::Value;

/// Evaluate `operands` joined by `ops`, collapsing one precedence tier at a
/// time, left to right within each tier.
///
/// Callers build both sequences together, so
/// `operands.len() == ops.len() + 1` must hold on entry; a mismatch, or any
/// residue left after the final tier, is a defect and panics rather than
/// producing a wrong answer.
///
/// # Errors
///
/// Returns [`EvalError::DivisionByZero`] when a `/` meets a zero divisor;
/// the whole evaluation is abandoned.
pub fn evaluate(operands: &[f64], ops: &[Op]) -> Result<Value, EvalError> {
    assert_eq!(
        operands.len(),
        ops.len() + 1,
        "expected one more operand than operators"
    );

    let mut values: Vec<Value> = operands.iter().copied().map(Value::Number).collect();
    let mut pending: Vec<Op> = ops.to_vec();

    for tier in 0..TIER_COUNT {
        let mut slot = 0;
        while slot < pending.len() {
            if pending[slot].tier() != tier {
                slot += 1;
                continue;
            }
            // Collapse in place and rescan the same slot, since everything
            // to the right shifted left by one.
            let collapsed = pending[slot].apply(values[slot], values[slot + 1])?;
            values[slot] = collapsed;
            values.remove(slot + 1);
            pending.remove(slot);
        }
    }

    assert!(
        values.len() == 1 && pending.is_empty(),
        "tier reduction left {} values and {} operators",
        values.len(),
        pending.len()
    );
    debug!("Reduced to {}", values[0]);
    Ok(values[0])
}
