use crate::eval::{evaluate, EvalError, Op, Value};

#[test]
fn test_single_operand_passes_through() {
    let result = evaluate(&[7.0], &[]);
    assert_eq!(result, Ok(Value::Number(7.0)));
}

#[test]
fn test_division_before_multiplication_within_tier() {
    // 6/2*3 collapses left to right: 9, not 1
    let result = evaluate(&[6.0, 2.0, 3.0], &[Op::Div, Op::Mul]);
    assert_eq!(result, Ok(Value::Number(9.0)));
}

#[test]
fn test_subtraction_before_addition_within_tier() {
    // 8-2+3 collapses left to right: 9, not 3
    let result = evaluate(&[8.0, 2.0, 3.0], &[Op::Sub, Op::Add]);
    assert_eq!(result, Ok(Value::Number(9.0)));
}

#[test]
fn test_division_binds_before_addition() {
    // 1+3/3 = 2
    let result = evaluate(&[1.0, 3.0, 3.0], &[Op::Add, Op::Div]);
    assert_eq!(result, Ok(Value::Number(2.0)));
}

#[test]
fn test_concat_builds_two_digit_number() {
    let result = evaluate(&[1.0, 2.0], &[Op::Concat]);
    assert_eq!(result, Ok(Value::Number(12.0)));
}

#[test]
fn test_concat_collapses_before_everything_else() {
    // 1_2=3+9 reads as 12 = 12
    let result = evaluate(&[1.0, 2.0, 3.0, 9.0], &[Op::Concat, Op::Eq, Op::Add]);
    assert_eq!(result, Ok(Value::Bool(true)));
}

#[test]
fn test_equality_of_unequal_numbers() {
    let result = evaluate(&[1.0, 2.0], &[Op::Eq]);
    assert_eq!(result, Ok(Value::Bool(false)));
}

#[test]
fn test_equality_after_arithmetic() {
    // 1+2=3
    let result = evaluate(&[1.0, 2.0, 3.0], &[Op::Add, Op::Eq]);
    assert_eq!(result, Ok(Value::Bool(true)));
}

#[test]
fn test_mixed_tiers() {
    // 1+2*3=4 reads as 7 = 4
    let result = evaluate(&[1.0, 2.0, 3.0, 4.0], &[Op::Add, Op::Mul, Op::Eq]);
    assert_eq!(result, Ok(Value::Bool(false)));
}

#[test]
fn test_chained_equality_is_not_transitive() {
    // 2=2=2: the first comparison yields true, and true=2 fails the
    // boolean identity rule
    let result = evaluate(&[2.0, 2.0, 2.0], &[Op::Eq, Op::Eq]);
    assert_eq!(result, Ok(Value::Bool(false)));
}

#[test]
fn test_boolean_never_equals_numerically_equal_number() {
    // 1=1 yields true; true=1 must still be false even though true is
    // conventionally 1
    let result = evaluate(&[1.0, 1.0, 1.0], &[Op::Eq, Op::Eq]);
    assert_eq!(result, Ok(Value::Bool(false)));
}

#[test]
fn test_division_by_zero_is_an_error() {
    let result = evaluate(&[5.0, 0.0], &[Op::Div]);
    assert_eq!(result, Err(EvalError::DivisionByZero));
}

#[test]
fn test_division_by_zero_from_collapsed_divisor() {
    // 5/0_0: the concatenation collapses to 0 before the division runs
    let result = evaluate(&[5.0, 0.0, 0.0], &[Op::Div, Op::Concat]);
    assert_eq!(result, Err(EvalError::DivisionByZero));
}

#[test]
fn test_evaluation_is_pure() {
    let operands = [9.0, 1.0, 8.0];
    let ops = [Op::Sub, Op::Eq];
    let first = evaluate(&operands, &ops);
    let second = evaluate(&operands, &ops);
    assert_eq!(first, second);
    assert_eq!(first, Ok(Value::Bool(true)));
}

#[test]
#[should_panic(expected = "one more operand than operators")]
fn test_operand_count_mismatch_panics() {
    let _ = evaluate(&[1.0, 2.0], &[]);
}

#[test]
fn test_is_true_rejects_truthy_numbers() {
    assert!(Value::Bool(true).is_true());
    assert!(!Value::Bool(false).is_true());
    assert!(!Value::Number(1.0).is_true());
}

#[test]
fn test_op_symbols() {
    let symbols: String = crate::eval::OP_ALPHABET.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, "_*/+-=");
    assert_eq!(Op::Concat.to_string(), "_");
    assert_eq!(Op::Eq.to_string(), "=");
}
