//! The three plain digit-pattern rules. The fourth rule, equation search,
//! lives in the search module.

/// Every digit the same.
pub fn repeated_digit(digits: &[u8]) -> Option<&'static str> {
    let (first, rest) = digits.split_first()?;
    if rest.iter().all(|digit| digit == first) {
        Some("repeated digit")
    } else {
        None
    }
}

/// Successive digits stepping by exactly +1 or exactly -1.
pub fn monotonic_step(digits: &[u8]) -> Option<&'static str> {
    let mut diffs = digits
        .windows(2)
        .map(|pair| i16::from(pair[1]) - i16::from(pair[0]));

    let first = diffs.next()?;
    if !diffs.all(|diff| diff == first) {
        return None;
    }

    match first {
        1 => Some("incrementing"),
        -1 => Some("decrementing"),
        _ => None,
    }
}

/// Digits reading the same in both directions.
pub fn palindrome(digits: &[u8]) -> Option<&'static str> {
    if digits.iter().eq(digits.iter().rev()) {
        Some("palindrome")
    } else {
        None
    }
}
