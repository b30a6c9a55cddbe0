use std::fmt;

use crate::report::table::LuckRow;

/// Aggregate counts over a classified table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lucky: usize,
    pub unlucky: usize,
    pub repeated: usize,
    pub incrementing: usize,
    pub decrementing: usize,
    pub palindrome: usize,
}

impl Summary {
    pub fn tally(rows: &[LuckRow]) -> Self {
        Self {
            lucky: rows.iter().filter(|row| row.lucky).count(),
            unlucky: rows.iter().filter(|row| !row.lucky).count(),
            repeated: rows.iter().filter(|row| row.repeated.is_some()).count(),
            incrementing: rows
                .iter()
                .filter(|row| row.steps == Some("incrementing"))
                .count(),
            decrementing: rows
                .iter()
                .filter(|row| row.steps == Some("decrementing"))
                .count(),
            palindrome: rows.iter().filter(|row| row.palindrome.is_some()).count(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} lucky times", self.lucky)?;
        writeln!(f, "{} unlucky times", self.unlucky)?;
        writeln!(f, "repeated digit happened {} times", self.repeated)?;
        writeln!(f, "incrementing happened {} times", self.incrementing)?;
        writeln!(f, "decrementing happened {} times", self.decrementing)?;
        writeln!(f, "palindrome happened {} times", self.palindrome)
    }
}
