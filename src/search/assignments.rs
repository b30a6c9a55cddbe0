use crate::eval::{Op, OP_ALPHABET};

/// Iterator over every ordered assignment of operators to `len` slots, in
/// lexicographic order over [`OP_ALPHABET`].
///
/// A length of zero yields exactly one empty assignment, matching the
/// zeroth Cartesian power.
#[derive(Debug, Clone)]
pub struct OpAssignments {
    indices: Vec<usize>,
    exhausted: bool,
}

impl OpAssignments {
    pub fn new(len: usize) -> Self {
        Self {
            indices: vec![0; len],
            exhausted: false,
        }
    }
}

impl Iterator for OpAssignments {
    type Item = Vec<Op>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let assignment: Vec<Op> = self.indices.iter().map(|&idx| OP_ALPHABET[idx]).collect();

        // Odometer step, rightmost slot fastest.
        let mut slot = self.indices.len();
        loop {
            if slot == 0 {
                self.exhausted = true;
                break;
            }
            slot -= 1;
            self.indices[slot] += 1;
            if self.indices[slot] < OP_ALPHABET.len() {
                break;
            }
            self.indices[slot] = 0;
        }

        Some(assignment)
    }
}
