use crate::eval::Op;

/// Interleave digits and operators into the printable equation form, e.g.
/// digits `[9, 1, 8]` with `[-, =]` into `"9-1=8"`.
pub fn render_equation(digits: &[u8], ops: &[Op]) -> String {
    let mut text = String::with_capacity(digits.len() + ops.len());
    for (idx, &digit) in digits.iter().enumerate() {
        text.push(char::from(b'0' + digit));
        if let Some(op) = ops.get(idx) {
            text.push(op.symbol());
        }
    }
    text
}
