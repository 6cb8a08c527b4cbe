//! Serializes operation records back into the wire grammar.
//!
//! Mirrors the `opAssembler` in Etherpad's `Changeset.js` — the inverse of
//! [`OpIter`](crate::OpIter) for the operations region. Bank text is the
//! caller's concern, exactly as on the decoding side.

use easysync_base36::num_to_string;

use crate::op::Op;

/// Builds the operations region of a changeset string.
///
/// ```
/// use easysync::{Op, Opcode, OpAssembler};
///
/// let mut assem = OpAssembler::new();
/// assem.append(&Op::new(Opcode::Insert, 3, 0, ""));
/// assem.append(&Op::new(Opcode::Keep, 5, 3, ""));
/// assert_eq!(assem.as_str(), "+3|3=5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpAssembler {
    out: String,
}

impl OpAssembler {
    pub fn new() -> OpAssembler {
        OpAssembler::default()
    }

    /// Appends one operation header. Cleared records are skipped, matching
    /// the iterator's end-of-stream sentinel.
    pub fn append(&mut self, op: &Op) {
        let Some(opcode) = op.opcode else {
            return;
        };
        self.out.push_str(&op.attribs);
        if op.lines > 0 {
            self.out.push('|');
            self.out.push_str(&num_to_string(op.lines));
        }
        self.out.push(opcode.as_char());
        self.out.push_str(&num_to_string(op.chars));
    }

    /// The encoded operations so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Discards everything appended so far, keeping the buffer.
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Consumes the assembler, returning the encoded operations region.
    pub fn into_string(self) -> String {
        self.out
    }
}
