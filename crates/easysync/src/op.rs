//! Changeset operation record.
//!
//! Mirrors the `Op` object in Etherpad's `Changeset.js`.

use std::fmt;

/// Kind of a changeset operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `+` — insert characters taken from the bank.
    Insert,
    /// `-` — delete characters from the source text.
    Delete,
    /// `=` — keep (retain) characters unchanged.
    Keep,
}

impl Opcode {
    /// The wire character for this opcode.
    pub fn as_char(self) -> char {
        match self {
            Opcode::Insert => '+',
            Opcode::Delete => '-',
            Opcode::Keep => '=',
        }
    }

    /// Parses a wire character; anything outside `+-=` is `None`.
    pub fn from_char(c: char) -> Option<Opcode> {
        match c {
            '+' => Some(Opcode::Insert),
            '-' => Some(Opcode::Delete),
            '=' => Some(Opcode::Keep),
            _ => None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One decoded changeset operation.
///
/// `opcode == None` is the cleared state: `chars == 0`, `lines == 0`,
/// `attribs` empty. [`OpIter`](crate::OpIter) hands out cleared records
/// once the stream is exhausted.
///
/// The format convention is `chars >= lines`; this type does not enforce
/// it, validation belongs to the caller.
///
/// To overwrite an existing record in place (reusing its `attribs`
/// allocation), use [`Clone::clone_from`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Op {
    /// Operation kind; `None` when the record is cleared.
    pub opcode: Option<Opcode>,
    /// Number of characters the operation spans.
    pub chars: u64,
    /// Number of newline characters among those; 0 when the encoding
    /// omits the `|lines` group.
    pub lines: u64,
    /// Concatenated `*<base36-id>` attribute references. Opaque at this
    /// layer; resolution lives in the attribute pool.
    pub attribs: String,
}

impl Op {
    /// Creates a populated operation record.
    pub fn new(opcode: Opcode, chars: u64, lines: u64, attribs: impl Into<String>) -> Op {
        Op {
            opcode: Some(opcode),
            chars,
            lines,
            attribs: attribs.into(),
        }
    }

    /// Resets all four fields to the cleared state. Keeps the `attribs`
    /// allocation for reuse.
    pub fn clear(&mut self) {
        self.opcode = None;
        self.chars = 0;
        self.lines = 0;
        self.attribs.clear();
    }

    /// `true` when the record is in the cleared state.
    pub fn is_empty(&self) -> bool {
        self.opcode.is_none()
    }
}

impl Clone for Op {
    fn clone(&self) -> Op {
        Op {
            opcode: self.opcode,
            chars: self.chars,
            lines: self.lines,
            attribs: self.attribs.clone(),
        }
    }

    // Field-wise overwrite so a reused record keeps its attribs buffer.
    fn clone_from(&mut self, source: &Op) {
        self.opcode = source.opcode;
        self.chars = source.chars;
        self.lines = source.lines;
        self.attribs.clone_from(&source.attribs);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_cleared() {
        let op = Op::default();
        assert!(op.is_empty());
        assert_eq!(op.chars, 0);
        assert_eq!(op.lines, 0);
        assert_eq!(op.attribs, "");
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut op = Op::new(Opcode::Insert, 5, 2, "*1c");
        op.clear();
        assert_eq!(op, Op::default());
    }

    #[test]
    fn clone_is_independent() {
        let original = Op::new(Opcode::Delete, 3, 1, "*0");
        let mut copy = original.clone();
        copy.chars = 99;
        copy.attribs.push_str("*1");
        assert_eq!(original, Op::new(Opcode::Delete, 3, 1, "*0"));
        assert_eq!(copy, Op::new(Opcode::Delete, 99, 1, "*0*1"));
    }

    #[test]
    fn clone_from_overwrites_all_fields() {
        let src = Op::new(Opcode::Keep, 7, 0, "*2*3");
        let mut dst = Op::new(Opcode::Insert, 1, 1, "*9");
        dst.clone_from(&src);
        assert_eq!(dst, src);

        // Later mutation of the source does not leak into the copy.
        let mut src = src;
        src.chars = 0;
        assert_eq!(dst.chars, 7);
    }

    #[test]
    fn opcode_chars_roundtrip() {
        for opcode in [Opcode::Insert, Opcode::Delete, Opcode::Keep] {
            assert_eq!(Opcode::from_char(opcode.as_char()), Some(opcode));
        }
        assert_eq!(Opcode::from_char('?'), None);
        assert_eq!(Opcode::from_char('*'), None);
    }
}
