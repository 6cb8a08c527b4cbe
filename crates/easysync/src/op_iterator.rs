//! Changeset operation-stream iterator.
//!
//! Mirrors the `opIterator` factory in Etherpad's `Changeset.js`: a lazy
//! decoder over the operations region of a changeset string, with a one
//! token lookahead so `has_next` is O(1) and a malformed stream fails at
//! scan time.

use std::ops::Range;
use std::sync::OnceLock;

use easysync_base36::{parse_num, Base36Error};
use regex::Regex;
use thiserror::Error;

use crate::op::{Op, Opcode};

#[derive(Debug, Error)]
pub enum OpStreamError {
    /// The literal `?` marker at the current scan position. Fatal; never
    /// folded into end-of-stream.
    #[error("hit error opcode in op stream at offset {0}")]
    ErrorOpcode(usize),
    /// A count field too large for `u64`. No producer of the format emits
    /// these, but the checked parse surfaces them instead of panicking.
    #[error("bad count in op stream")]
    Num(#[from] Base36Error),
}

/// One operation header: attribute signatures, optional `|lines` group,
/// opcode, char count. The error marker `?` is part of the grammar so it
/// is caught at scan time rather than falling through as end-of-stream.
fn op_grammar() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"((?:\*[0-9a-z]+)*)(?:\|([0-9a-z]+))?([-+=])([0-9a-z]+)|\?").unwrap()
    })
}

/// A scanned operation token, held as the lookahead until `next_*`
/// consumes it. The attribs capture stays a byte range into the input so
/// scanning allocates nothing.
#[derive(Debug, Clone)]
struct Token {
    attribs: Range<usize>,
    lines: u64,
    opcode: Opcode,
    chars: u64,
}

/// Decodes an encoded operation stream one [`Op`] at a time.
///
/// The iterator scans eagerly: constructing it matches the first token,
/// and every `next_*` call matches the following one. A `?` marker in the
/// stream therefore fails construction or the `next_*` call that consumed
/// the operation *before* it.
///
/// After exhaustion, `next_*` keeps handing out cleared records; that is
/// the normal end-of-stream protocol, not an error.
///
/// ```
/// use easysync::{Op, Opcode, OpIter};
///
/// let mut it = OpIter::new("|3=5").unwrap();
/// assert_eq!(it.next_op().unwrap(), Op::new(Opcode::Keep, 5, 3, ""));
/// assert!(!it.has_next());
/// ```
#[derive(Debug, Clone)]
pub struct OpIter<'a> {
    ops: &'a str,
    /// Scan position: where the next grammar match starts.
    cur_index: usize,
    /// End of the token most recently returned by `next_*`.
    prev_index: usize,
    lookahead: Option<Token>,
}

impl<'a> OpIter<'a> {
    /// Starts decoding `ops` from its beginning.
    pub fn new(ops: &'a str) -> Result<OpIter<'a>, OpStreamError> {
        OpIter::at(ops, 0)
    }

    /// Starts decoding `ops` from byte offset `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is past the end of `ops`, per the usual slice
    /// bounds rules.
    pub fn at(ops: &'a str, start: usize) -> Result<OpIter<'a>, OpStreamError> {
        let mut iter = OpIter {
            ops,
            cur_index: start,
            prev_index: start,
            lookahead: None,
        };
        iter.lookahead = OpIter::scan(&mut iter)?;
        Ok(iter)
    }

    /// `true` iff the lookahead holds a real operation token.
    pub fn has_next(&self) -> bool {
        self.lookahead.is_some()
    }

    /// Byte offset just past the operation most recently returned by
    /// `next_*`; the start offset before any operation was returned.
    /// Callers use this to slice the bank text that follows each header.
    pub fn last_index(&self) -> usize {
        self.prev_index
    }

    /// Consumes the lookahead into `op`, then scans the next token.
    ///
    /// When the stream is exhausted, `op` is cleared instead. On a scan
    /// error `op` still holds the operation that was consumed; the
    /// lookahead is left in place, so retrying fails the same way.
    pub fn next_into(&mut self, op: &mut Op) -> Result<(), OpStreamError> {
        match self.lookahead.clone() {
            Some(token) => {
                op.opcode = Some(token.opcode);
                op.chars = token.chars;
                op.lines = token.lines;
                op.attribs.clear();
                op.attribs.push_str(&self.ops[token.attribs]);
                self.lookahead = self.scan()?;
            }
            None => op.clear(),
        }
        Ok(())
    }

    /// Owned-value form of [`next_into`](OpIter::next_into).
    pub fn next_op(&mut self) -> Result<Op, OpStreamError> {
        let mut op = Op::default();
        self.next_into(&mut op)?;
        Ok(op)
    }

    /// Matches one grammar token starting exactly at `cur_index`.
    ///
    /// Returns `Ok(None)` when no token starts there — either the input is
    /// spent or the next characters are not part of the op grammar. The
    /// scanner never skips input, so a valid token further along the
    /// string still means end-of-stream here.
    fn scan(&mut self) -> Result<Option<Token>, OpStreamError> {
        self.prev_index = self.cur_index;
        let caps = match op_grammar().captures_at(self.ops, self.cur_index) {
            Some(caps) => caps,
            None => return Ok(None),
        };
        let whole = match caps.get(0) {
            Some(m) if m.start() == self.cur_index => m,
            _ => return Ok(None),
        };
        if whole.as_str() == "?" {
            return Err(OpStreamError::ErrorOpcode(self.cur_index));
        }
        // The `?` branch is ruled out, so the op-token captures are present.
        let opcode = match caps.get(3).map(|m| m.as_str()) {
            Some("+") => Opcode::Insert,
            Some("-") => Opcode::Delete,
            _ => Opcode::Keep,
        };
        let lines = match caps.get(2) {
            Some(m) => parse_num(m.as_str())?,
            None => 0,
        };
        let chars = match caps.get(4) {
            Some(m) => parse_num(m.as_str())?,
            None => 0,
        };
        let attribs = caps
            .get(1)
            .map_or(self.cur_index..self.cur_index, |m| m.range());
        self.cur_index = whole.end();
        Ok(Some(Token {
            attribs,
            lines,
            opcode,
            chars,
        }))
    }
}

impl Iterator for OpIter<'_> {
    type Item = Result<Op, OpStreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        Some(self.next_op())
    }
}
