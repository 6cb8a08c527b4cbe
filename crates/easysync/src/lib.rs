//! easysync — Rust port of Etherpad's changeset operation codec.
//!
//! A changeset encodes the difference between two document revisions as a
//! stream of insert/delete/keep operations followed by a text bank. This
//! crate covers the operation stream itself: decoding it one operation at a
//! time ([`OpIter`]) and building it back up ([`OpAssembler`]). The
//! surrounding envelope — header, attribute pool, bank extraction — belongs
//! to the host editor.
//!
//! # Example
//!
//! ```
//! use easysync::{Op, Opcode, OpIter};
//!
//! let mut it = OpIter::new("+3*0+1=2").unwrap();
//! assert!(it.has_next());
//!
//! let op = it.next_op().unwrap();
//! assert_eq!(op, Op::new(Opcode::Insert, 3, 0, ""));
//! // The inserted text sits in the bank right after the header token.
//! assert_eq!(it.last_index(), 2);
//! ```

pub mod op;
pub mod op_assembler;
pub mod op_iterator;

pub use op::{Op, Opcode};
pub use op_assembler::OpAssembler;
pub use op_iterator::{OpIter, OpStreamError};
