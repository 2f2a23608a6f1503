//! Puzzle state machine for the generalized Tower of Hanoi.
//!
//! This is the leaf crate with zero internal dependencies. It owns the
//! rod/disk layout of a single puzzle, enforces move legality, and
//! detects completion. Rendering, input handling, and recording live
//! elsewhere and talk to this crate through plain return values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod puzzle;
pub mod solution;

pub use error::{MoveRejection, PuzzleError};
pub use puzzle::{Puzzle, RESERVED_ROD_COUNT};
pub use solution::classic_solution;
