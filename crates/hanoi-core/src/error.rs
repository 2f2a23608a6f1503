//! Error types for puzzle construction and move validation.

use std::error::Error;
use std::fmt;

/// Errors from [`Puzzle::new()`](crate::Puzzle::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PuzzleError {
    /// The rod/disk counts cannot describe a puzzle: zero rods, zero
    /// disks, or the reserved rod count [`RESERVED_ROD_COUNT`](crate::RESERVED_ROD_COUNT).
    InvalidConfiguration {
        /// Requested number of rods.
        rods: u32,
        /// Requested number of disks.
        disks: u32,
    },
    /// Slot storage for `rods × disks` could not be obtained.
    AllocationFailed {
        /// Number of `u32` slots requested, if it fit in a `usize`.
        slots: Option<usize>,
    },
    /// A slot layout handed to [`Puzzle::from_slots()`](crate::Puzzle::from_slots)
    /// breaks a rod or disk invariant.
    InvalidLayout {
        /// Description of the broken invariant.
        reason: String,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { rods, disks } => {
                write!(f, "invalid puzzle configuration: {rods} rods, {disks} disks")
            }
            Self::AllocationFailed { slots: Some(n) } => {
                write!(f, "failed to allocate {n} rod slots")
            }
            Self::AllocationFailed { slots: None } => {
                write!(f, "rod slot count overflows usize")
            }
            Self::InvalidLayout { reason } => write!(f, "invalid rod layout: {reason}"),
        }
    }
}

impl Error for PuzzleError {}

/// Why [`Puzzle::try_move()`](crate::Puzzle::try_move) refused a move.
///
/// Variants are listed in the order they are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    /// A rod index is not part of this puzzle.
    RodOutOfRange {
        /// The offending rod index.
        rod: u32,
    },
    /// The source rod holds no disks.
    EmptySource {
        /// The empty source rod.
        rod: u32,
    },
    /// The destination's top disk is smaller than the disk being moved.
    SizeViolation {
        /// Size of the disk on top of the source rod.
        moving: u32,
        /// Size of the disk on top of the destination rod.
        resting: u32,
    },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RodOutOfRange { rod } => write!(f, "rod {rod} does not exist"),
            Self::EmptySource { rod } => write!(f, "rod {rod} is empty"),
            Self::SizeViolation { moving, resting } => {
                write!(f, "disk {moving} cannot rest on smaller disk {resting}")
            }
        }
    }
}

impl Error for MoveRejection {}
