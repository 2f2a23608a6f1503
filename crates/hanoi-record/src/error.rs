//! Error types for the session record system.

use std::fmt;
use std::io;

/// Errors that can occur while writing, finalizing, or verifying a record.
#[derive(Debug)]
pub enum RecordError {
    /// An I/O error occurred during open, read, write, seek, or delete.
    Io(io::Error),
    /// The stream ended before the payload length announced by the header.
    Truncated {
        /// Payload bytes the header's counts call for.
        expected: u64,
        /// Payload bytes actually present.
        actual: u64,
    },
    /// The stored checksum does not match the recomputed one.
    ChecksumMismatch {
        /// Checksum stored at offset 0.
        recorded: u64,
        /// Checksum recomputed over the header and payload.
        computed: u64,
    },
    /// The header's counts describe a payload too large to address.
    LayoutOverflow {
        /// Rod count from the header.
        rods: u32,
        /// Disk count from the header.
        disks: u32,
        /// Move count from the header.
        moves: u64,
    },
    /// An earlier append failed, so the writer accepts no more moves.
    Poisoned,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Truncated { expected, actual } => {
                write!(
                    f,
                    "record truncated: header calls for {expected} payload bytes, found {actual}"
                )
            }
            Self::ChecksumMismatch { recorded, computed } => {
                write!(
                    f,
                    "checksum mismatch: recorded={recorded:#018x}, computed={computed:#018x}"
                )
            }
            Self::LayoutOverflow { rods, disks, moves } => {
                write!(
                    f,
                    "payload size overflows for {rods} rods, {disks} disks, {moves} moves"
                )
            }
            Self::Poisoned => write!(f, "record writer poisoned by an earlier failed append"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RecordError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
