//! Playing sessions over a recorded Tower of Hanoi puzzle.
//!
//! [`Session`] wires a [`hanoi_core::Puzzle`] to a
//! [`hanoi_record::SessionRecorder`]: accepted moves are logged, completed
//! rounds are finalized, and a fresh record starts from the solved layout.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod session;

pub use config::{ConfigError, SessionConfig, DEFAULT_DISKS, DEFAULT_RODS};
pub use error::SessionError;
pub use session::{MoveOutcome, Session};
