//! Hanoi: a generalized Tower of Hanoi with integrity-checked session records.
//!
//! This is the facade crate re-exporting the public API of the Hanoi
//! sub-crates. Depending on `hanoi` alone is enough for most users.
//!
//! # Quick start
//!
//! ```rust
//! use hanoi::prelude::*;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut session = Session::new(SessionConfig {
//!     rods: 3,
//!     disks: 2,
//!     username: "ada".into(),
//!     records_dir: dir.path().to_path_buf(),
//!     name_seed: Some(7),
//! })
//! .unwrap();
//!
//! assert!(matches!(session.try_move(0, 1).unwrap(), MoveOutcome::Applied));
//! assert!(matches!(session.try_move(0, 2).unwrap(), MoveOutcome::Applied));
//! let MoveOutcome::RoundComplete { rod, record } = session.try_move(1, 2).unwrap() else {
//!     panic!("round should be complete");
//! };
//! assert_eq!(rod, 2);
//! assert_eq!(verify_file(&record.path).unwrap().move_count, 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`puzzle`] | `hanoi-core` | Puzzle state, move rules, classic solver |
//! | [`record`] | `hanoi-record` | Record file format, recorder, verification |
//! | [`session`] | `hanoi-session` | Round lifecycle and configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Puzzle state and move rules (`hanoi-core`).
///
/// [`puzzle::Puzzle`] holds the rods; [`puzzle::classic_solution`] produces
/// the optimal three-rod move list.
pub use hanoi_core as puzzle;

/// Record files (`hanoi-record`).
///
/// [`record::SessionRecorder`] writes one round to disk and
/// [`record::verify_file`] checks a finished record's checksum.
pub use hanoi_record as record;

/// Round lifecycle (`hanoi-session`).
///
/// [`session::Session`] drives a puzzle and its records from a
/// [`session::SessionConfig`].
pub use hanoi_session as session;

/// Common imports for typical Hanoi usage.
///
/// ```rust
/// use hanoi::prelude::*;
/// ```
pub mod prelude {
    // Puzzle
    pub use hanoi_core::{classic_solution, MoveRejection, Puzzle, PuzzleError};

    // Records
    pub use hanoi_record::{
        verify_file, FinishedRecord, RecordError, RecordHeader, RecordsDirectory,
        SessionRecorder,
    };

    // Session
    pub use hanoi_session::{MoveOutcome, Session, SessionConfig, SessionError};
}
