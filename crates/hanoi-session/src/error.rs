//! Errors surfaced by [`Session`](crate::Session).

use std::error::Error;
use std::fmt;

use hanoi_core::PuzzleError;
use hanoi_record::{FinishedRecord, RecordError};

use crate::config::ConfigError;

/// Anything that can stop a session.
#[derive(Debug)]
pub enum SessionError {
    /// The configuration was rejected before any file was created.
    Config(ConfigError),
    /// The puzzle could not be built.
    Puzzle(PuzzleError),
    /// A record file operation failed.
    Record(RecordError),
    /// A round was finalized but the next round's record could not be
    /// opened.
    NextRound {
        /// The record of the round that did finish.
        finished: FinishedRecord,
        /// Why the next record could not be created.
        source: RecordError,
    },
    /// An earlier failure closed the round's record and none is open.
    Closed,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Puzzle(e) => write!(f, "puzzle: {e}"),
            Self::Record(e) => write!(f, "record: {e}"),
            Self::NextRound { finished, source } => write!(
                f,
                "round saved to {} but the next record could not be opened: {source}",
                finished.path.display()
            ),
            Self::Closed => write!(f, "session has no open record"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Puzzle(e) => Some(e),
            Self::Record(e) => Some(e),
            Self::NextRound { source, .. } => Some(source),
            Self::Closed => None,
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PuzzleError> for SessionError {
    fn from(e: PuzzleError) -> Self {
        Self::Puzzle(e)
    }
}

impl From<RecordError> for SessionError {
    fn from(e: RecordError) -> Self {
        Self::Record(e)
    }
}
