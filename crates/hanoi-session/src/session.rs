//! Round lifecycle: one puzzle, one open record at a time.
//!
//! A [`Session`] owns the puzzle and the recorder of the current round.
//! Each accepted move is appended to the record. When the puzzle becomes
//! complete on a rod other than the one it was last completed on, the
//! round's record is finalized and a new record is opened from the solved
//! layout for the next round.
//!
//! # Ownership model
//!
//! Single-threaded and synchronous. All mutating methods take `&mut self`
//! and every file operation blocks. The old recorder is always finalized
//! and closed before the next one is created, so at most one record file
//! is open at any time.

use std::path::Path;
use std::time::Instant;

use hanoi_core::{MoveRejection, Puzzle};
use hanoi_record::{FinishedRecord, RecordsDirectory, SessionRecorder};
use log::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::SessionError;

/// What happened to a move request.
#[derive(Debug)]
pub enum MoveOutcome {
    /// Source and destination were the same rod; nothing was attempted.
    SameRod,
    /// The puzzle refused the move; nothing was recorded.
    Rejected(MoveRejection),
    /// The move was applied and recorded.
    Applied,
    /// The move was applied, recorded, and completed the puzzle on a new
    /// rod. The finished round's record is returned; a fresh round is
    /// already being recorded.
    RoundComplete {
        /// Rod now holding every disk.
        rod: u32,
        /// The finalized record of the round that just ended.
        record: FinishedRecord,
    },
}

/// A playing session: the puzzle plus the record of the current round.
///
/// # Example
///
/// ```no_run
/// use hanoi_session::{MoveOutcome, Session, SessionConfig};
///
/// let mut session = Session::new(SessionConfig {
///     username: "ada".into(),
///     records_dir: "/tmp/hanoi".into(),
///     ..SessionConfig::default()
/// })?;
/// match session.try_move(0, 2)? {
///     MoveOutcome::Rejected(why) => eprintln!("no can do: {why}"),
///     _ => {}
/// }
/// session.quit()?;
/// # Ok::<(), hanoi_session::SessionError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    puzzle: Puzzle,
    records: RecordsDirectory,
    username: String,
    recorder: Option<SessionRecorder>,
    round_started: Instant,
    last_completion: Option<u32>,
    rounds_completed: u64,
}

impl Session {
    /// Validate `config`, build the puzzle, and open the first round's record.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let puzzle = Puzzle::new(config.rods, config.disks)?;
        let mut records = config.records_directory();
        let recorder = SessionRecorder::create(&mut records, &puzzle, &config.username)?;
        info!(
            "session started: {} rods, {} disks, recording to {}",
            config.rods,
            config.disks,
            records.directory().display()
        );

        Ok(Self {
            last_completion: puzzle.completion(),
            puzzle,
            records,
            username: config.username,
            recorder: Some(recorder),
            round_started: Instant::now(),
            rounds_completed: 0,
        })
    }

    /// Attempt to move the top disk of `src` onto `dst`.
    ///
    /// Rod indices are range-checked before the same-rod guard, so
    /// `try_move(9, 9)` on a three-rod puzzle is rejected rather than
    /// treated as a no-op.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Record`] if the move could not be appended. The
    ///   move is undone and the round's record is closed.
    /// - [`SessionError::Record`] if the finished round could not be
    ///   finalized.
    /// - [`SessionError::NextRound`] if the round was finalized but the next
    ///   record could not be opened. The finished record travels with the
    ///   error.
    ///
    /// After any of these the session has no open record and every later
    /// move fails with [`SessionError::Closed`].
    pub fn try_move(&mut self, src: u32, dst: u32) -> Result<MoveOutcome, SessionError> {
        if src == dst && src < self.puzzle.rod_count() {
            return Ok(MoveOutcome::SameRod);
        }
        let elapsed = self.elapsed_millis();
        let recorder = self.recorder.as_mut().ok_or(SessionError::Closed)?;

        if let Err(why) = self.puzzle.try_move(src, dst) {
            debug!("move {src} -> {dst} rejected: {why}");
            return Ok(MoveOutcome::Rejected(why));
        }
        if let Err(e) = recorder.push_move(src, dst, elapsed) {
            self.abandon_move(src, dst);
            return Err(e.into());
        }
        debug!("move {src} -> {dst} at {elapsed} ms");

        match self.puzzle.completion() {
            Some(rod) if self.last_completion != Some(rod) => {
                let record = self.complete_round(rod)?;
                Ok(MoveOutcome::RoundComplete { rod, record })
            }
            _ => Ok(MoveOutcome::Applied),
        }
    }

    fn complete_round(&mut self, rod: u32) -> Result<FinishedRecord, SessionError> {
        let recorder = self.recorder.take().ok_or(SessionError::Closed)?;
        let record = recorder.finalize()?;
        self.last_completion = Some(rod);
        self.rounds_completed += 1;
        info!(
            "round {} complete on rod {rod} in {} moves",
            self.rounds_completed, record.move_count
        );

        match SessionRecorder::create(&mut self.records, &self.puzzle, &self.username) {
            Ok(next) => {
                self.recorder = Some(next);
                self.round_started = Instant::now();
                Ok(record)
            }
            Err(source) => Err(SessionError::NextRound {
                finished: record,
                source,
            }),
        }
    }

    /// Undo a move whose append failed and close the round's record, so
    /// the puzzle never runs ahead of its log.
    fn abandon_move(&mut self, src: u32, dst: u32) {
        if let Err(why) = self.puzzle.try_move(dst, src) {
            warn!("could not undo move {src} -> {dst}: {why}");
        }
        let Some(recorder) = self.recorder.take() else {
            return;
        };
        let path = recorder.path().to_path_buf();
        let closed = if recorder.moves_recorded() == 0 {
            recorder.remove_file().map(|_| ())
        } else {
            recorder.finalize().map(|_| ())
        };
        match closed {
            Ok(()) => warn!("closed record {} after a failed append", path.display()),
            Err(e) => warn!("could not close record {}: {e}", path.display()),
        }
    }

    /// End the session.
    ///
    /// A round without moves has its record deleted; otherwise the record
    /// is finalized and returned.
    pub fn quit(mut self) -> Result<Option<FinishedRecord>, SessionError> {
        match self.recorder.take() {
            None => Ok(None),
            Some(recorder) if recorder.moves_recorded() == 0 => {
                recorder.remove_file()?;
                Ok(None)
            }
            Some(recorder) => Ok(Some(recorder.finalize()?)),
        }
    }

    /// The puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Moves recorded in the current round.
    pub fn moves_this_round(&self) -> u64 {
        self.recorder.as_ref().map_or(0, SessionRecorder::moves_recorded)
    }

    /// Rounds finished so far.
    pub fn rounds_completed(&self) -> u64 {
        self.rounds_completed
    }

    /// Rod of the most recent completion (rod 0 before any round ends).
    pub fn last_completion(&self) -> Option<u32> {
        self.last_completion
    }

    /// Path of the record being written, if one is open.
    pub fn record_path(&self) -> Option<&Path> {
        self.recorder.as_ref().map(SessionRecorder::path)
    }

    fn elapsed_millis(&self) -> u64 {
        u64::try_from(self.round_started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
