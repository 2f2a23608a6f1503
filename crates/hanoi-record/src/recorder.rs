//! File-backed recorder for a single round.
//!
//! A [`SessionRecorder`] moves through
//! `Created -> push_move* -> { finalize | remove_file } -> closed`.
//! Both terminal operations consume the recorder, so nothing can be
//! appended after a round has been finalized or discarded. Dropping the
//! recorder closes its file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use hanoi_core::Puzzle;
use log::{debug, info, warn};

use crate::error::RecordError;
use crate::path::RecordsDirectory;
use crate::types::FinishedRecord;
use crate::writer::RecordWriter;

/// Owns the record file of one round.
#[derive(Debug)]
pub struct SessionRecorder {
    writer: RecordWriter<File>,
    path: PathBuf,
}

impl SessionRecorder {
    /// Open a new record file under `records` and write the header plus
    /// a snapshot of `puzzle`.
    ///
    /// An existing file with the same name is truncated. If the header or
    /// snapshot cannot be written, the partial file is removed before the
    /// error is returned.
    pub fn create(
        records: &mut RecordsDirectory,
        puzzle: &Puzzle,
        username: &str,
    ) -> Result<Self, RecordError> {
        let path = records.next_path();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        match RecordWriter::create(file, puzzle, username, unix_now()) {
            Ok(writer) => {
                debug!(
                    "opened record {} ({} rods, {} disks)",
                    path.display(),
                    puzzle.rod_count(),
                    puzzle.disk_count()
                );
                Ok(Self { writer, path })
            }
            Err(e) => {
                if let Err(rm) = fs::remove_file(&path) {
                    warn!("could not remove partial record {}: {rm}", path.display());
                }
                Err(e)
            }
        }
    }

    /// Location of the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Moves appended so far.
    pub fn moves_recorded(&self) -> u64 {
        self.writer.moves_recorded()
    }

    /// Append a move. `elapsed_millis` is the time since the round began.
    pub fn push_move(&mut self, src: u32, dst: u32, elapsed_millis: u64) -> Result<(), RecordError> {
        self.writer.push_move(src, dst, elapsed_millis)
    }

    /// Write the checksum, sync the file, and close it.
    pub fn finalize(mut self) -> Result<FinishedRecord, RecordError> {
        let checksum = self.writer.finalize_checksum()?;
        self.writer.get_ref().sync_all()?;
        let move_count = self.writer.moves_recorded();
        info!(
            "finalized record {} ({move_count} moves, checksum {checksum:#018x})",
            self.path.display()
        );
        Ok(FinishedRecord {
            path: self.path,
            checksum,
            move_count,
        })
    }

    /// Close and delete the record file. Returns the path it had.
    pub fn remove_file(self) -> Result<PathBuf, RecordError> {
        let Self { writer, path } = self;
        drop(writer);
        fs::remove_file(&path)?;
        debug!("removed record {}", path.display());
        Ok(path)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
