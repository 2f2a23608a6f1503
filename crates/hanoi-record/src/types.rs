//! Data types for session records.

use std::path::PathBuf;

use crate::error::RecordError;
use crate::{MOVE_ENTRY_SIZE, USERNAME_LEN};

/// The fixed-size header at the start of every record file.
///
/// # Examples
///
/// ```
/// use hanoi_record::RecordHeader;
///
/// let header = RecordHeader::new(3, 4, 1_700_000_000, "ada");
/// assert_eq!(header.move_count, 0);
/// assert_eq!(header.username(), "ada");
/// assert_eq!(header.payload_len().unwrap(), 3 * 4 * 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordHeader {
    /// Rolling checksum; zero until the record is finalized.
    pub checksum: u64,
    /// Number of move entries appended after the snapshot.
    pub move_count: u64,
    /// Rods in the recorded puzzle.
    pub rod_count: u32,
    /// Disks in the recorded puzzle.
    pub disk_count: u32,
    /// Record creation time in seconds since the Unix epoch.
    pub created_at: u64,
    /// Raw username bytes, zero padded.
    pub username: [u8; USERNAME_LEN],
}

impl RecordHeader {
    /// A fresh header with no moves and a zeroed checksum.
    ///
    /// `username` is truncated to [`USERNAME_LEN`] bytes; shorter names
    /// are zero padded. A name of exactly 32 bytes leaves no terminator.
    pub fn new(rod_count: u32, disk_count: u32, created_at: u64, username: &str) -> Self {
        let mut field = [0u8; USERNAME_LEN];
        let bytes = username.as_bytes();
        let n = bytes.len().min(USERNAME_LEN);
        field[..n].copy_from_slice(&bytes[..n]);
        Self {
            checksum: 0,
            move_count: 0,
            rod_count,
            disk_count,
            created_at,
            username: field,
        }
    }

    /// The username up to the first zero byte, with invalid UTF-8 replaced.
    pub fn username(&self) -> String {
        let end = self
            .username
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(USERNAME_LEN);
        String::from_utf8_lossy(&self.username[..end]).into_owned()
    }

    /// Byte length of the snapshot body.
    pub fn snapshot_len(&self) -> Result<u64, RecordError> {
        u64::from(self.rod_count)
            .checked_mul(u64::from(self.disk_count))
            .and_then(|slots| slots.checked_mul(4))
            .ok_or_else(|| self.overflow())
    }

    /// Byte length of the move log.
    pub fn log_len(&self) -> Result<u64, RecordError> {
        self.move_count
            .checked_mul(MOVE_ENTRY_SIZE as u64)
            .ok_or_else(|| self.overflow())
    }

    /// Byte length of everything after the header, derived from the
    /// header's own counts rather than from any file size.
    pub fn payload_len(&self) -> Result<u64, RecordError> {
        self.snapshot_len()?
            .checked_add(self.log_len()?)
            .ok_or_else(|| self.overflow())
    }

    fn overflow(&self) -> RecordError {
        RecordError::LayoutOverflow {
            rods: self.rod_count,
            disks: self.disk_count,
            moves: self.move_count,
        }
    }
}

/// One entry of the move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEntry {
    /// Rod the disk left.
    pub src: u32,
    /// Rod the disk landed on.
    pub dst: u32,
    /// Milliseconds since the round started, at the moment of the move.
    pub elapsed_millis: u64,
}

/// What is left of a record after its round was finalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinishedRecord {
    /// Location of the record file.
    pub path: PathBuf,
    /// Checksum written into the header.
    pub checksum: u64,
    /// Moves recorded during the round.
    pub move_count: u64,
}
