//! Record writing over a seekable stream.
//!
//! [`RecordWriter`] writes the header and snapshot on construction,
//! appends move entries while keeping the header's move count in step,
//! and finally folds the checksum into the header.

use std::io::{Read, Seek, SeekFrom, Write};

use hanoi_core::Puzzle;

use crate::codec::{
    decode_header, encode_header, encode_move, read_header_bytes, write_snapshot,
    CHECKSUM_OFFSET, MOVE_COUNT_OFFSET,
};
use crate::error::RecordError;
use crate::hash::record_checksum;
use crate::types::{MoveEntry, RecordHeader};

/// Writes one session record to a seekable byte stream.
///
/// Generic over `S: Read + Write + Seek` so tests can use
/// `Cursor<Vec<u8>>` and production code can use `File`.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use hanoi_core::Puzzle;
/// use hanoi_record::codec::read_header;
/// use hanoi_record::RecordWriter;
///
/// let mut puzzle = Puzzle::new(3, 3).unwrap();
/// let mut writer = RecordWriter::create(Cursor::new(Vec::new()), &puzzle, "ada", 0).unwrap();
///
/// assert!(puzzle.move_disk(0, 2));
/// writer.push_move(0, 2, 150).unwrap();
/// let checksum = writer.finalize_checksum().unwrap();
///
/// let bytes = writer.into_inner().into_inner();
/// let header = read_header(&mut bytes.as_slice()).unwrap();
/// assert_eq!(header.move_count, 1);
/// assert_eq!(header.checksum, checksum);
/// assert_eq!(bytes.len(), 64 + 3 * 3 * 4 + 16);
/// ```
#[derive(Debug)]
pub struct RecordWriter<S: Read + Write + Seek> {
    storage: S,
    moves: u64,
    poisoned: bool,
}

impl<S: Read + Write + Seek> RecordWriter<S> {
    /// Write a fresh header (zero checksum, zero moves) and the puzzle's
    /// current slots at the start of `storage`.
    pub fn create(
        mut storage: S,
        puzzle: &Puzzle,
        username: &str,
        created_at: u64,
    ) -> Result<Self, RecordError> {
        let header = RecordHeader::new(
            puzzle.rod_count(),
            puzzle.disk_count(),
            created_at,
            username,
        );
        storage.seek(SeekFrom::Start(0))?;
        storage.write_all(&encode_header(&header))?;
        write_snapshot(&mut storage, puzzle.slots())?;
        Ok(Self {
            storage,
            moves: 0,
            poisoned: false,
        })
    }

    /// Append a move and rewrite the header's move count.
    ///
    /// The counter only advances once the entry is written, so the header
    /// never claims an entry that is not there. The two writes are not
    /// atomic: a crash between them leaves one entry the header does not
    /// count yet.
    ///
    /// A failed append may leave part of an entry at the end of the
    /// stream. The writer is then poisoned and every later call fails
    /// with [`RecordError::Poisoned`]. The header still describes only the
    /// complete entries, so [`finalize_checksum`](Self::finalize_checksum)
    /// keeps working.
    pub fn push_move(&mut self, src: u32, dst: u32, elapsed_millis: u64) -> Result<(), RecordError> {
        if self.poisoned {
            return Err(RecordError::Poisoned);
        }
        let entry = MoveEntry {
            src,
            dst,
            elapsed_millis,
        };
        let result = self.append(&entry);
        if result.is_err() {
            self.poisoned = true;
        }
        result
    }

    fn append(&mut self, entry: &MoveEntry) -> Result<(), RecordError> {
        self.storage.seek(SeekFrom::End(0))?;
        self.storage.write_all(&encode_move(entry))?;
        self.moves += 1;

        self.storage.seek(SeekFrom::Start(MOVE_COUNT_OFFSET as u64))?;
        self.storage.write_all(&self.moves.to_le_bytes())?;
        Ok(())
    }

    /// Recompute the checksum from what is in the stream and store it at
    /// offset 0. Returns the checksum.
    ///
    /// The payload length comes from the header's own counts. A stream
    /// shorter than that fails with [`RecordError::Truncated`] instead of
    /// hashing a partial payload.
    pub fn finalize_checksum(&mut self) -> Result<u64, RecordError> {
        self.storage.seek(SeekFrom::Start(0))?;
        let raw = read_header_bytes(&mut self.storage)?;
        let header = decode_header(&raw);
        let checksum = record_checksum(&raw, header.payload_len()?, &mut self.storage)?;

        self.storage.seek(SeekFrom::Start(CHECKSUM_OFFSET as u64))?;
        self.storage.write_all(&checksum.to_le_bytes())?;
        self.storage.flush()?;
        Ok(checksum)
    }

    /// Moves appended so far.
    pub fn moves_recorded(&self) -> u64 {
        self.moves
    }

    /// Whether an append has failed and the writer refuses new moves.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &S {
        &self.storage
    }

    /// Consume the writer and return the underlying stream.
    pub fn into_inner(self) -> S {
        self.storage
    }
}
