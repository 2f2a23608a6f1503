//! Integrity checks for finished records.
//!
//! Recomputes the rolling checksum over the same byte ranges
//! [`RecordWriter::finalize_checksum`](crate::RecordWriter::finalize_checksum)
//! folds and compares it with the one stored in the header.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::codec::{decode_header, read_header_bytes};
use crate::error::RecordError;
use crate::hash::record_checksum;
use crate::types::RecordHeader;

/// A decoded header alongside the checksum recomputed from the payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSummary {
    /// Header as stored.
    pub header: RecordHeader,
    /// Checksum recomputed from the stream.
    pub computed_checksum: u64,
}

impl RecordSummary {
    /// Whether the stored checksum matches the recomputed one.
    pub fn is_intact(&self) -> bool {
        self.header.checksum == self.computed_checksum
    }
}

/// Read a record and recompute its checksum without judging the result.
///
/// Useful for records of rounds that never finished, whose stored
/// checksum is still zero.
pub fn checksum_of<R: Read>(mut reader: R) -> Result<RecordSummary, RecordError> {
    let raw = read_header_bytes(&mut reader)?;
    let header = decode_header(&raw);
    let computed_checksum = record_checksum(&raw, header.payload_len()?, &mut reader)?;
    Ok(RecordSummary {
        header,
        computed_checksum,
    })
}

/// Verify a record stream, returning its header if the checksum holds.
///
/// # Errors
///
/// [`RecordError::ChecksumMismatch`] if the stored checksum differs,
/// [`RecordError::Truncated`] if the payload is shorter than the header
/// says, or [`RecordError::Io`] on read failure.
pub fn verify_record<R: Read>(reader: R) -> Result<RecordHeader, RecordError> {
    let summary = checksum_of(reader)?;
    if !summary.is_intact() {
        return Err(RecordError::ChecksumMismatch {
            recorded: summary.header.checksum,
            computed: summary.computed_checksum,
        });
    }
    Ok(summary.header)
}

/// Open and verify a record file.
pub fn verify_file(path: impl AsRef<Path>) -> Result<RecordHeader, RecordError> {
    let file = File::open(path)?;
    verify_record(BufReader::new(file))
}
