//! Rolling checksum for record integrity.
//!
//! Uses djb2 (`hash * 33 + byte`, wrapping at 64 bits) seeded with a
//! fixed constant. The hash is order dependent and cheap; it detects
//! accidental corruption, not tampering.

use std::io::{ErrorKind, Read};

use crate::error::RecordError;
use crate::HEADER_SIZE;

/// Seed every record checksum starts from.
pub const CHECKSUM_SEED: u64 = 142_573;

/// Width of the checksum field; hashing starts right after it.
const CHECKSUM_FIELD_LEN: usize = 8;

/// Fold `data` into a djb2 hash state.
#[inline]
pub fn djb2(hash: u64, data: &[u8]) -> u64 {
    data.iter()
        .fold(hash, |h, &b| h.wrapping_mul(33).wrapping_add(u64::from(b)))
}

/// Incremental djb2 state seeded with [`CHECKSUM_SEED`].
///
/// ```
/// use hanoi_record::{djb2, RollingHash, CHECKSUM_SEED};
///
/// let mut hash = RollingHash::new();
/// hash.update(b"ab");
/// hash.update(b"c");
/// assert_eq!(hash.finish(), djb2(CHECKSUM_SEED, b"abc"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollingHash {
    state: u64,
}

impl RollingHash {
    /// Start a new hash from the record seed.
    pub fn new() -> Self {
        Self {
            state: CHECKSUM_SEED,
        }
    }

    /// Fold more bytes in.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.state = djb2(self.state, data);
    }

    /// Current hash value.
    pub fn finish(&self) -> u64 {
        self.state
    }
}

impl Default for RollingHash {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute a record checksum from its encoded header and a reader
/// positioned at the start of the payload.
///
/// Folds header bytes `8..64`, then exactly `payload_len` bytes from
/// `payload`. Fails with [`RecordError::Truncated`] if the reader runs
/// dry first.
pub fn record_checksum<R: Read + ?Sized>(
    header: &[u8; HEADER_SIZE],
    payload_len: u64,
    payload: &mut R,
) -> Result<u64, RecordError> {
    let mut hash = RollingHash::new();
    hash.update(&header[CHECKSUM_FIELD_LEN..]);

    let mut buf = [0u8; 512];
    let mut remaining = payload_len;
    while remaining > 0 {
        let want = remaining.min(buf.len() as u64) as usize;
        let n = match payload.read(&mut buf[..want]) {
            Ok(0) => {
                return Err(RecordError::Truncated {
                    expected: payload_len,
                    actual: payload_len - remaining,
                })
            }
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        hash.update(&buf[..n]);
        remaining -= n as u64;
    }

    Ok(hash.finish())
}
