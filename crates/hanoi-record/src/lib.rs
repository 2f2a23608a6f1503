//! Binary session records for Tower of Hanoi rounds.
//!
//! Every round of play is written to its own file: a fixed header, a
//! snapshot of the rod layout at the start of the round, and an
//! append-only move log. When the round completes, a rolling checksum
//! over everything after the checksum field is written into the header
//! so the file can later be verified for integrity.
//!
//! # Architecture
//!
//! - [`RecordsDirectory`] says where record files go and names them
//! - [`RecordWriter`] speaks the byte protocol over any seekable stream
//! - [`SessionRecorder`] owns one record file for one round
//! - [`verify_record`] and [`verify_file`] recompute and check checksums
//!
//! # Format
//!
//! All integers are little-endian, at fixed offsets:
//!
//! ```text
//! 0   u64  checksum
//! 8   u64  move count
//! 16  u32  rod count
//! 20  u32  disk count
//! 24  u64  created at (epoch seconds)
//! 32  [u8; 32] username (zero padded, not necessarily terminated)
//! 64  u32 * rods * disks   snapshot, rod-major
//! ..  16 * moves           (src u32, dst u32, elapsed millis u64)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod hash;
pub mod path;
pub mod recorder;
pub mod types;
pub mod verify;
pub mod writer;

pub use error::RecordError;
pub use hash::{djb2, RollingHash, CHECKSUM_SEED};
pub use path::RecordsDirectory;
pub use recorder::SessionRecorder;
pub use types::{FinishedRecord, MoveEntry, RecordHeader};
pub use verify::{checksum_of, verify_file, verify_record, RecordSummary};
pub use writer::RecordWriter;

/// Size of the fixed record header in bytes.
pub const HEADER_SIZE: usize = 64;

/// Width of the username field in the header.
pub const USERNAME_LEN: usize = 32;

/// Size of one move log entry in bytes.
pub const MOVE_ENTRY_SIZE: usize = 16;
