//! Benchmark profiles for the Hanoi puzzle engine and session records.
//!
//! - [`classic_profile`]: a fresh puzzle plus the optimal move list solving it
//! - [`filled_record`]: an in-memory record holding a given number of moves

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::io::Cursor;

use hanoi_core::{classic_solution, Puzzle, PuzzleError};
use hanoi_record::{RecordError, RecordWriter};

/// A puzzle with `disks` disks on three rods and the `2^disks - 1` moves
/// that carry the tower from rod 0 to rod 2.
pub fn classic_profile(disks: u32) -> Result<(Puzzle, Vec<(u32, u32)>), PuzzleError> {
    let puzzle = Puzzle::new(3, disks)?;
    Ok((puzzle, classic_solution(disks, 0, 2, 1)))
}

/// An in-memory record of `puzzle` with `moves` entries alternating
/// between rods 0 and 1.
pub fn filled_record(
    puzzle: &Puzzle,
    moves: u64,
) -> Result<RecordWriter<Cursor<Vec<u8>>>, RecordError> {
    let mut writer = RecordWriter::create(Cursor::new(Vec::new()), puzzle, "bench", 0)?;
    for i in 0..moves {
        let (src, dst) = if i % 2 == 0 { (0, 1) } else { (1, 0) };
        writer.push_move(src, dst, i)?;
    }
    Ok(writer)
}
