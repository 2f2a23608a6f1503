//! Test utilities and fixtures for Hanoi development.
//!
//! Provides invariant checks over [`Puzzle`] state, byte-level helpers for
//! inspecting record files, and a scratch records directory backed by a
//! temporary directory.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fs;
use std::path::{Path, PathBuf};

use hanoi_core::Puzzle;
use hanoi_record::codec::{decode_move, read_header, read_snapshot};
use hanoi_record::{djb2, MoveEntry, RecordHeader, RecordsDirectory, CHECKSUM_SEED};
use hanoi_record::{HEADER_SIZE, MOVE_ENTRY_SIZE};
use tempfile::TempDir;

/// Panic unless every rod is compacted and strictly decreasing and every
/// disk size appears exactly once.
pub fn assert_puzzle_invariants(puzzle: &Puzzle) {
    let mut seen = vec![false; puzzle.disk_count() as usize];
    for rod in 0..puzzle.rod_count() {
        let slots = puzzle.rod(rod).expect("rod in range");
        let on = puzzle.disks_on(rod).expect("rod in range");
        assert!(
            slots[on.len()..].iter().all(|&s| s == 0),
            "rod {rod} not compacted: {slots:?}"
        );
        assert!(
            on.windows(2).all(|w| w[0] > w[1]),
            "rod {rod} not decreasing: {on:?}"
        );
        for &size in on {
            let idx = (size - 1) as usize;
            assert!(!seen[idx], "disk {size} appears twice");
            seen[idx] = true;
        }
    }
    assert!(seen.iter().all(|&s| s), "a disk went missing: {seen:?}");
}

/// A records directory inside a fresh temporary directory.
///
/// Keep the returned [`TempDir`] alive for as long as the files are needed.
pub fn scratch_records(seed: u64) -> (TempDir, RecordsDirectory) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let records = RecordsDirectory::with_seed(dir.path(), seed);
    (dir, records)
}

/// Every record file directly inside `dir`, sorted by path.
pub fn record_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read records dir")
        .map(|e| e.expect("dir entry").path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "hanoi-puzzle"))
        .collect();
    files.sort();
    files
}

/// A record file split into its parts.
#[derive(Debug)]
pub struct ParsedRecord {
    pub bytes: Vec<u8>,
    pub header: RecordHeader,
    pub snapshot: Vec<u32>,
    pub moves: Vec<MoveEntry>,
}

impl ParsedRecord {
    /// Recompute the rolling hash over everything after the checksum field.
    pub fn recomputed_checksum(&self) -> u64 {
        djb2(CHECKSUM_SEED, &self.bytes[8..])
    }
}

/// Read a record file and split it using the header's counts.
pub fn parse_record(path: &Path) -> ParsedRecord {
    let bytes = fs::read(path).expect("read record");
    let mut r = bytes.as_slice();
    let header = read_header(&mut r).expect("header");
    let slots = (header.rod_count * header.disk_count) as usize;
    let snapshot = read_snapshot(&mut r, slots).expect("snapshot");

    let log = &bytes[HEADER_SIZE + slots * 4..];
    assert_eq!(
        log.len() as u64,
        header.move_count * MOVE_ENTRY_SIZE as u64,
        "move log length disagrees with header"
    );
    let moves = log
        .chunks_exact(MOVE_ENTRY_SIZE)
        .map(|chunk| {
            let mut entry = [0u8; MOVE_ENTRY_SIZE];
            entry.copy_from_slice(chunk);
            decode_move(&entry)
        })
        .collect();

    ParsedRecord {
        bytes,
        header,
        snapshot,
        moves,
    }
}
