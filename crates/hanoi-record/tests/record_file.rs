//! End-to-end record file tests: create, append, finalize, verify, remove.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Seek, SeekFrom, Write};

use hanoi_core::{classic_solution, Puzzle};
use hanoi_record::{verify_file, RecordError, SessionRecorder};
use hanoi_test_utils::{parse_record, record_files, scratch_records};

#[test]
fn solved_round_round_trips() {
    let (dir, mut records) = scratch_records(11);
    let mut puzzle = Puzzle::new(3, 4).unwrap();
    let mut recorder = SessionRecorder::create(&mut records, &puzzle, "grace").unwrap();

    let moves = classic_solution(4, 0, 2, 1);
    for (i, &(src, dst)) in moves.iter().enumerate() {
        assert!(puzzle.move_disk(src, dst));
        recorder.push_move(src, dst, 100 * i as u64).unwrap();
    }
    assert_eq!(puzzle.completion(), Some(2));
    let finished = recorder.finalize().unwrap();
    assert_eq!(finished.move_count, 15);

    let parsed = parse_record(&finished.path);
    assert_eq!(parsed.header.move_count, 15);
    assert_eq!(parsed.header.username(), "grace");
    assert_eq!(parsed.snapshot, vec![4, 3, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(parsed.header.checksum, finished.checksum);
    assert_eq!(parsed.recomputed_checksum(), finished.checksum);

    let logged: Vec<(u32, u32)> = parsed.moves.iter().map(|m| (m.src, m.dst)).collect();
    assert_eq!(logged, moves);
    assert!(parsed
        .moves
        .windows(2)
        .all(|w| w[0].elapsed_millis <= w[1].elapsed_millis));

    assert_eq!(verify_file(&finished.path).unwrap().move_count, 15);
    assert_eq!(record_files(dir.path()), vec![finished.path]);
}

#[test]
fn header_tracks_every_append() {
    let (_dir, mut records) = scratch_records(12);
    let puzzle = Puzzle::new(4, 2).unwrap();
    let mut recorder = SessionRecorder::create(&mut records, &puzzle, "x").unwrap();

    for n in 1..=5u64 {
        recorder.push_move(0, 1, n).unwrap();
        let parsed = parse_record(recorder.path());
        assert_eq!(parsed.header.move_count, n);
        assert_eq!(parsed.moves.len() as u64, n);
        assert_eq!(parsed.header.checksum, 0);
    }
}

#[test]
fn removed_round_leaves_nothing_behind() {
    let (dir, mut records) = scratch_records(13);
    let puzzle = Puzzle::new(3, 3).unwrap();
    let recorder = SessionRecorder::create(&mut records, &puzzle, "x").unwrap();

    let path = recorder.remove_file().unwrap();
    assert_eq!(File::open(&path).unwrap_err().kind(), ErrorKind::NotFound);
    assert!(record_files(dir.path()).is_empty());
}

#[test]
fn tampering_after_finalize_is_caught() {
    let (_dir, mut records) = scratch_records(14);
    let mut puzzle = Puzzle::new(3, 2).unwrap();
    let mut recorder = SessionRecorder::create(&mut records, &puzzle, "x").unwrap();
    for (src, dst) in classic_solution(2, 0, 1, 2) {
        assert!(puzzle.move_disk(src, dst));
        recorder.push_move(src, dst, 0).unwrap();
    }
    let finished = recorder.finalize().unwrap();

    // Rewrite the first move's destination rod.
    let mut file = OpenOptions::new().write(true).open(&finished.path).unwrap();
    file.seek(SeekFrom::Start(64 + 24 + 4)).unwrap();
    file.write_all(&9u32.to_le_bytes()).unwrap();
    drop(file);

    assert!(matches!(
        verify_file(&finished.path),
        Err(RecordError::ChecksumMismatch { .. })
    ));
}

#[test]
fn externally_truncated_file_fails_verification() {
    let (_dir, mut records) = scratch_records(15);
    let puzzle = Puzzle::new(3, 2).unwrap();
    let mut recorder = SessionRecorder::create(&mut records, &puzzle, "x").unwrap();
    recorder.push_move(0, 1, 1).unwrap();
    let finished = recorder.finalize().unwrap();

    let len = fs::metadata(&finished.path).unwrap().len();
    let file = OpenOptions::new().write(true).open(&finished.path).unwrap();
    file.set_len(len - 8).unwrap();
    drop(file);

    assert!(matches!(
        verify_file(&finished.path),
        Err(RecordError::Truncated { .. })
    ));
}

#[test]
fn two_recorders_in_sequence_get_distinct_files() {
    let (dir, mut records) = scratch_records(16);
    let puzzle = Puzzle::new(3, 3).unwrap();

    let mut first = SessionRecorder::create(&mut records, &puzzle, "x").unwrap();
    first.push_move(0, 1, 5).unwrap();
    let first = first.finalize().unwrap();

    let second = SessionRecorder::create(&mut records, &puzzle, "x").unwrap();
    assert_ne!(second.path(), first.path.as_path());
    drop(second);

    assert_eq!(record_files(dir.path()).len(), 2);
}
