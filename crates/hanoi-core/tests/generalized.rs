//! Puzzles with more than three rods, driven through the public API only.

use hanoi_core::{classic_solution, MoveRejection, Puzzle};

#[test]
fn classic_solution_works_on_any_three_rods_of_a_wider_puzzle() {
    let mut puzzle = Puzzle::new(5, 6).unwrap();
    for (src, dst) in classic_solution(6, 0, 4, 2) {
        assert!(puzzle.move_disk(src, dst));
        assert!(puzzle.is_empty(1));
        assert!(puzzle.is_empty(3));
    }
    assert_eq!(puzzle.completion(), Some(4));
    assert_eq!(puzzle.disks_on(4), Some(&[6, 5, 4, 3, 2, 1][..]));
}

#[test]
fn four_rods_beat_the_three_rod_bound() {
    // Frame-Stewart for 4 disks on 4 rods: park two disks, move the
    // remaining two with three rods, then bring the parked pair over.
    let mut puzzle = Puzzle::new(4, 4).unwrap();
    let mut moves = classic_solution(2, 0, 1, 2);
    moves.extend(classic_solution(2, 0, 3, 2));
    moves.extend(classic_solution(2, 1, 3, 2));

    for (src, dst) in &moves {
        assert!(puzzle.move_disk(*src, *dst), "move {src}->{dst} rejected");
    }
    assert_eq!(moves.len(), 9);
    assert!(moves.len() < 15);
    assert_eq!(puzzle.completion(), Some(3));
}

#[test]
fn rejected_moves_leave_slots_untouched() {
    let mut puzzle = Puzzle::new(4, 3).unwrap();
    puzzle.try_move(0, 2).unwrap();
    let snapshot = puzzle.slots().to_vec();

    assert_eq!(
        puzzle.try_move(0, 2),
        Err(MoveRejection::SizeViolation { moving: 2, resting: 1 })
    );
    assert_eq!(puzzle.try_move(3, 1), Err(MoveRejection::EmptySource { rod: 3 }));
    assert_eq!(puzzle.slots(), snapshot.as_slice());
}

#[test]
fn slots_are_rod_major() {
    let mut puzzle = Puzzle::new(3, 3).unwrap();
    puzzle.try_move(0, 2).unwrap();
    assert_eq!(puzzle.slots(), &[3, 2, 0, 0, 0, 0, 1, 0, 0]);
    assert_eq!(puzzle.rod(2), Some(&[1, 0, 0][..]));
    assert_eq!(puzzle.top_disk(0), Some(2));
}
