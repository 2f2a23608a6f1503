//! The standard recursive three-rod strategy.

/// Move sequence that carries a stack of `disks` from `from` to `to`
/// using `via` as the spare rod.
///
/// Produces exactly `2^disks - 1` `(src, dst)` pairs. Only the three named
/// rods are touched, so the sequence is valid on any puzzle with at least
/// three rods whose stack starts on `from`.
///
/// ```
/// use hanoi_core::{classic_solution, Puzzle};
///
/// let mut puzzle = Puzzle::new(3, 5).unwrap();
/// let moves = classic_solution(5, 0, 2, 1);
/// assert_eq!(moves.len(), 31);
/// for (src, dst) in moves {
///     assert!(puzzle.move_disk(src, dst));
/// }
/// assert_eq!(puzzle.completion(), Some(2));
/// ```
pub fn classic_solution(disks: u32, from: u32, to: u32, via: u32) -> Vec<(u32, u32)> {
    let mut moves = Vec::with_capacity((1usize << disks.min(20)) - 1);
    push_moves(&mut moves, disks, from, to, via);
    moves
}

fn push_moves(out: &mut Vec<(u32, u32)>, disks: u32, from: u32, to: u32, via: u32) {
    if disks == 0 {
        return;
    }
    push_moves(out, disks - 1, from, via, to);
    out.push((from, to));
    push_moves(out, disks - 1, via, to, from);
}
