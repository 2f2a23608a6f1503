//! Rod/disk state and the move/completion rules.
//!
//! A [`Puzzle`] stores every rod as a fixed run of `disk_count` slots in
//! one flat, rod-major buffer: slot `s` of rod `r` lives at
//! `r * disk_count + s`. A slot holds `0` when empty or a disk size in
//! `1..=disk_count`.
//!
//! # Invariants
//!
//! - Occupied slots on a rod form a contiguous prefix from slot 0.
//! - Every size `1..=disk_count` appears exactly once across all rods.
//!
//! Both hold after construction and are preserved by [`Puzzle::try_move`],
//! which only ever clears a rod's top slot and fills the first empty one.

use crate::error::{MoveRejection, PuzzleError};

/// Rod count reserved as an out-of-band marker; never a legal puzzle size.
pub const RESERVED_ROD_COUNT: u32 = u32::MAX;

/// State of one generalized Tower of Hanoi puzzle.
///
/// # Examples
///
/// ```
/// use hanoi_core::Puzzle;
///
/// let mut puzzle = Puzzle::new(3, 2).unwrap();
/// assert_eq!(puzzle.completion(), Some(0));
///
/// assert!(puzzle.move_disk(0, 1));
/// assert!(puzzle.move_disk(0, 2));
/// assert!(puzzle.move_disk(1, 2));
/// assert_eq!(puzzle.disks_on(2), Some(&[2, 1][..]));
/// assert_eq!(puzzle.completion(), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    rods: u32,
    disks: u32,
    slots: Vec<u32>,
}

impl Puzzle {
    /// Create a puzzle with every disk stacked on rod 0, largest at the bottom.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::InvalidConfiguration`] for zero rods, zero disks, or
    /// `rods == RESERVED_ROD_COUNT`; [`PuzzleError::AllocationFailed`] if
    /// the slot buffer cannot be reserved.
    pub fn new(rods: u32, disks: u32) -> Result<Self, PuzzleError> {
        let mut slots = Self::allocate(rods, disks)?;
        for (slot, size) in slots.iter_mut().zip((1..=disks).rev()) {
            *slot = size;
        }
        Ok(Self { rods, disks, slots })
    }

    /// Build a puzzle from an explicit rod-major slot layout.
    ///
    /// The layout must have `rods * disks` entries, keep every rod
    /// compacted, and contain each disk size exactly once.
    pub fn from_slots(rods: u32, disks: u32, layout: &[u32]) -> Result<Self, PuzzleError> {
        let mut slots = Self::allocate(rods, disks)?;
        if layout.len() != slots.len() {
            return Err(PuzzleError::InvalidLayout {
                reason: format!("expected {} slots, got {}", slots.len(), layout.len()),
            });
        }

        let mut seen = vec![false; disks as usize];
        for (rod, chunk) in layout.chunks_exact(disks as usize).enumerate() {
            let occupied = chunk.iter().take_while(|&&s| s != 0).count();
            if chunk[occupied..].iter().any(|&s| s != 0) {
                return Err(PuzzleError::InvalidLayout {
                    reason: format!("rod {rod} has a gap below its top disk"),
                });
            }
            for &size in &chunk[..occupied] {
                if size > disks {
                    return Err(PuzzleError::InvalidLayout {
                        reason: format!("disk size {size} exceeds disk count {disks}"),
                    });
                }
                let idx = (size - 1) as usize;
                if seen[idx] {
                    return Err(PuzzleError::InvalidLayout {
                        reason: format!("disk {size} appears more than once"),
                    });
                }
                seen[idx] = true;
            }
        }
        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(PuzzleError::InvalidLayout {
                reason: format!("disk {} is missing", missing + 1),
            });
        }

        slots.copy_from_slice(layout);
        Ok(Self { rods, disks, slots })
    }

    fn allocate(rods: u32, disks: u32) -> Result<Vec<u32>, PuzzleError> {
        if rods == 0 || disks == 0 || rods == RESERVED_ROD_COUNT {
            return Err(PuzzleError::InvalidConfiguration { rods, disks });
        }
        let len = (rods as usize)
            .checked_mul(disks as usize)
            .ok_or(PuzzleError::AllocationFailed { slots: None })?;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| PuzzleError::AllocationFailed { slots: Some(len) })?;
        slots.resize(len, 0);
        Ok(slots)
    }

    /// Number of rods.
    pub fn rod_count(&self) -> u32 {
        self.rods
    }

    /// Number of disks.
    pub fn disk_count(&self) -> u32 {
        self.disks
    }

    /// The flattened rod-major slot buffer (`rod_count * disk_count` entries).
    pub fn slots(&self) -> &[u32] {
        &self.slots
    }

    /// All `disk_count` slots of `rod`, bottom first, or `None` if the rod
    /// does not exist.
    pub fn rod(&self, rod: u32) -> Option<&[u32]> {
        if rod >= self.rods {
            return None;
        }
        Some(self.rod_slots(rod))
    }

    /// The occupied slots of `rod`, bottom first.
    pub fn disks_on(&self, rod: u32) -> Option<&[u32]> {
        self.rod(rod).map(|slots| &slots[..Self::top_index(slots)])
    }

    /// Size of the top disk on `rod`, or `None` if the rod is empty or
    /// does not exist.
    pub fn top_disk(&self, rod: u32) -> Option<u32> {
        let slots = self.rod(rod)?;
        Self::top_index(slots).checked_sub(1).map(|i| slots[i])
    }

    /// Whether `rod` holds no disks. Rods outside the puzzle read as empty.
    pub fn is_empty(&self, rod: u32) -> bool {
        self.rod(rod).is_none_or(|slots| slots[0] == 0)
    }

    #[inline]
    fn rod_slots(&self, rod: u32) -> &[u32] {
        let start = rod as usize * self.disks as usize;
        &self.slots[start..start + self.disks as usize]
    }

    /// Count of occupied slots from the bottom. Relies on the rod being compacted.
    #[inline]
    fn top_index(slots: &[u32]) -> usize {
        slots.iter().take_while(|&&s| s != 0).count()
    }

    /// Move the top disk of `src` onto `dst`.
    ///
    /// Rejections are checked in order: rod indices out of range, empty
    /// source, then a destination whose top disk is smaller than the moving
    /// one. On rejection the state is untouched.
    ///
    /// `src == dst` is not special-cased. A non-empty rod moved onto
    /// itself compares its top disk with itself and is rejected as a
    /// [`MoveRejection::SizeViolation`]; callers that want a silent no-op
    /// must guard before calling.
    pub fn try_move(&mut self, src: u32, dst: u32) -> Result<(), MoveRejection> {
        for rod in [src, dst] {
            if rod >= self.rods {
                return Err(MoveRejection::RodOutOfRange { rod });
            }
        }

        let src_top = Self::top_index(self.rod_slots(src));
        if src_top == 0 {
            return Err(MoveRejection::EmptySource { rod: src });
        }
        let disks = self.disks as usize;
        let src_at = src as usize * disks + src_top - 1;
        let moving = self.slots[src_at];

        let dst_top = Self::top_index(self.rod_slots(dst));
        if dst_top > 0 {
            let resting = self.slots[dst as usize * disks + dst_top - 1];
            if resting <= moving {
                return Err(MoveRejection::SizeViolation { moving, resting });
            }
        }

        self.slots[src_at] = 0;
        self.slots[dst as usize * disks + dst_top] = moving;
        Ok(())
    }

    /// Boolean form of [`try_move`](Self::try_move): `true` if the disk moved.
    pub fn move_disk(&mut self, src: u32, dst: u32) -> bool {
        self.try_move(src, dst).is_ok()
    }

    /// Index of the rod holding the solved stack, or `None` if incomplete.
    ///
    /// Complete means exactly one rod is occupied and it holds sizes
    /// `disk_count, disk_count - 1, ..., 1` from the bottom up.
    /// Linear in `rod_count * disk_count`; does not allocate.
    pub fn completion(&self) -> Option<u32> {
        let mut filled = None;
        for (rod, slots) in self.slots.chunks_exact(self.disks as usize).enumerate() {
            if slots[0] == 0 {
                continue;
            }
            if filled.is_some() {
                return None;
            }
            let solved = slots
                .iter()
                .zip((1..=self.disks).rev())
                .all(|(&size, want)| size == want);
            if !solved {
                return None;
            }
            filled = Some(rod as u32);
        }
        filled
    }

    /// Shorthand for `self.completion().is_some()`.
    pub fn is_complete(&self) -> bool {
        self.completion().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn occupied(p: &Puzzle) -> Vec<Vec<u32>> {
        (0..p.rod_count())
            .map(|r| p.disks_on(r).unwrap().to_vec())
            .collect()
    }

    fn assert_sizes_unique(p: &Puzzle) {
        let mut sizes: Vec<u32> = p.slots().iter().copied().filter(|&s| s != 0).collect();
        sizes.sort_unstable();
        let expected: Vec<u32> = (1..=p.disk_count()).collect();
        assert_eq!(sizes, expected);
    }

    #[test]
    fn new_stacks_everything_on_rod_zero() {
        let p = Puzzle::new(3, 4).unwrap();
        assert_eq!(occupied(&p), vec![vec![4, 3, 2, 1], vec![], vec![]]);
        assert_eq!(p.slots().len(), 12);
        assert_eq!(p.completion(), Some(0));
    }

    #[test]
    fn reserved_rod_count_is_rejected() {
        assert_eq!(
            Puzzle::new(RESERVED_ROD_COUNT, 3),
            Err(PuzzleError::InvalidConfiguration {
                rods: u32::MAX,
                disks: 3
            })
        );
    }

    #[test]
    fn zero_counts_are_rejected() {
        assert!(matches!(
            Puzzle::new(0, 3),
            Err(PuzzleError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Puzzle::new(3, 0),
            Err(PuzzleError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn single_rod_is_complete_and_immovable() {
        let mut p = Puzzle::new(1, 3).unwrap();
        assert_eq!(p.completion(), Some(0));
        assert_eq!(
            p.try_move(0, 0),
            Err(MoveRejection::SizeViolation {
                moving: 1,
                resting: 1
            })
        );
        assert_eq!(occupied(&p), vec![vec![3, 2, 1]]);
    }

    #[test]
    fn empty_source_is_rejected_before_size() {
        let mut p = Puzzle::new(3, 3).unwrap();
        assert_eq!(p.try_move(1, 0), Err(MoveRejection::EmptySource { rod: 1 }));
    }

    #[test]
    fn larger_onto_smaller_is_rejected() {
        let mut p = Puzzle::new(3, 3).unwrap();
        p.try_move(0, 1).unwrap();
        let before = p.clone();
        assert_eq!(
            p.try_move(0, 1),
            Err(MoveRejection::SizeViolation {
                moving: 2,
                resting: 1
            })
        );
        assert_eq!(p, before);
    }

    #[test]
    fn out_of_range_rods_are_rejected() {
        let mut p = Puzzle::new(3, 3).unwrap();
        assert_eq!(p.try_move(3, 0), Err(MoveRejection::RodOutOfRange { rod: 3 }));
        assert_eq!(p.try_move(0, 7), Err(MoveRejection::RodOutOfRange { rod: 7 }));
        assert!(p.is_empty(9));
        assert_eq!(p.rod(3), None);
        assert_eq!(p.top_disk(3), None);
    }

    #[test]
    fn three_disk_walkthrough() {
        let mut p = Puzzle::new(3, 3).unwrap();

        assert!(p.move_disk(0, 1));
        assert_eq!(occupied(&p), vec![vec![3, 2], vec![1], vec![]]);
        assert!(p.move_disk(0, 2));
        assert_eq!(occupied(&p), vec![vec![3], vec![1], vec![2]]);
        assert!(p.move_disk(1, 2));
        assert_eq!(occupied(&p), vec![vec![3], vec![], vec![2, 1]]);
        assert!(p.move_disk(0, 1));
        assert_eq!(occupied(&p), vec![vec![], vec![3], vec![2, 1]]);
        assert!(p.move_disk(2, 0));
        assert_eq!(occupied(&p), vec![vec![1], vec![3], vec![2]]);
        assert_eq!(p.completion(), None);
        assert!(p.move_disk(2, 1));
        assert!(p.move_disk(0, 1));

        assert_eq!(occupied(&p), vec![vec![], vec![3, 2, 1], vec![]]);
        assert_eq!(p.completion(), Some(1));
    }

    #[test]
    fn completion_requires_a_single_rod() {
        let mut p = Puzzle::new(3, 2).unwrap();
        p.try_move(0, 1).unwrap();
        assert_eq!(p.completion(), None);
    }

    #[test]
    fn completion_rejects_gapped_stack() {
        // Sole occupied rod holds 3,1: not descending by one.
        let err = Puzzle::from_slots(2, 3, &[3, 1, 0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidLayout { .. }));

        // Inverted stack is reachable only through from_slots.
        let p = Puzzle::from_slots(2, 3, &[0, 0, 0, 1, 2, 3]).unwrap();
        assert_eq!(p.completion(), None);

        let p = Puzzle::from_slots(2, 3, &[0, 0, 0, 3, 1, 2]).unwrap();
        assert_eq!(p.completion(), None);

        let p = Puzzle::from_slots(2, 3, &[0, 0, 0, 3, 2, 1]).unwrap();
        assert_eq!(p.completion(), Some(1));
    }

    #[test]
    fn from_slots_rejects_broken_layouts() {
        let cases: [&[u32]; 5] = [
            &[3, 2, 1, 0, 0],
            &[3, 0, 1, 2, 0, 0],
            &[3, 2, 2, 0, 0, 0],
            &[3, 2, 4, 0, 0, 0],
            &[3, 2, 0, 0, 0, 0],
        ];
        for layout in cases {
            assert!(
                matches!(
                    Puzzle::from_slots(2, 3, layout),
                    Err(PuzzleError::InvalidLayout { .. })
                ),
                "layout {layout:?} should be rejected"
            );
        }
    }

    proptest! {
        #[test]
        fn fresh_puzzle_is_complete_on_rod_zero(rods in 1u32..12, disks in 1u32..24) {
            let p = Puzzle::new(rods, disks).unwrap();
            prop_assert_eq!(p.completion(), Some(0));
        }

        #[test]
        fn moves_follow_the_size_rule(
            rods in 2u32..6,
            disks in 1u32..8,
            moves in prop::collection::vec((0u32..6, 0u32..6), 0..200),
        ) {
            let mut p = Puzzle::new(rods, disks).unwrap();
            for (src, dst) in moves {
                let (src, dst) = (src % rods, dst % rods);
                let before = p.clone();
                let legal = match (before.top_disk(src), before.top_disk(dst)) {
                    (None, _) => false,
                    (Some(_), None) => true,
                    (Some(moving), Some(resting)) => resting > moving,
                };

                prop_assert_eq!(p.move_disk(src, dst), legal);
                if legal {
                    prop_assert_eq!(p.top_disk(dst), before.top_disk(src));
                } else {
                    prop_assert_eq!(&p, &before);
                }
                assert_sizes_unique(&p);

                // Every rod stays compacted and strictly decreasing.
                for rod in 0..rods {
                    let on = p.disks_on(rod).unwrap();
                    prop_assert!(on.windows(2).all(|w| w[0] > w[1]));
                    prop_assert!(p.rod(rod).unwrap()[on.len()..].iter().all(|&s| s == 0));
                }
            }
        }

        #[test]
        fn completion_means_one_full_rod(
            rods in 2u32..5,
            disks in 1u32..6,
            moves in prop::collection::vec((0u32..5, 0u32..5), 0..120),
        ) {
            let mut p = Puzzle::new(rods, disks).unwrap();
            for (src, dst) in moves {
                p.move_disk(src % rods, dst % rods);
                let occupied_rods: Vec<u32> =
                    (0..rods).filter(|&r| !p.is_empty(r)).collect();
                match p.completion() {
                    Some(rod) => {
                        prop_assert_eq!(occupied_rods, vec![rod]);
                        prop_assert_eq!(p.disks_on(rod).unwrap().len(), disks as usize);
                    }
                    None => prop_assert!(occupied_rods.len() > 1),
                }
            }
        }
    }
}
