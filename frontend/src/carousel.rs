//! Rotation and windowing logic for the award carousel.
//!
//! The display walks a zero-based index cyclically over the cached
//! collection and derives a seven-slot frame from it: three predecessors,
//! the current record, three successors, all computed with modular
//! arithmetic so the walk wraps at either end. For collections shorter than
//! seven records the slots repeat; the view renders whatever the window
//! names, duplicates included.

/// Milliseconds between rotation steps.
pub const ROTATION_PERIOD_MS: u32 = 7_000;

/// Neighbor cards shown on each side of the center card.
pub const SIDE_CARDS: usize = 3;

/// Zero-based pointer into a non-empty collection of known size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

/// Collection indices for one rendered frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    /// Predecessors, nearest to the center last.
    pub left: [usize; SIDE_CARDS],
    pub center: usize,
    /// Successors, nearest to the center first.
    pub right: [usize; SIDE_CARDS],
}

impl Rotation {
    /// Starts a rotation over `len` records. An empty collection has
    /// nothing to rotate and yields `None`.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// One timer tick: advance by one, wrapping at the end of the list.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Rebinds the rotation to a replaced collection of `new_len` records,
    /// keeping the position where it still resolves and wrapping it where
    /// the list shrank past it. `None` when the new list is empty.
    pub fn resync(&self, new_len: usize) -> Option<Self> {
        (new_len > 0).then_some(Self {
            index: self.index % new_len,
            len: new_len,
        })
    }

    /// Derives the seven-slot frame around the current index.
    pub fn window(&self) -> Window {
        let (i, n) = (self.index, self.len);
        let mut left = [0; SIDE_CARDS];
        let mut right = [0; SIDE_CARDS];
        for k in 0..SIDE_CARDS {
            let back = (SIDE_CARDS - k) % n;
            left[k] = (i + n - back) % n;
            right[k] = (i + k + 1) % n;
        }
        Window {
            left,
            center: i,
            right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_has_no_rotation() {
        assert!(Rotation::new(0).is_none());
    }

    #[test]
    fn n_ticks_return_to_the_start() {
        for n in 1..=12 {
            let mut rotation = Rotation::new(n).unwrap();
            let start = rotation.index();
            for _ in 0..n {
                rotation.advance();
            }
            assert_eq!(rotation.index(), start, "cycle over {n} records");
        }
    }

    #[test]
    fn window_indices_stay_in_bounds() {
        for n in 1..=10 {
            let mut rotation = Rotation::new(n).unwrap();
            for _ in 0..n {
                let window = rotation.window();
                let center = [window.center];
                let all = window
                    .left
                    .iter()
                    .chain(center.iter())
                    .chain(window.right.iter());
                for &slot in all {
                    assert!(slot < n, "slot {slot} out of range for {n} records");
                }
                rotation.advance();
            }
        }
    }

    #[test]
    fn window_is_pairwise_distinct_from_seven_records_up() {
        for n in 7..=11 {
            let mut rotation = Rotation::new(n).unwrap();
            for _ in 0..n {
                let window = rotation.window();
                let mut slots = window.left.to_vec();
                slots.push(window.center);
                slots.extend_from_slice(&window.right);
                slots.sort_unstable();
                slots.dedup();
                assert_eq!(slots.len(), 1 + 2 * SIDE_CARDS, "{n} records");
                rotation.advance();
            }
        }
    }

    #[test]
    fn short_lists_wrap_by_the_modular_rule() {
        // Expected slots computed independently with signed arithmetic:
        // left[k] = (i - (3 - k)) mod n, right[k] = (i + k + 1) mod n.
        for n in 1..7usize {
            let mut rotation = Rotation::new(n).unwrap();
            for _ in 0..n {
                let i = rotation.index() as i64;
                let window = rotation.window();
                for k in 0..SIDE_CARDS {
                    let expected_left = (i - (SIDE_CARDS - k) as i64).rem_euclid(n as i64) as usize;
                    let expected_right = (i + k as i64 + 1).rem_euclid(n as i64) as usize;
                    assert_eq!(window.left[k], expected_left);
                    assert_eq!(window.right[k], expected_right);
                }
                rotation.advance();
            }
        }
    }

    #[test]
    fn documented_three_record_scenario() {
        // Collection [A, B, C] at index 0: left = [A, B, C], center = A,
        // right = [B, C, A].
        let rotation = Rotation::new(3).unwrap();
        let window = rotation.window();
        assert_eq!(window.left, [0, 1, 2]);
        assert_eq!(window.center, 0);
        assert_eq!(window.right, [1, 2, 0]);
    }

    #[test]
    fn center_is_stable_between_ticks() {
        let rotation = Rotation::new(5).unwrap();
        assert_eq!(rotation.window(), rotation.window());
    }

    #[test]
    fn resync_after_shrink_keeps_a_valid_index() {
        let mut rotation = Rotation::new(9).unwrap();
        for _ in 0..7 {
            rotation.advance();
        }
        assert_eq!(rotation.index(), 7);

        let resynced = rotation.resync(4).unwrap();
        assert_eq!(resynced.index(), 3);
        assert_eq!(resynced.len(), 4);

        assert!(rotation.resync(0).is_none());
    }

    #[test]
    fn resync_keeps_the_position_when_it_still_resolves() {
        let mut rotation = Rotation::new(5).unwrap();
        rotation.advance();
        rotation.advance();
        let resynced = rotation.resync(8).unwrap();
        assert_eq!(resynced.index(), 2);
        assert_eq!(resynced.len(), 8);
    }
}
