//! Helical wheel slot tables
//!
//! Residues are laid out with a pitch of 100° per residue, approximated on an
//! 18 slot ring by jumps of +11 or -7 slots.
//! The first round maps the sequence positions 1 to 18 onto the inner ring,
//! the second round repeats the same pattern shifted by 18 onto the outer ring.

use std::fmt;
use strum_macros::EnumIter;

/// Number of slots per ring
pub const SLOTS_PER_ROUND: usize = 18;
/// Total number of slots on the wheel
pub const N_SLOTS: usize = 2 * SLOTS_PER_ROUND;

/// Sequence position to slot index, inner ring
pub const FIRST_ROUND: [(usize, usize); SLOTS_PER_ROUND] = [
    (1, 1),
    (12, 2),
    (5, 3),
    (16, 4),
    (9, 5),
    (2, 6),
    (13, 7),
    (6, 8),
    (17, 9),
    (10, 10),
    (3, 11),
    (14, 12),
    (7, 13),
    (18, 14),
    (11, 15),
    (4, 16),
    (15, 17),
    (8, 18),
];
/// Sequence position to slot index, outer ring
pub const SECOND_ROUND: [(usize, usize); SLOTS_PER_ROUND] = [
    (19, 19),
    (30, 20),
    (23, 21),
    (34, 22),
    (27, 23),
    (20, 24),
    (31, 25),
    (24, 26),
    (35, 27),
    (28, 28),
    (21, 29),
    (32, 30),
    (25, 31),
    (36, 32),
    (29, 33),
    (22, 34),
    (33, 35),
    (26, 36),
];
/// Slots in the order they are visited going along the helix
pub const WHEEL_ORDER: [usize; SLOTS_PER_ROUND] =
    [1, 6, 11, 16, 3, 8, 13, 18, 5, 10, 15, 2, 7, 12, 17, 4, 9, 14];

/// Helical wheel round
#[derive(EnumIter, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Round {
    First,
    Second,
}
impl Round {
    /// Returns the round of a 1-based sequence position
    pub fn of(position: usize) -> Self {
        if position <= SLOTS_PER_ROUND {
            Round::First
        } else {
            Round::Second
        }
    }
    /// Position to slot table of the round
    pub fn table(&self) -> &'static [(usize, usize); SLOTS_PER_ROUND] {
        match self {
            Round::First => &FIRST_ROUND,
            Round::Second => &SECOND_ROUND,
        }
    }
}
impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Round::First => write!(f, "first_round"),
            Round::Second => write!(f, "second_round"),
        }
    }
}

/// Returns the 1-based slot of a 1-based sequence position
pub fn slot(position: usize) -> Option<usize> {
    Round::of(position)
        .table()
        .iter()
        .find(|(key, _)| *key == position)
        .map(|&(_, value)| value)
}

/// Returns the first and second round tables and the wheel order
pub fn slot_tables() -> (
    [(usize, usize); SLOTS_PER_ROUND],
    [(usize, usize); SLOTS_PER_ROUND],
    [usize; SLOTS_PER_ROUND],
) {
    (FIRST_ROUND, SECOND_ROUND, WHEEL_ORDER)
}
