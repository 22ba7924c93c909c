//! Slot positions on the helical wheel
//!
//! The wheel is a helix seen down its axis: each ring is one round of 18 slots,
//! the outer ring radius is scaled up by 1.32 so that the residue discs of the
//! two rounds do not overlap.

use crate::tables::{N_SLOTS, SLOTS_PER_ROUND};
use std::{f64::consts::PI, fmt, ops::Mul};

/// Inner ring radius
pub const INNER_RADIUS: f64 = 10.0;
/// Outer ring radius
pub const OUTER_RADIUS: f64 = 13.2;

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}
impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
impl Mul<f64> for Position {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:6.3},{:6.3}]", self.x, self.y)
    }
}

fn ring(radius: f64) -> impl Iterator<Item = Position> {
    let angle = 2. * PI / SLOTS_PER_ROUND as f64;
    (0..SLOTS_PER_ROUND).map(move |i| {
        let (s, c) = (i as f64 * angle).sin_cos();
        Position::new(s * radius, c * radius)
    })
}

/// Returns the positions of the 36 slots
///
/// Slots 1 to 18 are on the inner ring and slots 19 to 36 on the outer ring,
/// both starting at the top of the wheel and going clockwise
pub fn positions() -> [Position; N_SLOTS] {
    let mut positions = [Position::default(); N_SLOTS];
    ring(INNER_RADIUS)
        .chain(ring(OUTER_RADIUS))
        .zip(positions.iter_mut())
        .for_each(|(p, q)| *q = p);
    positions
}

/// Returns the position of a 1-based slot
pub fn position(slot: usize) -> Option<Position> {
    slot.checked_sub(1)
        .and_then(|i| positions().get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radius(p: &Position) -> f64 {
        p.x.hypot(p.y)
    }

    #[test]
    fn deterministic() {
        let a = positions();
        let b = positions();
        for (p, q) in a.iter().zip(b.iter()) {
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }

    #[test]
    fn rings() {
        let positions = positions();
        for p in &positions[..SLOTS_PER_ROUND] {
            assert!((radius(p) - INNER_RADIUS).abs() < 1e-9, "{p}");
        }
        for p in &positions[SLOTS_PER_ROUND..] {
            assert!((radius(p) - OUTER_RADIUS).abs() < 1e-9, "{p}");
        }
    }

    #[test]
    fn angular_sweep() {
        let first = position(1).unwrap();
        assert!(first.x.abs() < 1e-12 && (first.y - INNER_RADIUS).abs() < 1e-12);
        let quarter = position(10).unwrap();
        assert!(quarter.x.abs() < 1e-9 && (quarter.y + INNER_RADIUS).abs() < 1e-9);
        let outer = position(19).unwrap();
        assert!(outer.x.abs() < 1e-12 && (outer.y - OUTER_RADIUS).abs() < 1e-12);
        // clockwise from the top
        assert!(position(2).unwrap().x > 0.);
    }

    #[test]
    fn slot_bounds() {
        assert!(position(0).is_none());
        assert!(position(37).is_none());
        assert!(position(36).is_some());
    }
}
