//! Per-frame position easing.
//!
//! Every drawable element carries a [`Motion`]: where it is drawn now and
//! where layout wants it to be. Each frame the current position moves a
//! fraction of the remaining distance toward the target:
//!
//! ```text
//! position += (target - position) * min(1, rate * dt)
//! ```
//!
//! This is an exponential ease, not a velocity simulation. A factor of 1
//! lands exactly on the target, so large frame gaps never overshoot.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Distance below which a moving element snaps onto its target.
pub const REST_EPSILON: f32 = 0.05;

/// Exponential ease parameterized by a rate in 1/seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ease {
    pub rate: f32,
}

impl Ease {
    pub const fn new(rate: f32) -> Self {
        Self { rate }
    }

    /// Interpolation factor for one frame, clamped to `[0, 1]`
    ///
    /// Zero, negative and NaN frame times produce no movement.
    #[inline]
    pub fn factor(&self, dt: f32) -> f32 {
        let t = self.rate * dt;
        if t.is_nan() || t <= 0.0 {
            0.0
        } else {
            t.min(1.0)
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::new(5.0)
    }
}

/// Move `current` toward `target` by `factor` of the remaining distance.
#[inline]
pub fn ease_toward(current: Point, target: Point, factor: f32) -> Point {
    if factor >= 1.0 {
        return target;
    }
    current + (target - current) * factor
}

/// Current and resting position of one drawable element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    pub position: Point,
    pub target: Point,
}

impl Motion {
    /// An element already resting at `at`
    pub fn at_rest(at: Point) -> Self {
        Self {
            position: at,
            target: at,
        }
    }

    /// An element drawn at `from` that will ease toward `to`
    pub fn from_to(from: Point, to: Point) -> Self {
        Self {
            position: from,
            target: to,
        }
    }

    pub fn retarget(&mut self, target: Point) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        self.position == self.target
    }

    /// Advance one frame. Returns true while the element is still moving.
    pub fn tick(&mut self, dt: f32, ease: Ease) -> bool {
        if self.is_at_rest() {
            return false;
        }
        let factor = ease.factor(dt);
        if factor == 0.0 {
            return true;
        }
        let next = ease_toward(self.position, self.target, factor);
        // A step below float resolution would otherwise stall just short of the target.
        if next == self.position || next.max_axis_distance(self.target) < REST_EPSILON {
            self.position = self.target;
        } else {
            self.position = next;
        }
        !self.is_at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_dt_does_not_move() {
        let mut m = Motion::from_to(Point::ZERO, Point::new(100.0, 50.0));
        assert!(m.tick(0.0, Ease::new(5.0)));
        assert_eq!(m.position, Point::ZERO);
    }

    #[test]
    fn test_large_dt_lands_exactly() {
        let target = Point::new(123.456, -78.9);
        let mut m = Motion::from_to(Point::new(0.1, 0.2), target);
        assert!(!m.tick(10.0, Ease::new(4.0)));
        assert_eq!(m.position, target);
    }

    #[test]
    fn test_factor_clamps() {
        let ease = Ease::new(5.0);
        assert_eq!(ease.factor(0.0), 0.0);
        assert_eq!(ease.factor(-1.0), 0.0);
        assert_eq!(ease.factor(f32::NAN), 0.0);
        assert_eq!(ease.factor(1.0), 1.0);
        assert!((ease.factor(0.1) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_rest_is_idempotent() {
        let mut m = Motion::at_rest(Point::new(5.0, 5.0));
        assert!(!m.tick(0.016, Ease::default()));
        assert_eq!(m.position, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_half_step() {
        let m = ease_toward(Point::ZERO, Point::new(10.0, 20.0), 0.5);
        assert_eq!(m, Point::new(5.0, 10.0));
    }

    proptest! {
        #[test]
        fn test_ticks_converge_monotonically(
            sx in -1000.0f32..1000.0,
            sy in -1000.0f32..1000.0,
            tx in -1000.0f32..1000.0,
            ty in -1000.0f32..1000.0,
            rate in 0.5f32..20.0,
            dt in 0.001f32..0.1,
        ) {
            let target = Point::new(tx, ty);
            let mut m = Motion::from_to(Point::new(sx, sy), target);
            let ease = Ease::new(rate);
            let mut last = m.position.distance(target);

            let mut ticks = 0;
            while m.tick(dt, ease) {
                let d = m.position.distance(target);
                prop_assert!(d <= last + 1e-3, "distance grew from {} to {}", last, d);
                last = d;
                ticks += 1;
                prop_assert!(ticks < 100_000, "never came to rest");
            }
            prop_assert_eq!(m.position, target);
        }
    }
}
