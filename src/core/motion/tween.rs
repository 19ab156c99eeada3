//! Time-based tweens driven by animation frames.

use super::easing::{Ease, lerp};

/// Values a tween can interpolate.
pub trait Interpolate: Copy {
    fn interpolate(self, to: Self, k: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(self, to: Self, k: f64) -> Self {
        lerp(self, to, k)
    }
}

/// A point in CSS pixels or SVG user units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Interpolate for Point {
    fn interpolate(self, to: Self, k: f64) -> Self {
        Point::new(lerp(self.x, to.x, k), lerp(self.y, to.y, k))
    }
}

/// A single eased transition from one value to another.
///
/// Times are milliseconds on the animation-frame clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    start_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, start_ms: f64, duration_secs: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: (duration_secs * 1000.0).max(0.0),
            ease,
        }
    }

    /// A tween that has already finished at `value`.
    pub fn at_rest(value: T) -> Self {
        Self::new(value, value, 0.0, 0.0, Ease::Linear)
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now_ms: f64) -> T {
        self.from.interpolate(self.to, self.ease.apply(self.progress(now_ms)))
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Start a new tween toward `to` from wherever this one is at `now_ms`.
    ///
    /// Overwrites the running tween the way a fresh `gsap.to` on the same
    /// property does.
    pub fn retarget(&self, to: T, now_ms: f64, duration_secs: f64, ease: Ease) -> Self {
        Self::new(self.value_at(now_ms), to, now_ms, duration_secs, ease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_tween() {
        let tween = Tween::new(0.0, 10.0, 1000.0, 1.0, Ease::Linear);
        assert_eq!(tween.value_at(500.0), 0.0);
        assert_eq!(tween.value_at(1500.0), 5.0);
        assert_eq!(tween.value_at(2500.0), 10.0);
        assert!(!tween.is_finished(1999.0));
        assert!(tween.is_finished(2000.0));
    }

    #[test]
    fn test_zero_duration_is_finished() {
        let rest = Tween::at_rest(Point::new(3.0, 4.0));
        assert!(rest.is_finished(0.0));
        assert_eq!(rest.value_at(-50.0), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let tween = Tween::new(0.0, 100.0, 0.0, 1.0, Ease::Linear);
        let next = tween.retarget(0.0, 250.0, 1.0, Ease::Linear);
        assert_eq!(next.value_at(250.0), 25.0);
        assert_eq!(next.value_at(1250.0), 0.0);
        assert!(next.is_finished(1250.0));
    }

    #[test]
    fn test_point_interpolation_and_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(30.0, 40.0);
        assert_eq!(a.interpolate(b, 0.5), Point::new(15.0, 20.0));
        assert_eq!(a.distance(b), 50.0);
    }
}
