//! The pluckable string under the hero headline.
//!
//! A quadratic Bézier between two fixed end points whose control point
//! follows the pointer once grabbed, until it is pulled too far or the
//! pointer leaves.

use super::motion::Point;
use crate::config::curve::{GRAB_THRESHOLD, HEIGHT, INSET, PULL_THRESHOLD, WIDTH};

pub const START: Point = Point::new(INSET, HEIGHT / 2.0);
pub const END: Point = Point::new(WIDTH - INSET, HEIGHT / 2.0);
pub const CENTER: Point = Point::new(WIDTH / 2.0, HEIGHT / 2.0);

/// What the view should do after a pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveAction {
    /// Nothing changes.
    Idle,
    /// Move the control point toward the pointer.
    Follow(Point),
    /// Let go; spring back to the rest shape.
    Release,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StringCurve {
    grabbed: bool,
}

impl StringCurve {
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Handle a pointer position in viewBox units.
    pub fn pointer_move(&mut self, pointer: Point) -> CurveAction {
        if !self.grabbed && (pointer.y - CENTER.y).abs() < GRAB_THRESHOLD {
            self.grabbed = true;
        }
        if !self.grabbed {
            return CurveAction::Idle;
        }
        if pointer.distance(CENTER) > PULL_THRESHOLD {
            self.grabbed = false;
            CurveAction::Release
        } else {
            CurveAction::Follow(pointer)
        }
    }

    pub fn pointer_leave(&mut self) -> CurveAction {
        if self.grabbed {
            self.grabbed = false;
            CurveAction::Release
        } else {
            CurveAction::Idle
        }
    }
}

/// SVG path data for the string with the given control point.
pub fn path(control: Point) -> String {
    format!(
        "M {} {} Q {:.2} {:.2} {} {}",
        START.x, START.y, control.x, control.y, END.x, END.y
    )
}

/// Map client coordinates into viewBox units for an SVG drawn at
/// `rendered_width` x `rendered_height` with its top-left at `origin`.
pub fn to_view_box(client: Point, origin: Point, rendered_width: f64, rendered_height: f64) -> Point {
    let sx = if rendered_width > 0.0 { WIDTH / rendered_width } else { 1.0 };
    let sy = if rendered_height > 0.0 { HEIGHT / rendered_height } else { 1.0 };
    Point::new((client.x - origin.x) * sx, (client.y - origin.y) * sy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_path_is_flat() {
        assert_eq!(path(CENTER), "M 60 110 Q 700.00 110.00 1340 110");
    }

    #[test]
    fn test_far_pointer_does_not_grab() {
        let mut curve = StringCurve::default();
        assert_eq!(curve.pointer_move(Point::new(700.0, 10.0)), CurveAction::Idle);
        assert!(!curve.is_grabbed());
    }

    #[test]
    fn test_grab_then_follow() {
        let mut curve = StringCurve::default();
        let near = Point::new(600.0, 120.0);
        assert_eq!(curve.pointer_move(near), CurveAction::Follow(near));
        // once grabbed, leaving the grab band keeps following
        let pulled = Point::new(650.0, 10.0);
        assert_eq!(curve.pointer_move(pulled), CurveAction::Follow(pulled));
    }

    #[test]
    fn test_overpull_releases() {
        let mut curve = StringCurve::default();
        curve.pointer_move(Point::new(700.0, 100.0));
        assert_eq!(curve.pointer_move(Point::new(200.0, 100.0)), CurveAction::Release);
        assert!(!curve.is_grabbed());
    }

    #[test]
    fn test_leave_releases_only_when_grabbed() {
        let mut curve = StringCurve::default();
        assert_eq!(curve.pointer_leave(), CurveAction::Idle);
        curve.pointer_move(CENTER);
        assert_eq!(curve.pointer_leave(), CurveAction::Release);
    }

    #[test]
    fn test_view_box_scaling() {
        let p = to_view_box(Point::new(400.0, 155.0), Point::new(50.0, 100.0), 700.0, 110.0);
        assert_eq!(p, Point::new(700.0, 110.0));
    }
}
