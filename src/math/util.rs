use super::{Point2d, Vector2d};
use cgmath::prelude::*;
use std::f64::consts::TAU;

/// Angles this close to a full turn are treated as zero by [wrap_angle].
const WRAP_EPSILON: f64 = 1e-10;

/// Wraps an angle in radians into the range `[0, 2π)`.
///
/// Values that land within a hair of `2π` are snapped back to zero, so that
/// rounding noise on an angle that should be zero never reads as a full turn.
pub fn wrap_angle(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(TAU);
    if TAU - wrapped < WRAP_EPSILON {
        0.0
    } else {
        wrapped
    }
}

/// Returns the unit vector pointing along the given heading.
pub fn heading_vector(heading: f64) -> Vector2d {
    let (sin, cos) = heading.sin_cos();
    Vector2d::new(cos, sin)
}

/// Projects a point onto a local coordinate system.
///
/// # Parameters
/// * `point` - The point to project
/// * `origin` - The origin of the coordinate system
/// * `x_axis` - The basis vector pointing in the positive x-axis.
/// * `y_axis` - The basis vector pointing in the positive y-axis.
pub fn project_local(
    point: Point2d,
    origin: Point2d,
    x_axis: Vector2d,
    y_axis: Vector2d,
) -> Point2d {
    let point = point - origin;
    Point2d::new(point.dot(x_axis), point.dot(y_axis))
}

/// Rotates a vector 90 degrees anti-clockwise.
pub fn rot90(vec: Vector2d) -> Vector2d {
    Vector2d::new(-vec.y, vec.x)
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn wrap_angle_range() {
        assert_approx_eq!(wrap_angle(0.0), 0.0);
        assert_approx_eq!(wrap_angle(-0.5 * PI), 1.5 * PI);
        assert_approx_eq!(wrap_angle(5.0 * PI), PI);
        assert_approx_eq!(wrap_angle(TAU), 0.0);
        assert_eq!(wrap_angle(-1e-14), 0.0);
        for i in -50..50 {
            let theta = wrap_angle(0.37 * i as f64);
            assert!((0.0..TAU).contains(&theta));
        }
    }

    #[test]
    fn local_projection() {
        let x_axis = heading_vector(0.5 * PI);
        let y_axis = rot90(x_axis);
        let local = project_local(Point2d::new(1.0, 3.0), Point2d::new(1.0, 1.0), x_axis, y_axis);
        assert_approx_eq!(local.x, 2.0);
        assert_approx_eq!(local.y, 0.0);
    }
}
