use crate::math::{rot90, Point2d, Pose2d, Vector2d};
use std::fmt;

/// The motion primitive of one segment of a Dubins path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentKind {
    /// An anti-clockwise arc at the minimum turning radius.
    Left,
    /// A straight line.
    Straight,
    /// A clockwise arc at the minimum turning radius.
    Right,
}

impl SegmentKind {
    /// The centre of the turning circle for an arc starting at `pose`,
    /// or `None` for a straight segment.
    pub fn arc_centre(self, pose: Pose2d, radius: f64) -> Option<Point2d> {
        let normal = radius * rot90(pose.direction());
        match self {
            SegmentKind::Left => Some(pose.position() + normal),
            SegmentKind::Right => Some(pose.position() - normal),
            SegmentKind::Straight => None,
        }
    }

    /// Integrates the motion primitive from `pose`.
    ///
    /// # Parameters
    /// * `pose` - The pose at the start of the segment
    /// * `param` - The normalized extent: an angle in radians for arcs,
    ///   or the distance divided by `radius` for straight segments
    /// * `radius` - The turning radius
    pub fn advance(self, pose: Pose2d, param: f64, radius: f64) -> Pose2d {
        let heading = pose.heading();
        let pos = pose.position();
        match self {
            SegmentKind::Straight => Pose2d::new(pos + param * radius * pose.direction(), heading),
            SegmentKind::Left => {
                let (sin0, cos0) = heading.sin_cos();
                let (sin1, cos1) = (heading + param).sin_cos();
                let delta = radius * Vector2d::new(sin1 - sin0, cos0 - cos1);
                Pose2d::new(pos + delta, heading + param)
            }
            SegmentKind::Right => {
                let (sin0, cos0) = heading.sin_cos();
                let (sin1, cos1) = (heading - param).sin_cos();
                let delta = radius * Vector2d::new(sin0 - sin1, cos1 - cos0);
                Pose2d::new(pos + delta, heading - param)
            }
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            SegmentKind::Left => 'L',
            SegmentKind::Straight => 'S',
            SegmentKind::Right => 'R',
        };
        write!(f, "{}", c)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use cgmath::MetricSpace;
    use std::f64::consts::PI;

    #[test]
    fn quarter_turns() {
        let start = Pose2d::origin();

        let left = SegmentKind::Left.advance(start, 0.5 * PI, 2.0);
        assert_approx_eq!(left.position().x, 2.0);
        assert_approx_eq!(left.position().y, 2.0);
        assert_approx_eq!(left.heading(), 0.5 * PI);

        let right = SegmentKind::Right.advance(start, 0.5 * PI, 2.0);
        assert_approx_eq!(right.position().x, 2.0);
        assert_approx_eq!(right.position().y, -2.0);
        assert_approx_eq!(right.heading(), 1.5 * PI);
    }

    #[test]
    fn straight_keeps_heading() {
        let start = Pose2d::from_xy(1.0, 1.0, 0.25 * PI);
        let end = SegmentKind::Straight.advance(start, 2.0, 3.0);
        assert_approx_eq!(end.heading(), 0.25 * PI);
        assert_approx_eq!(start.position().distance(end.position()), 6.0);
    }

    #[test]
    fn arcs_stay_on_circle() {
        let start = Pose2d::from_xy(-3.0, 5.0, 2.0);
        for kind in [SegmentKind::Left, SegmentKind::Right] {
            let centre = kind.arc_centre(start, 4.0).unwrap();
            for i in 0..20 {
                let pose = kind.advance(start, 0.3 * i as f64, 4.0);
                assert_approx_eq!(pose.position().distance(centre), 4.0);
            }
        }
    }
}
