//! Turns solved paths into evenly spaced world space waypoints.

use crate::debug::{debug_arc, debug_straight};
use crate::error::{check_radius, check_step_size, Result};
use crate::math::{Frame2d, Point2d, Point3d, Pose2d};
use crate::path::{DubinsPath, PathFamily, SegmentKind};
use crate::solver::solve_poses;
use crate::util::Interval;

/// Plans a path between two world space poses and samples points along it.
///
/// # Parameters
/// * `start` - The pose to start from
/// * `goal` - The pose to arrive at
/// * `radius` - The minimum turning radius
/// * `step_size` - The approximate distance between consecutive points
pub fn sample(start: Pose2d, goal: Pose2d, radius: f64, step_size: f64) -> Result<Vec<Point2d>> {
    Ok(waypoints(start, goal, radius, step_size)?
        .map(|pose| pose.position())
        .collect())
}

/// Like [sample], but each waypoint also carries the heading of the path.
pub fn sample_poses(
    start: Pose2d,
    goal: Pose2d,
    radius: f64,
    step_size: f64,
) -> Result<Vec<Pose2d>> {
    Ok(waypoints(start, goal, radius, step_size)?.collect())
}

/// Like [sample], but lifts each waypoint to a ground plane at the given height.
pub fn sample_at_height(
    start: Pose2d,
    goal: Pose2d,
    radius: f64,
    step_size: f64,
    height: f64,
) -> Result<Vec<Point3d>> {
    Ok(waypoints(start, goal, radius, step_size)?
        .map(|pose| {
            let pos = pose.position();
            Point3d::new(pos.x, pos.y, height)
        })
        .collect())
}

/// Plans a path between two world space poses and returns a lazy iterator
/// over its waypoints.
pub fn waypoints(start: Pose2d, goal: Pose2d, radius: f64, step_size: f64) -> Result<Waypoints> {
    check_radius(radius)?;
    check_step_size(step_size)?;
    let path = solve_poses(start, goal, radius)?;
    Ok(Waypoints::new(start, &path, step_size))
}

/// The number of points sampled along a segment of the given real length.
///
/// Saturates at `usize::MAX` for step sizes too small to count.
pub fn segment_sample_count(length: f64, step_size: f64) -> usize {
    usize::max(2, (length / step_size).ceil() as usize)
}

/// A single segment of a path being sampled.
#[derive(Clone, Copy, Debug)]
struct SampledSegment {
    kind: SegmentKind,
    /// The pose at the start of the segment, in the frame of the path.
    start: Pose2d,
    /// The range of the integration parameter.
    params: Interval<f64>,
    /// The number of points to sample.
    count: usize,
}

impl SampledSegment {
    fn pose(&self, idx: usize, radius: f64) -> Pose2d {
        let t = idx as f64 / (self.count - 1) as f64;
        self.kind.advance(self.start, self.params.lerp(t), radius)
    }
}

/// An iterator over the world space waypoints of a path.
///
/// Every segment is sampled at both of its ends, so the point shared by two
/// consecutive segments appears twice.
#[derive(Clone, Debug)]
pub struct Waypoints {
    frame: Frame2d,
    radius: f64,
    segments: [SampledSegment; 3],
    /// The segment currently being sampled.
    segment: usize,
    /// The index of the next point within the current segment.
    idx: usize,
}

impl Waypoints {
    /// Creates an iterator over points spaced roughly `step_size` apart
    /// along `path`, placed in the world with the path starting at `start`.
    pub fn new(start: Pose2d, path: &DubinsPath, step_size: f64) -> Self {
        let radius = path.radius();
        let frame = Frame2d::at(start);
        let mut pose = Pose2d::origin();
        let mut idx = 0;
        let segments = path.segments().map(|kind| {
            let param = path.params().as_array()[idx];
            let segment = SampledSegment {
                kind,
                start: pose,
                params: Interval::new(0.0, param),
                count: segment_sample_count(path.segment_length(idx), step_size),
            };
            record_segment(path.family(), idx, &frame, &segment, radius);
            pose = kind.advance(pose, param, radius);
            idx += 1;
            segment
        });

        log::debug!(
            "Sampling {} path of length {:.3} at {} points",
            path.family(),
            path.length(),
            total_count(&segments)
        );

        Self {
            frame,
            radius,
            segments,
            segment: 0,
            idx: 0,
        }
    }

    /// The number of points sampled along each of the three segments.
    pub fn segment_counts(&self) -> [usize; 3] {
        self.segments.map(|s| s.count)
    }
}

impl Iterator for Waypoints {
    type Item = Pose2d;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = *self.segments.get(self.segment)?;
        let pose = segment.pose(self.idx, self.radius);
        self.idx += 1;
        if self.idx == segment.count {
            self.segment += 1;
            self.idx = 0;
        }
        Some(self.frame.to_world(pose))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let segments = self.segments.get(self.segment..).unwrap_or_default();
        let remaining = total_count(segments).saturating_sub(self.idx);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Waypoints {}

/// The number of points left in `segments`, saturating at `usize::MAX`.
fn total_count(segments: &[SampledSegment]) -> usize {
    segments
        .iter()
        .fold(0, |total, s| total.saturating_add(s.count))
}

/// Records the geometry of a segment in the debug frame.
fn record_segment(
    family: PathFamily,
    idx: usize,
    frame: &Frame2d,
    segment: &SampledSegment,
    radius: f64,
) {
    let sweep = segment.params.max;
    match segment.kind.arc_centre(segment.start, radius) {
        Some(centre) => debug_arc(
            family,
            idx,
            segment.kind,
            frame.point_to_world(centre),
            radius,
            sweep,
        ),
        None => {
            let end = segment.kind.advance(segment.start, sweep, radius);
            debug_straight(
                family,
                idx,
                frame.point_to_world(segment.start.position()),
                frame.point_to_world(end.position()),
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::PlanError;
    use assert_approx_eq::assert_approx_eq;
    use cgmath::MetricSpace;
    use std::f64::consts::PI;

    #[test]
    fn sample_counts() {
        assert_eq!(segment_sample_count(0.0, 1.0), 2);
        assert_eq!(segment_sample_count(1.0, 1.0), 2);
        assert_eq!(segment_sample_count(2.5, 1.0), 3);
        assert_eq!(segment_sample_count(20.0, 0.5), 40);
        assert_eq!(segment_sample_count(20.0, 1e-300), usize::MAX);
    }

    #[test]
    fn tiny_steps_saturate_the_length() {
        let goal = Pose2d::from_xy(20.0, 0.0, 0.0);
        let iter = waypoints(Pose2d::origin(), goal, 5.0, 1e-300).unwrap();
        assert_eq!(iter.segment_counts(), [2, usize::MAX, 2]);
        assert_eq!(iter.len(), usize::MAX);
    }

    #[test]
    fn straight_line() {
        let start = Pose2d::origin();
        let goal = Pose2d::from_xy(20.0, 0.0, 0.0);
        let points = sample(start, goal, 5.0, 1.0).unwrap();

        // Two empty arcs around a 20 point straight
        assert_eq!(points.len(), 2 + 20 + 2);
        for point in &points {
            assert_approx_eq!(point.y, 0.0);
        }
        assert_approx_eq!(points[2].x, 0.0);
        assert_approx_eq!(points[21].x, 20.0);
        assert_approx_eq!(points.last().unwrap().x, 20.0);
    }

    #[test]
    fn iterator_is_exact() {
        let start = Pose2d::from_xy(1.0, 2.0, 0.3);
        let goal = Pose2d::from_xy(-8.0, 11.0, 4.0);
        let mut iter = waypoints(start, goal, 2.0, 0.25).unwrap();
        let total = iter.segment_counts().iter().sum::<usize>();
        assert_eq!(iter.len(), total);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), total - 2);
        assert_eq!(iter.count(), total - 2);
    }

    #[test]
    fn lazy_and_eager_agree() {
        let start = Pose2d::from_xy(4.0, -3.0, 1.0);
        let goal = Pose2d::from_xy(-2.0, 6.0, 5.5);
        let eager = sample(start, goal, 1.5, 0.1).unwrap();
        let lazy = waypoints(start, goal, 1.5, 0.1).unwrap();
        assert_eq!(eager.len(), lazy.len());
        for (a, b) in eager.iter().zip(lazy) {
            assert_eq!(*a, b.position());
        }
    }

    #[test]
    fn poses_follow_the_path() {
        let start = Pose2d::from_xy(0.0, 0.0, 0.5 * PI);
        let goal = Pose2d::from_xy(10.0, 10.0, 0.0);
        let poses = sample_poses(start, goal, 2.0, 0.1).unwrap();
        assert_approx_eq!(poses[0].heading(), 0.5 * PI);
        for pair in poses.windows(2) {
            assert!(pair[0].position().distance(pair[1].position()) <= 2.0 * 0.1 + 1e-9);
        }
        let last = poses.last().unwrap();
        assert_approx_eq!(last.position().x, 10.0);
        assert_approx_eq!(last.position().y, 10.0);
    }

    #[test]
    fn height() {
        let goal = Pose2d::from_xy(3.0, 4.0, 1.0);
        let points = sample_at_height(Pose2d::origin(), goal, 1.0, 0.5, 7.5).unwrap();
        assert!(points.iter().all(|p| p.z == 7.5));
    }

    #[test]
    fn rejects_bad_step_size() {
        let goal = Pose2d::from_xy(10.0, 0.0, 0.0);
        for step in [0.0, -0.5, f64::NAN] {
            assert!(matches!(
                sample(Pose2d::origin(), goal, 1.0, step),
                Err(PlanError::InvalidStepSize(_))
            ));
        }
        assert!(matches!(
            sample(Pose2d::origin(), goal, 0.0, 1.0),
            Err(PlanError::InvalidRadius(_))
        ));
    }
}
