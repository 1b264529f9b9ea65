//! Dubins path families and solved paths.

use crate::math::Pose2d;
pub(crate) use formulas::Intermediate;
pub use segment::SegmentKind;
use std::fmt;

mod formulas;
mod segment;

/// One of the six Dubins path families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathFamily {
    LSL,
    RSR,
    LSR,
    RSL,
    RLR,
    LRL,
}

impl PathFamily {
    /// Every path family, in the order they are evaluated.
    pub const ALL: [PathFamily; 6] = [
        PathFamily::LSL,
        PathFamily::RSR,
        PathFamily::LSR,
        PathFamily::RSL,
        PathFamily::RLR,
        PathFamily::LRL,
    ];

    /// The motion primitive of each of the three segments.
    pub const fn segments(self) -> [SegmentKind; 3] {
        use SegmentKind::*;
        match self {
            PathFamily::LSL => [Left, Straight, Left],
            PathFamily::RSR => [Right, Straight, Right],
            PathFamily::LSR => [Left, Straight, Right],
            PathFamily::RSL => [Right, Straight, Left],
            PathFamily::RLR => [Right, Left, Right],
            PathFamily::LRL => [Left, Right, Left],
        }
    }

    /// Evaluates the closed-form solution for this family.
    ///
    /// Solutions with a non-finite segment length are discarded.
    pub(crate) fn evaluate(self, im: &Intermediate) -> Option<PathParameters> {
        let formula: fn(&Intermediate) -> Option<PathParameters> = match self {
            PathFamily::LSL => Intermediate::lsl,
            PathFamily::RSR => Intermediate::rsr,
            PathFamily::LSR => Intermediate::lsr,
            PathFamily::RSL => Intermediate::rsl,
            PathFamily::RLR => Intermediate::rlr,
            PathFamily::LRL => Intermediate::lrl,
        };
        formula(im).filter(PathParameters::is_finite)
    }
}

impl fmt::Display for PathFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.segments();
        write!(f, "{}{}{}", a, b, c)
    }
}

/// The normalized lengths of the three segments of a path.
///
/// Arcs are measured in radians, straight segments in multiples
/// of the turning radius.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathParameters {
    pub t: f64,
    pub p: f64,
    pub q: f64,
}

impl PathParameters {
    pub const fn new(t: f64, p: f64, q: f64) -> Self {
        Self { t, p, q }
    }

    /// The parameters as an array, in segment order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.t, self.p, self.q]
    }

    /// Whether all three normalized lengths are finite.
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|x| x.is_finite())
    }

    /// The sum of the three normalized lengths.
    pub fn sum(&self) -> f64 {
        self.t + self.p + self.q
    }
}

/// A solved Dubins path, expressed in the frame of its start pose.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DubinsPath {
    family: PathFamily,
    params: PathParameters,
    radius: f64,
    total_length: f64,
}

impl DubinsPath {
    pub(crate) fn new(family: PathFamily, params: PathParameters, radius: f64) -> Self {
        Self {
            family,
            params,
            radius,
            total_length: params.sum() * radius,
        }
    }

    /// The family of the path.
    pub fn family(&self) -> PathFamily {
        self.family
    }

    /// The normalized segment lengths.
    pub fn params(&self) -> PathParameters {
        self.params
    }

    /// The turning radius the path was solved for.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The real world length of the path.
    pub fn length(&self) -> f64 {
        self.total_length
    }

    /// The motion primitive of each segment.
    pub fn segments(&self) -> [SegmentKind; 3] {
        self.family.segments()
    }

    /// The real world length of segment `idx`, which must be less than 3.
    pub fn segment_length(&self, idx: usize) -> f64 {
        self.params.as_array()[idx] * self.radius
    }

    /// The pose at the end of the path, relative to its start pose.
    pub fn end_pose(&self) -> Pose2d {
        self.segments()
            .into_iter()
            .zip(self.params.as_array())
            .fold(Pose2d::origin(), |pose, (kind, param)| {
                kind.advance(pose, param, self.radius)
            })
    }

    /// The pose after travelling `distance` along the path, relative to its
    /// start pose. The distance is clamped to the extents of the path.
    pub fn pose_at(&self, distance: f64) -> Pose2d {
        let mut remaining = distance.clamp(0.0, self.total_length) / self.radius;
        let mut pose = Pose2d::origin();
        for (kind, param) in self.segments().into_iter().zip(self.params.as_array()) {
            if remaining <= 0.0 {
                break;
            }
            let step = remaining.min(param);
            pose = kind.advance(pose, step, self.radius);
            remaining -= step;
        }
        pose
    }
}
