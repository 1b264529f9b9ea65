use super::{heading_vector, project_local, rot90, wrap_angle, Point2d, Vector2d};
use cgmath::prelude::*;
use cgmath::{Basis2, Rad};

/// A position and heading on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose2d {
    position: Point2d,
    /// The heading in radians, anti-clockwise from the positive x-axis.
    heading: f64,
}

impl Pose2d {
    /// Creates a new pose, wrapping the heading into `[0, 2π)`.
    pub fn new(position: Point2d, heading: f64) -> Self {
        Self {
            position,
            heading: wrap_angle(heading),
        }
    }

    /// Creates a new pose from its coordinates and heading.
    pub fn from_xy(x: f64, y: f64, heading: f64) -> Self {
        Self::new(Point2d::new(x, y), heading)
    }

    /// The pose at the origin facing along the positive x-axis.
    pub fn origin() -> Self {
        Self::from_xy(0.0, 0.0, 0.0)
    }

    /// The position of the pose.
    pub fn position(&self) -> Point2d {
        self.position
    }

    /// The heading of the pose in radians, within `[0, 2π)`.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// A unit vector aligned with the heading.
    pub fn direction(&self) -> Vector2d {
        heading_vector(self.heading)
    }
}

impl Default for Pose2d {
    fn default() -> Self {
        Self::origin()
    }
}

impl From<[f64; 3]> for Pose2d {
    fn from([x, y, heading]: [f64; 3]) -> Self {
        Self::from_xy(x, y, heading)
    }
}

/// A local coordinate frame anchored at a pose.
///
/// In local coordinates the anchor pose sits at the origin facing along
/// the positive x-axis.
#[derive(Clone, Copy, Debug)]
pub struct Frame2d {
    origin: Point2d,
    heading: f64,
    rotation: Basis2<f64>,
}

impl Frame2d {
    /// Creates the frame anchored at the given pose.
    pub fn at(pose: Pose2d) -> Self {
        Self {
            origin: pose.position(),
            heading: pose.heading(),
            rotation: Basis2::from_angle(Rad(pose.heading())),
        }
    }

    /// Transforms a world space point into the frame.
    pub fn point_to_local(&self, point: Point2d) -> Point2d {
        let x_axis = heading_vector(self.heading);
        project_local(point, self.origin, x_axis, rot90(x_axis))
    }

    /// Transforms a point in the frame into world space.
    pub fn point_to_world(&self, point: Point2d) -> Point2d {
        self.origin + self.rotation.rotate_vector(point.to_vec())
    }

    /// Transforms a world space pose into the frame.
    pub fn to_local(&self, pose: Pose2d) -> Pose2d {
        Pose2d::new(
            self.point_to_local(pose.position()),
            pose.heading() - self.heading,
        )
    }

    /// Transforms a pose in the frame into world space.
    pub fn to_world(&self, pose: Pose2d) -> Pose2d {
        Pose2d::new(
            self.point_to_world(pose.position()),
            pose.heading() + self.heading,
        )
    }
}
