use crate::error::{check_radius, check_step_size, Result};
use crate::math::{Point2d, Point3d, Pose2d};
use crate::path::DubinsPath;
use crate::sampler::{self, Waypoints};
use crate::solver::solve_poses;

/// The attributes of a path planner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerAttributes {
    /// The minimum turning radius of the vehicle in m.
    pub radius: f64,
    /// The approximate distance between waypoints in m.
    pub step_size: f64,
}

impl PlannerAttributes {
    /// Derives the turning radius from the vehicle's steering geometry.
    ///
    /// # Parameters
    /// * `wheel_base` - The distance between the front and rear axles in m
    /// * `max_steer_angle` - The maximum steering angle of the front wheels in radians
    /// * `step_size` - The approximate distance between waypoints in m
    pub fn from_steering(wheel_base: f64, max_steer_angle: f64, step_size: f64) -> Self {
        Self {
            radius: wheel_base / max_steer_angle.tan(),
            step_size,
        }
    }
}

/// Plans drivable paths for a vehicle with fixed turning attributes.
#[derive(Clone, Copy, Debug)]
pub struct Planner {
    radius: f64,
    step_size: f64,
}

impl Planner {
    /// Creates a new planner, checking that its attributes are valid.
    pub fn new(attributes: &PlannerAttributes) -> Result<Self> {
        check_radius(attributes.radius)?;
        check_step_size(attributes.step_size)?;
        Ok(Self {
            radius: attributes.radius,
            step_size: attributes.step_size,
        })
    }

    /// The minimum turning radius in m.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The approximate distance between waypoints in m.
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Finds the shortest path from `start` to `goal`,
    /// expressed in the frame of `start`.
    pub fn solve(&self, start: Pose2d, goal: Pose2d) -> Result<DubinsPath> {
        solve_poses(start, goal, self.radius)
    }

    /// Plans a path from `start` to `goal` and returns its waypoints.
    pub fn plan(&self, start: Pose2d, goal: Pose2d) -> Result<Vec<Point2d>> {
        sampler::sample(start, goal, self.radius, self.step_size)
    }

    /// Plans a path from `start` to `goal` and returns its waypoints with headings.
    pub fn plan_poses(&self, start: Pose2d, goal: Pose2d) -> Result<Vec<Pose2d>> {
        sampler::sample_poses(start, goal, self.radius, self.step_size)
    }

    /// Plans a path from `start` to `goal` on a ground plane at the given height.
    pub fn plan_at_height(&self, start: Pose2d, goal: Pose2d, height: f64) -> Result<Vec<Point3d>> {
        sampler::sample_at_height(start, goal, self.radius, self.step_size, height)
    }

    /// Plans a path from `start` to `goal` and lazily iterates over its waypoints.
    pub fn waypoints(&self, start: Pose2d, goal: Pose2d) -> Result<Waypoints> {
        sampler::waypoints(start, goal, self.radius, self.step_size)
    }
}
