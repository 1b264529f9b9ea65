//! Shortest paths for vehicles with a minimum turning radius.
//!
//! A Dubins path joins two oriented poses on the ground plane with three
//! segments, each either a circular arc at the minimum turning radius or a
//! straight line. [solve] picks the shortest of the six path families, and
//! [sample] turns the result into evenly spaced world space waypoints.

pub use cgmath;
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use error::{PlanError, Result};
pub use math::{Frame2d, Point2d, Pose2d};
pub use path::{DubinsPath, PathFamily, PathParameters, SegmentKind};
pub use planner::{Planner, PlannerAttributes};
pub use sampler::{
    sample, sample_at_height, sample_poses, segment_sample_count, waypoints, Waypoints,
};
pub use solver::{all_paths, solve, solve_family, solve_poses};
pub use util::Interval;

mod debug;
mod error;
pub mod math;
mod path;
mod planner;
mod sampler;
mod solver;
mod util;
