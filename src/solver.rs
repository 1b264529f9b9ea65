//! Finds the shortest Dubins path to a goal pose.

use crate::error::{check_radius, PlanError, Result};
use crate::math::{Frame2d, Pose2d};
use crate::path::{DubinsPath, Intermediate, PathFamily};
use arrayvec::ArrayVec;

/// Computes the shortest Dubins path from the canonical origin to a goal.
///
/// # Parameters
/// * `goal_x`, `goal_y` - The goal position in the frame of the start pose
/// * `goal_heading` - The goal heading relative to the start heading, in radians
/// * `radius` - The minimum turning radius, which must be positive
///
/// When several families are equally short, the first one in
/// [PathFamily::ALL] is returned.
pub fn solve(goal_x: f64, goal_y: f64, goal_heading: f64, radius: f64) -> Result<DubinsPath> {
    let best = all_paths(goal_x, goal_y, goal_heading, radius)?
        .into_iter()
        .reduce(|best, path| {
            if path.length() < best.length() {
                path
            } else {
                best
            }
        });

    match best {
        Some(path) => {
            log::trace!(
                "Solved {} path of length {:.3} to ({:.3}, {:.3})",
                path.family(),
                path.length(),
                goal_x,
                goal_y
            );
            Ok(path)
        }
        None => {
            log::warn!(
                "No feasible path to ({}, {}, {}) with radius {}",
                goal_x,
                goal_y,
                goal_heading,
                radius
            );
            Err(PlanError::NoFeasiblePath)
        }
    }
}

/// Computes the path of a single family, if that family is feasible.
pub fn solve_family(
    family: PathFamily,
    goal_x: f64,
    goal_y: f64,
    goal_heading: f64,
    radius: f64,
) -> Result<Option<DubinsPath>> {
    check_radius(radius)?;
    let im = Intermediate::new(goal_x, goal_y, goal_heading, radius);
    Ok(family
        .evaluate(&im)
        .map(|params| DubinsPath::new(family, params, radius)))
}

/// Computes the path of every feasible family, in the order of [PathFamily::ALL].
///
/// The result is empty when no family is feasible.
pub fn all_paths(
    goal_x: f64,
    goal_y: f64,
    goal_heading: f64,
    radius: f64,
) -> Result<ArrayVec<DubinsPath, 6>> {
    check_radius(radius)?;
    let im = Intermediate::new(goal_x, goal_y, goal_heading, radius);
    let paths = PathFamily::ALL
        .into_iter()
        .filter_map(|family| match family.evaluate(&im) {
            Some(params) => Some(DubinsPath::new(family, params, radius)),
            None => {
                log::trace!("{} is infeasible", family);
                None
            }
        })
        .collect();
    Ok(paths)
}

/// Computes the shortest Dubins path between two world space poses.
///
/// The returned path is expressed in the frame of `start`.
pub fn solve_poses(start: Pose2d, goal: Pose2d, radius: f64) -> Result<DubinsPath> {
    let goal = Frame2d::at(start).to_local(goal);
    let pos = goal.position();
    solve(pos.x, pos.y, goal.heading(), radius)
}
