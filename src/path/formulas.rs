//! Closed-form solutions for each of the six Dubins path families.
//!
//! All formulas work in the canonical frame with a unit turning radius. Each
//! returns `None` when the family has no solution for the given inputs,
//! including when the inputs have overflowed to infinity or NaN.

use super::PathParameters;
use crate::math::wrap_angle;
use std::f64::consts::TAU;

/// Values shared by every path family formula.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Intermediate {
    alpha: f64,
    beta: f64,
    /// The distance between start and goal, divided by the turning radius.
    d: f64,
    sa: f64,
    sb: f64,
    ca: f64,
    cb: f64,
    c_ab: f64,
    d_sq: f64,
}

impl Intermediate {
    /// Computes the shared values for a goal given in the canonical frame.
    ///
    /// # Parameters
    /// * `goal_x`, `goal_y` - The goal position relative to the start pose
    /// * `goal_heading` - The goal heading relative to the start heading
    /// * `radius` - The minimum turning radius; must be positive
    pub fn new(goal_x: f64, goal_y: f64, goal_heading: f64, radius: f64) -> Self {
        let d = goal_x.hypot(goal_y) / radius;
        // A coincident goal has no bearing; atan2(0, -0) would give π
        let theta = if d > 0.0 {
            wrap_angle(goal_y.atan2(goal_x))
        } else {
            0.0
        };
        let alpha = wrap_angle(-theta);
        let beta = wrap_angle(goal_heading - theta);

        let (sa, ca) = alpha.sin_cos();
        let (sb, cb) = beta.sin_cos();

        Self {
            alpha,
            beta,
            d,
            sa,
            sb,
            ca,
            cb,
            c_ab: (alpha - beta).cos(),
            d_sq: d * d,
        }
    }

    pub fn lsl(&self) -> Option<PathParameters> {
        let p_sq = 2.0 + self.d_sq - 2.0 * self.c_ab + 2.0 * self.d * (self.sa - self.sb);
        if !(p_sq >= 0.0) {
            return None;
        }
        let tmp = (self.cb - self.ca).atan2(self.d + self.sa - self.sb);
        Some(PathParameters::new(
            wrap_angle(tmp - self.alpha),
            p_sq.sqrt(),
            wrap_angle(self.beta - tmp),
        ))
    }

    pub fn rsr(&self) -> Option<PathParameters> {
        let p_sq = 2.0 + self.d_sq - 2.0 * self.c_ab + 2.0 * self.d * (self.sb - self.sa);
        if !(p_sq >= 0.0) {
            return None;
        }
        let tmp = (self.ca - self.cb).atan2(self.d - self.sa + self.sb);
        Some(PathParameters::new(
            wrap_angle(self.alpha - tmp),
            p_sq.sqrt(),
            wrap_angle(tmp - self.beta),
        ))
    }

    pub fn lsr(&self) -> Option<PathParameters> {
        let p_sq = -2.0 + self.d_sq + 2.0 * self.c_ab + 2.0 * self.d * (self.sa + self.sb);
        if !(p_sq >= 0.0) {
            return None;
        }
        let p = p_sq.sqrt();
        let tmp = (-self.ca - self.cb).atan2(self.d + self.sa + self.sb) - (-2.0f64).atan2(p);
        Some(PathParameters::new(
            wrap_angle(tmp - self.alpha),
            p,
            wrap_angle(tmp - self.beta),
        ))
    }

    pub fn rsl(&self) -> Option<PathParameters> {
        let p_sq = -2.0 + self.d_sq + 2.0 * self.c_ab - 2.0 * self.d * (self.sa + self.sb);
        if !(p_sq >= 0.0) {
            return None;
        }
        let p = p_sq.sqrt();
        let tmp = (self.ca + self.cb).atan2(self.d - self.sa - self.sb) - 2.0f64.atan2(p);
        Some(PathParameters::new(
            wrap_angle(self.alpha - tmp),
            p,
            wrap_angle(self.beta - tmp),
        ))
    }

    pub fn rlr(&self) -> Option<PathParameters> {
        let cos_p = (6.0 - self.d_sq + 2.0 * self.c_ab + 2.0 * self.d * (self.sa - self.sb)) / 8.0;
        if !(cos_p.abs() <= 1.0) {
            return None;
        }
        let phi = (self.ca - self.cb).atan2(self.d - self.sa + self.sb);
        let p = wrap_angle(TAU - cos_p.acos());
        let t = wrap_angle(self.alpha - phi + wrap_angle(0.5 * p));
        let q = wrap_angle(self.alpha - self.beta - t + p);
        Some(PathParameters::new(t, p, q))
    }

    pub fn lrl(&self) -> Option<PathParameters> {
        let cos_p = (6.0 - self.d_sq + 2.0 * self.c_ab + 2.0 * self.d * (self.sb - self.sa)) / 8.0;
        if !(cos_p.abs() <= 1.0) {
            return None;
        }
        let phi = (self.ca - self.cb).atan2(self.d + self.sa - self.sb);
        let p = wrap_angle(TAU - cos_p.acos());
        let t = wrap_angle(-self.alpha - phi + 0.5 * p);
        let q = wrap_angle(self.beta - self.alpha - t + p);
        Some(PathParameters::new(t, p, q))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn straight_ahead() {
        let im = Intermediate::new(20.0, 0.0, 0.0, 5.0);
        for params in [im.lsl(), im.rsr()] {
            let params = params.expect("straight path should be feasible");
            assert_approx_eq!(params.t, 0.0);
            assert_approx_eq!(params.p, 4.0);
            assert_approx_eq!(params.q, 0.0);
        }
    }

    #[test]
    fn u_turn_then_straight() {
        // Half a turn to the left, then back past the start
        let im = Intermediate::new(-4.0, 2.0, PI, 1.0);
        let lsl = im.lsl().expect("LSL should be feasible");
        assert_approx_eq!(lsl.t, PI);
        assert_approx_eq!(lsl.p, 4.0);
        assert_approx_eq!(lsl.q, 0.0);
    }

    #[test]
    fn ccc_needs_close_goal() {
        // Far away goals rule out the three-arc families
        let im = Intermediate::new(100.0, 0.0, 0.0, 1.0);
        assert!(im.rlr().is_none());
        assert!(im.lrl().is_none());
        assert!(im.lsl().is_some());
    }

    #[test]
    fn nan_inputs_are_infeasible() {
        let im = Intermediate::new(f64::NAN, 0.0, 0.0, 1.0);
        for params in [im.lsl(), im.rsr(), im.lsr(), im.rsl(), im.rlr(), im.lrl()] {
            assert!(params.is_none());
        }
    }

    #[test]
    fn overflowed_distance_is_rejected() {
        // The normalized distance overflows to infinity
        let im = Intermediate::new(1e200, 0.0, 1.0, 1e-200);
        for params in [im.lsl(), im.rsl(), im.rlr(), im.lrl()] {
            assert!(params.is_none());
        }
        for params in [im.rsr(), im.lsr()] {
            assert!(params.map_or(true, |params| !params.is_finite()));
        }
    }

    #[test]
    fn csc_can_be_infeasible() {
        // Both outer circles overlap, so the crossing tangents don't exist
        let im = Intermediate::new(0.5, 0.0, PI, 1.0);
        assert!(im.lsr().is_none());
        assert!(im.rsl().is_none());
    }
}
