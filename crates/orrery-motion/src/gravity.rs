//! Two equal point masses under mutual inverse-square attraction.

use crate::{MotionError, Result};
use orrery::{Point2, Scalar, Vec2};
use tracing::{debug, trace};

/// Positions and velocities of the two bodies.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoBody<S> {
    pub p1: Point2<S>,
    pub p2: Point2<S>,
    pub v1: Vec2<S>,
    pub v2: Vec2<S>,
}

impl<S: Scalar> TwoBody<S> {
    pub fn new(p1: Point2<S>, p2: Point2<S>, v1: Vec2<S>, v2: Vec2<S>) -> Self {
        Self { p1, p2, v1, v2 }
    }

    pub fn at_rest(p1: Point2<S>, p2: Point2<S>) -> Self {
        Self::new(p1, p2, Vec2::zero(), Vec2::zero())
    }

    /// Advance one unit of time with the default schedule.
    pub fn step(self, g: S) -> Result<Self> {
        EulerSchedule::default().integrate(self, g)
    }

    /// Center of mass (equal masses).
    #[inline]
    pub fn midpoint(&self) -> Point2<S> {
        self.p1.midpoint(self.p2)
    }

    /// Total momentum per unit mass.
    #[inline]
    pub fn momentum(&self) -> Vec2<S> {
        self.v1 + self.v2
    }

    #[inline]
    pub fn separation(&self) -> S {
        self.p1.distance(self.p2)
    }
}

/// Sub-step schedule for [`euler_step`].
///
/// Sub-step `i` (1-based) advances by `dt = 1/i`, so the default 8 steps
/// cover `1 + 1/2 + … + 1/8` time units with shrinking increments.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerSchedule<S> {
    pub substeps: usize,
    /// Separations at or below this have no defined pull.
    pub min_distance: S,
}

impl<S: Scalar> Default for EulerSchedule<S> {
    fn default() -> Self {
        Self { substeps: 8, min_distance: S::EPSILON }
    }
}

impl<S: Scalar> EulerSchedule<S> {
    pub fn new(substeps: usize) -> Self {
        Self { substeps, ..Self::default() }
    }

    /// Semi-implicit Euler: per sub-step, both accelerations come from the
    /// start-of-sub-step positions, velocities update first, then positions
    /// move with the new velocities.
    pub fn integrate(&self, mut state: TwoBody<S>, g: S) -> Result<TwoBody<S>> {
        for i in 1..=self.substeps {
            let dt = S::from_usize(i).recip();
            let a1 = pull(state.p2, state.p1, g, self.min_distance)?;
            let a2 = pull(state.p1, state.p2, g, self.min_distance)?;

            state.v1 += a1 * dt;
            state.v2 += a2 * dt;
            state.p1 += state.v1 * dt;
            state.p2 += state.v2 * dt;
            trace!(substep = i, dt = dt.to_f64(), "two-body sub-step");
        }
        Ok(state)
    }
}

fn pull<S: Scalar>(p1: Point2<S>, p2: Point2<S>, g: S, min_distance: S) -> Result<Vec2<S>> {
    let direction = p1 - p2;
    let length = direction.norm();
    if length <= min_distance {
        debug!(distance = length.to_f64(), "no acceleration between coincident bodies");
        return Err(MotionError::UndefinedAcceleration { distance: length.to_f64() });
    }
    Ok(direction / length * (g / (length * length)))
}

/// Inverse-square pull of the body at `p1` on a body at `p2`.
///
/// Points from `p2` toward `p1` with magnitude `g / |p1 − p2|²`; `g` already
/// folds in the attracting mass. Coincident points (distance ≤ ε) fail with
/// [`MotionError::UndefinedAcceleration`].
pub fn acceleration<S: Scalar>(p1: Point2<S>, p2: Point2<S>, g: S) -> Result<Vec2<S>> {
    pull(p1, p2, g, S::EPSILON)
}

/// Advance both bodies by one unit of simulated time (8 sub-steps, `dt = 1/i`).
pub fn euler_step<S: Scalar>(
    p1: Point2<S>,
    p2: Point2<S>,
    v1: Vec2<S>,
    v2: Vec2<S>,
    g: S,
) -> Result<TwoBody<S>> {
    TwoBody::new(p1, p2, v1, v2).step(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceleration_points_at_attractor() {
        let a = acceleration(Point2::new(3.0, 0.0), Point2::new(1.0, 0.0), 8.0).unwrap();
        // distance 2: magnitude 8 / 4
        assert!((a.x - 2.0).abs() < 1e-12);
        assert!(a.y.abs() < 1e-12);
    }

    #[test]
    fn acceleration_inverse_square() {
        let near = acceleration(Point2::new(0.0, 1.0), Point2::origin(), 1.0).unwrap();
        let far = acceleration(Point2::new(0.0, 2.0), Point2::origin(), 1.0).unwrap();
        assert!((near.norm() / far.norm() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_bodies_fail() {
        let p = Point2::new(0.25, -4.0);
        assert!(matches!(
            acceleration(p, p, 1.0),
            Err(MotionError::UndefinedAcceleration { distance }) if distance == 0.0
        ));
    }

    #[test]
    fn schedule_defaults() {
        let s = EulerSchedule::<f64>::default();
        assert_eq!(s.substeps, 8);
        assert_eq!(s.min_distance, f64::EPSILON);
        assert_eq!(EulerSchedule::<f64>::new(3).substeps, 3);
    }

    #[test]
    fn zero_substeps_is_noop() {
        let state = TwoBody::at_rest(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0));
        assert_eq!(EulerSchedule::new(0).integrate(state, 1.0).unwrap(), state);
    }

    #[test]
    fn single_substep_is_semi_implicit() {
        // dt = 1: v = a, then p += v
        let state = TwoBody::at_rest(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0));
        let next = EulerSchedule::new(1).integrate(state, 4.0).unwrap();
        assert!((next.v1.x - 1.0).abs() < 1e-12);
        assert!((next.v2.x + 1.0).abs() < 1e-12);
        assert!(next.p1.x.abs() < 1e-12);
        assert!(next.p2.x.abs() < 1e-12);
    }
}
