//! Motion helpers for orrery.
//!
//! - [`lerp_smooth_1d`] / [`SmoothLerp`]: half-sine ease driven by a phase
//!   the caller owns and feeds back on every call
//! - [`fractional_line`]: the p-th of f equal pieces of a segment
//! - [`euler_step`] / [`EulerSchedule`]: two equal bodies under mutual
//!   inverse-square attraction
//!
//! Nothing here keeps state between calls.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod ease;
mod error;
mod gravity;
mod segment;

pub use ease::{lerp_smooth_1d, SmoothLerp};
pub use error::{MotionError, Result};
pub use gravity::{acceleration, euler_step, EulerSchedule, TwoBody};
pub use segment::{fractional_line, subdivide};

pub use orrery::{Point2, Scalar, Vec2};
