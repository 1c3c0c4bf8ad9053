//! Matrix algebra for orrery — `Matrix`, plane rotations, projections.
//!
//! Every geometric operation reduces to [`mat_mul`]: a rotation builds its
//! elementary matrix and left-multiplies the input, a projection is a plain
//! matrix the caller composes. Chained rotations compose by associativity.
//!
//! ```
//! use orrery_la::{mat_mul, project3, rotate_xw4, Matrix};
//!
//! // A single 4D point as a column.
//! let p = Matrix::from_rows([[1.0], [0.0], [0.0], [1.0]]);
//! let r = rotate_xw4(&p, 0.5).unwrap();
//! let q = mat_mul(&project3(1.0), &r).unwrap();
//! assert_eq!(q.shape(), (3, 1));
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod error;
mod matrix;
mod projection;
mod rotation;

pub use error::{LaError, Result};
pub use matrix::{mat_mul, Matrix};
pub use projection::{project3, project4};
pub use rotation::{
    rotate3, rotate4, rotate_x3, rotate_x4, rotate_xw4, rotate_xy4, rotate_xz4, rotate_y3,
    rotate_y4, rotate_yw4, rotate_yz4, rotate_z3, rotate_z4, rotate_zw4, rotation3, rotation4,
    Axis3, Plane4,
};
