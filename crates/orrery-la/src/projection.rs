//! Orthographic projections: scale the leading axes, drop the last one.

use crate::Matrix;
use orrery::Scalar;

fn orthographic<S: Scalar>(rows: usize, cols: usize, scale: S) -> Matrix<S> {
    Matrix::from_fn(rows, cols, |i, j| if i == j { scale } else { S::ZERO })
}

/// 4D → 3D projection (3×4), scaling x, y, z by `w` and dropping w.
pub fn project3<S: Scalar>(w: S) -> Matrix<S> {
    orthographic(3, 4, w)
}

/// 3D → 2D projection (2×3), scaling x, y by `z` and dropping z.
pub fn project4<S: Scalar>(z: S) -> Matrix<S> {
    orthographic(2, 3, z)
}
