//! Elementary rotation matrices in 3D and 4D.
//!
//! Each rotation turns exactly one coordinate pair `(i, j)` and fixes every
//! other axis. The matrix has `cos` on both diagonal entries of the pair,
//! `-sin` at `(i, j)` and `sin` at `(j, i)`, so a positive angle turns axis
//! `i` toward axis `j`.
//!
//! 4D rotations are named by their invariant plane: `Plane4::Zw` leaves z
//! and w alone and turns (x, y). The single-letter 4D planes reuse the 3D
//! axis convention with w fixed.

use crate::{mat_mul, Matrix, Result};
use orrery::Scalar;

/// Rotation axis in 3D.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis3 {
    X,
    Y,
    Z,
}

impl Axis3 {
    pub const ALL: [Axis3; 3] = [Axis3::X, Axis3::Y, Axis3::Z];

    /// Coordinate pair turned by a positive rotation about this axis.
    #[inline]
    pub fn rotated_pair(self) -> (usize, usize) {
        match self {
            Axis3::X => (1, 2),
            Axis3::Y => (2, 0),
            Axis3::Z => (0, 1),
        }
    }
}

/// Rotation plane in 4D (axes indexed x=0, y=1, z=2, w=3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Plane4 {
    /// 3D X rotation, w fixed. Turns (y, z).
    X,
    /// 3D Y rotation, w fixed. Turns (z, x).
    Y,
    /// 3D Z rotation, w fixed. Turns (x, y).
    Z,
    /// Turns (x, y).
    Zw,
    /// Turns (x, z).
    Yw,
    /// Turns (x, w).
    Yz,
    /// Turns (y, z).
    Xw,
    /// Turns (y, w).
    Xz,
    /// Turns (z, w).
    Xy,
}

impl Plane4 {
    pub const ALL: [Plane4; 9] = [
        Plane4::X,
        Plane4::Y,
        Plane4::Z,
        Plane4::Zw,
        Plane4::Yw,
        Plane4::Yz,
        Plane4::Xw,
        Plane4::Xz,
        Plane4::Xy,
    ];

    /// Coordinate pair turned by a positive rotation in this plane.
    #[inline]
    pub fn rotated_pair(self) -> (usize, usize) {
        match self {
            Plane4::X => Axis3::X.rotated_pair(),
            Plane4::Y => Axis3::Y.rotated_pair(),
            Plane4::Z => Axis3::Z.rotated_pair(),
            Plane4::Zw => (0, 1),
            Plane4::Yw => (0, 2),
            Plane4::Yz => (0, 3),
            Plane4::Xw => (1, 2),
            Plane4::Xz => (1, 3),
            Plane4::Xy => (2, 3),
        }
    }
}

/// n×n identity with the `(i, j)` pair replaced by a Givens block.
fn plane_rotation<S: Scalar>(n: usize, (i, j): (usize, usize), angle: S) -> Matrix<S> {
    debug_assert!(i < n && j < n && i != j);
    let (s, c) = angle.sin_cos();
    let mut m = Matrix::identity(n);
    m.set(i, i, c);
    m.set(i, j, -s);
    m.set(j, i, s);
    m.set(j, j, c);
    m
}

/// 3×3 rotation matrix about `axis`.
pub fn rotation3<S: Scalar>(axis: Axis3, angle: S) -> Matrix<S> {
    plane_rotation(3, axis.rotated_pair(), angle)
}

/// 4×4 rotation matrix in `plane`.
pub fn rotation4<S: Scalar>(plane: Plane4, angle: S) -> Matrix<S> {
    plane_rotation(4, plane.rotated_pair(), angle)
}

/// Rotate the columns of `a` (3 rows) about `axis`.
pub fn rotate3<S: Scalar>(a: &Matrix<S>, axis: Axis3, angle: S) -> Result<Matrix<S>> {
    mat_mul(&rotation3(axis, angle), a)
}

/// Rotate the columns of `a` (4 rows) in `plane`.
pub fn rotate4<S: Scalar>(a: &Matrix<S>, plane: Plane4, angle: S) -> Result<Matrix<S>> {
    mat_mul(&rotation4(plane, angle), a)
}

macro_rules! named_rotations {
    ($apply:ident, $kind:ident: $($name:ident => $variant:ident),+ $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($apply), "` with `", stringify!($kind), "::", stringify!($variant), "`.")]
            #[inline]
            pub fn $name<S: Scalar>(a: &Matrix<S>, angle: S) -> Result<Matrix<S>> {
                $apply(a, $kind::$variant, angle)
            }
        )+
    };
}

named_rotations!(rotate3, Axis3:
    rotate_x3 => X,
    rotate_y3 => Y,
    rotate_z3 => Z,
);

named_rotations!(rotate4, Plane4:
    rotate_x4 => X,
    rotate_y4 => Y,
    rotate_z4 => Z,
    rotate_zw4 => Zw,
    rotate_yw4 => Yw,
    rotate_yz4 => Yz,
    rotate_xw4 => Xw,
    rotate_xz4 => Xz,
    rotate_xy4 => Xy,
);
