use crate::{LaError, Result};
use alloc::vec::Vec;
use core::ops::Index;
use orrery::Scalar;
use tracing::debug;

/// Heap-allocated rectangular matrix, column-major.
///
/// Element (row, col) is stored at `data[col * nrows + row]`. Rows always
/// have equal length; shape compatibility is checked when multiplying.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<S> {
    data: Vec<S>,
    nrows: usize,
    ncols: usize,
}

impl<S: Scalar> Matrix<S> {
    /// Create from a function of (row, col).
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> S) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Create from row literals, e.g. `Matrix::from_rows([[1.0, 0.0], [0.0, 1.0]])`.
    pub fn from_rows<const R: usize, const C: usize>(rows: [[S; C]; R]) -> Self {
        Self::from_fn(R, C, |i, j| rows[i][j])
    }

    /// Zero matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self { data: alloc::vec![S::ZERO; nrows * ncols], nrows, ncols }
    }

    /// Identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { S::ONE } else { S::ZERO })
    }

    #[inline]
    pub fn nrows(&self) -> usize { self.nrows }

    #[inline]
    pub fn ncols(&self) -> usize { self.ncols }

    /// (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) { (self.nrows, self.ncols) }

    /// No rows or no columns.
    #[inline]
    pub fn is_empty(&self) -> bool { self.nrows == 0 || self.ncols == 0 }

    /// Element access (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self.data[col * self.nrows + row]
    }

    /// Mutable element access.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut S {
        &mut self.data[col * self.nrows + row]
    }

    /// Set element.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: S) {
        self.data[col * self.nrows + row] = val;
    }

    /// Copy out row `i`.
    pub fn row(&self, i: usize) -> Vec<S> {
        (0..self.ncols).map(|j| self.get(i, j)).collect()
    }

    /// Copy out all rows, outer index = row.
    pub fn to_rows(&self) -> Vec<Vec<S>> {
        (0..self.nrows).map(|i| self.row(i)).collect()
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self.get(j, i))
    }

    /// Matrix-matrix product: C = A * B.
    ///
    /// Fails with [`LaError::DimensionMismatch`] when `A.ncols != B.nrows`
    /// or either operand is empty.
    pub fn mul_mat(&self, rhs: &Matrix<S>) -> Result<Matrix<S>> {
        if self.is_empty() || rhs.is_empty() || self.ncols != rhs.nrows {
            debug!(lhs = ?self.shape(), rhs = ?rhs.shape(), "rejecting matrix product");
            return Err(LaError::DimensionMismatch { lhs: self.shape(), rhs: rhs.shape() });
        }
        let mut c = Matrix::zeros(self.nrows, rhs.ncols);
        for j in 0..rhs.ncols {
            for k in 0..self.ncols {
                let b_kj = rhs.get(k, j);
                for i in 0..self.nrows {
                    *c.get_mut(i, j) += self.get(i, k) * b_kj;
                }
            }
        }
        Ok(c)
    }

    /// Frobenius norm squared.
    pub fn norm_sq(&self) -> S {
        let mut s = S::ZERO;
        for &x in &self.data {
            s += x * x;
        }
        s
    }

    /// Frobenius norm.
    pub fn norm(&self) -> S {
        self.norm_sq().sqrt()
    }

    /// Same shape and every element within `tol`.
    pub fn approx_eq(&self, other: &Matrix<S>, tol: S) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

/// `A * B`, see [`Matrix::mul_mat`].
#[inline]
pub fn mat_mul<S: Scalar>(a: &Matrix<S>, b: &Matrix<S>) -> Result<Matrix<S>> {
    a.mul_mat(b)
}

impl<S: Scalar> Index<(usize, usize)> for Matrix<S> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        &self.data[col * self.nrows + row]
    }
}
