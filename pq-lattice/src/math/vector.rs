//! Vectors and matrices of polynomials with module arithmetic over Z_q\[X\]/(X^N + 1).

use core::ops::{Add, Sub};

use num::Zero;
#[cfg(feature = "concurrent")]
use rayon::prelude::*;
use zeroize::Zeroize;

use super::{field::ModularFelt, polynomial::Polynomial};

// POLYNOMIAL VECTOR
// ================================================================================================

/// A vector of `D` polynomials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyVec<F, const D: usize>(pub [Polynomial<F>; D]);

impl<F, const D: usize> PolyVec<F, D> {
    /// Creates a vector whose i-th component is `f(i)`.
    pub fn from_fn(f: impl FnMut(usize) -> Polynomial<F>) -> Self {
        Self(core::array::from_fn(f))
    }

    /// Creates a vector from a fallible component generator, stopping at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(usize) -> Result<Polynomial<F>, E>) -> Result<Self, E>
    where
        F: Zero + Copy,
    {
        let mut error = None;
        let v = Self::from_fn(|i| {
            if error.is_some() {
                return Polynomial::zero();
            }
            f(i).unwrap_or_else(|err| {
                error = Some(err);
                Polynomial::zero()
            })
        });
        match error {
            Some(err) => Err(err),
            None => Ok(v),
        }
    }

    /// Returns an iterator over the components of this vector.
    pub fn iter(&self) -> core::slice::Iter<'_, Polynomial<F>> {
        self.0.iter()
    }
}

impl<const Q: u32, const D: usize> PolyVec<ModularFelt<Q>, D> {
    /// Returns the inner product of two vectors, i.e. the sum of the component-wise products.
    pub fn dot(&self, other: &Self) -> Polynomial<ModularFelt<Q>> {
        let mut acc = Polynomial::<ModularFelt<Q>>::zero();
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            acc += &(a * b);
        }
        acc
    }

    /// Multiplies every component of this vector by the polynomial `c`.
    pub fn scale(&self, c: &Polynomial<ModularFelt<Q>>) -> Self {
        let mut result = Self::zero();
        crate::iter_mut!(result.0).enumerate().for_each(|(i, out)| {
            *out = c * &self.0[i];
        });
        result
    }

    /// Returns the largest infinity norm among the components.
    pub fn norm_infinity(&self) -> u32 {
        crate::iter!(self.0).map(|p| p.norm_infinity()).max().unwrap_or(0)
    }

    /// Returns true if every coefficient of every component lies strictly inside (-bound, bound).
    pub fn is_bounded_by(&self, bound: u32) -> bool {
        self.0.iter().all(|p| p.is_bounded_by(bound))
    }
}

impl<F: Add<Output = F> + Copy, const D: usize> Add for &PolyVec<F, D> {
    type Output = PolyVec<F, D>;

    fn add(self, rhs: Self) -> Self::Output {
        PolyVec::from_fn(|i| &self.0[i] + &rhs.0[i])
    }
}

impl<F: Add<Output = F> + Copy, const D: usize> Add for PolyVec<F, D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<F: Sub<Output = F> + Copy, const D: usize> Sub for &PolyVec<F, D> {
    type Output = PolyVec<F, D>;

    fn sub(self, rhs: Self) -> Self::Output {
        PolyVec::from_fn(|i| &self.0[i] - &rhs.0[i])
    }
}

impl<F: Zero + Copy, const D: usize> Zero for PolyVec<F, D> {
    fn zero() -> Self {
        Self::from_fn(|_| Polynomial::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(Polynomial::is_zero)
    }
}

impl<F: Zeroize, const D: usize> Zeroize for PolyVec<F, D> {
    fn zeroize(&mut self) {
        self.0.iter_mut().for_each(Zeroize::zeroize);
    }
}

// POLYNOMIAL MATRIX
// ================================================================================================

/// An `R` x `C` matrix of polynomials, stored row by row.
///
/// Matrices are never serialized; they are always re-expanded from a seed with
/// [crate::sample::uniform_matrix].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyMatrix<F, const R: usize, const C: usize> {
    rows: [PolyVec<F, C>; R],
}

impl<F, const R: usize, const C: usize> PolyMatrix<F, R, C> {
    /// Creates a matrix whose entry at row `i`, column `j` is `f(i, j)`.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Polynomial<F>) -> Self {
        Self {
            rows: core::array::from_fn(|i| PolyVec::from_fn(|j| f(i, j))),
        }
    }

    /// Creates a matrix from a fallible entry generator, stopping at the first error.
    pub fn try_from_fn<E>(
        mut f: impl FnMut(usize, usize) -> Result<Polynomial<F>, E>,
    ) -> Result<Self, E>
    where
        F: Zero + Copy,
    {
        let mut error = None;
        let matrix = Self::from_fn(|i, j| {
            if error.is_some() {
                return Polynomial::zero();
            }
            f(i, j).unwrap_or_else(|err| {
                error = Some(err);
                Polynomial::zero()
            })
        });
        match error {
            Some(err) => Err(err),
            None => Ok(matrix),
        }
    }

    /// Returns the entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> &Polynomial<F> {
        &self.rows[i].0[j]
    }
}

impl<const Q: u32, const R: usize, const C: usize> PolyMatrix<ModularFelt<Q>, R, C> {
    /// Computes the matrix-vector product A·v.
    pub fn mul_vec(&self, v: &PolyVec<ModularFelt<Q>, C>) -> PolyVec<ModularFelt<Q>, R> {
        let mut result = PolyVec::<ModularFelt<Q>, R>::zero();
        crate::iter_mut!(result.0).enumerate().for_each(|(i, out)| {
            *out = self.rows[i].dot(v);
        });
        result
    }

    /// Computes the product of the transposed matrix with a vector, i.e. Aᵀ·v.
    pub fn transpose_mul_vec(&self, v: &PolyVec<ModularFelt<Q>, R>) -> PolyVec<ModularFelt<Q>, C> {
        let mut result = PolyVec::<ModularFelt<Q>, C>::zero();
        crate::iter_mut!(result.0).enumerate().for_each(|(j, out)| {
            let mut acc = Polynomial::<ModularFelt<Q>>::zero();
            for (i, vi) in v.iter().enumerate() {
                acc += &(self.get(i, j) * vi);
            }
            *out = acc;
        });
        result
    }
}

// TESTS
// ================================================================================================
