//! Polynomials over Z_q\[X\]/(X^N + 1) and their arithmetic.

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use num::Zero;
use zeroize::Zeroize;

use super::field::ModularFelt;

/// Degree of the reduction polynomial X^N + 1 shared by both schemes.
pub const N: usize = 256;

/// Represents a polynomial with N coefficients of type F.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<F> {
    /// Coefficients of the polynomial, ordered from lowest to highest degree.
    pub coefficients: [F; N],
}

impl<F> Polynomial<F> {
    /// Creates a new polynomial from the provided coefficients.
    pub const fn new(coefficients: [F; N]) -> Self {
        Self { coefficients }
    }

    /// Creates a polynomial whose i-th coefficient is `f(i)`.
    pub fn from_fn(f: impl FnMut(usize) -> F) -> Self {
        Self { coefficients: core::array::from_fn(f) }
    }

    /// Applies `f` to every coefficient.
    pub fn map<G>(&self, mut f: impl FnMut(&F) -> G) -> Polynomial<G> {
        Polynomial::from_fn(|i| f(&self.coefficients[i]))
    }
}

impl<const Q: u32> Polynomial<ModularFelt<Q>> {
    // NORMS
    // --------------------------------------------------------------------------------------------

    /// Returns the largest absolute value among the balanced coefficients.
    pub fn norm_infinity(&self) -> u32 {
        self.coefficients.iter().map(ModularFelt::<Q>::abs).max().unwrap_or(0)
    }

    /// Returns true if every balanced coefficient lies strictly inside (-bound, bound).
    pub fn is_bounded_by(&self, bound: u32) -> bool {
        self.coefficients.iter().all(|c| c.abs() < bound)
    }

    // POLYNOMIAL OPERATIONS
    // --------------------------------------------------------------------------------------------

    /// Multiplies two polynomials over Z\[x\] without any reduction.
    ///
    /// Coefficients are below 2^23 for both moduli, so each of the 2N accumulators stays below
    /// 2^54 and fits into a u64.
    fn mul_unreduced(a: &Self, b: &Self) -> [u64; 2 * N] {
        let mut c = [0u64; 2 * N];
        for (i, ai) in a.coefficients.iter().enumerate() {
            let ai = ai.value() as u64;
            if ai == 0 {
                continue;
            }
            for (j, bj) in b.coefficients.iter().enumerate() {
                c[i + j] += ai * bj.value() as u64;
            }
        }
        c
    }

    /// Reduces an unreduced product modulo X^N + 1 and q.
    ///
    /// Since X^N = -1, the coefficient of X^(N+i) is subtracted from the coefficient of X^i.
    fn reduce_negacyclic(c: &[u64; 2 * N]) -> Self {
        let q = Q as u64;
        Self::from_fn(|i| {
            let low = c[i] % q;
            let high = c[N + i] % q;
            ModularFelt::new(((low + q - high) % q) as u32)
        })
    }
}

// ARITHMETIC
// ================================================================================================

impl<F: Add<Output = F> + Copy> Add for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::from_fn(|i| self.coefficients[i] + rhs.coefficients[i])
    }
}

impl<F: Add<Output = F> + Copy> Add for Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<F: AddAssign + Copy> AddAssign<&Polynomial<F>> for Polynomial<F> {
    fn add_assign(&mut self, rhs: &Polynomial<F>) {
        for (c, r) in self.coefficients.iter_mut().zip(rhs.coefficients.iter()) {
            *c += *r;
        }
    }
}

impl<F: Sub<Output = F> + Copy> Sub for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::from_fn(|i| self.coefficients[i] - rhs.coefficients[i])
    }
}

impl<F: Sub<Output = F> + Copy> Sub for Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<F: SubAssign + Copy> SubAssign<&Polynomial<F>> for Polynomial<F> {
    fn sub_assign(&mut self, rhs: &Polynomial<F>) {
        for (c, r) in self.coefficients.iter_mut().zip(rhs.coefficients.iter()) {
            *c -= *r;
        }
    }
}

impl<F: Neg<Output = F> + Copy> Neg for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn neg(self) -> Self::Output {
        self.map(|c| -*c)
    }
}

impl<const Q: u32> Mul for &Polynomial<ModularFelt<Q>> {
    type Output = Polynomial<ModularFelt<Q>>;

    /// Negacyclic schoolbook multiplication.
    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::<ModularFelt<Q>>::reduce_negacyclic(&Polynomial::mul_unreduced(self, rhs))
    }
}

impl<const Q: u32> Mul for Polynomial<ModularFelt<Q>> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<F: Zero + Copy> Zero for Polynomial<F> {
    fn zero() -> Self {
        Self::new([F::zero(); N])
    }

    fn is_zero(&self) -> bool {
        self.coefficients.iter().all(F::is_zero)
    }
}

// ZEROIZE IMPLEMENTATIONS
// ================================================================================================

impl<F: Zeroize> Zeroize for Polynomial<F> {
    fn zeroize(&mut self) {
        self.coefficients.iter_mut().for_each(Zeroize::zeroize);
    }
}

// TESTS
// ================================================================================================
