use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{One, Zero};
use zeroize::Zeroize;

// ================================================================================================
// FIELD ELEMENT REPRESENTATIONS
// ================================================================================================
//
// Both schemes work over a prime field Z/qZ, with q = 3329 for key encapsulation and
// q = 8380417 for signatures. Elements are always stored in the canonical range [0, q-1]; every
// operation reduces before returning.
//
// The balanced representation [-(q-1)/2, (q-1)/2] is used wherever "smallness" matters: secret
// coefficients, the signature response z, low bits and all infinity norms. A coefficient of -1 is
// stored as q-1 and reported as -1 by `balanced_value()`.

/// Element of Z/qZ held in canonical form [0, q).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModularFelt<const Q: u32>(u32);

impl<const Q: u32> ModularFelt<Q> {
    /// The modulus of this field.
    pub const MODULUS: u32 = Q;

    /// Creates a field element from `value`, reducing it modulo q.
    pub const fn new(value: u32) -> Self {
        Self(value % Q)
    }

    /// Creates a field element from a signed integer, mapping negatives to q - |value|.
    pub const fn from_signed(value: i64) -> Self {
        Self(value.rem_euclid(Q as i64) as u32)
    }

    /// Returns the canonical value in [0, q).
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the value in balanced representation [-(q-1)/2, (q-1)/2].
    pub const fn balanced_value(&self) -> i32 {
        if self.0 > (Q - 1) / 2 {
            self.0 as i32 - Q as i32
        } else {
            self.0 as i32
        }
    }

    /// Returns the absolute value of the balanced representation.
    pub const fn abs(&self) -> u32 {
        self.balanced_value().unsigned_abs()
    }
}

impl<const Q: u32> TryFrom<u32> for ModularFelt<Q> {
    type Error = u32;

    /// Accepts only canonical values; the rejected value is handed back.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value < Q { Ok(Self(value)) } else { Err(value) }
    }
}

impl<const Q: u32> From<i32> for ModularFelt<Q> {
    fn from(value: i32) -> Self {
        Self::from_signed(value as i64)
    }
}

// ARITHMETIC
// ================================================================================================

impl<const Q: u32> Add for ModularFelt<Q> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let sum = self.0 + rhs.0;
        Self(if sum >= Q { sum - Q } else { sum })
    }
}

impl<const Q: u32> AddAssign for ModularFelt<Q> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const Q: u32> Sub for ModularFelt<Q> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const Q: u32> SubAssign for ModularFelt<Q> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const Q: u32> Neg for ModularFelt<Q> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(if self.0 == 0 { 0 } else { Q - self.0 })
    }
}

impl<const Q: u32> Mul for ModularFelt<Q> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(((self.0 as u64 * rhs.0 as u64) % Q as u64) as u32)
    }
}

impl<const Q: u32> MulAssign for ModularFelt<Q> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const Q: u32> Zero for ModularFelt<Q> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const Q: u32> One for ModularFelt<Q> {
    fn one() -> Self {
        Self(1 % Q)
    }
}

impl<const Q: u32> Zeroize for ModularFelt<Q> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

// TESTS
// ================================================================================================
