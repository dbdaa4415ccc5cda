//! Random value generation for tests and benchmarks.
//!
//! The schemes themselves never draw randomness here: key generation and encapsulation take an
//! injected `RngCore + CryptoRng` and everything else is a pure function of seeds.

use crate::math::ModularFelt;

// Test utilities for generating random data (used in tests and benchmarks)
#[cfg(any(test, feature = "std"))]
pub mod test_utils;

// RANDOMNESS
// ================================================================================================

/// Defines how `Self` can be read from a sequence of random bytes.
pub trait Randomizable: Sized {
    /// Size of `Self` in bytes.
    ///
    /// This is used to determine how many bytes should be passed to the
    /// [from_random_bytes()](Self::from_random_bytes) function.
    const VALUE_SIZE: usize;

    /// Returns `Self` if the set of bytes forms a valid value, otherwise returns None.
    fn from_random_bytes(source: &[u8]) -> Option<Self>;
}

impl Randomizable for u64 {
    const VALUE_SIZE: usize = 8;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        source.get(..Self::VALUE_SIZE)?.try_into().ok().map(u64::from_le_bytes)
    }
}

impl Randomizable for u32 {
    const VALUE_SIZE: usize = 4;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        source.get(..Self::VALUE_SIZE)?.try_into().ok().map(u32::from_le_bytes)
    }
}

impl Randomizable for u16 {
    const VALUE_SIZE: usize = 2;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        source.get(..Self::VALUE_SIZE)?.try_into().ok().map(u16::from_le_bytes)
    }
}

impl Randomizable for u8 {
    const VALUE_SIZE: usize = 1;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        source.first().copied()
    }
}

impl<const N: usize> Randomizable for [u8; N] {
    const VALUE_SIZE: usize = N;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        source.get(..N)?.try_into().ok()
    }
}

/// Field elements are drawn by rejection: a 4-byte value masked to the bit length of q - 1 is
/// accepted only if it is below q.
impl<const Q: u32> Randomizable for ModularFelt<Q> {
    const VALUE_SIZE: usize = 4;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        let mask = u32::MAX >> (Q - 1).leading_zeros();
        let value = u32::from_random_bytes(source)? & mask;
        ModularFelt::try_from(value).ok()
    }
}

// TESTS
// ================================================================================================
