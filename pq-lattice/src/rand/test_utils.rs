//! Test and benchmark utilities for generating random data.
//!
//! Values which are rejected by [Randomizable::from_random_bytes] are simply redrawn, so every
//! function here always returns.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{
    math::{ModularFelt, Polynomial},
    rand::Randomizable,
};

/// Draws values of type T from `rng` until one is accepted.
fn draw<T: Randomizable, R: Rng>(rng: &mut R) -> T {
    let mut bytes = vec![0u8; T::VALUE_SIZE];
    loop {
        rng.fill(&mut bytes[..]);
        if let Some(value) = T::from_random_bytes(&bytes) {
            return value;
        }
    }
}

/// Generates a random value of type T using the thread-local random number generator.
///
/// # Examples
/// ```
/// # use pq_lattice::rand::test_utils::rand_value;
/// let x: u64 = rand_value();
/// let seed: [u8; 32] = rand_value();
/// ```
#[cfg(feature = "std")]
pub fn rand_value<T: Randomizable>() -> T {
    draw(&mut rand::rng())
}

/// Generates a random vector of type T with the specified length.
///
/// # Examples
/// ```
/// # use pq_lattice::rand::test_utils::rand_vector;
/// let message: Vec<u8> = rand_vector(100);
/// ```
#[cfg(feature = "std")]
pub fn rand_vector<T: Randomizable>(length: usize) -> Vec<T> {
    let mut rng = rand::rng();
    (0..length).map(|_| draw(&mut rng)).collect()
}

/// Generates a deterministic array using a PRNG seeded with the provided seed.
///
/// This function uses ChaCha20 PRNG for deterministic random generation, which is
/// useful for reproducible tests and benchmarks.
///
/// # Examples
/// ```
/// # use pq_lattice::rand::test_utils::prng_array;
/// let seed = [0u8; 32];
/// let arr: [u64; 4] = prng_array(seed);
/// ```
pub fn prng_array<T: Randomizable, const N: usize>(seed: [u8; 32]) -> [T; N] {
    let mut rng = ChaCha20Rng::from_seed(seed);
    core::array::from_fn(|_| draw(&mut rng))
}

/// Generates a deterministic vector using a PRNG seeded with the provided seed.
///
/// # Examples
/// ```
/// # use pq_lattice::rand::test_utils::prng_vector;
/// let seed = [0u8; 32];
/// let vec: Vec<u8> = prng_vector(seed, 100);
/// ```
pub fn prng_vector<T: Randomizable>(seed: [u8; 32], length: usize) -> Vec<T> {
    let mut rng = ChaCha20Rng::from_seed(seed);
    (0..length).map(|_| draw(&mut rng)).collect()
}

/// Generates a deterministic polynomial with coefficients uniform in [0, q).
///
/// # Examples
/// ```
/// # use pq_lattice::rand::test_utils::prng_polynomial;
/// let p = prng_polynomial::<3329>([7u8; 32]);
/// assert!(p.coefficients.iter().all(|c| c.value() < 3329));
/// ```
pub fn prng_polynomial<const Q: u32>(seed: [u8; 32]) -> Polynomial<ModularFelt<Q>> {
    let coefficients = prng_array(seed);
    Polynomial::new(coefficients)
}
