//! Data generation utilities for consistent benchmark inputs.

use pq_lattice::rand::test_utils::{rand_value, rand_vector};

/// Fixed seed so that every run benchmarks the same key pairs.
pub const BENCH_SEED: [u8; 32] = [7u8; 32];

/// Generate byte array of specified size with sequential data
pub fn generate_byte_array_sequential(size: usize) -> Vec<u8> {
    (0..size).map(|i| i as u8).collect()
}

/// Generate byte array of specified size with random data
pub fn generate_byte_array_random(size: usize) -> Vec<u8> {
    rand_vector(size)
}

/// Generate a fresh random 32-byte seed
pub fn generate_seed() -> [u8; 32] {
    rand_value()
}
