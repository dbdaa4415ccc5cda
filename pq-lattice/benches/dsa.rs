//! Digital signature benchmarks for Dilithium2.
//!
//! Signing time depends on how many candidates the rejection loop discards, so signing and
//! verification are measured over random messages of several sizes rather than a single one.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pq_lattice::dsa::dilithium2::{KeyPair, Signature};

mod common;
use common::{
    config::{
        DEFAULT_MEASUREMENT_TIME, DEFAULT_SAMPLE_SIZE, MESSAGE_SIZES, SIGNING_MEASUREMENT_TIME,
    },
    data::{BENCH_SEED, generate_byte_array_random, generate_byte_array_sequential, generate_seed},
};

// KEY GENERATION
// ================================================================================================

benchmark_with_setup_data! {
    dilithium2_keygen_from_seed,
    DEFAULT_MEASUREMENT_TIME,
    DEFAULT_SAMPLE_SIZE,
    "dilithium2_keygen_from_seed",
    generate_seed,
    |b: &mut criterion::Bencher, seed: &[u8; 32]| {
        b.iter(|| KeyPair::from_seed(black_box(seed)))
    },
}

benchmark_with_setup_data! {
    dilithium2_keygen_with_rng,
    DEFAULT_MEASUREMENT_TIME,
    DEFAULT_SAMPLE_SIZE,
    "dilithium2_keygen_with_rng",
    rand::rng,
    |b: &mut criterion::Bencher, rng: &rand::rngs::ThreadRng| {
        b.iter(|| {
            let mut rng = rng.clone();
            KeyPair::with_rng(&mut rng)
        })
    },
}

// SIGNING
// ================================================================================================

benchmark_message_sizes! {
    dilithium2_sign,
    SIGNING_MEASUREMENT_TIME,
    "dilithium2_sign",
    MESSAGE_SIZES,
    || KeyPair::from_seed(&BENCH_SEED).expect("benchmark key pair"),
    |b: &mut criterion::Bencher, key_pair: &KeyPair, message: &[u8]| {
        b.iter(|| key_pair.secret_key().sign(black_box(message)))
    },
}

// Signing is deterministic, so a fixed message always takes the same rejection path.
benchmark_with_setup_data! {
    dilithium2_sign_fixed_message,
    SIGNING_MEASUREMENT_TIME,
    DEFAULT_SAMPLE_SIZE,
    "dilithium2_sign_fixed_message",
    || {
        let key_pair = KeyPair::from_seed(&BENCH_SEED).expect("benchmark key pair");
        (key_pair, generate_byte_array_sequential(32))
    },
    |b: &mut criterion::Bencher, (key_pair, message): &(KeyPair, Vec<u8>)| {
        b.iter(|| key_pair.secret_key().sign(black_box(message)))
    },
}

// VERIFICATION
// ================================================================================================

benchmark_message_sizes! {
    dilithium2_verify,
    DEFAULT_MEASUREMENT_TIME,
    "dilithium2_verify",
    MESSAGE_SIZES,
    || KeyPair::from_seed(&BENCH_SEED).expect("benchmark key pair"),
    |b: &mut criterion::Bencher, key_pair: &KeyPair, message: &[u8]| {
        let signature: Signature =
            key_pair.secret_key().sign(message).expect("benchmark signature");
        b.iter(|| key_pair.public_key().verify(black_box(message), black_box(&signature)))
    },
}

criterion_group!(
    dsa_benchmark_group,
    dilithium2_keygen_from_seed,
    dilithium2_keygen_with_rng,
    dilithium2_sign,
    dilithium2_sign_fixed_message,
    dilithium2_verify,
);

criterion_main!(dsa_benchmark_group);
