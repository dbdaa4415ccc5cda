#![no_std]

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use alloc::vec::Vec;

use pq_lattice_derive::SilentDebug;
use zeroize::Zeroizing;

pub mod address;
pub mod dsa;
pub mod hash;
pub mod kem;
pub mod math;
pub mod rand;
pub mod sample;
pub mod utils;

mod error;

// RE-EXPORTS
// ================================================================================================

pub use address::{Address, AddressParseError};
pub use dsa::{SignatureScheme, dilithium2::Dilithium2};
pub use error::LatticeError;
pub use kem::{KemScheme, SharedSecret, kyber1024::Kyber1024};

// ENCODED KEY PAIR
// ================================================================================================

/// A key pair in its wire encoding, as produced by [KemScheme::keygen_with_rng] and
/// [SignatureScheme::keygen_with_rng].
///
/// The secret key bytes are wiped from memory when the key pair is dropped.
#[derive(Clone, PartialEq, Eq, SilentDebug)]
pub struct EncodedKeyPair {
    /// The encoded public key.
    pub public_key: Vec<u8>,
    /// The encoded secret key.
    pub secret_key: Zeroizing<Vec<u8>>,
}

impl EncodedKeyPair {
    /// Wraps a pair of encoded keys.
    pub fn new(public_key: Vec<u8>, secret_key: Vec<u8>) -> Self {
        Self { public_key, secret_key: Zeroizing::new(secret_key) }
    }
}

// TESTS
// ================================================================================================
