//! Key encapsulation mechanisms.

use alloc::vec::Vec;

use pq_lattice_derive::{SilentDebug, SilentDisplay};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{EncodedKeyPair, LatticeError};

pub mod kyber1024;

// CONSTANTS
// ================================================================================================

/// Length of a shared secret in bytes.
pub const SHARED_SECRET_LEN: usize = 32;

// SHARED SECRET
// ================================================================================================

/// A 32-byte shared secret established by encapsulation and recovered by decapsulation.
///
/// The secret is wiped from memory when dropped and never printed.
#[derive(Clone, SilentDebug, SilentDisplay)]
pub struct SharedSecret([u8; SHARED_SECRET_LEN]);

impl SharedSecret {
    pub(crate) fn new(bytes: [u8; SHARED_SECRET_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the bytes of this shared secret.
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_LEN] {
        &self.0
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for SharedSecret {}

impl Zeroize for SharedSecret {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SharedSecret {}

// KEM SCHEME
// ================================================================================================

/// Byte-level interface of a key encapsulation mechanism.
///
/// This is the surface used by collaborators which store and transmit keys and ciphertexts as
/// opaque byte strings. All inputs are length-checked and decoded before use; malformed bytes are
/// reported as [LatticeError::InvalidLength] or [LatticeError::MalformedEncoding].
pub trait KemScheme {
    /// Length of an encoded public key in bytes.
    const PUBLIC_KEY_LEN: usize;
    /// Length of an encoded secret key in bytes.
    const SECRET_KEY_LEN: usize;
    /// Length of an encoded ciphertext in bytes.
    const CIPHERTEXT_LEN: usize;

    /// Generates a key pair from OS-provided randomness.
    #[cfg(feature = "std")]
    fn keygen() -> Result<EncodedKeyPair, LatticeError> {
        Self::keygen_with_rng(&mut rand::rng())
    }

    /// Generates a key pair using the provided random number generator.
    fn keygen_with_rng<R: RngCore + CryptoRng>(
        rng: &mut R,
    ) -> Result<EncodedKeyPair, LatticeError>;

    /// Establishes a fresh shared secret for the holder of `public_key`, drawing the ephemeral
    /// message from OS-provided randomness.
    #[cfg(feature = "std")]
    fn encapsulate(public_key: &[u8]) -> Result<(Vec<u8>, SharedSecret), LatticeError> {
        Self::encapsulate_with_rng(public_key, &mut rand::rng())
    }

    /// Establishes a fresh shared secret for the holder of `public_key`, drawing the ephemeral
    /// message from `rng`. Returns the ciphertext together with the shared secret.
    fn encapsulate_with_rng<R: RngCore + CryptoRng>(
        public_key: &[u8],
        rng: &mut R,
    ) -> Result<(Vec<u8>, SharedSecret), LatticeError>;

    /// Recovers the shared secret carried by `ciphertext`.
    fn decapsulate(ciphertext: &[u8], secret_key: &[u8]) -> Result<SharedSecret, LatticeError>;
}
