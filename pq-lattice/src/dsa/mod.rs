//! Digital signature schemes.
//!
//! Only the Fiat-Shamir-with-aborts scheme in [dilithium2] is supported. An older variant with
//! narrower packing widths, a binomially sampled challenge and no hint vector is deprecated;
//! its signatures are not accepted by this crate.

use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};

use crate::{EncodedKeyPair, LatticeError};

pub mod dilithium2;

// SIGNATURE SCHEME
// ================================================================================================

/// Byte-level interface of a digital signature scheme.
///
/// Keys and signatures are passed as opaque byte strings. Signing reports malformed keys as
/// errors, while verification is total: any malformed input simply fails to verify.
pub trait SignatureScheme {
    /// Length of an encoded public key in bytes.
    const PUBLIC_KEY_LEN: usize;
    /// Length of an encoded secret key in bytes.
    const SECRET_KEY_LEN: usize;
    /// Length of an encoded signature in bytes.
    const SIGNATURE_LEN: usize;

    /// Generates a key pair from OS-provided randomness.
    #[cfg(feature = "std")]
    fn keygen() -> Result<EncodedKeyPair, LatticeError> {
        Self::keygen_with_rng(&mut rand::rng())
    }

    /// Generates a key pair using the provided random number generator.
    fn keygen_with_rng<R: RngCore + CryptoRng>(
        rng: &mut R,
    ) -> Result<EncodedKeyPair, LatticeError>;

    /// Signs `message` with `secret_key`. Signing is deterministic.
    fn sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>, LatticeError>;

    /// Returns true if `signature` is a valid signature of `message` under `public_key`.
    fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> bool;
}
