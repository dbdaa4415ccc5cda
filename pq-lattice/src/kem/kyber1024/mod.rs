//! Module-LWE key encapsulation with Kyber1024 dimensions.
//!
//! Key generation expands a 32-byte seed into a matrix seed `rho` and a noise seed `sigma`, builds
//! the public matrix A from `rho`, samples a short secret s and error e, and publishes
//! t = A·s + e.
//!
//! Encapsulation draws a 32-byte message m, derives all encryption randomness from m, and sends
//! u = Aᵀ·r + e1 and v = t·r + e2 + encode(m). The shared secret is
//! SHA3-256(m || SHA3-256(ct)), so both sides bind the secret to the exact ciphertext bytes.
//! Decapsulation recovers m by rounding v - s·u and re-derives the same secret.
//!
//! Polynomial coefficients are transmitted uncompressed, two bytes each.

use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};

use super::{KemScheme, SharedSecret};
use crate::{
    EncodedKeyPair, LatticeError,
    hash::Xof,
    math::{ModularFelt, N, PolyMatrix},
    sample,
    utils::Serializable,
};

mod ciphertext;
mod keys;
mod message;

#[cfg(test)]
mod tests;

pub use self::{
    ciphertext::Ciphertext,
    keys::{KeyPair, PublicKey, SecretKey},
};

// PARAMETERS
// ================================================================================================

/// Parameters of a module-LWE key encapsulation mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KemParams {
    /// Degree of the reduction polynomial X^n + 1.
    pub n: usize,
    /// Prime modulus of the coefficient field.
    pub q: u32,
    /// Module rank: the number of polynomials in the secret and public vectors.
    pub k: usize,
    /// Centered binomial parameter for the key pair secret and error vectors.
    pub eta1: usize,
    /// Centered binomial parameter for the encryption error terms.
    pub eta2: usize,
    /// Extendable-output function used to expand seeds.
    pub xof: Xof,
    /// Number of XOF bytes read when sampling a uniform polynomial.
    pub uniform_stream_len: usize,
    /// Number of bytes per encoded coefficient.
    pub coefficient_bytes: usize,
}

/// Kyber1024 parameters.
pub const KYBER1024: KemParams = KemParams {
    n: N,
    q: Q,
    k: 4,
    eta1: 2,
    eta2: 2,
    xof: Xof::Shake128,
    uniform_stream_len: 3 * N,
    coefficient_bytes: 2,
};

// CONSTANTS
// ================================================================================================

/// The KEM modulus q.
pub const Q: u32 = 3329;

const K: usize = KYBER1024.k;
const COEFFICIENT_BYTES: usize = KYBER1024.coefficient_bytes;

/// Length of the seeds from which key pairs and ciphertexts are derived.
pub const SEED_LEN: usize = 32;

/// Length of the ephemeral message encapsulated in a ciphertext.
pub const MESSAGE_LEN: usize = 32;

/// Public key length in bytes: `rho` followed by K polynomials.
pub const PK_LEN: usize = SEED_LEN + K * N * COEFFICIENT_BYTES;

/// Secret key length in bytes: K polynomials.
pub const SK_LEN: usize = K * N * COEFFICIENT_BYTES;

/// Ciphertext length in bytes: K + 1 polynomials.
pub const CT_LEN: usize = (K + 1) * N * COEFFICIENT_BYTES;

/// Field element of Z/3329Z.
pub type KemFelt = ModularFelt<Q>;

// HELPERS
// ================================================================================================

/// Expands the K x K public matrix from `rho`.
fn expand_matrix(rho: &[u8; SEED_LEN]) -> Result<PolyMatrix<KemFelt, K, K>, LatticeError> {
    sample::uniform_matrix(KYBER1024.xof, rho, KYBER1024.uniform_stream_len)
}

// KEM SCHEME
// ================================================================================================

/// Kyber1024 key encapsulation over byte strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kyber1024;

impl KemScheme for Kyber1024 {
    const PUBLIC_KEY_LEN: usize = PK_LEN;
    const SECRET_KEY_LEN: usize = SK_LEN;
    const CIPHERTEXT_LEN: usize = CT_LEN;

    fn keygen_with_rng<R: RngCore + CryptoRng>(
        rng: &mut R,
    ) -> Result<EncodedKeyPair, LatticeError> {
        let key_pair = KeyPair::with_rng(rng)?;
        Ok(EncodedKeyPair::new(
            key_pair.public_key().to_bytes(),
            key_pair.secret_key().to_bytes(),
        ))
    }

    fn encapsulate_with_rng<R: RngCore + CryptoRng>(
        public_key: &[u8],
        rng: &mut R,
    ) -> Result<(Vec<u8>, SharedSecret), LatticeError> {
        let public_key = PublicKey::try_from(public_key)?;
        let (ciphertext, shared_secret) = public_key.encapsulate_with_rng(rng)?;
        Ok((ciphertext.to_bytes(), shared_secret))
    }

    fn decapsulate(ciphertext: &[u8], secret_key: &[u8]) -> Result<SharedSecret, LatticeError> {
        let ciphertext = Ciphertext::try_from(ciphertext)?;
        let secret_key = SecretKey::try_from(secret_key)?;
        Ok(secret_key.decapsulate(&ciphertext))
    }
}
