//! Module-lattice signatures with Dilithium2 dimensions.
//!
//! Key generation expands a 32-byte seed into the matrix seed `rho`, the noise seed `rhoprime`
//! and the signing seed `K_seed`, samples short vectors s1 and s2 and publishes t = A·s1 + s2.
//!
//! Signing follows the Fiat-Shamir-with-aborts paradigm and is deterministic. For nonce 0, 1, ...
//! a mask y is expanded from `K_seed || mu || nonce`, the commitment w = A·y is rounded to its
//! high bits w1, and the challenge c is derived from c_tilde = SHA3-256(mu || w1). The response
//! z = y + c·s1 is released only if it and the low bits of w - c·s2 stay clear of the rejection
//! bounds, so z leaks nothing about s1. After [MAX_SIGN_ATTEMPTS] rejected nonces signing gives
//! up with [LatticeError::SamplingExhausted].
//!
//! Since the public key carries t uncompressed, a verifier computes A·z - c·t = w - c·s2
//! exactly and the hint vector is only needed to repair high bits that the perturbation c·s2
//! pushed across a rounding boundary.

use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};

use crate::{
    EncodedKeyPair, LatticeError,
    dsa::SignatureScheme,
    hash::{DIGEST_BYTES, Sha3_256, Xof},
    math::{ModularFelt, N, PolyMatrix, Polynomial},
    sample,
    utils::Serializable,
};

mod keys;
mod rounding;
mod signature;

#[cfg(test)]
mod tests;

pub use self::{
    keys::{KeyPair, PublicKey, SecretKey},
    signature::{Hint, Signature},
};

// PARAMETERS
// ================================================================================================

/// Parameters of a module-lattice Fiat-Shamir-with-aborts signature scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DsaParams {
    /// Degree of the reduction polynomial X^n + 1.
    pub n: usize,
    /// Prime modulus of the coefficient field.
    pub q: u32,
    /// Number of rows of the public matrix.
    pub k: usize,
    /// Number of columns of the public matrix.
    pub l: usize,
    /// Bound on the coefficients of the secret vectors.
    pub eta: usize,
    /// Number of non-zero coefficients of a challenge.
    pub tau: usize,
    /// Bound on the coefficients of c·s1 and c·s2, i.e. tau·eta.
    pub beta: u32,
    /// Bound on the coefficients of the mask y.
    pub gamma1: u32,
    /// Low-order rounding range.
    pub gamma2: u32,
    /// Extendable-output function used to expand seeds.
    pub xof: Xof,
    /// Number of XOF bytes read when sampling a uniform polynomial.
    pub uniform_stream_len: usize,
    /// Number of nonces tried before signing gives up.
    pub max_sign_attempts: u32,
}

/// Dilithium2 parameters.
pub const DILITHIUM2: DsaParams = DsaParams {
    n: N,
    q: Q,
    k: 4,
    l: 4,
    eta: 2,
    tau: 39,
    beta: 78,
    gamma1: 1 << 17,
    gamma2: (Q - 1) / 88,
    xof: Xof::Shake256,
    uniform_stream_len: 5 * 168,
    max_sign_attempts: 1024,
};

// CONSTANTS
// ================================================================================================

/// The signature modulus q.
pub const Q: u32 = 8380417;

const K: usize = DILITHIUM2.k;
const L: usize = DILITHIUM2.l;
const ETA: u32 = DILITHIUM2.eta as u32;
const BETA: u32 = DILITHIUM2.beta;
const GAMMA1: u32 = DILITHIUM2.gamma1;
const GAMMA2: u32 = DILITHIUM2.gamma2;

/// Maximum number of nonces tried by [SecretKey::sign].
pub const MAX_SIGN_ATTEMPTS: u32 = DILITHIUM2.max_sign_attempts;

/// Length of the seeds from which key pairs are derived.
pub const SEED_LEN: usize = 32;

/// Length of the message representative mu.
const MU_LEN: usize = 64;

/// Bytes per coefficient of t and z.
const WIDE_COEFFICIENT_BYTES: usize = 3;

/// Bytes per coefficient of s1 and s2.
const SHORT_COEFFICIENT_BYTES: usize = 2;

/// Bytes of the packed hint vector: one bit per coefficient.
const HINT_BYTES: usize = K * N / 8;

/// Public key length in bytes: `rho` followed by t.
pub const PK_LEN: usize = SEED_LEN + K * N * WIDE_COEFFICIENT_BYTES;

/// Secret key length in bytes: `rho`, `K_seed`, s1, s2 and t.
pub const SK_LEN: usize = 2 * SEED_LEN
    + (L + K) * N * SHORT_COEFFICIENT_BYTES
    + K * N * WIDE_COEFFICIENT_BYTES;

/// Signature length in bytes: c_tilde, z and the hint bits.
pub const SIG_LEN: usize = DIGEST_BYTES + L * N * WIDE_COEFFICIENT_BYTES + HINT_BYTES;

/// Field element of Z/8380417Z.
pub type DsaFelt = ModularFelt<Q>;

// HELPERS
// ================================================================================================

/// Expands the K x L public matrix from `rho`.
fn expand_matrix(rho: &[u8; SEED_LEN]) -> Result<PolyMatrix<DsaFelt, K, L>, LatticeError> {
    sample::uniform_matrix(DILITHIUM2.xof, rho, DILITHIUM2.uniform_stream_len)
}

/// Computes the message representative mu = XOF(message || pk, 64).
fn message_representative(message: &[u8], public_key: &PublicKey) -> [u8; MU_LEN] {
    DILITHIUM2.xof.expand([message, public_key.to_bytes().as_slice()])
}

/// Hashes mu and the packed high bits w1 into the challenge seed c_tilde.
fn commitment_hash(mu: &[u8; MU_LEN], w1: &[[u8; N]; K]) -> [u8; DIGEST_BYTES] {
    Sha3_256::hash_iter(core::iter::once(mu.as_slice()).chain(w1.iter().map(|p| p.as_slice())))
}

/// Expands c_tilde into a challenge with exactly TAU coefficients in {-1, 1}.
fn challenge(c_tilde: &[u8; DIGEST_BYTES]) -> Polynomial<DsaFelt> {
    sample::sparse_ternary(DILITHIUM2.xof, [c_tilde.as_slice()], DILITHIUM2.tau)
}

// SIGNATURE SCHEME
// ================================================================================================

/// Dilithium2 signatures over byte strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dilithium2;

impl SignatureScheme for Dilithium2 {
    const PUBLIC_KEY_LEN: usize = PK_LEN;
    const SECRET_KEY_LEN: usize = SK_LEN;
    const SIGNATURE_LEN: usize = SIG_LEN;

    fn keygen_with_rng<R: RngCore + CryptoRng>(
        rng: &mut R,
    ) -> Result<EncodedKeyPair, LatticeError> {
        let key_pair = KeyPair::with_rng(rng)?;
        Ok(EncodedKeyPair::new(
            key_pair.public_key().to_bytes(),
            key_pair.secret_key().to_bytes(),
        ))
    }

    fn sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>, LatticeError> {
        let secret_key = SecretKey::try_from(secret_key)?;
        Ok(secret_key.sign(message)?.to_bytes())
    }

    fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> bool {
        let (Ok(signature), Ok(public_key)) =
            (Signature::try_from(signature), PublicKey::try_from(public_key))
        else {
            return false;
        };
        public_key.verify(message, &signature)
    }
}
