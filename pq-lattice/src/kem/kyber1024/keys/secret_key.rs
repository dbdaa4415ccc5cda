//! Secret key of the Kyber1024 key encapsulation mechanism.

use alloc::format;

use pq_lattice_derive::{SilentDebug, SilentDisplay};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::{
    super::{COEFFICIENT_BYTES, Ciphertext, K, KYBER1024, KemFelt, SK_LEN, message},
    public_key::derive_shared_secret,
};
use crate::{
    LatticeError,
    error::check_length,
    kem::SharedSecret,
    math::PolyVec,
    utils::{
        ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable,
        codec::{read_canonical_vec, write_canonical_vec},
    },
};

// SECRET KEY
// ================================================================================================

/// Secret key for Kyber1024: the short vector s.
///
/// Coefficients of s are stored in canonical form, so a coefficient of -1 is encoded as q - 1.
#[derive(Clone, SilentDebug, SilentDisplay)]
pub struct SecretKey {
    s: PolyVec<KemFelt, K>,
}

impl SecretKey {
    pub(crate) fn new(s: PolyVec<KemFelt, K>) -> Self {
        Self { s }
    }

    /// Returns the secret vector s.
    pub fn s(&self) -> &PolyVec<KemFelt, K> {
        &self.s
    }

    /// Recovers the shared secret carried by `ciphertext`.
    ///
    /// The message is recovered by rounding v - s·u, and the shared secret is re-derived from it
    /// and the ciphertext bytes. A ciphertext that was not produced for this key yields an
    /// unrelated secret rather than an error.
    pub fn decapsulate(&self, ciphertext: &Ciphertext) -> SharedSecret {
        let noisy = Zeroizing::new(ciphertext.v() - &self.s.dot(ciphertext.u()));
        let message = Zeroizing::new(message::decode(&noisy));
        derive_shared_secret(&message, ciphertext)
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        let lhs = Zeroizing::new(self.to_bytes());
        let rhs = Zeroizing::new(other.to_bytes());
        lhs.ct_eq(&rhs).into()
    }
}

impl Eq for SecretKey {}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.s.zeroize();
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

impl Serializable for SecretKey {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        write_canonical_vec(target, &self.s, COEFFICIENT_BYTES);
    }

    fn get_size_hint(&self) -> usize {
        SK_LEN
    }
}

impl Deserializable for SecretKey {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let s: PolyVec<KemFelt, K> = read_canonical_vec(source, COEFFICIENT_BYTES)?;
        if !s.is_bounded_by(KYBER1024.eta1 as u32 + 1) {
            return Err(DeserializationError::InvalidValue(format!(
                "secret coefficient outside [-{eta}, {eta}]",
                eta = KYBER1024.eta1
            )));
        }
        Ok(Self { s })
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = LatticeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        check_length("secret key", bytes, SK_LEN)?;
        Ok(Self::read_from_bytes(bytes)?)
    }
}
