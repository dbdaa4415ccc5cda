//! Public key types for the Dilithium2 signature scheme.

use super::super::{DsaFelt, K, PK_LEN, SEED_LEN, Signature, WIDE_COEFFICIENT_BYTES};
use crate::{
    LatticeError,
    error::check_length,
    math::PolyVec,
    utils::{
        ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable,
        codec::{read_canonical_vec, write_canonical_vec},
    },
};

// PUBLIC KEY
// ================================================================================================

/// Public key for Dilithium2: the matrix seed `rho` and the vector t = A·s1 + s2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    rho: [u8; SEED_LEN],
    t: PolyVec<DsaFelt, K>,
}

impl PublicKey {
    pub(crate) fn new(rho: [u8; SEED_LEN], t: PolyVec<DsaFelt, K>) -> Self {
        Self { rho, t }
    }

    /// Verifies the provided signature against the provided message and this public key.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        signature.verify(message, self)
    }

    /// Returns the seed from which the public matrix is expanded.
    pub fn rho(&self) -> &[u8; SEED_LEN] {
        &self.rho
    }

    /// Returns the vector t.
    pub fn t(&self) -> &PolyVec<DsaFelt, K> {
        &self.t
    }
}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

impl Serializable for PublicKey {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_bytes(&self.rho);
        write_canonical_vec(target, &self.t, WIDE_COEFFICIENT_BYTES);
    }

    fn get_size_hint(&self) -> usize {
        PK_LEN
    }
}

impl Deserializable for PublicKey {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let rho = source.read_array()?;
        let t = read_canonical_vec(source, WIDE_COEFFICIENT_BYTES)?;
        Ok(Self { rho, t })
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = LatticeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        check_length("public key", bytes, PK_LEN)?;
        Ok(Self::read_from_bytes(bytes)?)
    }
}
