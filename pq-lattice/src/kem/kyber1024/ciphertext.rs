use super::{COEFFICIENT_BYTES, CT_LEN, K, KemFelt};
use crate::{
    LatticeError,
    error::check_length,
    math::{PolyVec, Polynomial},
    utils::{
        ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable,
        codec::{read_canonical, read_canonical_vec, write_canonical, write_canonical_vec},
    },
};

// CIPHERTEXT
// ================================================================================================

/// A Kyber1024 ciphertext: the vector u = Aᵀ·r + e1 and the polynomial
/// v = t·r + e2 + encode(m).
///
/// Encoded as the K polynomials of u followed by v, each coefficient in two little-endian bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    u: PolyVec<KemFelt, K>,
    v: Polynomial<KemFelt>,
}

impl Ciphertext {
    pub(super) fn new(u: PolyVec<KemFelt, K>, v: Polynomial<KemFelt>) -> Self {
        Self { u, v }
    }

    /// Returns the vector component u.
    pub fn u(&self) -> &PolyVec<KemFelt, K> {
        &self.u
    }

    /// Returns the polynomial component v.
    pub fn v(&self) -> &Polynomial<KemFelt> {
        &self.v
    }
}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

impl Serializable for Ciphertext {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        write_canonical_vec(target, &self.u, COEFFICIENT_BYTES);
        write_canonical(target, &self.v, COEFFICIENT_BYTES);
    }

    fn get_size_hint(&self) -> usize {
        CT_LEN
    }
}

impl Deserializable for Ciphertext {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let u = read_canonical_vec(source, COEFFICIENT_BYTES)?;
        let v = read_canonical(source, COEFFICIENT_BYTES)?;
        Ok(Self { u, v })
    }
}

impl TryFrom<&[u8]> for Ciphertext {
    type Error = LatticeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        check_length("ciphertext", bytes, CT_LEN)?;
        Ok(Self::read_from_bytes(bytes)?)
    }
}
