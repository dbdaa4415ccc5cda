use subtle::ConstantTimeEq;

use super::{
    BETA, DsaFelt, GAMMA1, HINT_BYTES, K, L, PublicKey, Q, SIG_LEN, WIDE_COEFFICIENT_BYTES,
    challenge, commitment_hash, expand_matrix, message_representative, rounding,
};
use crate::{
    LatticeError,
    error::check_length,
    hash::DIGEST_BYTES,
    math::{N, PolyVec},
    utils::{
        ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable,
        codec::{read_signed_vec, write_signed_vec},
    },
};

/// Largest magnitude a coefficient of z may have on the wire.
const Z_ENCODING_BOUND: u32 = (Q - 1) / 2;

// SIGNATURE
// ================================================================================================

/// A Dilithium2 signature.
///
/// The signature consists of:
/// 1. the commitment hash c_tilde, from which the challenge c is expanded,
/// 2. the response vector z = y + c·s1,
/// 3. the hint bits which correct the high bits of A·z - c·t.
///
/// Serialized as c_tilde (32 bytes), then z with every coefficient in 3-byte two's complement,
/// then the K·N hint bits packed least-significant bit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    c_tilde: [u8; DIGEST_BYTES],
    z: PolyVec<DsaFelt, L>,
    hint: Hint,
}

impl Signature {
    pub(super) fn new(c_tilde: [u8; DIGEST_BYTES], z: PolyVec<DsaFelt, L>, hint: Hint) -> Self {
        Self { c_tilde, z, hint }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the commitment hash of this signature.
    pub fn c_tilde(&self) -> &[u8; DIGEST_BYTES] {
        &self.c_tilde
    }

    /// Returns the response vector z.
    pub fn z(&self) -> &PolyVec<DsaFelt, L> {
        &self.z
    }

    /// Returns the hint of this signature.
    pub fn hint(&self) -> &Hint {
        &self.hint
    }

    // SIGNATURE VERIFICATION
    // --------------------------------------------------------------------------------------------

    /// Returns true if this is a signature of `message` under `public_key`.
    pub fn verify(&self, message: &[u8], public_key: &PublicKey) -> bool {
        if !self.z.is_bounded_by(GAMMA1 - BETA) {
            return false;
        }

        // matrix expansion only fails on a stream shortfall, which no valid key can trigger
        let Ok(a) = expand_matrix(public_key.rho()) else {
            return false;
        };

        let c = challenge(&self.c_tilde);
        let w_approx = &a.mul_vec(&self.z) - &public_key.t().scale(&c);
        let w1 = rounding::pack_hinted_high_bits(&self.hint.bits, &w_approx);

        let mu = message_representative(message, public_key);
        commitment_hash(&mu, &w1).ct_eq(&self.c_tilde).into()
    }
}

// HINT
// ================================================================================================

/// One bit per coefficient of a K-vector, telling the verifier which high bits to adjust.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    bits: [[bool; N]; K],
}

impl Hint {
    pub(super) fn new(bits: [[bool; N]; K]) -> Self {
        Self { bits }
    }

    /// Returns the hint bit for coefficient `j` of component `i`.
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.bits[i][j]
    }

    /// Returns the number of set hint bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().flatten().filter(|&&bit| bit).count()
    }
}

impl Serializable for Hint {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        let mut packed = [0u8; HINT_BYTES];
        for (index, &bit) in self.bits.iter().flatten().enumerate() {
            packed[index / 8] |= (bit as u8) << (index % 8);
        }
        target.write_bytes(&packed);
    }

    fn get_size_hint(&self) -> usize {
        HINT_BYTES
    }
}

impl Deserializable for Hint {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let packed: [u8; HINT_BYTES] = source.read_array()?;
        let bits = core::array::from_fn(|i| {
            core::array::from_fn(|j| {
                let index = i * N + j;
                (packed[index / 8] >> (index % 8)) & 1 == 1
            })
        });
        Ok(Self { bits })
    }
}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

impl Serializable for Signature {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_bytes(&self.c_tilde);
        write_signed_vec(target, &self.z, WIDE_COEFFICIENT_BYTES);
        self.hint.write_into(target);
    }

    fn get_size_hint(&self) -> usize {
        SIG_LEN
    }
}

impl Deserializable for Signature {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let c_tilde = source.read_array()?;
        let z = read_signed_vec(source, WIDE_COEFFICIENT_BYTES, Z_ENCODING_BOUND)?;
        let hint = Hint::read_from(source)?;
        Ok(Self { c_tilde, z, hint })
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = LatticeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        check_length("signature", bytes, SIG_LEN)?;
        Ok(Self::read_from_bytes(bytes)?)
    }
}
