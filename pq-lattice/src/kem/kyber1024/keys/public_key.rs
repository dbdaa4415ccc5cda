//! Public key of the Kyber1024 key encapsulation mechanism.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::super::{
    COEFFICIENT_BYTES, Ciphertext, K, KYBER1024, KemFelt, MESSAGE_LEN, PK_LEN, SEED_LEN,
    expand_matrix, message,
};
use crate::{
    LatticeError,
    error::check_length,
    hash::Sha3_256,
    kem::SharedSecret,
    math::PolyVec,
    sample,
    utils::{
        ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable,
        codec::{read_canonical_vec, write_canonical_vec},
    },
};

// PUBLIC KEY
// ================================================================================================

/// Public key for Kyber1024: the matrix seed `rho` and the vector t = A·s + e.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    rho: [u8; SEED_LEN],
    t: PolyVec<KemFelt, K>,
}

impl PublicKey {
    pub(crate) fn new(rho: [u8; SEED_LEN], t: PolyVec<KemFelt, K>) -> Self {
        Self { rho, t }
    }

    /// Returns the seed from which the public matrix is expanded.
    pub fn rho(&self) -> &[u8; SEED_LEN] {
        &self.rho
    }

    /// Returns the vector t.
    pub fn t(&self) -> &PolyVec<KemFelt, K> {
        &self.t
    }

    // ENCAPSULATION
    // --------------------------------------------------------------------------------------------

    /// Establishes a fresh shared secret for the holder of this key, drawing the ephemeral
    /// message from OS-provided randomness.
    #[cfg(feature = "std")]
    pub fn encapsulate(&self) -> Result<(Ciphertext, SharedSecret), LatticeError> {
        let mut rng = rand::rng();
        self.encapsulate_with_rng(&mut rng)
    }

    /// Establishes a fresh shared secret for the holder of this key, drawing the ephemeral
    /// message from `rng`.
    pub fn encapsulate_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(Ciphertext, SharedSecret), LatticeError> {
        let mut message = Zeroizing::new([0u8; MESSAGE_LEN]);
        rng.fill_bytes(&mut *message);
        self.encapsulate_from_seed(&message)
    }

    /// Deterministically encapsulates `message`.
    ///
    /// All encryption randomness is derived from `r = XOF(message)`: the vector r from
    /// `r || i`, the error e1 from `r || 0x01 || i` and the error e2 from `r || 0x02 || 0x00`.
    /// Re-using a message re-uses the shared secret, so `message` must be fresh and secret.
    pub fn encapsulate_from_seed(
        &self,
        message: &[u8; MESSAGE_LEN],
    ) -> Result<(Ciphertext, SharedSecret), LatticeError> {
        let xof = KYBER1024.xof;
        let r: Zeroizing<[u8; SEED_LEN]> = Zeroizing::new(xof.expand([message.as_slice()]));

        let a = expand_matrix(&self.rho)?;
        let r_vec: Zeroizing<PolyVec<KemFelt, K>> =
            Zeroizing::new(sample::centered_binomial_vec(xof, &[r.as_slice()], KYBER1024.eta1));
        let e1 = sample::centered_binomial_vec(xof, &[r.as_slice(), &[0x01]], KYBER1024.eta2);
        let e2 = sample::centered_binomial(xof, [r.as_slice(), &[0x02, 0x00]], KYBER1024.eta2);

        let u = &a.transpose_mul_vec(&r_vec) + &e1;
        let v = &(&self.t.dot(&r_vec) + &e2) + &message::encode(message);

        let ciphertext = Ciphertext::new(u, v);
        let shared_secret = derive_shared_secret(message, &ciphertext);
        Ok((ciphertext, shared_secret))
    }
}

/// Computes SHA3-256(message || SHA3-256(ciphertext)).
pub(in super::super) fn derive_shared_secret(
    message: &[u8; MESSAGE_LEN],
    ciphertext: &Ciphertext,
) -> SharedSecret {
    let ct_digest = Sha3_256::hash(&ciphertext.to_bytes());
    SharedSecret::new(Sha3_256::hash_iter([message.as_slice(), ct_digest.as_slice()]))
}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

impl Serializable for PublicKey {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_bytes(&self.rho);
        write_canonical_vec(target, &self.t, COEFFICIENT_BYTES);
    }

    fn get_size_hint(&self) -> usize {
        PK_LEN
    }
}

impl Deserializable for PublicKey {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let rho = source.read_array()?;
        let t = read_canonical_vec(source, COEFFICIENT_BYTES)?;
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
