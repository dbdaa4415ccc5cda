use pq_lattice_derive::{SilentDebug, SilentDisplay};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::{
    super::{
        BETA, DILITHIUM2, DsaFelt, ETA, GAMMA1, GAMMA2, Hint, K, L, MAX_SIGN_ATTEMPTS, SEED_LEN,
        SHORT_COEFFICIENT_BYTES, SK_LEN, Signature, WIDE_COEFFICIENT_BYTES, challenge,
        commitment_hash, expand_matrix, message_representative, rounding,
    },
    PublicKey,
};
use crate::{
    LatticeError,
    error::check_length,
    math::PolyVec,
    sample,
    utils::{
        ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable,
        codec::{read_canonical_vec, read_signed_vec, write_canonical_vec, write_signed_vec},
    },
};

// SECRET KEY
// ================================================================================================

/// Secret key for Dilithium2.
///
/// Besides the short vectors s1 and s2 the key carries `rho` and t, so the public key can be
/// rebuilt without the seed, and the signing seed `K_seed` from which masks are expanded.
#[derive(Clone, SilentDebug, SilentDisplay)]
pub struct SecretKey {
    rho: [u8; SEED_LEN],
    k_seed: [u8; SEED_LEN],
    s1: PolyVec<DsaFelt, L>,
    s2: PolyVec<DsaFelt, K>,
    t: PolyVec<DsaFelt, K>,
}

impl SecretKey {
    pub(crate) fn new(
        rho: [u8; SEED_LEN],
        k_seed: [u8; SEED_LEN],
        s1: PolyVec<DsaFelt, L>,
        s2: PolyVec<DsaFelt, K>,
        t: PolyVec<DsaFelt, K>,
    ) -> Self {
        Self { rho, k_seed, s1, s2, t }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the public key corresponding to this secret key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::new(self.rho, self.t.clone())
    }

    // SIGNATURE GENERATION
    // --------------------------------------------------------------------------------------------

    /// Signs `message` with this secret key.
    ///
    /// Signing is deterministic: the mask for attempt n is expanded from `K_seed || mu || n`,
    /// so the same key and message always yield the same signature.
    ///
    /// # Errors
    /// Returns [LatticeError::SamplingExhausted] if every one of the [MAX_SIGN_ATTEMPTS] nonces
    /// is rejected, which happens with negligible probability.
    pub fn sign(&self, message: &[u8]) -> Result<Signature, LatticeError> {
        self.sign_with_attempts(message, MAX_SIGN_ATTEMPTS)
    }

    pub(crate) fn sign_with_attempts(
        &self,
        message: &[u8],
        max_attempts: u32,
    ) -> Result<Signature, LatticeError> {
        debug_assert!(max_attempts <= u16::MAX as u32 + 1, "nonces are 16 bits wide");

        let xof = DILITHIUM2.xof;
        let mu = message_representative(message, &self.public_key());
        let a = expand_matrix(&self.rho)?;

        for attempt in 0..max_attempts {
            let nonce = (attempt as u16).to_le_bytes();
            let y: Zeroizing<PolyVec<DsaFelt, L>> = Zeroizing::new(sample::bounded_mask_vec(
                xof,
                &[self.k_seed.as_slice(), mu.as_slice(), nonce.as_slice()],
                GAMMA1,
            ));

            let w = a.mul_vec(&y);
            let c_tilde = commitment_hash(&mu, &rounding::pack_high_bits(&w));
            let c = challenge(&c_tilde);

            let z = &*y + &self.s1.scale(&c);
            if !z.is_bounded_by(GAMMA1 - BETA) {
                continue;
            }

            let perturbed = &w - &self.s2.scale(&c);
            if !rounding::low_bits_bounded_by(&perturbed, GAMMA2 - BETA) {
                continue;
            }

            let hint = Hint::new(rounding::make_hints(&w, &perturbed));
            return Ok(Signature::new(c_tilde, z, hint));
        }

        Err(LatticeError::SamplingExhausted { attempts: max_attempts })
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
        self.rho.zeroize();
        self.k_seed.zeroize();
        self.s1.zeroize();
        self.s2.zeroize();
        self.t.zeroize();
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
        target.write_bytes(&self.rho);
        target.write_bytes(&self.k_seed);
        write_signed_vec(target, &self.s1, SHORT_COEFFICIENT_BYTES);
        write_signed_vec(target, &self.s2, SHORT_COEFFICIENT_BYTES);
        write_canonical_vec(target, &self.t, WIDE_COEFFICIENT_BYTES);
    }

    fn get_size_hint(&self) -> usize {
        SK_LEN
    }
}

impl Deserializable for SecretKey {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let rho = source.read_array()?;
        let k_seed = source.read_array()?;
        let s1 = read_signed_vec(source, SHORT_COEFFICIENT_BYTES, ETA)?;
        let s2 = read_signed_vec(source, SHORT_COEFFICIENT_BYTES, ETA)?;
        let t = read_canonical_vec(source, WIDE_COEFFICIENT_BYTES)?;
        Ok(Self { rho, k_seed, s1, s2, t })
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = LatticeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        check_length("secret key", bytes, SK_LEN)?;
        Ok(Self::read_from_bytes(bytes)?)
    }
}
