use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::{KYBER1024, SEED_LEN, expand_matrix};
use crate::{LatticeError, sample};

mod public_key;
pub use public_key::PublicKey;

mod secret_key;
pub use secret_key::SecretKey;

// KEY PAIR
// ================================================================================================

/// A Kyber1024 key pair.
///
/// Key pairs are a pure function of a 32-byte seed: `rho = XOF(seed)` seeds the public matrix
/// and `sigma = XOF(seed || 0x01)` seeds the secret s and error e.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public_key: PublicKey,
    secret_key: SecretKey,
}

#[allow(clippy::new_without_default)]
impl KeyPair {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Generates a key pair from OS-provided randomness.
    #[cfg(feature = "std")]
    pub fn new() -> Result<Self, LatticeError> {
        let mut rng = rand::rng();
        Self::with_rng(&mut rng)
    }

    /// Generates a key pair from a seed drawn from the provided random number generator.
    ///
    /// The provided RNG must be cryptographically secure; anyone who can predict its output can
    /// recompute the secret key.
    pub fn with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, LatticeError> {
        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        rng.fill_bytes(&mut *seed);
        Self::from_seed(&seed)
    }

    /// Deterministically derives a key pair from `seed`.
    ///
    /// # Errors
    /// Returns an error if the seed expands to a matrix entry which cannot be sampled from the
    /// fixed-length uniform stream; this happens with negligible probability.
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Result<Self, LatticeError> {
        let xof = KYBER1024.xof;
        let rho: [u8; SEED_LEN] = xof.expand([seed.as_slice()]);
        let sigma: Zeroizing<[u8; SEED_LEN]> =
            Zeroizing::new(xof.expand([seed.as_slice(), &[0x01]]));

        let a = expand_matrix(&rho)?;
        let s = sample::centered_binomial_vec(xof, &[sigma.as_slice()], KYBER1024.eta1);
        let e = Zeroizing::new(sample::centered_binomial_vec(
            xof,
            &[sigma.as_slice(), &[0x01]],
            KYBER1024.eta1,
        ));

        let t = &a.mul_vec(&s) + &*e;

        Ok(Self {
            public_key: PublicKey::new(rho, t),
            secret_key: SecretKey::new(s),
        })
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the public key of this key pair.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns the secret key of this key pair.
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Splits this key pair into its public and secret keys.
    pub fn into_parts(self) -> (PublicKey, SecretKey) {
        (self.public_key, self.secret_key)
    }
}

// TESTS
// ================================================================================================
