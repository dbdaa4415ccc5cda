use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::{DILITHIUM2, SEED_LEN, expand_matrix};
use crate::{LatticeError, sample};

mod public_key;
pub use public_key::PublicKey;

mod secret_key;
pub use secret_key::SecretKey;

// KEY PAIR
// ================================================================================================

/// A Dilithium2 key pair.
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
    /// The provided RNG must be cryptographically secure.
    pub fn with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, LatticeError> {
        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        rng.fill_bytes(&mut *seed);
        Self::from_seed(&seed)
    }

    /// Deterministically derives a key pair from `seed`.
    ///
    /// The seed is expanded into `rho = XOF(seed)`, `rhoprime = XOF(seed || 0x01)` (64 bytes)
    /// and `K_seed = XOF(seed || 0x02)`. The first half of `rhoprime` seeds s1 and the second
    /// half seeds s2.
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Result<Self, LatticeError> {
        let xof = DILITHIUM2.xof;
        let rho: [u8; SEED_LEN] = xof.expand([seed.as_slice()]);
        let rhoprime: Zeroizing<[u8; 2 * SEED_LEN]> =
            Zeroizing::new(xof.expand([seed.as_slice(), &[0x01]]));
        let k_seed: [u8; SEED_LEN] = xof.expand([seed.as_slice(), &[0x02]]);

        let a = expand_matrix(&rho)?;
        let (s1_seed, s2_seed) = rhoprime.split_at(SEED_LEN);
        let s1 = sample::centered_binomial_vec(xof, &[s1_seed], DILITHIUM2.eta);
        let s2 = sample::centered_binomial_vec(xof, &[s2_seed], DILITHIUM2.eta);

        let t = &a.mul_vec(&s1) + &s2;

        Ok(Self {
            public_key: PublicKey::new(rho, t.clone()),
            secret_key: SecretKey::new(rho, k_seed, s1, s2, t),
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
