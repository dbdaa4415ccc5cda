//! Hash functions and extendable-output functions used by the lattice schemes.
//!
//! Both engines are built on the SHA-3 family:
//! - SHA3-256 is the fixed-output hash, used for ciphertext digests, the KEM key derivation and
//!   signature challenge commitments.
//! - SHAKE128 expands seeds for key encapsulation.
//! - SHAKE256 expands seeds for signatures.

use sha3::digest::{ExtendableOutput, Update, XofReader};


// CONSTANTS
// ================================================================================================

/// Number of bytes in a SHA3-256 digest.
pub const DIGEST_BYTES: usize = 32;

// SHA3-256
// ================================================================================================

/// SHA3-256 hash function.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sha3_256;

impl Sha3_256 {
    /// Returns the SHA3-256 digest of `bytes`.
    pub fn hash(bytes: &[u8]) -> [u8; DIGEST_BYTES] {
        Self::hash_iter(core::iter::once(bytes))
    }

    /// Returns the SHA3-256 digest of the concatenation of `slices`.
    pub fn hash_iter<'a>(slices: impl IntoIterator<Item = &'a [u8]>) -> [u8; DIGEST_BYTES] {
        use sha3::Digest;

        let mut hasher = sha3::Sha3_256::new();
        for slice in slices {
            Digest::update(&mut hasher, slice);
        }
        <[u8; DIGEST_BYTES]>::from(hasher.finalize())
    }
}

// EXTENDABLE-OUTPUT FUNCTIONS
// ================================================================================================

/// An extendable-output function from the SHAKE family.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Xof {
    Shake128,
    Shake256,
}

impl Xof {
    /// Absorbs the concatenation of `parts` and returns a reader over the output stream.
    pub fn stream<'a>(self, parts: impl IntoIterator<Item = &'a [u8]>) -> XofStream {
        match self {
            Xof::Shake128 => {
                let mut hasher = sha3::Shake128::default();
                parts.into_iter().for_each(|part| hasher.update(part));
                XofStream::Shake128(hasher.finalize_xof())
            },
            Xof::Shake256 => {
                let mut hasher = sha3::Shake256::default();
                parts.into_iter().for_each(|part| hasher.update(part));
                XofStream::Shake256(hasher.finalize_xof())
            },
        }
    }

    /// Fills `out` with the first `out.len()` output bytes for the concatenation of `parts`.
    pub fn fill<'a>(self, parts: impl IntoIterator<Item = &'a [u8]>, out: &mut [u8]) {
        self.stream(parts).read(out);
    }

    /// Returns the first `L` output bytes for the concatenation of `parts`.
    pub fn expand<'a, const L: usize>(self, parts: impl IntoIterator<Item = &'a [u8]>) -> [u8; L] {
        let mut out = [0u8; L];
        self.fill(parts, &mut out);
        out
    }
}

/// Output stream of an [Xof], read incrementally.
pub enum XofStream {
    Shake128(sha3::Shake128Reader),
    Shake256(sha3::Shake256Reader),
}

impl XofStream {
    /// Reads the next `out.len()` bytes of the stream into `out`.
    pub fn read(&mut self, out: &mut [u8]) {
        match self {
            XofStream::Shake128(reader) => reader.read(out),
            XofStream::Shake256(reader) => reader.read(out),
        }
    }

    /// Reads the next byte of the stream.
    pub fn next_byte(&mut self) -> u8 {
        let mut byte = [0u8; 1];
        self.read(&mut byte);
        byte[0]
    }
}
