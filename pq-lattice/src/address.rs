//! Account addresses derived from a signature public key and a KEM public key.

use alloc::string::String;
use core::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    LatticeError,
    dsa::dilithium2,
    error::check_length,
    hash::Sha3_256,
    kem::kyber1024,
    utils::{
        ByteReader, ByteWriter, Deserializable, DeserializationError, HexParseError, Serializable,
        bytes_to_hex_string, hex_to_bytes,
    },
};

// CONSTANTS
// ================================================================================================

/// Length of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Prefix of the textual form of an address.
pub const ADDRESS_PREFIX: &str = "QX";

// ADDRESS
// ================================================================================================

/// The first 20 bytes of SHA3-256(signature public key || KEM public key).
///
/// An address commits to both keys of a participant: the key that authorizes its messages and
/// the key under which others establish shared secrets with it.
///
/// The textual form is `QX` followed by the base58check encoding of the 20 bytes, where the
/// checksum is the first 4 bytes of SHA-256(SHA-256(bytes)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Derives the address of the holder of `signing_key` and `kem_key`.
    pub fn from_public_keys(
        signing_key: &dilithium2::PublicKey,
        kem_key: &kyber1024::PublicKey,
    ) -> Self {
        Self::derive(&signing_key.to_bytes(), &kem_key.to_bytes())
    }

    /// Derives an address from encoded public keys, checking their lengths.
    pub fn from_encoded_keys(signing_key: &[u8], kem_key: &[u8]) -> Result<Self, LatticeError> {
        check_length("public key", signing_key, dilithium2::PK_LEN)?;
        check_length("public key", kem_key, kyber1024::PK_LEN)?;
        Ok(Self::derive(signing_key, kem_key))
    }

    fn derive(signing_key: &[u8], kem_key: &[u8]) -> Self {
        let digest = Sha3_256::hash_iter([signing_key, kem_key]);
        let mut address = [0u8; ADDRESS_LEN];
        address.copy_from_slice(&digest[..ADDRESS_LEN]);
        Self(address)
    }

    /// Returns the bytes of this address.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Returns this address as a 0x-prefixed hex string.
    pub fn to_hex(&self) -> String {
        bytes_to_hex_string(self.0)
    }

    /// Parses an address from a 0x-prefixed hex string.
    pub fn from_hex(value: &str) -> Result<Self, HexParseError> {
        hex_to_bytes(value).map(Self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ADDRESS_PREFIX)?;
        f.write_str(&bs58::encode(self.0).with_check().into_string())
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let encoded = s.strip_prefix(ADDRESS_PREFIX).ok_or(AddressParseError::MissingPrefix)?;
        let decoded = bs58::decode(encoded)
            .with_check(None)
            .into_vec()
            .map_err(AddressParseError::Encoding)?;

        let bytes: [u8; ADDRESS_LEN] =
            decoded.as_slice().try_into().map_err(|_| AddressParseError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: decoded.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl Serializable for Address {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_bytes(&self.0);
    }

    fn get_size_hint(&self) -> usize {
        ADDRESS_LEN
    }
}

impl Deserializable for Address {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        source.read_array().map(Self)
    }
}

// ERRORS
// ================================================================================================

/// Defines errors which can occur when parsing the textual form of an address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    #[error("address must start with the QX prefix")]
    MissingPrefix,
    #[error("invalid base58check encoding: {0}")]
    Encoding(bs58::decode::Error),
    #[error("expected an address of {expected} bytes, found {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

// TESTS
// ================================================================================================
