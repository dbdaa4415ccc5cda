//! Utilities used in this crate which can also be generally useful downstream.

use alloc::{string::String, vec::Vec};
use core::fmt::Write;

use thiserror::Error;
pub use winter_utils::{
    ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable, SliceReader,
};

pub(crate) mod codec;
mod iterators;

// HEX ENCODING
// ================================================================================================

/// Renders an array of bytes as hex into a String.
pub fn bytes_to_hex_string<const N: usize>(data: [u8; N]) -> String {
    slice_to_hex_string(&data)
}

/// Renders a byte slice of any length as 0x-prefixed hex into a String.
pub fn slice_to_hex_string(data: &[u8]) -> String {
    let mut s = String::with_capacity(2 * data.len() + 2);

    s.push_str("0x");
    for byte in data.iter() {
        // writing into a String never fails
        let _ = write!(s, "{byte:02x}");
    }

    s
}

/// Defines errors which can occur during parsing of hexadecimal strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexParseError {
    #[error("expected hex data to have length {expected}, including the 0x prefix, found {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("hex encoded data must start with 0x prefix")]
    MissingPrefix,
    #[error("hex encoded data must contain only characters [0-9a-fA-F]")]
    InvalidChar,
}

/// Parses a hex string into an array of bytes of known size.
pub fn hex_to_bytes<const N: usize>(value: &str) -> Result<[u8; N], HexParseError> {
    let expected: usize = (N * 2) + 2;
    if value.len() != expected {
        return Err(HexParseError::InvalidLength { expected, actual: value.len() });
    }

    let decoded = hex_to_vec(value)?;
    let mut result = [0u8; N];
    result.copy_from_slice(&decoded);
    Ok(result)
}

/// Parses a 0x-prefixed hex string of any even length into a vector of bytes.
pub fn hex_to_vec(value: &str) -> Result<Vec<u8>, HexParseError> {
    let digits = value.strip_prefix("0x").ok_or(HexParseError::MissingPrefix)?;
    if digits.len() % 2 != 0 {
        return Err(HexParseError::InvalidLength {
            expected: value.len() + 1,
            actual: value.len(),
        });
    }

    let nibble = |v: u8| match v {
        b'0'..=b'9' => Ok(v - b'0'),
        b'a'..=b'f' => Ok(v - b'a' + 10),
        b'A'..=b'F' => Ok(v - b'A' + 10),
        _ => Err(HexParseError::InvalidChar),
    };

    digits
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| -> Result<u8, HexParseError> {
            Ok((nibble(pair[0])? << 4) | nibble(pair[1])?)
        })
        .collect()
}

// TESTS
// ================================================================================================
