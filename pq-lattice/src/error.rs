use alloc::string::{String, ToString};

use thiserror::Error;

use crate::utils::DeserializationError;

// LATTICE ERROR
// ================================================================================================

/// Errors which can be returned by the key encapsulation and signature engines.
///
/// Verification failures are not represented here: signature verification returns `false`
/// instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// A key, ciphertext or signature did not have the fixed size of its scheme.
    #[error("invalid {kind} length: expected {expected} bytes, found {actual}")]
    InvalidLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
    /// The bytes had the right length but did not decode into a valid value.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),
    /// The signing loop rejected every candidate up to its iteration cap.
    #[error("signing aborted after {attempts} rejected attempts")]
    SamplingExhausted { attempts: u32 },
    /// A seed stream ran out before enough coefficients were accepted.
    #[error("seed stream produced only {produced} of {required} coefficients")]
    StreamExhausted { produced: usize, required: usize },
}

impl From<DeserializationError> for LatticeError {
    fn from(err: DeserializationError) -> Self {
        Self::MalformedEncoding(err.to_string())
    }
}

/// Checks that `bytes` has exactly `expected` bytes.
pub(crate) fn check_length(
    kind: &'static str,
    bytes: &[u8],
    expected: usize,
) -> Result<(), LatticeError> {
    if bytes.len() != expected {
        return Err(LatticeError::InvalidLength { kind, expected, actual: bytes.len() });
    }
    Ok(())
}
