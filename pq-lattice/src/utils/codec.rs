//! Fixed-width little-endian encodings of polynomials and polynomial vectors.
//!
//! Canonical encodings write the value of every coefficient in [0, q); signed encodings write the
//! balanced value in two's complement. Every coefficient takes the same number of bytes, so the
//! size of an encoded key, ciphertext or signature is fixed per scheme.

use alloc::format;

use num::Zero;

use super::{ByteReader, ByteWriter, DeserializationError};
use crate::math::{ModularFelt, N, PolyVec, Polynomial};

// CANONICAL ENCODING
// ================================================================================================

/// Writes every coefficient as its canonical value in `width` little-endian bytes.
pub(crate) fn write_canonical<W: ByteWriter, const Q: u32>(
    target: &mut W,
    poly: &Polynomial<ModularFelt<Q>>,
    width: usize,
) {
    for c in poly.coefficients.iter() {
        target.write_bytes(&c.value().to_le_bytes()[..width]);
    }
}

/// Reads N coefficients of `width` bytes each, rejecting values which are not below q.
pub(crate) fn read_canonical<R: ByteReader, const Q: u32>(
    source: &mut R,
    width: usize,
) -> Result<Polynomial<ModularFelt<Q>>, DeserializationError> {
    let bytes = source.read_slice(N * width)?;

    let mut coefficients = [ModularFelt::<Q>::zero(); N];
    for (c, chunk) in coefficients.iter_mut().zip(bytes.chunks_exact(width)) {
        *c = ModularFelt::try_from(le_value(chunk)).map_err(|value| {
            DeserializationError::InvalidValue(format!(
                "coefficient {value} is not below the modulus {Q}"
            ))
        })?;
    }
    Ok(Polynomial::new(coefficients))
}

pub(crate) fn write_canonical_vec<W: ByteWriter, const Q: u32, const D: usize>(
    target: &mut W,
    v: &PolyVec<ModularFelt<Q>, D>,
    width: usize,
) {
    v.iter().for_each(|poly| write_canonical(target, poly, width));
}

pub(crate) fn read_canonical_vec<R: ByteReader, const Q: u32, const D: usize>(
    source: &mut R,
    width: usize,
) -> Result<PolyVec<ModularFelt<Q>, D>, DeserializationError> {
    PolyVec::try_from_fn(|_| read_canonical(source, width))
}

// SIGNED ENCODING
// ================================================================================================

/// Writes every coefficient as its balanced value in `width`-byte two's complement.
pub(crate) fn write_signed<W: ByteWriter, const Q: u32>(
    target: &mut W,
    poly: &Polynomial<ModularFelt<Q>>,
    width: usize,
) {
    for c in poly.coefficients.iter() {
        target.write_bytes(&c.balanced_value().to_le_bytes()[..width]);
    }
}

/// Reads N signed coefficients of `width` bytes each, rejecting values whose magnitude exceeds
/// `bound`.
pub(crate) fn read_signed<R: ByteReader, const Q: u32>(
    source: &mut R,
    width: usize,
    bound: u32,
) -> Result<Polynomial<ModularFelt<Q>>, DeserializationError> {
    let bytes = source.read_slice(N * width)?;
    let shift = 32 - 8 * width as u32;

    let mut coefficients = [ModularFelt::<Q>::zero(); N];
    for (c, chunk) in coefficients.iter_mut().zip(bytes.chunks_exact(width)) {
        // sign-extend from the top bit of the encoded width
        let value = ((le_value(chunk) << shift) as i32) >> shift;
        if value.unsigned_abs() > bound {
            return Err(DeserializationError::InvalidValue(format!(
                "signed coefficient {value} exceeds the bound {bound}"
            )));
        }
        *c = ModularFelt::from(value);
    }
    Ok(Polynomial::new(coefficients))
}

pub(crate) fn write_signed_vec<W: ByteWriter, const Q: u32, const D: usize>(
    target: &mut W,
    v: &PolyVec<ModularFelt<Q>, D>,
    width: usize,
) {
    v.iter().for_each(|poly| write_signed(target, poly, width));
}

pub(crate) fn read_signed_vec<R: ByteReader, const Q: u32, const D: usize>(
    source: &mut R,
    width: usize,
    bound: u32,
) -> Result<PolyVec<ModularFelt<Q>, D>, DeserializationError> {
    PolyVec::try_from_fn(|_| read_signed(source, width, bound))
}

// HELPERS
// ================================================================================================

/// Interprets up to 4 bytes as a little-endian integer.
fn le_value(bytes: &[u8]) -> u32 {
    bytes.iter().rev().fold(0, |acc, &b| (acc << 8) | b as u32)
}

// TESTS
// ================================================================================================
