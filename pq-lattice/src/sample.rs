//! Deterministic sampling of polynomials from seed bytes.
//!
//! Every sampler is a pure function of its seed: the seed parts are absorbed into an
//! extendable-output function and the coefficients are read off the output stream. No sampler
//! ever touches a live entropy source, so the same seed always yields the same polynomial.

use num::Zero;

use crate::{
    LatticeError,
    hash::Xof,
    math::{ModularFelt, N, PolyMatrix, PolyVec, Polynomial},
};

// UNIFORM SAMPLING
// ================================================================================================

/// Samples a polynomial with coefficients uniform in [0, q) by rejection from `stream_len` bytes
/// of XOF output.
///
/// The stream is consumed in 3-byte chunks. For moduli of at most 12 bits every chunk yields two
/// 12-bit candidates; for wider moduli every chunk yields one little-endian candidate masked to
/// the bit length of q - 1. Candidates which are not below q are rejected.
///
/// # Errors
/// Returns an error if fewer than N candidates are accepted; with the stream lengths used by
/// the schemes this happens with negligible probability.
pub fn uniform<'a, const Q: u32>(
    xof: Xof,
    parts: impl IntoIterator<Item = &'a [u8]>,
    stream_len: usize,
) -> Result<Polynomial<ModularFelt<Q>>, LatticeError> {
    const { assert!(Q > 1 && Q < (1 << 24), "uniform sampling needs a modulus below 2^24") };
    let bits = u32::BITS - (Q - 1).leading_zeros();
    let mask = (1u32 << bits) - 1;

    let mut stream = vec![0u8; stream_len];
    xof.fill(parts, &mut stream);

    let mut coefficients = [ModularFelt::<Q>::zero(); N];
    let mut produced = 0;
    let mut accept = |candidate: u32| {
        if produced < N && candidate < Q {
            coefficients[produced] = ModularFelt::new(candidate);
            produced += 1;
        }
    };

    for chunk in stream.chunks_exact(3) {
        let (b0, b1, b2) = (chunk[0] as u32, chunk[1] as u32, chunk[2] as u32);
        if bits <= 12 {
            accept(b0 | ((b1 & 0x0f) << 8));
            accept((b1 >> 4) | (b2 << 4));
        } else {
            accept((b0 | (b1 << 8) | (b2 << 16)) & mask);
        }
    }

    if produced < N {
        return Err(LatticeError::StreamExhausted { produced, required: N });
    }
    Ok(Polynomial::new(coefficients))
}

/// Expands an `R` x `C` matrix of uniform polynomials from the seed `rho`.
///
/// The entry at row `i`, column `j` is sampled from `rho || j || i`.
pub fn uniform_matrix<const Q: u32, const R: usize, const C: usize>(
    xof: Xof,
    rho: &[u8],
    stream_len: usize,
) -> Result<PolyMatrix<ModularFelt<Q>, R, C>, LatticeError> {
    PolyMatrix::try_from_fn(|i, j| uniform(xof, [rho, &[j as u8, i as u8]], stream_len))
}

// SMALL POLYNOMIALS
// ================================================================================================

/// Samples a polynomial from the centered binomial distribution with parameter `eta`.
///
/// The XOF output is read as a little-endian bit string of 2·eta·N bits. Coefficient i is the
/// sum of bits [2·eta·i, 2·eta·i + eta) minus the sum of the following eta bits.
pub fn centered_binomial<'a, const Q: u32>(
    xof: Xof,
    parts: impl IntoIterator<Item = &'a [u8]>,
    eta: usize,
) -> Polynomial<ModularFelt<Q>> {
    let mut stream = vec![0u8; 2 * eta * N / 8];
    xof.fill(parts, &mut stream);

    let bit = |position: usize| ((stream[position / 8] >> (position % 8)) & 1) as i64;
    Polynomial::from_fn(|i| {
        let offset = 2 * eta * i;
        let a: i64 = (0..eta).map(|j| bit(offset + j)).sum();
        let b: i64 = (0..eta).map(|j| bit(offset + eta + j)).sum();
        ModularFelt::from_signed(a - b)
    })
}

/// Samples a vector of `D` centered binomial polynomials; component i is seeded with
/// `prefix || i`.
pub fn centered_binomial_vec<const Q: u32, const D: usize>(
    xof: Xof,
    prefix: &[&[u8]],
    eta: usize,
) -> PolyVec<ModularFelt<Q>, D> {
    PolyVec::from_fn(|i| {
        let index = [i as u8];
        centered_binomial(xof, prefix.iter().copied().chain([index.as_slice()]), eta)
    })
}

/// Samples a polynomial with coefficients uniform in [-gamma1, gamma1].
///
/// Coefficient i is the 4-byte little-endian chunk i of the XOF output reduced modulo
/// 2·gamma1 + 1 and shifted down by gamma1.
pub fn bounded_mask<'a, const Q: u32>(
    xof: Xof,
    parts: impl IntoIterator<Item = &'a [u8]>,
    gamma1: u32,
) -> Polynomial<ModularFelt<Q>> {
    let mut stream = [0u8; 4 * N];
    xof.fill(parts, &mut stream);

    let range = 2 * gamma1 + 1;
    Polynomial::from_fn(|i| {
        let chunk = [stream[4 * i], stream[4 * i + 1], stream[4 * i + 2], stream[4 * i + 3]];
        let value = u32::from_le_bytes(chunk) % range;
        ModularFelt::from_signed(value as i64 - gamma1 as i64)
    })
}

/// Samples a vector of `D` mask polynomials; component i is seeded with `prefix || i`.
pub fn bounded_mask_vec<const Q: u32, const D: usize>(
    xof: Xof,
    prefix: &[&[u8]],
    gamma1: u32,
) -> PolyVec<ModularFelt<Q>, D> {
    PolyVec::from_fn(|i| {
        let index = [i as u8];
        bounded_mask(xof, prefix.iter().copied().chain([index.as_slice()]), gamma1)
    })
}

// CHALLENGE SAMPLING
// ================================================================================================

/// Samples a polynomial with exactly `tau` coefficients in {-1, 1} and all others zero.
///
/// The first 8 bytes of the XOF output are a little-endian word of sign bits. Positions are then
/// placed with an inside-out Fisher–Yates shuffle: for i from N - tau to N - 1, bytes are drawn
/// until one is at most i, that byte is used as the swap index j, and c[j] receives the next
/// sign (bit set means -1).
///
/// # Panics
/// Panics if `tau` is greater than 64.
pub fn sparse_ternary<'a, const Q: u32>(
    xof: Xof,
    parts: impl IntoIterator<Item = &'a [u8]>,
    tau: usize,
) -> Polynomial<ModularFelt<Q>> {
    assert!(tau <= 64, "a challenge carries at most 64 sign bits");

    let mut stream = xof.stream(parts);
    let mut sign_bytes = [0u8; 8];
    stream.read(&mut sign_bytes);
    let mut signs = u64::from_le_bytes(sign_bytes);

    let mut c = Polynomial::<ModularFelt<Q>>::zero();
    for i in (N - tau)..N {
        let j = loop {
            let j = stream.next_byte() as usize;
            if j <= i {
                break j;
            }
        };
        c.coefficients[i] = c.coefficients[j];
        c.coefficients[j] = if signs & 1 == 1 {
            ModularFelt::from_signed(-1)
        } else {
            ModularFelt::new(1)
        };
        signs >>= 1;
    }
    c
}

// TESTS
// ================================================================================================
