//! High/low decomposition of coefficients and the hints that let a verifier recover high parts.
//!
//! Every r in [0, q) is written as r = r1·2γ2 + r0 with r0 in (-γ2, γ2]. The one exception is
//! the top interval: when r - r0 = q - 1 the high part would be (q - 1) / 2γ2, so it is folded
//! to r1 = 0 with r0 reduced by one. High parts therefore range over [0, HIGH_BITS_RANGE).

use super::{DsaFelt, GAMMA2, Q};
use crate::math::{N, PolyVec, Polynomial};

/// Number of distinct high parts.
pub(super) const HIGH_BITS_RANGE: u32 = (Q - 1) / (2 * GAMMA2);

const ALPHA: i32 = 2 * GAMMA2 as i32;

// COEFFICIENT LEVEL
// ================================================================================================

/// Splits `r` into its high part r1 and its low part r0.
pub(super) fn decompose(r: DsaFelt) -> (u32, i32) {
    let r = r.value() as i32;
    let mut r0 = r % ALPHA;
    if r0 > ALPHA / 2 {
        r0 -= ALPHA;
    }

    if r - r0 == Q as i32 - 1 {
        (0, r0 - 1)
    } else {
        (((r - r0) / ALPHA) as u32, r0)
    }
}

pub(super) fn high_bits(r: DsaFelt) -> u32 {
    decompose(r).0
}

pub(super) fn low_bits(r: DsaFelt) -> i32 {
    decompose(r).1
}

/// Returns true if adding the perturbation that turned `r` into `perturbed` changed the high
/// part.
pub(super) fn make_hint(r: DsaFelt, perturbed: DsaFelt) -> bool {
    high_bits(r) != high_bits(perturbed)
}

/// Recovers the high part of the unperturbed value from `r` and its hint bit.
///
/// When the hint is set the high part moves one step towards the side r0 points to, wrapping
/// around HIGH_BITS_RANGE.
pub(super) fn use_hint(hint: bool, r: DsaFelt) -> u32 {
    let (r1, r0) = decompose(r);
    match (hint, r0 > 0) {
        (false, _) => r1,
        (true, true) => (r1 + 1) % HIGH_BITS_RANGE,
        (true, false) => (r1 + HIGH_BITS_RANGE - 1) % HIGH_BITS_RANGE,
    }
}

// VECTOR LEVEL
// ================================================================================================

/// Writes the high part of every coefficient of `v` as one byte, component by component.
pub(super) fn pack_high_bits<const D: usize>(v: &PolyVec<DsaFelt, D>) -> [[u8; N]; D] {
    core::array::from_fn(|i| core::array::from_fn(|j| high_bits(v.0[i].coefficients[j]) as u8))
}

/// Like [pack_high_bits], but corrects every coefficient with its hint bit first.
pub(super) fn pack_hinted_high_bits<const D: usize>(
    hints: &[[bool; N]; D],
    v: &PolyVec<DsaFelt, D>,
) -> [[u8; N]; D] {
    core::array::from_fn(|i| {
        core::array::from_fn(|j| use_hint(hints[i][j], v.0[i].coefficients[j]) as u8)
    })
}

/// Computes the hint bits for every coefficient pair of `w` and `perturbed`.
pub(super) fn make_hints<const D: usize>(
    w: &PolyVec<DsaFelt, D>,
    perturbed: &PolyVec<DsaFelt, D>,
) -> [[bool; N]; D] {
    core::array::from_fn(|i| {
        core::array::from_fn(|j| make_hint(w.0[i].coefficients[j], perturbed.0[i].coefficients[j]))
    })
}

/// Returns true if every low part in `v` lies strictly inside (-bound, bound).
pub(super) fn low_bits_bounded_by<const D: usize>(v: &PolyVec<DsaFelt, D>, bound: u32) -> bool {
    v.iter().all(|p: &Polynomial<DsaFelt>| {
        p.coefficients.iter().all(|&c| low_bits(c).unsigned_abs() < bound)
    })
}

// TESTS
// ================================================================================================
